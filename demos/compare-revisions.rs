use std::{fs, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use revision_diff::{DiffOptions, Revision, group_changes, summarize_revisions, try_diff, try_merge};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compares two revisions of a document, lists its change groups and
/// optionally writes a merge of the accepted ones.
///
/// Run it with:
/// `cargo run --example compare-revisions old.md new.md --accept group-0 --output merged.md`
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The revision changes are applied to
    base: PathBuf,

    /// The revision whose changes are reviewed
    incoming: PathBuf,

    /// Unchanged lines shown around each change group
    #[arg(long, default_value_t = revision_diff::DEFAULT_CONTEXT_WINDOW)]
    context: usize,

    /// Refuse inputs whose LCS table would exceed this many cells
    #[arg(long, default_value_t = 25_000_000)]
    max_cells: usize,

    /// Ids of the change groups to accept
    #[arg(long)]
    accept: Vec<String>,

    /// Where to write the merged document, stdout if omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "revision_diff=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialise tracing")?;

    let args = Args::parse();
    let base = fs::read_to_string(&args.base)
        .with_context(|| format!("Failed to read {}", args.base.display()))?;
    let incoming = fs::read_to_string(&args.incoming)
        .with_context(|| format!("Failed to read {}", args.incoming.display()))?;

    let options = DiffOptions::default()
        .with_context_window(args.context)
        .with_max_table_cells(args.max_cells);

    let result = try_diff(&base, &incoming, &options)?;
    println!(
        "{}",
        summarize_revisions(&Revision::new(&base), &Revision::new(&incoming))
    );
    println!(
        "+{} -{} ={}",
        result.additions, result.deletions, result.unchanged
    );

    for group in group_changes(&result, options.context_window) {
        println!();
        println!("[{}] {}: {}", group.id, group.title, group.description);
        for line in group.lines() {
            println!("{line}");
        }
    }

    if !args.accept.is_empty() || args.output.is_some() {
        let merged = try_merge(&base, &incoming, &args.accept, &options)?;
        match &args.output {
            Some(path) => fs::write(path, merged)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => {
                println!();
                println!("{merged}");
            }
        }
    }

    Ok(())
}
