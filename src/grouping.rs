mod group_index;
mod heading_index;
mod run_state;

pub use group_index::GroupIndex;
use heading_index::HeadingIndex;
use log::debug;
use run_state::{Run, find_runs};

use crate::types::{ChangeGroup, DiffLine, DiffResult};

/// Splits an edit script into change groups: maximal runs of added and
/// removed lines, each with a title, a description and up to
/// `context_window` unchanged lines on either side.
///
/// Groups come out in script order and together cover every changed line
/// exactly once. Their ids (`group-0`, `group-1`, ...) are only meaningful
/// for the same inputs and the same `context_window`.
///
/// ```
/// use revision_diff::{ChangeKind, diff, group_changes};
///
/// let groups = group_changes(&diff("a\nb\nc", "a\nx\nc"), 3);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].kind, ChangeKind::Modification);
/// assert_eq!(groups[0].description, "Modified 1 lines, added 1 lines");
/// ```
#[must_use]
pub fn group_changes<'a>(diff: &DiffResult<'a>, context_window: usize) -> Vec<ChangeGroup<'a>> {
    let headings = HeadingIndex::new(&diff.lines);
    let groups = find_runs(&diff.lines)
        .into_iter()
        .enumerate()
        .map(|(index, run)| build_group(&diff.lines, &headings, index, run, context_window))
        .collect::<Vec<_>>();

    debug!(
        "Grouped {} changed lines into {} groups",
        diff.additions + diff.deletions,
        groups.len()
    );

    groups
}

fn build_group<'a>(
    lines: &[DiffLine<'a>],
    headings: &HeadingIndex<'a>,
    index: usize,
    run: Run,
    context_window: usize,
) -> ChangeGroup<'a> {
    let Run { kind, range } = run;
    let core_lines = lines[range.clone()].to_vec();

    let start_line = core_lines
        .first()
        .and_then(DiffLine::old_or_new_line_number)
        .unwrap_or_default();
    let end_line = core_lines
        .last()
        .and_then(DiffLine::new_or_old_line_number)
        .unwrap_or_default();

    let title = match headings.heading_at_or_before(range.start) {
        Some(heading) => format!("Changes in \"{heading}\""),
        None => format!("Changes at lines {start_line}-{end_line}"),
    };

    let before = lines[..range.start]
        .iter()
        .rev()
        .take(context_window)
        .take_while(|line| line.is_unchanged())
        .count();
    let after = lines[range.end..]
        .iter()
        .take(context_window)
        .take_while(|line| line.is_unchanged())
        .count();

    let mut group = ChangeGroup {
        id: format!("group-{index}"),
        kind,
        title,
        description: String::new(),
        start_line,
        end_line,
        core_lines,
        context_before: lines[range.start - before..range.start].to_vec(),
        context_after: lines[range.end..range.end + after].to_vec(),
        core_range: range,
    };
    group.description = describe(group.added_count(), group.removed_count());
    group
}

fn describe(added: usize, removed: usize) -> String {
    match (added, removed) {
        (0, removed) => format!("Removed {removed} lines"),
        (added, 0) => format!("Added {added} lines"),
        (added, removed) => format!("Modified {removed} lines, added {added} lines"),
    }
}
