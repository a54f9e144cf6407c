//! Expose the engine to WebAssembly so a browser editor can preview merges.
use wasm_bindgen::prelude::*;

use crate::{DiffOptions, Revision};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// Per-kind line counts of a diff.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffCounts {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

/// WASM wrapper around `crate::diff` returning only the tallies.
#[wasm_bindgen(js_name = diffCounts)]
#[must_use]
pub fn diff_counts(old: &str, new: &str) -> DiffCounts {
    set_panic_hook();

    let result = crate::diff(old, new);
    DiffCounts {
        additions: result.additions,
        deletions: result.deletions,
        unchanged: result.unchanged,
    }
}

/// Ids of the change groups between `base` and `incoming`, to be passed back
/// to `merge` with the same `context_window`.
#[wasm_bindgen(js_name = changeGroupIds)]
#[must_use]
pub fn change_group_ids(base: &str, incoming: &str, context_window: usize) -> Vec<String> {
    set_panic_hook();

    crate::group_changes(&crate::diff(base, incoming), context_window)
        .into_iter()
        .map(|group| group.id)
        .collect()
}

/// WASM wrapper around `crate::merge_with_options`.
#[wasm_bindgen(js_name = merge)]
#[must_use]
pub fn merge(base: &str, incoming: &str, accepted: Vec<String>, context_window: usize) -> String {
    set_panic_hook();

    crate::merge_with_options(
        base,
        incoming,
        accepted,
        &DiffOptions::default().with_context_window(context_window),
    )
}

/// WASM wrapper around `crate::summarize_revisions`.
#[wasm_bindgen(js_name = summarize)]
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn summarize(
    old_content: Option<String>,
    new_content: Option<String>,
    old_title: Option<String>,
    new_title: Option<String>,
    old_abstract: Option<String>,
    new_abstract: Option<String>,
) -> String {
    set_panic_hook();

    crate::summarize_revisions(
        &Revision {
            content: old_content.as_deref(),
            title: old_title.as_deref(),
            abstract_text: old_abstract.as_deref(),
        },
        &Revision {
            content: new_content.as_deref(),
            title: new_title.as_deref(),
            abstract_text: new_abstract.as_deref(),
        },
    )
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
