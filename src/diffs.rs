pub mod lcs;

use log::{debug, warn};

use crate::{
    errors::DiffError,
    options::DiffOptions,
    tokenizer::{line_count, line_tokenizer},
    types::DiffResult,
};

/// Computes the line-level edit script turning `old` into `new`.
///
/// Both texts are split on `\n`, so two empty strings compare as a single
/// unchanged empty line. Cost is `O(mn)` in time and memory; use [`try_diff`]
/// to refuse oversized inputs up front.
///
/// ```
/// use revision_diff::diff;
///
/// let result = diff("a\nb\nc", "a\nx\nc");
/// assert_eq!((result.additions, result.deletions, result.unchanged), (1, 1, 2));
/// ```
#[must_use]
pub fn diff<'a>(old: &'a str, new: &'a str) -> DiffResult<'a> {
    let old_lines = line_tokenizer(old);
    let new_lines = line_tokenizer(new);

    debug!(
        "Diffing {} against {} lines",
        old_lines.len(),
        new_lines.len()
    );

    lcs::diff(&old_lines, &new_lines)
}

/// Same as [`diff`] but fails instead of allocating an LCS table larger than
/// `options.max_table_cells`.
///
/// # Errors
///
/// Returns [`DiffError::InputTooLarge`] when the table would exceed the limit.
pub fn try_diff<'a>(
    old: &'a str,
    new: &'a str,
    options: &DiffOptions,
) -> Result<DiffResult<'a>, DiffError> {
    check_table_size(old, new, options)?;
    Ok(diff(old, new))
}

pub(crate) fn check_table_size(
    old: &str,
    new: &str,
    options: &DiffOptions,
) -> Result<(), DiffError> {
    let Some(limit) = options.max_table_cells else {
        return Ok(());
    };

    let old_lines = line_count(old);
    let new_lines = line_count(new);
    let cells = (old_lines + 1).saturating_mul(new_lines + 1);
    if cells > limit {
        warn!("Refusing to diff {old_lines} against {new_lines} lines ({cells} > {limit} cells)");
        return Err(DiffError::InputTooLarge {
            old_lines,
            new_lines,
            cells,
            limit,
        });
    }

    Ok(())
}
