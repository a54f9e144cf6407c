#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of unchanged lines kept around each change group by default.
pub const DEFAULT_CONTEXT_WINDOW: usize = 3;

/// Knobs shared by grouping, merging and the size-checked entry points.
///
/// Ids handed out by grouping are only valid for merges run with the same
/// `context_window`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Unchanged lines to keep before and after each change group.
    pub context_window: usize,

    /// Upper bound on `(old_lines + 1) * (new_lines + 1)`, the size of the
    /// LCS table. `None` disables the check.
    pub max_table_cells: Option<usize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            context_window: DEFAULT_CONTEXT_WINDOW,
            max_table_cells: None,
        }
    }
}

impl DiffOptions {
    #[must_use]
    pub fn with_context_window(mut self, context_window: usize) -> Self {
        self.context_window = context_window;
        self
    }

    #[must_use]
    pub fn with_max_table_cells(mut self, max_table_cells: usize) -> Self {
        self.max_table_cells = Some(max_table_cells);
        self
    }
}
