pub mod change_group;
pub mod diff_line;
pub mod diff_result;
pub mod side_by_side;

pub use change_group::{ChangeGroup, ChangeKind};
pub use diff_line::{DiffLine, LineKind};
pub use diff_result::DiffResult;
pub use side_by_side::SideBySide;
