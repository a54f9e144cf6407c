use std::ops::Range;

use crate::types::{ChangeKind, DiffLine, LineKind};

/// A maximal run of changed lines within an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub kind: ChangeKind,
    pub range: Range<usize>,
}

/// State of the left-to-right scan looking for runs of changed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    InRun { kind: ChangeKind, start: usize },
}

impl RunState {
    /// Feeds the line at `index` to the scan. Returns the next state and the
    /// run that the line closed, if any.
    #[must_use]
    pub fn next(self, index: usize, line: LineKind) -> (RunState, Option<Run>) {
        match (self, ChangeKind::from_line_kind(line)) {
            (RunState::Idle, None) => (RunState::Idle, None),
            (RunState::Idle, Some(kind)) => (RunState::InRun { kind, start: index }, None),
            (RunState::InRun { kind, start }, None) => (
                RunState::Idle,
                Some(Run {
                    kind,
                    range: start..index,
                }),
            ),
            (RunState::InRun { kind, start }, Some(_)) => (
                RunState::InRun {
                    kind: kind.extend(line),
                    start,
                },
                None,
            ),
        }
    }

    /// Closes the open run, if any, at the end of the input.
    #[must_use]
    pub fn finish(self, end: usize) -> Option<Run> {
        match self {
            RunState::Idle => None,
            RunState::InRun { kind, start } => Some(Run {
                kind,
                range: start..end,
            }),
        }
    }
}

/// Finds every maximal run of added and removed lines, in order.
pub fn find_runs(lines: &[DiffLine<'_>]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut state = RunState::Idle;

    for (index, line) in lines.iter().enumerate() {
        let (next, closed) = state.next(index, line.kind);
        runs.extend(closed);
        state = next;
    }
    runs.extend(state.finish(lines.len()));

    runs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_transitions() {
        let (state, closed) = RunState::Idle.next(0, LineKind::Unchanged);
        assert_eq!((state, closed), (RunState::Idle, None));

        let (state, closed) = state.next(1, LineKind::Added);
        assert_eq!(
            (state, closed),
            (
                RunState::InRun {
                    kind: ChangeKind::Addition,
                    start: 1
                },
                None
            )
        );

        let (state, closed) = state.next(2, LineKind::Removed);
        assert_eq!(
            (state, closed),
            (
                RunState::InRun {
                    kind: ChangeKind::Modification,
                    start: 1
                },
                None
            )
        );

        let (state, closed) = state.next(3, LineKind::Unchanged);
        assert_eq!(
            (state, closed),
            (
                RunState::Idle,
                Some(Run {
                    kind: ChangeKind::Modification,
                    range: 1..3
                })
            )
        );
    }

    #[test]
    fn test_find_runs() {
        let lines = [
            DiffLine::removed("a", 1),
            DiffLine::removed("b", 2),
            DiffLine::unchanged("c", 3, 1),
            DiffLine::added("d", 2),
            DiffLine::unchanged("e", 4, 3),
            DiffLine::unchanged("f", 5, 4),
            DiffLine::added("g", 5),
        ];

        assert_eq!(
            find_runs(&lines),
            vec![
                Run {
                    kind: ChangeKind::Deletion,
                    range: 0..2
                },
                Run {
                    kind: ChangeKind::Addition,
                    range: 3..4
                },
                Run {
                    kind: ChangeKind::Addition,
                    range: 6..7
                },
            ]
        );
    }

    #[test]
    fn test_no_runs() {
        assert_eq!(find_runs(&[]), vec![]);
        assert_eq!(find_runs(&[DiffLine::unchanged("", 1, 1)]), vec![]);
    }
}
