use std::collections::HashSet;

use log::debug;

use crate::{
    diffs::{check_table_size, diff},
    errors::DiffError,
    grouping::{GroupIndex, group_changes},
    options::DiffOptions,
    types::LineKind,
};

/// Rebuilds a document from `base` by applying only the change groups of
/// `incoming` whose ids are listed in `accepted`.
///
/// Groups are recomputed from the two texts with the default context window,
/// so `accepted` must hold ids produced by [`group_changes`] with that window.
/// Accepting every group yields `incoming`, accepting none yields `base`.
/// Unknown ids are ignored.
///
/// ```
/// use revision_diff::merge;
///
/// assert_eq!(merge("a\nb\nc", "a\nx\nc", ["group-0"]), "a\nx\nc");
/// assert_eq!(merge("a\nb\nc", "a\nx\nc", Vec::<String>::new()), "a\nb\nc");
/// ```
#[must_use]
pub fn merge<I>(base: &str, incoming: &str, accepted: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    merge_with_options(base, incoming, accepted, &DiffOptions::default())
}

/// Same as [`merge`], regrouping with `options.context_window`. The size limit
/// in `options` is not enforced, see [`try_merge`].
#[must_use]
pub fn merge_with_options<I>(
    base: &str,
    incoming: &str,
    accepted: I,
    options: &DiffOptions,
) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let accepted = accepted
        .into_iter()
        .map(|id| id.as_ref().to_owned())
        .collect::<HashSet<_>>();

    let diff = diff(base, incoming);
    let groups = group_changes(&diff, options.context_window);
    let index = GroupIndex::new(&groups, diff.len());

    let is_accepted = groups
        .iter()
        .map(|group| accepted.contains(&group.id))
        .collect::<Vec<_>>();

    let unknown = accepted
        .iter()
        .filter(|id| !groups.iter().any(|group| &group.id == *id))
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        debug!("Ignoring accepted ids matching no change group: {unknown:?}");
    }
    debug!(
        "Merging {} of {} change groups",
        is_accepted.iter().filter(|accepted| **accepted).count(),
        groups.len()
    );

    diff.lines
        .iter()
        .enumerate()
        .filter(|(position, line)| {
            let accepted = index
                .group_of(*position)
                .is_some_and(|group| is_accepted[group]);

            match line.kind {
                LineKind::Unchanged => true,
                LineKind::Added => accepted,
                LineKind::Removed => !accepted,
            }
        })
        .map(|(_, line)| line.content)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Same as [`merge_with_options`] but refuses inputs whose LCS table would
/// exceed `options.max_table_cells`.
///
/// # Errors
///
/// Returns [`DiffError::InputTooLarge`] when the table would exceed the limit.
pub fn try_merge<I>(
    base: &str,
    incoming: &str,
    accepted: I,
    options: &DiffOptions,
) -> Result<String, DiffError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    check_table_size(base, incoming, options)?;
    Ok(merge_with_options(base, incoming, accepted, options))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_accept_and_reject_single_group() {
        assert_eq!(merge("a\nb\nc", "a\nx\nc", ["group-0"]), "a\nx\nc");
        assert_eq!(merge("a\nb\nc", "a\nx\nc", NONE), "a\nb\nc");
    }

    #[test]
    fn test_partial_selection() {
        let base = "title\none\ntwo\nthree\nfour\nfive";
        let incoming = "title\nONE\ntwo\nthree\nfive\nsix";

        // group-0 replaces "one", group-1 drops "four", group-2 appends "six".
        assert_eq!(
            merge(base, incoming, ["group-0"]),
            "title\nONE\ntwo\nthree\nfour\nfive"
        );
        assert_eq!(
            merge(base, incoming, ["group-1"]),
            "title\none\ntwo\nthree\nfive"
        );
        assert_eq!(
            merge(base, incoming, ["group-2"]),
            "title\none\ntwo\nthree\nfour\nfive\nsix"
        );
        assert_eq!(
            merge(base, incoming, ["group-0", "group-2"]),
            "title\nONE\ntwo\nthree\nfour\nfive\nsix"
        );
        assert_eq!(
            merge(base, incoming, ["group-0", "group-1", "group-2"]),
            incoming
        );
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        assert_eq!(
            merge("a\nb\nc", "a\nx\nc", ["group-7", "bogus"]),
            "a\nb\nc"
        );
        assert_eq!(
            merge("a\nb\nc", "a\nx\nc", ["group-0", "group-7"]),
            "a\nx\nc"
        );
    }

    #[test_case("", ""; "empty texts")]
    #[test_case("", "new\ntext"; "from nothing")]
    #[test_case("old\ntext", ""; "to nothing")]
    #[test_case("a\nb\n", "a\nb"; "dropped trailing newline")]
    #[test_case("a\nb", "b\na"; "swapped lines")]
    #[test_case("# T\n\nx\ny\nz\n", "# T\n\ny\nz\nw\n\n"; "mixed")]
    fn test_all_or_nothing(base: &str, incoming: &str) {
        let ids = group_changes(&diff(base, incoming), 3)
            .into_iter()
            .map(|group| group.id)
            .collect::<Vec<_>>();

        assert_eq!(merge(base, incoming, NONE), base);
        assert_eq!(merge(base, incoming, &ids), incoming);
    }

    #[test]
    fn test_context_window_changes_nothing_but_ids_validity() {
        let options = DiffOptions::default().with_context_window(0);

        assert_eq!(
            merge_with_options("a\nb\nc", "a\nx\nc", ["group-0"], &options),
            "a\nx\nc"
        );
    }

    #[test]
    fn test_try_merge_limit() {
        let options = DiffOptions::default().with_max_table_cells(4);

        assert_eq!(try_merge("a", "b", ["group-0"], &options), Ok("b".to_owned()));
        assert!(matches!(
            try_merge("a\nb", "c", ["group-0"], &options),
            Err(DiffError::InputTooLarge { cells: 6, .. })
        ));
    }
}
