use crate::types::ChangeGroup;

/// Maps positions of an edit script to the change group owning them.
///
/// Unchanged positions, and positions outside the script, have no owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIndex {
    owners: Vec<Option<usize>>,
}

impl GroupIndex {
    /// `len` is the length of the edit script `groups` were built from.
    #[must_use]
    pub fn new(groups: &[ChangeGroup<'_>], len: usize) -> Self {
        let mut owners = vec![None; len];
        for (group_index, group) in groups.iter().enumerate() {
            for owner in &mut owners[group.core_range()] {
                debug_assert!(owner.is_none(), "Change groups must not overlap");
                *owner = Some(group_index);
            }
        }

        GroupIndex { owners }
    }

    /// Index into the grouped slice of the group containing `position`.
    #[must_use]
    pub fn group_of(&self, position: usize) -> Option<usize> {
        self.owners.get(position).copied().flatten()
    }
}
