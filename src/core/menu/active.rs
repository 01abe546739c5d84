use crate::core::menu::ItemId;
use std::collections::HashSet;

/// Items highlighted for the current page.
///
/// Membership is by identity: ids taken from another menu never match.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActiveSet(HashSet<ItemId>);

impl ActiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: ItemId) -> Self {
        self.insert(id);
        self
    }

    /// Returns `false` if the item has already been active.
    pub fn insert(&mut self, id: ItemId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ItemId> for ActiveSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
