use std::collections::BTreeSet;

use crate::models::CourseId;

/// Session-scoped set of favorited course ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<CourseId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: CourseId) -> bool {
        self.ids.contains(&id)
    }

    /// Adds the id if missing, removes it otherwise. Returns the new membership.
    pub fn toggle(&mut self, id: CourseId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn retain(&mut self, keep: impl FnMut(&CourseId) -> bool) {
        self.ids.retain(keep);
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
