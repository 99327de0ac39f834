use std::collections::HashSet;

use uuid::Uuid;

/// Ids the visitor marked as favorite. Held in memory by the owning
/// section only; never persisted or sent to the server.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: HashSet<Uuid>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag for `id` and returns the new value.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::new();
        let id = Uuid::new_v4();

        assert!(favorites.toggle(id));
        assert!(favorites.contains(&id));
        assert!(!favorites.toggle(id));
        assert!(!favorites.contains(&id));
        assert!(favorites.is_empty());
    }
}
