use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Restaurant ids the user marked as liked.
///
/// Serialized as a plain sorted JSON array of integers, e.g. `[2,4]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<u32>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Returns a new set with `id` removed if present, added otherwise.
    /// `self` is left untouched.
    pub fn toggled(&self, id: u32) -> FavoriteSet {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        FavoriteSet { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u32> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        FavoriteSet {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_missing_id() {
        let set = FavoriteSet::new().toggled(3);
        assert!(set.contains(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let original: FavoriteSet = [1, 5, 7].into_iter().collect();
        for id in [1, 2, 5, 9] {
            assert_eq!(original.toggled(id).toggled(id), original);
        }
    }

    #[test]
    fn test_toggle_does_not_mutate_receiver() {
        let original: FavoriteSet = [4].into_iter().collect();
        let _ = original.toggled(4);
        assert!(original.contains(4));
    }

    #[test]
    fn test_serializes_as_sorted_array() {
        let set: FavoriteSet = [4, 2].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[2,4]");
        let parsed: FavoriteSet = serde_json::from_str("[3,1,3]").unwrap();
        assert_eq!(parsed.iter().collect::<Vec<_>>(), vec![1, 3]);
    }
}
