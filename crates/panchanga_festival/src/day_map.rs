//! Festival name to day-index map.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Festival name → ordered set of day indices (1-based within the year).
///
/// Names with no days are dropped, so every entry has at least one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FestivalDayMap {
    entries: BTreeMap<String, BTreeSet<usize>>,
}

impl FestivalDayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `day` to the days of `name`. Returns false if already present.
    pub fn add(&mut self, name: impl Into<String>, day: usize) -> bool {
        self.entries.entry(name.into()).or_default().insert(day)
    }

    /// Make `day` the only day of `name`.
    pub fn assign(&mut self, name: impl Into<String>, day: usize) {
        self.entries.insert(name.into(), BTreeSet::from([day]));
    }

    /// Remove `day` from `name`, dropping the name once it has no days.
    pub fn remove_day(&mut self, name: &str, day: usize) -> bool {
        let Some(days) = self.entries.get_mut(name) else {
            return false;
        };
        let removed = days.remove(&day);
        if days.is_empty() {
            self.entries.remove(name);
        }
        removed
    }

    pub fn days(&self, name: &str) -> Option<&BTreeSet<usize>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str, day: usize) -> bool {
        self.entries.get(name).is_some_and(|days| days.contains(&day))
    }

    /// Names observed on `day`, in name order.
    pub fn festivals_on(&self, day: usize) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, days)| days.contains(&day))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<usize>)> {
        self.entries.iter().map(|(name, days)| (name.as_str(), days))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_days() {
        let mut map = FestivalDayMap::new();
        assert!(map.add("a", 3));
        assert!(map.add("a", 1));
        assert!(!map.add("a", 3));
        assert_eq!(map.days("a").unwrap().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn assign_replaces_days() {
        let mut map = FestivalDayMap::new();
        map.add("a", 3);
        map.add("a", 4);
        map.assign("a", 9);
        assert_eq!(map.days("a").unwrap().len(), 1);
        assert!(map.contains("a", 9));
    }

    #[test]
    fn removing_last_day_drops_name() {
        let mut map = FestivalDayMap::new();
        map.add("a", 3);
        assert!(!map.remove_day("a", 4));
        assert!(map.remove_day("a", 3));
        assert!(map.days("a").is_none());
        assert!(map.is_empty());
        assert!(!map.remove_day("missing", 1));
    }

    #[test]
    fn festivals_on_lists_names() {
        let mut map = FestivalDayMap::new();
        map.add("b", 5);
        map.add("a", 5);
        map.add("c", 6);
        assert_eq!(map.festivals_on(5), vec!["a", "b"]);
        assert!(map.festivals_on(7).is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut map = FestivalDayMap::new();
        map.add("a", 2);
        map.add("a", 1);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"a":[1,2]}"#);
    }
}
