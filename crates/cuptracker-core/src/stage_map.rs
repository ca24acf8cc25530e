//! # Stage Map
//!
//! Team name → raw stage label, as delivered by the stage feed.
//!
//! Iteration follows first-insertion order, which is the key order of the
//! JSON object the map was decoded from. Fuzzy resolution depends on it: when
//! two keys fold to the same canonical form, the earlier one wins.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Insertion-ordered mapping from team name to raw stage label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageMap {
    entries: Vec<(String, String)>,
    index: BTreeMap<String, usize>,
}

impl StageMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a team's label, returning the label it replaced.
    ///
    /// Replacing keeps the team's original position.
    pub fn insert(&mut self, team: impl Into<String>, label: impl Into<String>) -> Option<String> {
        let team = team.into();
        let label = label.into();

        if let Some(entry) = self
            .index
            .get(&team)
            .and_then(|&pos| self.entries.get_mut(pos))
        {
            return Some(std::mem::replace(&mut entry.1, label));
        }

        self.index.insert(team.clone(), self.entries.len());
        self.entries.push((team, label));
        None
    }

    /// Get the raw label for an exact team key.
    #[must_use]
    pub fn get(&self, team: &str) -> Option<&str> {
        self.index
            .get(team)
            .and_then(|&pos| self.entries.get(pos))
            .map(|(_, label)| label.as_str())
    }

    /// Number of teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map holds no teams.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(team, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(team, label)| (team.as_str(), label.as_str()))
    }

    /// Iterate team keys in insertion order.
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(team, _)| team.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StageMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for StageMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (team, label) in iter {
            self.insert(team, label);
        }
    }
}

// =============================================================================
// SERDE
// =============================================================================

impl Serialize for StageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (team, label) in &self.entries {
            map.serialize_entry(team, label)?;
        }
        map.end()
    }
}

struct StageMapVisitor;

impl<'de> Visitor<'de> for StageMapVisitor {
    type Value = StageMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping team names to stage labels")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = StageMap::new();
        // A null label means the feed has no stage for that team yet.
        while let Some((team, label)) = access.next_entry::<String, Option<String>>()? {
            if let Some(label) = label {
                map.insert(team, label);
            }
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for StageMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StageMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let map: StageMap = [("Spain", "Final"), ("Argentina", "Winner"), ("Brazil", "QF")]
            .into_iter()
            .collect();
        let teams: Vec<_> = map.teams().collect();
        assert_eq!(teams, vec!["Spain", "Argentina", "Brazil"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut map = StageMap::new();
        assert_eq!(map.insert("Japan", "Group Stage"), None);
        map.insert("Morocco", "R16");
        assert_eq!(
            map.insert("Japan", "Round of 16"),
            Some("Group Stage".to_string())
        );

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("Japan", "Round of 16"), ("Morocco", "R16")]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn lookup() {
        let map: StageMap = [("Ghana", "Eliminated")].into_iter().collect();
        assert_eq!(map.get("Ghana"), Some("Eliminated"));
        assert_eq!(map.get("ghana"), None);
        assert!(!map.is_empty());
        assert!(StageMap::new().is_empty());
    }
}
