//! Budget categories and the percentage allocation map
//!
//! The allocation map is kept as an ordered list of `(category, fraction)`
//! pairs. Its order drives the order of every derived report, so it is
//! preserved exactly as written in the budget document.

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The fixed set of budgeted categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetCategory {
    Housing,
    Food,
    Transport,
    Utilities,
    Savings,
    Misc,
}

impl BudgetCategory {
    /// Get all categories in their default order
    pub fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Savings,
            Self::Misc,
        ]
    }

    /// Key used for this category in the budget document
    pub fn key(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Savings => "savings",
            Self::Misc => "misc",
        }
    }

    /// Default share of total income
    pub fn default_fraction(&self) -> f64 {
        match self {
            Self::Housing => 0.35,
            Self::Food => 0.25,
            Self::Transport => 0.10,
            Self::Utilities => 0.10,
            Self::Savings => 0.10,
            Self::Misc => 0.10,
        }
    }

    /// Look up a category by its document key; unrecognized keys yield `None`
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown budget category: {}", s))
    }
}

/// Ordered mapping from category key to a fraction of total income
///
/// Fractions are expected to sum to 1.0 but this is never enforced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AllocationMap {
    entries: Vec<(String, f64)>,
}

impl AllocationMap {
    /// Create an empty allocation map
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in split over all known categories
    pub fn default_split() -> Self {
        BudgetCategory::all()
            .iter()
            .map(|c| (c.key().to_string(), c.default_fraction()))
            .collect()
    }

    /// Set the fraction for a category, keeping its position if already present
    pub fn insert(&mut self, category: impl Into<String>, fraction: f64) {
        let category = category.into();
        match self.entries.iter_mut().find(|(key, _)| *key == category) {
            Some(entry) => entry.1 = fraction,
            None => self.entries.push((category, fraction)),
        }
    }

    /// Get the fraction for a category
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, fraction)| *fraction)
    }

    /// Iterate over `(category, fraction)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, fraction)| (key.as_str(), *fraction))
    }

    /// Number of categories in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no categories
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AllocationMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, fraction) in iter {
            map.insert(key, fraction);
        }
        map
    }
}

impl Serialize for AllocationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, fraction) in &self.entries {
            map.serialize_entry(key, fraction)?;
        }
        map.end()
    }
}

struct AllocationMapVisitor;

impl<'de> Visitor<'de> for AllocationMapVisitor {
    type Value = AllocationMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category names to fractions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = AllocationMap::new();
        while let Some((key, fraction)) = access.next_entry::<String, f64>()? {
            map.insert(key, fraction);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for AllocationMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AllocationMapVisitor)
    }
}
