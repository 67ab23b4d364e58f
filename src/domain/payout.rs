use super::money::Money;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Per-worker amounts in roster order.
///
/// Keys are unique because they come from a [`Team`](super::team::Team),
/// which rejects duplicate worker names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayoutMap {
    entries: Vec<(String, Money)>,
}

impl PayoutMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, amount: Money) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = amount,
            None => self.entries.push((name, amount)),
        }
    }

    pub fn get(&self, name: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(n, amount)| (n.as_str(), *amount))
    }

    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Money)> for PayoutMap {
    fn from_iter<I: IntoIterator<Item = (String, Money)>>(iter: I) -> Self {
        let mut map = PayoutMap::new();
        for (name, amount) in iter {
            map.insert(name, amount);
        }
        map
    }
}

impl Serialize for PayoutMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, amount) in &self.entries {
            map.serialize_entry(name, amount)?;
        }
        map.end()
    }
}
