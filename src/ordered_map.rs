//! String-keyed map that iterates in first-insertion order.

use std::collections::HashMap;

/// A map from product identifiers (or difficulty labels) to values.
///
/// Iteration follows the order keys were first inserted. Re-inserting an
/// existing key replaces its value but keeps its original position.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the value under `key`, inserting `default()` first if absent.
    pub fn get_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.to_string(), i);
                self.entries.push((key.to_string(), default()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("b".to_string(), 1);
        map.insert("a".to_string(), 2);
        map.insert("c".to_string(), 3);

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("X1".to_string(), "5.00");
        map.insert("X2".to_string(), "6.00");
        let old = map.insert("X1".to_string(), "7.00");

        assert_eq!(old, Some("5.00"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("X1"), Some(&"7.00"));
        assert_eq!(map.keys().next(), Some("X1"));
    }

    #[test]
    fn test_get_or_insert_with_creates_once() {
        let mut map: OrderedMap<Vec<f64>> = OrderedMap::new();
        map.get_or_insert_with("Easy", Vec::new).push(10.0);
        map.get_or_insert_with("Easy", Vec::new).push(20.0);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Easy"), Some(&vec![10.0, 20.0]));
    }

    #[test]
    fn test_missing_key() {
        let map: OrderedMap<i32> = OrderedMap::default();
        assert!(map.is_empty());
        assert!(!map.contains_key("nope"));
        assert_eq!(map.get("nope"), None);
    }
}
