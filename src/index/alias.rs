use std::collections::{BTreeSet, HashMap};

/// Inverted index from alias keys to the set of primary keys that reference
/// them.
///
/// Building is pure accumulation: primaries are only ever added, never
/// removed or overwritten, and one alias mapping to several primaries is
/// expected (a collision, not an error). Every stored alias maps to a
/// non-empty set; empty alias strings are never stored. Association sets are
/// ordered so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasIndex {
    map: HashMap<String, BTreeSet<String>>,
}

impl AliasIndex {
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Record that `alias` resolves to `primary`.
    ///
    /// Empty aliases are ignored; repeated insertions accumulate into the
    /// association set.
    pub fn insert(&mut self, alias: &str, primary: &str) {
        if alias.is_empty() {
            return;
        }
        self.map
            .entry(alias.to_string())
            .or_default()
            .insert(primary.to_string());
    }

    /// Primary keys associated with `alias`, if any
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&BTreeSet<String>> {
        self.map.get(alias)
    }

    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.map.contains_key(alias)
    }

    /// Number of distinct aliases
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(alias, primaries)` entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.map.iter().map(|(alias, set)| (alias.as_str(), set))
    }
}
