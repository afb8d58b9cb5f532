//! Capability maps for the `auth` family.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Query parameter name shared by every capability pair.
pub(crate) const CAPS_PARAM: &str = "caps";

/// Subsystem to permission mapping, e.g. `mon` -> `allow rwx`.
///
/// Keys are unique and iterate in lexicographic order, so the same map
/// always produces the same query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(BTreeMap<String, String>);

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, subsystem: impl Into<String>, permissions: impl Into<String>) -> Self {
        self.insert(subsystem, permissions);
        self
    }

    /// Insert or replace the permissions for a subsystem.
    pub fn insert(
        &mut self,
        subsystem: impl Into<String>,
        permissions: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(subsystem.into(), permissions.into())
    }

    pub fn get(&self, subsystem: &str) -> Option<&str> {
        self.0.get(subsystem).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Two `caps` pairs per entry: the subsystem, then its permissions with
    /// spaces replaced by `+`.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.0.iter().flat_map(|(subsystem, permissions)| {
            [
                (CAPS_PARAM, subsystem.clone()),
                (CAPS_PARAM, permissions.replace(' ', "+")),
            ]
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Capabilities {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for Capabilities {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<HashMap<String, String>> for Capabilities {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}
