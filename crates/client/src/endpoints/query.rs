//! Query string assembly.

use std::fmt;

use super::Capabilities;

/// Ordered `name=value` pairs appended to an endpoint path.
///
/// Values are interpolated as given. Optional values that are `None` are
/// left out entirely, so an empty query renders as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    pub fn param(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn optional<V: fmt::Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Append the repeated `caps` pairs for a capability map.
    pub fn caps(mut self, caps: &Capabilities) -> Self {
        self.pairs.extend(
            caps.query_pairs()
                .map(|(name, value)| (name.to_string(), value)),
        );
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `""` when empty, otherwise `?a=b&c=d`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}
