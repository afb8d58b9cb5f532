//! Declarative endpoint table for the Ceph REST management API.
//!
//! Every operation the wrapper exposes is described by one [`Endpoint`]
//! constant: its path template, HTTP verb, the query parameters it accepts
//! (in wire order), an optional override of the acceptable response body
//! types, and whether it is implemented at all.
//!
//! # What this module handles:
//! - Endpoint descriptors grouped per family (`root`, `auth`, `mds`, ...)
//! - Query string assembly ([`Query`]) and capability expansion ([`Capabilities`])
//! - Path rendering for descriptors scoped by a daemon id (`tell/{id}/...`)
//!
//! # What this module does NOT handle:
//! - Issuing requests (see [`crate::client::CephWrapper`])
//! - HTTP details of any kind (see [`crate::transport`])
//!
//! # Invariants
//! - Descriptor names are unique across [`ALL`]
//! - Rendered paths never start with `/` and never end with a bare `?`
//! - Query parameter names appear in the order `params` declares them

pub mod auth;
mod caps;
pub mod config_key;
pub mod mds;
pub mod mon;
pub mod osd;
pub mod pg;
mod query;
pub mod root;
pub mod tell;

use std::fmt;

use crate::body::BodyType;
use crate::error::{ClientError, Result};
use crate::transport::{HttpMethod, RequestOptions};

use caps::CAPS_PARAM;

pub use caps::Capabilities;
pub use query::Query;

/// Placeholder for the daemon id in path-scoped templates.
pub const TARGET_PLACEHOLDER: &str = "{id}";

/// Binary-only response body override (cluster maps).
pub(crate) const BINARY_ONLY: &[BodyType] = &[BodyType::Binary];

/// Text or XML response body override.
pub(crate) const TEXT_OR_XML: &[BodyType] = &[BodyType::Text, BodyType::Xml];

/// Whether the wrapper actually issues a request for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Implemented,
    /// Declared on the public surface but rejected before any network call.
    NotImplemented,
}

/// Descriptor for one REST operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, identical to the wrapper method name.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the API prefix. May contain [`TARGET_PLACEHOLDER`].
    pub path: &'static str,
    /// Query parameter names in the order they appear on the wire.
    pub params: &'static [&'static str],
    /// Replaces the caller's acceptable body types when set.
    pub body_types: Option<&'static [BodyType]>,
    pub availability: Availability,
}

impl Endpoint {
    pub(crate) const fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            path,
            params: &[],
            body_types: None,
            availability: Availability::Implemented,
        }
    }

    pub(crate) const fn put(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: HttpMethod::Put,
            path,
            params: &[],
            body_types: None,
            availability: Availability::Implemented,
        }
    }

    pub(crate) const fn params(mut self, params: &'static [&'static str]) -> Self {
        self.params = params;
        self
    }

    pub(crate) const fn body_types(mut self, body_types: &'static [BodyType]) -> Self {
        self.body_types = Some(body_types);
        self
    }

    pub(crate) const fn not_implemented(mut self) -> Self {
        self.availability = Availability::NotImplemented;
        self
    }

    pub fn is_implemented(&self) -> bool {
        self.availability == Availability::Implemented
    }

    /// True when the path is scoped by a daemon id.
    pub fn is_targeted(&self) -> bool {
        self.path.contains(TARGET_PLACEHOLDER)
    }

    /// True when every query name is declared in `params`, in declared
    /// order. Consecutive `caps` pairs count as one parameter.
    pub fn accepts(&self, query: &Query) -> bool {
        let mut declared = self.params.iter();
        let mut previous: Option<&str> = None;
        for (name, _) in query.pairs() {
            if name == CAPS_PARAM && previous == Some(CAPS_PARAM) {
                continue;
            }
            match declared.find(|param| **param == name.as_str()) {
                Some(param) => previous = Some(*param),
                None => return false,
            }
        }
        true
    }

    /// Render the request path with its query string.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidRequest`] when the template needs a
    /// daemon id and none was given, or when `query` carries a parameter
    /// the descriptor does not declare.
    pub fn render_path(&self, target: Option<&str>, query: &Query) -> Result<String> {
        if !self.accepts(query) {
            let names: Vec<_> = query.pairs().iter().map(|(name, _)| name.as_str()).collect();
            return Err(ClientError::InvalidRequest {
                operation: self.name,
                message: format!(
                    "query [{}] does not match declared parameters [{}]",
                    names.join(", "),
                    self.params.join(", ")
                ),
            });
        }

        let path = match (self.is_targeted(), target) {
            (true, Some(id)) => self.path.replace(TARGET_PLACEHOLDER, id),
            (true, None) => {
                return Err(ClientError::InvalidRequest {
                    operation: self.name,
                    message: format!("daemon id required for '{}'", self.path),
                });
            }
            (false, _) => self.path.to_string(),
        };
        Ok(format!("{}{}", path, query.render()))
    }

    /// Apply the endpoint's body-type override to the caller's options.
    pub fn apply_body_override(&self, mut options: RequestOptions) -> RequestOptions {
        if let Some(types) = self.body_types {
            options.supported_body_types = Some(types.to_vec());
        }
        options
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Every descriptor, grouped by family.
pub const ALL: &[&[Endpoint]] = &[
    root::ENDPOINTS,
    auth::ENDPOINTS,
    config_key::ENDPOINTS,
    mds::ENDPOINTS,
    mon::ENDPOINTS,
    osd::ENDPOINTS,
    pg::ENDPOINTS,
    tell::ENDPOINTS,
];

/// Iterate over every descriptor in table order.
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    ALL.iter().flat_map(|family| family.iter())
}

/// Find a descriptor by operation name.
pub fn lookup(name: &str) -> Option<&'static Endpoint> {
    all().find(|endpoint| endpoint.name == name)
}
