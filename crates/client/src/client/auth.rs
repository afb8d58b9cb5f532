//! Authentication API methods for [`CephWrapper`].
//!
//! Capability arguments expand into repeated `caps` parameters after
//! `entity`; see [`Capabilities`].

use std::path::Path;

use crate::client::CephWrapper;
use crate::endpoints::{Capabilities, Query, auth};
use crate::error::Result;
use crate::transport::{CephResponse, Transport};

fn entity_with_caps(entity: &str, caps: &Capabilities) -> Query {
    Query::new().param("entity", entity).caps(caps)
}

impl<T: Transport> CephWrapper<T> {
    /// Export the keyring of one entity, or of all entities.
    pub async fn auth_export(&self, entity: Option<&str>) -> Result<CephResponse> {
        self.call(&auth::EXPORT, None, Query::new().optional("entity", entity))
            .await
    }

    pub async fn auth_get(&self, entity: &str) -> Result<CephResponse> {
        self.call(&auth::GET, None, Query::new().param("entity", entity))
            .await
    }

    pub async fn auth_get_key(&self, entity: &str) -> Result<CephResponse> {
        self.call(&auth::GET_KEY, None, Query::new().param("entity", entity))
            .await
    }

    pub async fn auth_list(&self) -> Result<CephResponse> {
        self.call(&auth::LIST, None, Query::new()).await
    }

    pub async fn auth_print_key(&self, entity: &str) -> Result<CephResponse> {
        self.call(&auth::PRINT_KEY, None, Query::new().param("entity", entity))
            .await
    }

    /// Add an entity with the given capabilities.
    pub async fn auth_add(&self, entity: &str, caps: &Capabilities) -> Result<CephResponse> {
        self.call(&auth::ADD, None, entity_with_caps(entity, caps))
            .await
    }

    /// Replace the capabilities of an existing entity.
    pub async fn auth_caps(&self, entity: &str, caps: &Capabilities) -> Result<CephResponse> {
        self.call(&auth::CAPS, None, entity_with_caps(entity, caps))
            .await
    }

    pub async fn auth_del(&self, entity: &str) -> Result<CephResponse> {
        self.call(&auth::DEL, None, Query::new().param("entity", entity))
            .await
    }

    pub async fn auth_get_or_create(
        &self,
        entity: &str,
        caps: &Capabilities,
    ) -> Result<CephResponse> {
        self.call(&auth::GET_OR_CREATE, None, entity_with_caps(entity, caps))
            .await
    }

    pub async fn auth_get_or_create_key(
        &self,
        entity: &str,
        caps: &Capabilities,
    ) -> Result<CephResponse> {
        self.call(&auth::GET_OR_CREATE_KEY, None, entity_with_caps(entity, caps))
            .await
    }

    /// Import entities from a keyring file.
    ///
    /// Always fails with [`crate::ClientError::NotImplemented`].
    pub async fn auth_import(&self, _file: &Path) -> Result<CephResponse> {
        self.call(&auth::IMPORT, None, Query::new()).await
    }
}
