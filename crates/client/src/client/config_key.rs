//! Config-key store API methods for [`CephWrapper`].

use crate::client::CephWrapper;
use crate::endpoints::{Query, config_key};
use crate::error::Result;
use crate::transport::{CephResponse, Transport};

impl<T: Transport> CephWrapper<T> {
    pub async fn config_key_exists(&self, key: &str) -> Result<CephResponse> {
        self.call(&config_key::EXISTS, None, Query::new().param("key", key))
            .await
    }

    pub async fn config_key_get(&self, key: &str) -> Result<CephResponse> {
        self.call(&config_key::GET, None, Query::new().param("key", key))
            .await
    }

    pub async fn config_key_list(&self) -> Result<CephResponse> {
        self.call(&config_key::LIST, None, Query::new()).await
    }
}
