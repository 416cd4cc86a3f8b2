use crate::{Config, Credential};
use async_trait::async_trait;
use log::debug;
use rayvision_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// Static configuration based loader.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.access_id, &self.config.access_key) {
            (Some(access_id), Some(access_key)) => {
                debug!("loading credential from config");
                Ok(Some(Credential::new(access_id.as_str(), access_key.as_str())))
            }
            _ => {
                debug!("incomplete config, skipping");
                Ok(None)
            }
        }
    }
}
