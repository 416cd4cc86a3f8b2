use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use rayvision_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `RAYVISION_API_ACCESS_ID`: the access id
/// - `RAYVISION_API_KEY`: the access key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(RAYVISION_API_ACCESS_ID), envs.get(RAYVISION_API_KEY)) {
            (Some(id), Some(key)) => Ok(Some(Credential::new(id.as_str(), key.as_str()))),
            _ => Ok(None),
        }
    }
}
