use crate::{Config, Credential};
use async_trait::async_trait;
use rayvision_core::{Context, ProvideCredential, ProvideCredentialChain, Result};
use std::sync::Arc;

/// Default loader for the render api.
///
/// This loader will try to load credentials in the following order:
/// 1. From static configuration
/// 2. From environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(super::ConfigCredentialProvider::new(Arc::new(config)))
            .push(super::EnvCredentialProvider::new());

        Self { chain }
    }

    /// Add a provider that is tried before the default ones.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
