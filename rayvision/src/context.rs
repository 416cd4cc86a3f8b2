use async_trait::async_trait;
use bytes::Bytes;
use rayvision_core::{Context, Env, HttpSend, OsEnv, Result};
use rayvision_http_send_reqwest::ReqwestHttpSend;
use rayvision_render_api::{Client, Config};
use std::collections::HashMap;

/// Context talking over `reqwest` and reading the process environment.
#[derive(Debug, Default, Clone)]
pub struct DefaultContext {
    http: ReqwestHttpSend,
}

impl DefaultContext {
    /// Create a context with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: ReqwestHttpSend::new(client),
        }
    }

    /// Build a [`Context`] using this implementation for every component.
    pub fn into_context(self) -> Context {
        Context::new().with_http_send(self.clone()).with_env(self)
    }
}

#[async_trait]
impl HttpSend for DefaultContext {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        OsEnv.var(key)
    }

    fn vars(&self) -> HashMap<String, String> {
        OsEnv.vars()
    }
}

/// Create a render api client on top of [`DefaultContext`].
///
/// Fields left unset in `config` are read from the `RAYVISION_API_*`
/// environment variables.
pub fn default_client(config: Config) -> Client {
    let ctx = DefaultContext::new().into_context();
    let config = config.with_env(&ctx);

    Client::new(ctx, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_keeps_explicit_config() {
        let client = default_client(
            Config::new()
                .with_credential("id", "key")
                .with_domain("test.renderbus.com"),
        );

        assert_eq!(client.config().domain(), "test.renderbus.com");
        assert_eq!(client.config().access_id.as_deref(), Some("id"));
    }
}
