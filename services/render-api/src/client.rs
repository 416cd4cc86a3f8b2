use crate::constants::{RAYVISION_API_ACCESS_ID, RAYVISION_API_KEY};
use crate::{
    Config, Credential, DefaultCredentialProvider, Endpoint, RequestSigner, ResponseEnvelope,
    RetryPolicy, UserOperator,
};
use log::{debug, warn};
use rayvision_core::{Context, Error, ErrorKind, ProvideCredential, Result, Signer, SigningRequest};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Client of the render api.
///
/// Cloning a client is cheap: clones share the context, the loaded
/// credential and the base header set.
#[derive(Debug, Clone)]
pub struct Client {
    signer: Signer<Credential>,
    config: Arc<Config>,
    headers: Arc<BTreeMap<String, String>>,
    retry: RetryPolicy,
    strict: bool,
}

impl Client {
    /// Create a client loading its credential through [`DefaultCredentialProvider`].
    pub fn new(ctx: Context, config: Config) -> Self {
        let loader = DefaultCredentialProvider::new(config.clone());
        Self::with_credential_provider(ctx, config, loader)
    }

    /// Create a client loading its credential through `loader`.
    pub fn with_credential_provider(
        ctx: Context,
        config: Config,
        loader: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        let headers = config.base_headers();

        Self {
            signer: Signer::new(ctx, loader, RequestSigner::new()),
            config: Arc::new(config),
            headers: Arc::new(headers),
            retry: RetryPolicy::default(),
            strict: false,
        }
    }

    /// Replace the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Reject bodies whose fields flatten into the same canonical key.
    ///
    /// Off by default: the field visited last wins and a warning is logged.
    pub fn with_strict_canonical(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Config of this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base headers copied into every request.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Operations on the user account.
    pub fn user(&self) -> UserOperator {
        UserOperator::new(self.clone())
    }

    /// Call a logical endpoint, resolved through the configured api version.
    pub async fn call(&self, endpoint: Endpoint, body: impl Serialize, validate: bool) -> Result<Value> {
        let version = self.config.api_version;
        let path = endpoint.path(version).ok_or_else(|| {
            Error::config_invalid(format!(
                "endpoint {endpoint:?} is not available in api version {version:?}"
            ))
        })?;

        self.post(path, body, validate).await
    }

    /// Send a signed POST to `path` and return the `data` of the response.
    ///
    /// `body` must serialize into a JSON object, `()` and `null` are sent as
    /// `{}`. Per-endpoint schema documents are not bundled, so `validate`
    /// doesn't change the request.
    ///
    /// Failed attempts are retried according to the retry policy; the error
    /// of the last attempt is returned as is.
    pub async fn post(&self, path: &str, body: impl Serialize, _validate: bool) -> Result<Value> {
        let body = serde_json::to_value(body)?;
        let req = SigningRequest::new(self.config.scheme()?, self.config.domain(), path)
            .with_headers(self.headers.as_ref().clone())
            .with_body(body)?
            .with_strict(self.strict);

        let mut attempt = 1;
        loop {
            match self.send(req.clone()).await {
                Ok(data) => return Ok(data),
                Err(err) if self.retry.should_retry(attempt, &err) => {
                    let delay = self.retry.delay();
                    warn!(
                        "attempt {attempt}/{} to {} failed, retrying in {}ms: {err}",
                        self.retry.max_attempts,
                        req.url(),
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send(&self, mut req: SigningRequest) -> Result<Value> {
        self.signer.sign(&mut req).await.map_err(|err| match err.kind() {
            ErrorKind::CredentialInvalid => Error::credential_invalid(format!(
                "no access id and key available, set {RAYVISION_API_ACCESS_ID} and {RAYVISION_API_KEY} or configure them explicitly"
            ))
            .with_source(err),
            _ => err,
        })?;

        let url = req.url();
        debug!("POST: {url}");
        debug!("HTTP Headers: {:?}", req.headers);
        debug!("HTTP Body: {}", Value::Object(req.body.clone()));

        let resp = self.signer.context().http_send(req.into_http()?).await?;
        debug!(
            "HTTP Response: {} {}",
            resp.status(),
            String::from_utf8_lossy(resp.body())
        );

        ResponseEnvelope::parse(resp.body())?.into_data(&url)
    }
}
