use crate::constants::*;
use crate::ApiVersion;
use rayvision_core::utils::Redact;
use rayvision_core::{Context, Error, Result};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Config for the render api client.
///
/// Unset fields fall back to their defaults when the client is built.
#[derive(Clone, Default)]
pub struct Config {
    /// Access id of the api account.
    pub access_id: Option<String>,
    /// Access key of the api account.
    pub access_key: Option<String>,
    /// Domain of the api, defaults to `task.renderbus.com`.
    pub domain: Option<String>,
    /// Platform code of the render farm, defaults to `4`.
    pub platform: Option<String>,
    /// Protocol used to talk to the api, `https` (default) or `http`.
    pub protocol: Option<String>,
    /// Client type sent in the `channel` header, defaults to `4`.
    pub channel: Option<String>,
    /// Client version sent in the `version` header, defaults to `1.0.0`.
    pub version: Option<String>,
    /// Extra headers merged over the base header set.
    pub headers: BTreeMap<String, String>,
    /// Path set used to resolve endpoints.
    pub api_version: ApiVersion,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_id", &Redact::from(&self.access_id))
            .field("access_key", &Redact::from(&self.access_key))
            .field("domain", &self.domain)
            .field("platform", &self.platform)
            .field("protocol", &self.protocol)
            .field("channel", &self.channel)
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Config {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            access_id: ctx.env_var(RAYVISION_API_ACCESS_ID),
            access_key: ctx.env_var(RAYVISION_API_KEY),
            domain: ctx.env_var(RAYVISION_API_DOMAIN),
            platform: ctx.env_var(RAYVISION_API_PLATFORM),
            protocol: ctx.env_var(RAYVISION_API_PROTOCOL),
            ..Default::default()
        }
    }

    /// Fill the fields that are still unset from environment variables.
    pub fn with_env(self, ctx: &Context) -> Self {
        let env = Self::from_env(ctx);

        Self {
            access_id: self.access_id.or(env.access_id),
            access_key: self.access_key.or(env.access_key),
            domain: self.domain.or(env.domain),
            platform: self.platform.or(env.platform),
            protocol: self.protocol.or(env.protocol),
            ..self
        }
    }

    /// Set access id and access key.
    pub fn with_credential(mut self, access_id: &str, access_key: &str) -> Self {
        self.access_id = Some(access_id.to_string());
        self.access_key = Some(access_key.to_string());
        self
    }

    /// Set the domain.
    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    /// Set the platform code.
    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    /// Set the protocol.
    pub fn with_protocol(mut self, protocol: &str) -> Self {
        self.protocol = Some(protocol.to_string());
        self
    }

    /// Set the channel.
    pub fn with_channel(mut self, channel: &str) -> Self {
        self.channel = Some(channel.to_string());
        self
    }

    /// Set the client version.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Add an extra header.
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    /// Set the api version.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Domain in use.
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or(DEFAULT_DOMAIN)
    }

    /// Platform code in use.
    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or(DEFAULT_PLATFORM)
    }

    /// Protocol in use, only `http` and `https` are accepted.
    pub fn scheme(&self) -> Result<&str> {
        match self.protocol.as_deref().unwrap_or(DEFAULT_PROTOCOL) {
            v @ ("http" | "https") => Ok(v),
            v => Err(Error::config_invalid(format!(
                "protocol must be http or https, got {v}"
            ))),
        }
    }

    /// Build the base header set shared by every request.
    ///
    /// Extra headers may replace `channel`, `version` and `Content-Type`,
    /// while `platform` always comes from the config. `accessId` is stamped
    /// from the credential at signing time.
    pub fn base_headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::from([
            (
                CHANNEL.to_string(),
                self.channel.as_deref().unwrap_or(DEFAULT_CHANNEL).to_string(),
            ),
            (
                VERSION.to_string(),
                self.version.as_deref().unwrap_or(DEFAULT_VERSION).to_string(),
            ),
            (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
        ]);
        headers.extend(self.headers.clone());

        headers.insert(PLATFORM.to_string(), self.platform().to_string());
        headers
    }
}
