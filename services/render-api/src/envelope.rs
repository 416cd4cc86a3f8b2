use crate::constants::SUCCESS_CODE;
use rayvision_core::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Envelope wrapping every response of the render api.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    /// Vendor code, `200` means success.
    pub code: i64,
    /// Vendor message, mostly set on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload of the call.
    #[serde(default)]
    pub data: Value,
}

impl ResponseEnvelope {
    /// Parse an envelope from a raw response body.
    ///
    /// Bodies that are not JSON or lack an integer `code` are malformed.
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| {
            Error::malformed_response(format!("response is not a valid envelope: {e}"))
                .with_source(e)
        })
    }

    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Return `data` on success, or an api error carrying code, message and url.
    pub fn into_data(self, url: &str) -> Result<Value> {
        if self.is_success() {
            return Ok(self.data);
        }

        Err(Error::api(
            self.code,
            self.message.unwrap_or_default(),
            url,
        ))
    }
}
