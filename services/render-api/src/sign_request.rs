use crate::constants::*;
use crate::Credential;
use log::debug;
use rayvision_core::canonical::join_pairs;
use rayvision_core::hash::base64_hmac_sha256;
use rayvision_core::nonce::generate_nonce;
use rayvision_core::time::{format_unix_timestamp, now, DateTime};
use rayvision_core::{Context, Error, Result, SignRequest, SigningRequest};

/// Headers that never take part in the signed material.
const UNSIGNED_HEADERS: &[&str] = &[SIGNATURE, CONTENT_TYPE];

/// RequestSigner that implements the render api HMAC-SHA256 signature.
///
/// Every call stamps `accessId` and fresh `UTCTimestamp`/`nonce` values
/// before signing.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let timestamp = format_unix_timestamp(self.time.unwrap_or_else(now));
        let nonce = self.nonce.clone().unwrap_or_else(generate_nonce);
        req.header_insert(ACCESS_ID, k.access_id.as_str());
        req.header_insert(UTC_TIMESTAMP, timestamp);
        req.header_insert(NONCE, nonce);

        let signature = sign(req, &k.access_key)?;
        req.header_insert(SIGNATURE, signature);
        Ok(())
    }
}

/// Build the string to sign of a request:
/// `[POST]{domain}:{path}&k1=v1&k2=v2...`.
///
/// `signature` and `Content-Type` headers are not part of it, body fields
/// replace header fields of the same name.
pub fn string_to_sign(req: &SigningRequest) -> Result<String> {
    let form = req.canonical_form(UNSIGNED_HEADERS)?;

    let s = format!(
        "[{}]{}:{}&{}",
        req.method,
        req.domain,
        req.path,
        join_pairs(&form, "&")
    );

    debug!("calculated string to sign: {s}");
    Ok(s)
}

/// Compute the base64 encoded HMAC-SHA256 signature of a request.
pub fn sign(req: &SigningRequest, access_key: &str) -> Result<String> {
    let string_to_sign = string_to_sign(req)?;
    Ok(base64_hmac_sha256(
        access_key.as_bytes(),
        string_to_sign.as_bytes(),
    ))
}
