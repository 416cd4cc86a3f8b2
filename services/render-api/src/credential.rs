use rayvision_core::utils::Redact;
use rayvision_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential of the render api.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access id, sent in the `accessId` header.
    pub access_id: String,
    /// Access key, used as the HMAC key and never sent.
    pub access_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_id: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            access_id: access_id.into(),
            access_key: access_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_id", &Redact::from(&self.access_id))
            .field("access_key", &Redact::from(&self.access_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_id.is_empty() && !self.access_key.is_empty()
    }
}
