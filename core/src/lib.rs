//! Core components for signing Rayvision API requests.
//!
//! This crate provides the foundational types and traits shared by the
//! rayvision crates. It knows nothing about a specific vendor endpoint; it
//! only knows how to turn a request into signed material.
//!
//! ## Overview
//!
//! - **Canonicalization**: [`canonical`] flattens nested JSON payloads into a
//!   sorted, dotted key form that is independent of field insertion order.
//! - **Context**: a container that holds implementations for HTTP sending and
//!   environment access.
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and request signing ([`SignRequest`]).
//! - **Signer**: the orchestrator that loads the credential once and signs
//!   every request with fresh per-request values.
//!
//! ## Example
//!
//! ```no_run
//! use rayvision_core::{Context, Error, ProvideCredential, Result, SignRequest, Signer};
//! use rayvision_core::{SigningCredential, SigningRequest};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut SigningRequest,
//!         cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let cred = cred.ok_or_else(|| Error::credential_invalid("missing credential"))?;
//!         let form = req.canonical_form(&["signature"])?;
//!         let msg = rayvision_core::canonical::join_pairs(&form, "&");
//!         let signature = rayvision_core::hash::base64_hmac_sha256(
//!             cred.secret.as_bytes(),
//!             msg.as_bytes(),
//!         );
//!         req.header_insert("signature", signature);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//!
//! let mut req = SigningRequest::new("https", "example.com", "/api/echo");
//! signer.sign(&mut req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: time helpers
//! - [`nonce`]: per-request nonce generation
//! - [`utils`]: data redaction and field name conversion

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod canonical;
pub mod hash;
pub mod nonce;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    struct TestCredential(String);

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    struct CountingLoader {
        secret: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ProvideCredential for CountingLoader {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(TestCredential(self.secret.to_string())))
        }
    }

    #[derive(Debug)]
    struct EchoBuilder;

    #[async_trait]
    impl SignRequest for EchoBuilder {
        type Credential = TestCredential;

        async fn sign_request(
            &self,
            _: &Context,
            req: &mut SigningRequest,
            cred: Option<&Self::Credential>,
        ) -> Result<()> {
            let cred = cred.ok_or_else(|| Error::credential_invalid("missing credential"))?;
            req.header_insert("signature", cred.0.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_signer_loads_credential_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingLoader {
                secret: "secret",
                calls: calls.clone(),
            },
            EchoBuilder,
        );

        for _ in 0..3 {
            let mut req = SigningRequest::new("https", "a.com", "/p");
            signer.sign(&mut req).await.unwrap();
            assert_eq!(req.header_get("signature"), Some("secret"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_signer_rejects_invalid_credential() {
        let signer = Signer::new(
            Context::new(),
            CountingLoader {
                secret: "",
                calls: Arc::new(AtomicUsize::new(0)),
            },
            EchoBuilder,
        );

        let mut req = SigningRequest::new("https", "a.com", "/p");
        let err = signer.sign(&mut req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(req.header_get("signature"), None);
    }
}
