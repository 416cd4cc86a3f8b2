use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential, SigningRequest};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded on first use and kept for the whole lifetime of
/// the signer and all its clones.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Load the credential if it has not been loaded yet.
    ///
    /// Returns [`crate::ErrorKind::CredentialInvalid`] if no provider yields a
    /// valid credential.
    pub async fn credential(&self) -> Result<K> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if let Some(cred) = cached {
            return Ok(cred);
        }

        let cred = self
            .loader
            .provide_credential(&self.ctx)
            .await?
            .filter(|c| c.is_valid())
            .ok_or_else(|| Error::credential_invalid("no valid credential could be loaded"))?;
        *self.credential.lock().expect("lock poisoned") = Some(cred.clone());
        Ok(cred)
    }

    /// Signing request.
    pub async fn sign(&self, req: &mut SigningRequest) -> Result<()> {
        let cred = self.credential().await?;

        self.builder.sign_request(&self.ctx, req, Some(&cred)).await
    }
}
