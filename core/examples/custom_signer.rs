use async_trait::async_trait;
use rayvision_core::canonical::join_pairs;
use rayvision_core::hash::base64_hmac_sha256;
use rayvision_core::{Context, Error, OsEnv, Result, SigningRequest};
use rayvision_core::{ProvideCredential, SignRequest, Signer, SigningCredential};
use serde_json::json;

// A credential with a key id and a secret.
#[derive(Clone, Debug)]
struct MyCredential {
    key_id: String,
    secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.key_id.is_empty() && !self.secret.is_empty()
    }
}

// Loads the credential from MY_KEY_ID and MY_SECRET.
#[derive(Debug)]
struct MyCredentialLoader;

#[async_trait]
impl ProvideCredential for MyCredentialLoader {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let key_id = ctx.env_var("MY_KEY_ID");
        let secret = ctx.env_var("MY_SECRET");

        match (key_id, secret) {
            (Some(key_id), Some(secret)) => Ok(Some(MyCredential { key_id, secret })),
            _ => {
                println!("MY_KEY_ID or MY_SECRET is not set, using demo credential");
                Ok(Some(MyCredential {
                    key_id: "demo-key-id".to_string(),
                    secret: "demo-secret".to_string(),
                }))
            }
        }
    }
}

// Signs `{domain}{path}?{canonical pairs}` into an `x-signature` header.
#[derive(Debug)]
struct MyRequestSigner;

#[async_trait]
impl SignRequest for MyRequestSigner {
    type Credential = MyCredential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        req.header_insert("x-key-id", cred.key_id.as_str());
        let form = req.canonical_form(&["x-signature"])?;
        let msg = format!("{}{}?{}", req.domain, req.path, join_pairs(&form, "&"));
        println!("String to sign: {msg}");

        req.header_insert(
            "x-signature",
            base64_hmac_sha256(cred.secret.as_bytes(), msg.as_bytes()),
        );
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);
    let signer = Signer::new(ctx, MyCredentialLoader, MyRequestSigner);

    let mut req = SigningRequest::new("https", "api.example.com", "/v1/jobs")
        .with_body(json!({"jobs": [{"id": 1}, {"id": 2}], "priority": 50}))?;
    signer.sign(&mut req).await?;

    println!("Signed headers:");
    for (k, v) in &req.headers {
        println!("  {k}: {v}");
    }

    let http_req = req.into_http()?;
    println!("Ready to send: {} {}", http_req.method(), http_req.uri());
    Ok(())
}
