//! Signed client of the Rayvision render api.
//!
//! Every request is a JSON `POST` carrying `accessId`, `channel`,
//! `platform`, `UTCTimestamp`, `nonce`, `version` and `signature` headers.
//! The signature is the base64 encoded HMAC-SHA256 of
//! `[POST]{domain}:{path}&{canonical pairs}` keyed by the access key.
//!
//! ## Example
//!
//! ```no_run
//! use rayvision_core::{Context, OsEnv, Result};
//! use rayvision_render_api::{Client, Config, Endpoint};
//! use serde_json::json;
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let ctx = ctx.with_env(OsEnv);
//! let config = Config::new().with_env(&ctx).with_platform("2");
//! let client = Client::new(ctx, config);
//!
//! let platforms = client
//!     .call(Endpoint::QueryPlatforms, json!({"zone": 1}), true)
//!     .await?;
//! let user = client.user().login().await?;
//! println!("{platforms} {:?}", user.user_id());
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{sign, string_to_sign, RequestSigner};

mod endpoint;
pub use endpoint::{ApiVersion, Endpoint};

mod envelope;
pub use envelope::ResponseEnvelope;

mod retry;
pub use retry::{RetryOn, RetryPolicy};

mod client;
pub use client::Client;

mod user;
pub use user::{UserInfo, UserOperator};
