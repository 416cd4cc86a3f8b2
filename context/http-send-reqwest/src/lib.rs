//! [`HttpSend`] implementation backed by [`reqwest`].

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use rayvision_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// ReqwestHttpSend sends requests through a shared [`reqwest::Client`].
///
/// The client owns the connection pool and is cheap to clone, so one
/// instance can serve every request issued by a rayvision client.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::signing_input("failed to convert request into reqwest request").with_source(e)
        })?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(format!("failed to send request: {e}")).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| {
                Error::transport(format!("failed to read response body: {e}")).with_source(e)
            })?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
