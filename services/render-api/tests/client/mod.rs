mod retry;
mod signing;
mod user;

use async_trait::async_trait;
use bytes::Bytes;
use rayvision_core::{Context, Error, HttpSend, Result};
use rayvision_render_api::{Client, Config};
use serde_json::{json, Value};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const ACCESS_ID: &str = "test_access_id";
pub const ACCESS_KEY: &str = "test_access_key";

/// What the mock answers to one request.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this JSON body.
    Json(Value),
    /// 200 with this raw body.
    Raw(&'static str),
    /// Network failure.
    Fail,
    /// Failure the http layer reports without classifying it.
    Broken,
}

impl Reply {
    pub fn ok(data: Value) -> Self {
        Reply::Json(json!({"code": 200, "message": "success", "data": data}))
    }

    pub fn code(code: i64, message: &str) -> Self {
        Reply::Json(json!({"code": code, "message": message, "data": {}}))
    }
}

/// A request seen by the mock, header names are lowercase.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub uri: String,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

#[derive(Debug, Default)]
struct State {
    replies: VecDeque<Reply>,
    last: Option<Reply>,
    requests: Vec<Recorded>,
}

/// HttpSend answering scripted replies; the last reply repeats forever.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    state: Arc<Mutex<State>>,
}

impl MockHttpSend {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        let state = State {
            replies: replies.into_iter().collect(),
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(Recorded {
                uri: req.uri().to_string(),
                headers: req
                    .headers()
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_str().unwrap().to_string()))
                    .collect(),
                body: serde_json::from_slice(req.body()).unwrap(),
            });

            let reply = match state.replies.pop_front() {
                Some(reply) => reply,
                None => state.last.clone().expect("mock has no reply"),
            };
            state.last = Some(reply.clone());
            reply
        };

        let body = match reply {
            Reply::Json(v) => v.to_string(),
            Reply::Raw(s) => s.to_string(),
            Reply::Fail => return Err(Error::transport("connection refused")),
            Reply::Broken => return Err(anyhow::anyhow!("connection pool closed").into()),
        };
        Ok(http::Response::builder()
            .status(200)
            .body(Bytes::from(body))?)
    }
}

pub fn config() -> Config {
    Config::new()
        .with_credential(ACCESS_ID, ACCESS_KEY)
        .with_platform("2")
        .with_version("dev")
}

pub fn new_client(mock: &MockHttpSend) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    Client::new(ctx, config())
}
