use std::collections::BTreeMap;

use bytes::Bytes;
use http::header::HeaderName;
use http::HeaderValue;
use http::Method;
use serde_json::Map;
use serde_json::Value;

use crate::canonical::{flatten, flatten_strict, CanonicalForm};
use crate::{Error, Result};

/// Signing context for request.
///
/// Header names are kept with their original case: the canonical form is
/// built from them before they are handed to the http layer.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme, `https` or `http`.
    pub scheme: String,
    /// Domain of the vendor, without scheme: `task.renderbus.com`.
    pub domain: String,
    /// Api path: `/api/render/common/queryPlatforms`.
    pub path: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Request body, always a JSON object.
    pub body: Map<String, Value>,
    /// Reject keys produced twice while flattening.
    pub strict: bool,
}

impl SigningRequest {
    /// Create a new POST signing request with empty headers and body.
    pub fn new(
        scheme: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            method: Method::POST,
            scheme: scheme.into(),
            domain: domain.into(),
            path: path.into(),
            headers: BTreeMap::new(),
            body: Map::new(),
            strict: false,
        }
    }

    /// Replace the headers.
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Replace the body.
    ///
    /// `null` is treated as an empty object, any other non-object value is
    /// rejected because it can't be merged with the headers.
    pub fn with_body(mut self, body: Value) -> Result<Self> {
        self.body = match body {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(Error::signing_input(format!(
                    "request body must be a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        };
        Ok(self)
    }

    /// Enable or disable strict canonicalization.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Full url of this request: `{scheme}://{domain}{path}`.
    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.domain, self.path)
    }

    /// Insert or replace a header.
    #[inline]
    pub fn header_insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Get header value by name.
    #[inline]
    pub fn header_get(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Build the canonical form of headers and body.
    ///
    /// - headers listed in `excluded` (compared ASCII case-insensitively) are skipped
    /// - body fields overwrite header fields with the same name
    /// - in strict mode, keys produced twice while flattening are rejected
    ///
    /// The request itself is left untouched.
    pub fn canonical_form(&self, excluded: &[&str]) -> Result<CanonicalForm> {
        let mut merged: Map<String, Value> = self
            .headers
            .iter()
            .filter(|(k, _)| !excluded.iter().any(|e| e.eq_ignore_ascii_case(k.as_str())))
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        merged.extend(self.body.iter().map(|(k, v)| (k.clone(), v.clone())));

        let merged = Value::Object(merged);
        if self.strict {
            flatten_strict(&merged)
        } else {
            Ok(flatten(&merged))
        }
    }

    /// Convert into an http request with a JSON encoded body.
    pub fn into_http(self) -> Result<http::Request<Bytes>> {
        let url = self.url();
        let body = serde_json::to_vec(&Value::Object(self.body))?;

        let mut req = http::Request::builder().method(self.method).uri(url);
        for (k, v) in &self.headers {
            let mut value = HeaderValue::from_str(v)?;
            if k == "signature" {
                value.set_sensitive(true);
            }
            req = req.header(HeaderName::from_bytes(k.as_bytes())?, value);
        }

        Ok(req.body(Bytes::from(body))?)
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
