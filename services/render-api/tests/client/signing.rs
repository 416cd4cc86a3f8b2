use super::*;
use pretty_assertions::assert_eq;
use rayvision_core::SigningRequest;
use rayvision_render_api::sign;

/// Rebuild the signed request from what went on the wire and sign it again.
fn resign(req: &Recorded, domain: &str, path: &str) -> String {
    let headers = BTreeMap::from([
        ("accessId".to_string(), req.headers["accessid"].clone()),
        ("channel".to_string(), req.headers["channel"].clone()),
        ("platform".to_string(), req.headers["platform"].clone()),
        ("UTCTimestamp".to_string(), req.headers["utctimestamp"].clone()),
        ("nonce".to_string(), req.headers["nonce"].clone()),
        ("version".to_string(), req.headers["version"].clone()),
    ]);
    let req = SigningRequest::new("https", domain, path)
        .with_headers(headers)
        .with_body(req.body.clone())
        .unwrap();

    sign(&req, ACCESS_KEY).unwrap()
}

#[tokio::test]
async fn test_request_is_signed() {
    let mock = MockHttpSend::new([Reply::ok(json!([]))]);
    let client = new_client(&mock);
    let body = json!({
        "taskId": 1234,
        "renderEnvs": [{"envId": 1, "pluginIds": [2, 3]}]
    });

    client
        .post("/api/render/handle/queryTaskInfo", &body, true)
        .await
        .unwrap();

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 1);
    let req = &reqs[0];

    assert_eq!(
        req.uri,
        "https://task.renderbus.com/api/render/handle/queryTaskInfo"
    );
    assert_eq!(req.body, body);
    assert_eq!(req.headers["accessid"], ACCESS_ID);
    assert_eq!(req.headers["channel"], "4");
    assert_eq!(req.headers["platform"], "2");
    assert_eq!(req.headers["version"], "dev");
    assert_eq!(req.headers["content-type"], "application/json");

    let nonce: u32 = req.headers["nonce"].parse().unwrap();
    assert!((100_000..=999_999).contains(&nonce));
    let timestamp: i64 = req.headers["utctimestamp"].parse().unwrap();
    assert!(timestamp > 0);

    assert_eq!(
        req.headers["signature"],
        resign(req, "task.renderbus.com", "/api/render/handle/queryTaskInfo")
    );
}

#[tokio::test]
async fn test_every_attempt_is_signed_again() {
    let mock = MockHttpSend::new([Reply::Fail, Reply::ok(json!({}))]);
    let client = new_client(&mock)
        .with_retry_policy(rayvision_render_api::RetryPolicy::default().with_delay(
            std::time::Duration::from_millis(1),
            std::time::Duration::from_millis(2),
        ));

    client
        .post("/api/render/common/queryPlatforms", json!({"zone": 1}), true)
        .await
        .unwrap();

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 2);
    for req in &reqs {
        assert_eq!(
            req.headers["signature"],
            resign(req, "task.renderbus.com", "/api/render/common/queryPlatforms")
        );
    }
}

#[tokio::test]
async fn test_base_headers_are_not_mutated() {
    let mock = MockHttpSend::new([Reply::ok(json!({}))]);
    let client = new_client(&mock);
    let before = client.headers().clone();

    client
        .post("/api/render/common/queryPlatforms", (), true)
        .await
        .unwrap();

    assert_eq!(client.headers(), &before);
    assert!(!before.contains_key("signature"));
    assert!(!before.contains_key("nonce"));
}

#[tokio::test]
async fn test_empty_body_sent_as_object() {
    let mock = MockHttpSend::new([Reply::ok(json!({}))]);
    let client = new_client(&mock);

    client
        .post("/api/render/common/queryPlatforms", (), true)
        .await
        .unwrap();

    assert_eq!(mock.requests()[0].body, json!({}));
}
