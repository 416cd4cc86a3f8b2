use super::*;
use pretty_assertions::assert_eq;
use rayvision_core::ErrorKind;
use rayvision_render_api::{ApiVersion, Endpoint, RetryOn, RetryPolicy};
use std::time::Duration;
use tokio::time::Instant;

const PLATFORMS: &str = "/api/render/common/queryPlatforms";

#[tokio::test(start_paused = true)]
async fn test_retry_exhaustion() {
    let mock = MockHttpSend::new([Reply::Fail]);
    let client = new_client(&mock);

    let start = Instant::now();
    let err = client.post(PLATFORMS, json!({"zone": 1}), true).await.unwrap_err();
    let elapsed = start.elapsed();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(mock.calls(), 5);
    assert!(elapsed >= Duration::from_secs(4), "elapsed: {elapsed:?}");
    assert!(elapsed <= Duration::from_secs(8), "elapsed: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_unexpected_failure_is_retried() {
    let mock = MockHttpSend::new([Reply::Broken, Reply::ok(json!({"zone": 1}))]);
    let client = new_client(&mock);

    let data = client.post(PLATFORMS, (), true).await.unwrap();

    assert_eq!(data, json!({"zone": 1}));
    assert_eq!(mock.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_api_error_returned_unchanged_after_retries() {
    let mock = MockHttpSend::new([Reply::code(404, "not found")]);
    let client = new_client(&mock);

    let err = client.post(PLATFORMS, json!({"zone": 1}), true).await.unwrap_err();

    assert_eq!(mock.calls(), 5);
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some(404));
    assert_eq!(err.api_message(), Some("not found"));
    assert_eq!(
        err.url(),
        Some("https://task.renderbus.com/api/render/common/queryPlatforms")
    );
    assert_eq!(
        err.to_string(),
        "Error code: 404, Error message: not found, URL: https://task.renderbus.com/api/render/common/queryPlatforms"
    );
}

#[tokio::test(start_paused = true)]
async fn test_success_short_circuit() {
    let mock = MockHttpSend::new([
        Reply::Fail,
        Reply::ok(json!([{"platform": 2}])),
        Reply::Fail,
    ]);
    let client = new_client(&mock);

    let data = client.post(PLATFORMS, json!({"zone": 1}), true).await.unwrap();

    assert_eq!(data, json!([{"platform": 2}]));
    assert_eq!(mock.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_malformed_response_not_retried() {
    let mock = MockHttpSend::new([Reply::Raw("<html>502 Bad Gateway</html>")]);
    let client = new_client(&mock);

    let err = client.post(PLATFORMS, (), true).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_missing_code_not_retried() {
    let mock = MockHttpSend::new([Reply::Json(json!({"message": "no code"}))]);
    let client = new_client(&mock);

    let err = client.post(PLATFORMS, (), true).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_signing_input_not_sent() {
    let mock = MockHttpSend::new([Reply::ok(json!({}))]);
    let client = new_client(&mock);

    let err = client.post(PLATFORMS, json!([1, 2]), true).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SigningInput);
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_key_collision_later_wins_under_validate() {
    let mock = MockHttpSend::new([Reply::ok(json!({}))]);
    let client = new_client(&mock);
    let body = json!({"task": {"id": 1}, "task.id": 2});

    client.post(PLATFORMS, &body, true).await.unwrap();
    client.post(PLATFORMS, &body, false).await.unwrap();
    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn test_strict_canonical_rejects_key_collision() {
    let mock = MockHttpSend::new([Reply::ok(json!({}))]);
    let client = new_client(&mock).with_strict_canonical(true);
    let body = json!({"task": {"id": 1}, "task.id": 2});

    let err = client.post(PLATFORMS, &body, false).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SigningInput);
    assert_eq!(mock.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_transient_only_policy() {
    let policy = RetryPolicy::default().with_retry_on(RetryOn::TransientOnly { codes: vec![429] });

    let mock = MockHttpSend::new([Reply::code(404, "not found")]);
    let client = new_client(&mock).with_retry_policy(policy.clone());
    let err = client.post(PLATFORMS, (), true).await.unwrap_err();
    assert_eq!(err.code(), Some(404));
    assert_eq!(mock.calls(), 1);

    let mock = MockHttpSend::new([Reply::code(429, "too many requests"), Reply::ok(json!({}))]);
    let client = new_client(&mock).with_retry_policy(policy);
    client.post(PLATFORMS, (), true).await.unwrap();
    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn test_no_retry_policy() {
    let mock = MockHttpSend::new([Reply::Fail]);
    let client = new_client(&mock).with_retry_policy(RetryPolicy::none());

    let err = client.post(PLATFORMS, (), true).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_missing_credential() {
    let mock = MockHttpSend::new([Reply::ok(json!({}))]);
    let ctx = Context::new().with_http_send(mock.clone());
    let client = Client::new(ctx, Config::new());

    let err = client.post(PLATFORMS, (), true).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(err.to_string().contains("RAYVISION_API_ACCESS_ID"));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_endpoint_missing_in_version() {
    let mock = MockHttpSend::new([Reply::ok(json!({}))]);
    let ctx = Context::new().with_http_send(mock.clone());
    let client = Client::new(ctx, config().with_api_version(ApiVersion::V1));

    let err = client
        .call(Endpoint::GetTransferConfig, (), false)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(mock.calls(), 0);
}
