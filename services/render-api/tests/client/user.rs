use super::*;
use pretty_assertions::assert_eq;
use rayvision_core::ErrorKind;
use rayvision_render_api::RetryPolicy;

#[tokio::test]
async fn test_login() {
    let mock = MockHttpSend::new([
        Reply::ok(json!({
            "userId": 10001136,
            "userName": "rayvision",
            "platform": 2,
            "phone": "15945467254",
        })),
        Reply::ok(json!({
            "taskOverTime": 1216165,
            "singleNodeRenderFrames": "1",
            "shareMainCapital": 0,
        })),
        Reply::ok(json!({
            "config_bid": "30201",
            "output_bid": "20201",
            "input_bid": "10201",
        })),
    ]);
    let client = new_client(&mock);

    let info = client.user().login().await.unwrap();

    assert_eq!(info.user_id(), Some(10001136));
    assert_eq!(info.get("user_name"), Some(&json!("rayvision")));
    assert_eq!(info.get("task_over_time"), Some(&json!(1216165)));
    assert_eq!(info.get("single_node_render_frames"), Some(&json!("1")));
    assert_eq!(info.get("share_main_capital"), Some(&json!(0)));
    assert_eq!(info.get("output_bid"), Some(&json!("20201")));

    let uris: Vec<_> = mock.requests().into_iter().map(|r| r.uri).collect();
    assert_eq!(
        uris,
        vec![
            "https://task.renderbus.com/api/render/setUp/queryUserProfile",
            "https://task.renderbus.com/api/render/setUp/queryUserSetting",
            "https://task.renderbus.com/api/render/transfer/getBid",
        ]
    );
}

#[tokio::test]
async fn test_update_user_settings() {
    let mock = MockHttpSend::new([Reply::ok(json!(null))]);
    let client = new_client(&mock);

    client.user().update_user_settings(2582).await.unwrap();

    assert_eq!(mock.requests()[0].body, json!({"taskOverTimeSec": 2582}));
}

#[tokio::test]
async fn test_update_user_settings_failed() {
    let mock = MockHttpSend::new([Reply::code(404, "Update user setting failed.")]);
    let client = new_client(&mock).with_retry_policy(RetryPolicy::none());

    let err = client.user().update_user_settings(2582).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.to_string().contains("Update user setting failed."));
    assert_eq!(
        err.url(),
        Some("https://task.renderbus.com/api/render/setUp/updateUserSetting")
    );
}
