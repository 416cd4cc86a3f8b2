use anyhow::Result;
use bytes::Bytes;
use rayvision_core::Context;
use rayvision_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Bound every attempt, the caller's retry budget multiplies this value.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("rayvision-example/1.0")
        .build()?;

    println!("Created custom HTTP client with:");
    println!("  - 30 second timeout");
    println!("  - Max 10 idle connections per host");
    println!("  - Custom user agent");

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    // Unsigned request, the vendor answers with an error envelope.
    let url = "https://task.renderbus.com/api/render/common/queryPlatforms";
    println!("\nTesting HTTP client with POST {url}");

    let req = http::Request::builder()
        .method("POST")
        .uri(url)
        .header("Content-Type", "application/json")
        .body(Bytes::from_static(b"{}"))?;

    match ctx.http_send(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            if let Ok(text) = String::from_utf8(resp.body().to_vec()) {
                println!("\nResponse body:");
                println!("{text}");
            }
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
