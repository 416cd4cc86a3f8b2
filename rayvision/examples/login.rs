use anyhow::Result;
use rayvision::render::{Config, Endpoint};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Credential comes from RAYVISION_API_ACCESS_ID and RAYVISION_API_KEY.
    let client = rayvision::default_client(Config::new());

    let platforms = client
        .call(Endpoint::QueryPlatforms, json!({"zone": 1}), true)
        .await?;
    println!("Platforms: {platforms}");

    let user = client.user().login().await?;
    for (key, value) in user.iter() {
        println!("{key}: {value}");
    }

    Ok(())
}
