use crate::{Client, Endpoint};
use rayvision_core::utils::camel_to_snake;
use rayvision_core::{Error, Result};
use serde_json::{json, Map, Value};

/// Operations on the user account.
#[derive(Debug, Clone)]
pub struct UserOperator {
    client: Client,
}

impl UserOperator {
    /// Create a new operator over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get the user profile: `userId`, `userName`, `platform`...
    pub async fn query_user_profile(&self) -> Result<Value> {
        self.client.call(Endpoint::QueryUserProfile, (), true).await
    }

    /// Get the user settings: `taskOverTime`, `singleNodeRenderFrames`...
    pub async fn query_user_setting(&self) -> Result<Value> {
        self.client.call(Endpoint::QueryUserSetting, (), true).await
    }

    /// Update the task timeout of the user, in seconds.
    pub async fn update_user_settings(&self, task_over_time: u64) -> Result<Value> {
        self.client
            .call(
                Endpoint::UpdateUserSetting,
                json!({ "taskOverTimeSec": task_over_time }),
                true,
            )
            .await
    }

    /// Get the transfer bids of the user: `config_bid`, `input_bid`, `output_bid`.
    pub async fn get_transfer_bid(&self) -> Result<Value> {
        self.client.call(Endpoint::GetTransferBid, (), true).await
    }

    /// Load profile, settings and transfer bids into one [`UserInfo`].
    pub async fn login(&self) -> Result<UserInfo> {
        let profile = self.query_user_profile().await?;
        let setting = self.query_user_setting().await?;
        let bid = self.get_transfer_bid().await?;

        UserInfo::from_responses([profile, setting, bid])
    }
}

/// Merged user information with snake_case keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserInfo {
    fields: Map<String, Value>,
}

impl UserInfo {
    /// Merge response objects, fields of later responses win.
    ///
    /// Every key is converted from camelCase to snake_case.
    pub fn from_responses(responses: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut fields = Map::new();

        for resp in responses {
            match resp {
                Value::Object(map) => {
                    fields.extend(map.into_iter().map(|(k, v)| (camel_to_snake(&k), v)))
                }
                Value::Null => {}
                other => {
                    return Err(Error::malformed_response(format!(
                        "user information must be a JSON object, got {other}"
                    )))
                }
            }
        }

        Ok(Self { fields })
    }

    /// Get a field by its snake_case name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Id of the user.
    pub fn user_id(&self) -> Option<i64> {
        self.get("user_id").and_then(Value::as_i64)
    }

    /// Iterate over all fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}
