//! Names and default values shared by the render api modules.

// Env values used in rayvision services.
/// Access id of the user.
pub const RAYVISION_API_ACCESS_ID: &str = "RAYVISION_API_ACCESS_ID";
/// Access key of the user.
pub const RAYVISION_API_KEY: &str = "RAYVISION_API_KEY";
/// Domain of the render api.
pub const RAYVISION_API_DOMAIN: &str = "RAYVISION_API_DOMAIN";
/// Render platform id.
pub const RAYVISION_API_PLATFORM: &str = "RAYVISION_API_PLATFORM";
/// Scheme used to reach the api, `https` or `http`.
pub const RAYVISION_API_PROTOCOL: &str = "RAYVISION_API_PROTOCOL";

// Headers used in rayvision requests.
/// Access id of the caller.
pub const ACCESS_ID: &str = "accessId";
/// Client channel.
pub const CHANNEL: &str = "channel";
/// Render platform id.
pub const PLATFORM: &str = "platform";
/// Unix seconds at signing time.
pub const UTC_TIMESTAMP: &str = "UTCTimestamp";
/// Random per-request number.
pub const NONCE: &str = "nonce";
/// Base64 HMAC-SHA256 signature.
pub const SIGNATURE: &str = "signature";
/// Client version.
pub const VERSION: &str = "version";
/// Content type of the body.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type of every request body.
pub const APPLICATION_JSON: &str = "application/json";

// Default values of the client config.
/// Default domain.
pub const DEFAULT_DOMAIN: &str = "task.renderbus.com";
/// Default platform id.
pub const DEFAULT_PLATFORM: &str = "4";
/// Default scheme.
pub const DEFAULT_PROTOCOL: &str = "https";
/// Default channel.
pub const DEFAULT_CHANNEL: &str = "4";
/// Default client version.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Envelope code of a successful call.
pub const SUCCESS_CODE: i64 = 200;
