pub mod env {
    pub const ENV_PREFIX: &str = "COURIER";
    pub const ENV_SEPARATOR: &str = "__";
    pub const SENDER_ENV_VAR: &str = "COURIER__SENDER";
    pub const POSTMARK_SERVER_TOKEN_ENV_VAR: &str = "COURIER__POSTMARK__SERVER_TOKEN";
}

/// Optional settings file, read before the environment
pub const CONFIG_FILE: &str = "courier.json";

pub mod postmark {
    pub const BASE_URL: &str = "https://api.postmarkapp.com/";
    pub const POSTMARK_AUTH_HEADER: &str = "X-Postmark-Server-Token";
    pub const TIMEOUT_MILLIS: u64 = 10_000;
}
