use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.slack.com";

/// Resolved API endpoint and credential, passed explicitly to every
/// operation that talks to the remote service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    pub token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
        }
    }

    pub fn list_url(&self) -> String {
        format!("{}/api/emoji.list", self.base_url)
    }

    pub fn add_url(&self) -> String {
        format!("{}/api/emoji.add", self.base_url)
    }
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub rate_limit_cooldown: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            rate_limit_cooldown: Duration::from_secs(100),
        }
    }
}
