use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {status} from {endpoint}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn api(endpoint: &str, status: reqwest::StatusCode, body: String) -> Self {
        Self::Api {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        }
    }

    pub fn config(message: &str) -> Self {
        Self::Config(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_endpoint() {
        let err = AppError::api(
            "https://api.slack.com/api/emoji.add",
            reqwest::StatusCode::FORBIDDEN,
            "invalid_auth".to_string(),
        );

        match err {
            AppError::Api {
                endpoint, status, ..
            } => {
                assert_eq!(status, 403);
                assert!(endpoint.ends_with("emoji.add"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn api_error_display_names_the_endpoint() {
        let err = AppError::api(
            "https://api.slack.com/api/emoji.add",
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "oops".to_string(),
        );
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("emoji.add"));
    }
}
