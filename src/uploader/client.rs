use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::path::Path;

use reqwest::{multipart, Client, StatusCode};
use serde::Deserialize;
use tokio::time::Duration;

use crate::config::ApiConfig;
use crate::errors::{AppError, AppResult};

/// Result of a single add request that completed at the HTTP layer.
///
/// Slack returns 200 OK even when the upload fails, so a completed request
/// still has three shapes: registered, throttled, or refused in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    RateLimited,
    Rejected { reason: String },
}

/// Operations against the remote emoji API.
pub trait EmojiApi {
    /// Names already registered for the team, or `None` when the listing is
    /// unavailable (callers must treat membership as unknown).
    fn list_existing(&self) -> impl Future<Output = AppResult<Option<HashSet<String>>>> + Send;

    /// One add request for one file. Retryable conditions come back as
    /// outcomes; any other non-2xx status is an error.
    fn add_emoji(
        &self,
        name: &str,
        image: &Path,
    ) -> impl Future<Output = AppResult<AddOutcome>> + Send;
}

#[derive(Debug, Deserialize)]
struct EmojiListResponse {
    #[serde(default)]
    emoji: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct AddEmojiResponse {
    ok: bool,
    error: Option<String>,
}

/// Slack emoji API client
pub struct SlackClient {
    client: Client,
    config: ApiConfig,
}

impl SlackClient {
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        // Redirects are not followed: anything but a 2xx from the add
        // endpoint has to reach the caller as-is.
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, config })
    }
}

impl EmojiApi for SlackClient {
    async fn list_existing(&self) -> AppResult<Option<HashSet<String>>> {
        let url = format!("{}?token={}", self.config.list_url(), self.config.token);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!(
                "Emoji listing returned {}; treating every name as new",
                status
            );
            return Ok(None);
        }

        let text = response.text().await?;
        let body: EmojiListResponse = serde_json::from_str(&text)?;
        log::debug!("Listing returned {} registered emoji", body.emoji.len());
        Ok(Some(body.emoji.into_keys().collect()))
    }

    async fn add_emoji(&self, name: &str, image: &Path) -> AppResult<AddOutcome> {
        // Read per attempt; the bytes (and the handle behind them) are gone
        // once this request ends, whatever its outcome.
        let bytes = tokio::fs::read(image).await?;
        let filename = image
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let part = multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str(mime_for(image))?;
        let form = multipart::Form::new()
            .text("mode", "data")
            .text("name", name.to_string())
            .text("token", self.config.token.clone())
            .part("image", part);

        let url = self.config.add_url();
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(AddOutcome::RateLimited);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::api(&url, status, body));
        }

        let text = response.text().await?;
        let body: AddEmojiResponse = serde_json::from_str(&text)?;
        if body.ok {
            Ok(AddOutcome::Added)
        } else {
            Ok(AddOutcome::Rejected {
                reason: body.error.unwrap_or_else(|| "unspecified error".to_string()),
            })
        }
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png", // Default fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn list_response_keys_become_the_name_set() {
        let raw = r#"{"ok": true, "emoji": {"partyparrot": "https://emoji.example/pp.gif", "blob": "alias:partyparrot"}}"#;
        let body: EmojiListResponse = serde_json::from_str(raw).unwrap();
        let names: HashSet<String> = body.emoji.into_keys().collect();

        assert_eq!(names.len(), 2);
        assert!(names.contains("partyparrot"));
        assert!(names.contains("blob"));
    }

    #[test]
    fn list_response_without_emoji_field_is_empty() {
        let body: EmojiListResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(body.emoji.is_empty());
    }

    #[test]
    fn add_response_failure_carries_the_error_code() {
        let body: AddEmojiResponse =
            serde_json::from_str(r#"{"ok": false, "error": "error_name_taken"}"#).unwrap();
        assert!(!body.ok);
        assert_eq!(body.error.as_deref(), Some("error_name_taken"));
    }

    #[test]
    fn mime_falls_back_to_png_for_unknown_extensions() {
        assert_eq!(mime_for(&PathBuf::from("a.gif")), "image/gif");
        assert_eq!(mime_for(&PathBuf::from("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for(&PathBuf::from("a.tiff")), "image/png");
        assert_eq!(mime_for(&PathBuf::from("noext")), "image/png");
    }
}
