use std::path::{Path, PathBuf};

use tokio::time::sleep;

use crate::config::RetryConfig;
use crate::errors::AppResult;

use super::client::{AddOutcome, EmojiApi};
use super::naming::{derive_emoji_name, has_unsupported_chars};
use super::progress::{FileOutcome, RunSummary};

/// Upload every file in order, skipping names the team already has.
///
/// The remote listing is fetched exactly once; an unavailable listing means
/// every name is treated as new. A fatal API error aborts the whole run and
/// is returned to the caller, which decides on exit behavior.
pub async fn run_batch<A: EmojiApi>(
    api: &A,
    retry: &RetryConfig,
    prefix: &str,
    suffix: &str,
    files: &[PathBuf],
) -> AppResult<RunSummary> {
    let mut known = api.list_existing().await?.unwrap_or_default();
    log::info!(
        "{} emoji names already registered, {} files to process",
        known.len(),
        files.len()
    );

    let mut summary = RunSummary::default();
    for file in files {
        println!("Processing {}.", file.display());
        let name = derive_emoji_name(prefix, suffix, file);

        let outcome = if known.contains(&name) {
            println!("Skipping {}. Emoji already exists", name);
            FileOutcome::Skipped
        } else {
            let outcome = upload_with_retry(api, retry, &name, file).await?;
            if outcome == FileOutcome::Uploaded {
                println!("{} upload complete.", file.display());
                // Later files deriving the same name skip instead of getting
                // error_name_taken for their whole retry budget.
                known.insert(name);
            }
            outcome
        };

        summary.record(outcome);
    }

    Ok(summary)
}

/// One file, at most `retry.max_attempts` add requests. Rate limiting waits
/// out the fixed cooldown before the next try; a body-level rejection retries
/// immediately. Both consume the same budget.
async fn upload_with_retry<A: EmojiApi>(
    api: &A,
    retry: &RetryConfig,
    name: &str,
    file: &Path,
) -> AppResult<FileOutcome> {
    if has_unsupported_chars(name) {
        log::warn!(
            "Emoji name {:?} contains characters the service is likely to reject",
            name
        );
    }

    for attempt in 1..=retry.max_attempts {
        match api.add_emoji(name, file).await? {
            AddOutcome::Added => return Ok(FileOutcome::Uploaded),
            AddOutcome::RateLimited => {
                log::warn!(
                    "Rate limited while adding {} (attempt {} of {}), cooling down for {:?}",
                    name,
                    attempt,
                    retry.max_attempts,
                    retry.rate_limit_cooldown
                );
                sleep(retry.rate_limit_cooldown).await;
            }
            AddOutcome::Rejected { reason } => {
                println!("Error with uploading {}: {}", name, reason);
                log::warn!(
                    "Add request for {} rejected (attempt {} of {}): {}",
                    name,
                    attempt,
                    retry.max_attempts,
                    reason
                );
            }
        }
    }

    log::error!(
        "Giving up on {} after {} attempts",
        name,
        retry.max_attempts
    );
    Ok(FileOutcome::Cancelled)
}
