use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_API_BASE;
use crate::errors::{AppError, AppResult};

pub const TOKEN_ENV: &str = "SLACK_TOKEN";
pub const PREFIX_ENV: &str = "EMOJI_NAME_PREFIX";
pub const SUFFIX_ENV: &str = "EMOJI_NAME_SUFFIX";

#[derive(Parser, Debug)]
#[command(name = "slackmoji")]
#[command(about = "Bulk upload custom emoji to Slack", version)]
pub struct Cli {
    /// Slack API token. Defaults to the $SLACK_TOKEN environment variable;
    /// prompted for interactively if neither is set.
    #[arg(long)]
    pub token: Option<String>,

    /// Prefix to add to generated emoji names. Defaults to the
    /// $EMOJI_NAME_PREFIX environment variable.
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Suffix to add to generated emoji names. Defaults to the
    /// $EMOJI_NAME_SUFFIX environment variable.
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Base URL of the emoji API
    #[arg(long, default_value = DEFAULT_API_BASE, value_name = "URL")]
    pub api_base: String,

    /// Paths to emoji images, e.g. ~/parrots/*
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Flag, then environment, then an interactive prompt. Core operations
    /// only ever see the resolved value.
    pub fn resolved_token(&self) -> AppResult<String> {
        if let Some(token) = non_empty(self.token.as_deref()) {
            return Ok(token);
        }
        if let Some(token) = env_fallback(TOKEN_ENV) {
            return Ok(token);
        }

        let token = prompt_line("Please enter the token: ")?;
        if token.is_empty() {
            return Err(AppError::config("a token is required"));
        }
        Ok(token)
    }

    pub fn resolved_prefix(&self) -> String {
        non_empty(self.prefix.as_deref())
            .or_else(|| env_fallback(PREFIX_ENV))
            .unwrap_or_default()
    }

    pub fn resolved_suffix(&self) -> String {
        non_empty(self.suffix.as_deref())
            .or_else(|| env_fallback(SUFFIX_ENV))
            .unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn env_fallback(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

fn prompt_line(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_files() {
        let cli = Cli::try_parse_from([
            "slackmoji",
            "--token",
            "xoxs-test",
            "-p",
            "pp_",
            "a.gif",
            "b.png",
        ])
        .unwrap();

        assert_eq!(cli.token.as_deref(), Some("xoxs-test"));
        assert_eq!(cli.prefix.as_deref(), Some("pp_"));
        assert_eq!(cli.suffix, None);
        assert_eq!(cli.api_base, DEFAULT_API_BASE);
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn requires_at_least_one_file() {
        let result = Cli::try_parse_from(["slackmoji", "--token", "xoxs-test"]);
        assert!(result.is_err());
    }

    #[test]
    fn flag_wins_over_environment() {
        let cli = Cli::try_parse_from(["slackmoji", "-p", "flag_", "a.gif"]).unwrap();
        assert_eq!(cli.resolved_prefix(), "flag_");
    }

    #[test]
    fn empty_flag_falls_through_to_default() {
        std::env::remove_var(SUFFIX_ENV);
        let cli = Cli::try_parse_from(["slackmoji", "-s", "", "a.gif"]).unwrap();
        // An empty suffix flag behaves as if it were unset.
        assert_eq!(cli.resolved_suffix(), "");
    }
}
