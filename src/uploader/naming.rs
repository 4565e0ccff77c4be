use std::path::Path;

use regex::Regex;

/// Build the emoji name for an input file: trimmed prefix, then the file
/// name without its extension, then trimmed suffix.
pub fn derive_emoji_name(prefix: &str, suffix: &str, path: &Path) -> String {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}{}{}", prefix.trim(), stem, suffix.trim())
}

/// Slack only registers names matching [a-z0-9_-]. The derived name is sent
/// as-is either way; this exists so a run of rejections is explainable.
pub fn has_unsupported_chars(name: &str) -> bool {
    let allowed = Regex::new(r"^[a-z0-9_\-]+$").unwrap();
    !allowed.is_match(name)
}
