//! Link scheme allow-list.
//!
//! Only `http` and `https` targets may become live links. Everything else
//! (`javascript:`, `data:`, `vbscript:`, relative paths, `mailto:`) stays text.

use once_cell::sync::Lazy;
use regex::Regex;

static SAFE_SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Whether `url` may be rendered as a clickable link.
///
/// Tested against the exact candidate string; leading whitespace or control
/// characters therefore fail the check.
pub fn is_safe_link_url(url: &str) -> bool {
    SAFE_SCHEME_RE.is_match(url)
}
