//! Configured entry point bundling the cache, mega-mode limit and emoji CDN.

use std::sync::Arc;

use crate::cache::TokenCache;
use crate::emoji::{is_emoji_only_with_limit, MEGA_MAX_EMOJI};
use crate::renderer::{Renderer, DEFAULT_EMOJI_CDN_HOST};
use crate::token::Token;

pub struct Formatter {
    cache: TokenCache,
    mega_max_count: usize,
    emoji_cdn_host: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(0, MEGA_MAX_EMOJI, DEFAULT_EMOJI_CDN_HOST)
    }
}

impl Formatter {
    pub fn new(cache_capacity: u64, mega_max_count: usize, emoji_cdn_host: impl Into<String>) -> Self {
        Self {
            cache: TokenCache::new(cache_capacity),
            mega_max_count,
            emoji_cdn_host: emoji_cdn_host.into(),
        }
    }

    pub fn tokenize(&self, input: &str) -> Arc<[Token]> {
        self.cache.tokenize(input)
    }

    /// Whether `input` should render in mega mode.
    pub fn is_emoji_only(&self, input: &str) -> bool {
        is_emoji_only_with_limit(input, self.mega_max_count)
    }

    pub fn emoji_url(&self, emoji_id: &str, animated: bool) -> String {
        Renderer::emoji_cdn_url(&self.emoji_cdn_host, emoji_id, animated)
    }

    pub fn to_plain_text(&self, input: &str) -> String {
        Renderer::to_plain_text(&self.tokenize(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatter_matches_free_functions() {
        let formatter = Formatter::default();
        assert_eq!(&*formatter.tokenize("**a**"), crate::tokenize("**a**").as_slice());
        assert!(formatter.is_emoji_only("🎉"));
        assert!(!formatter.is_emoji_only("🎉🎉🎉🎉🎉🎉"));
    }

    #[test]
    fn honours_configured_limits_and_host() {
        let formatter = Formatter::new(8, 1, "cdn.example.com");
        assert!(!formatter.is_emoji_only("🎉🎉"));
        assert_eq!(
            formatter.emoji_url("5", false),
            "https://cdn.example.com/emojis/5.png"
        );
        assert_eq!(formatter.to_plain_text("<:wave:5> **hi**"), ":wave: hi");
    }
}
