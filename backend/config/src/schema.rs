//! Formatter configuration schema.
//!
//! Every section is optional in the YAML file; [`crate::apply_all_defaults`]
//! fills in whatever is missing.

use serde::{Deserialize, Serialize};

/// Root configuration for chatfmt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfig {
    /// Custom emoji rendering and mega-mode classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<EmojiConfig>,

    /// Token cache sizing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheConfig>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn_host: Option<String>,
    /// Upper bound on emoji count for mega rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mega_max_count: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    /// Maximum cached messages; 0 disables the cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl FormatterConfig {
    pub fn emoji_cdn_host(&self) -> &str {
        self.emoji
            .as_ref()
            .and_then(|e| e.cdn_host.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_EMOJI_CDN_HOST)
    }

    pub fn mega_max_count(&self) -> usize {
        self.emoji
            .as_ref()
            .and_then(|e| e.mega_max_count)
            .unwrap_or(crate::defaults::DEFAULT_MEGA_MAX_COUNT)
    }

    pub fn cache_capacity(&self) -> u64 {
        self.cache
            .as_ref()
            .and_then(|c| c.capacity)
            .unwrap_or(crate::defaults::DEFAULT_CACHE_CAPACITY)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.dir.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_LOG_DIR)
    }
}
