//! Config defaults: applies default values to parsed config.

use crate::schema::{CacheConfig, EmojiConfig, FormatterConfig, LoggingConfig};

/// Default host serving custom emoji images.
pub const DEFAULT_EMOJI_CDN_HOST: &str = "cdn.discordapp.com";

/// Default upper bound for mega (emoji-only) rendering.
pub const DEFAULT_MEGA_MAX_COUNT: usize = 5;

/// Default number of cached token lists.
pub const DEFAULT_CACHE_CAPACITY: u64 = 1024;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_LOG_DIR: &str = "logs";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: FormatterConfig) -> FormatterConfig {
    let config = apply_emoji_defaults(config);
    let config = apply_cache_defaults(config);
    apply_logging_defaults(config)
}

fn apply_emoji_defaults(mut config: FormatterConfig) -> FormatterConfig {
    let emoji = config.emoji.get_or_insert_with(EmojiConfig::default);
    if emoji.cdn_host.is_none() {
        emoji.cdn_host = Some(DEFAULT_EMOJI_CDN_HOST.to_string());
    }
    if emoji.mega_max_count.is_none() {
        emoji.mega_max_count = Some(DEFAULT_MEGA_MAX_COUNT);
    }
    config
}

fn apply_cache_defaults(mut config: FormatterConfig) -> FormatterConfig {
    let cache = config.cache.get_or_insert_with(CacheConfig::default);
    if cache.capacity.is_none() {
        cache.capacity = Some(DEFAULT_CACHE_CAPACITY);
    }
    config
}

fn apply_logging_defaults(mut config: FormatterConfig) -> FormatterConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.dir.is_none() {
        logging.dir = Some(DEFAULT_LOG_DIR.to_string());
    }
    config
}
