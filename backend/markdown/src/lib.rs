//! Chat Message Formatting Engine
//!
//! Turns raw, untrusted chat text into typed, render-ready tokens: markdown
//! styling, fenced code, custom emoji, user mentions, and autolinked media.
//! Link targets are restricted to http(s). Everything is pure and
//! synchronous; malformed input degrades to plain text.

pub mod cache;
pub mod code_block;
pub mod emoji;
pub mod formatter;
pub mod media;
pub mod renderer;
pub mod resolver;
pub mod rules;
pub mod token;
pub mod tokenizer;
pub mod url_filter;

pub use cache::TokenCache;
pub use code_block::CodeBlockAnalyzer;
pub use emoji::{count_emoji, is_emoji_only, is_emoji_only_with_limit, MEGA_MAX_EMOJI};
pub use formatter::Formatter;
pub use media::{classify_media_url, MediaKind};
pub use renderer::{Renderer, DEFAULT_EMOJI_CDN_HOST};
pub use resolver::{
    collect_mentions, resolve_mentions, MentionRef, MentionResolver, ResolvedMention,
    StaticMentionResolver,
};
pub use token::{MentionType, Spanned, Token, DEFAULT_CODE_LANGUAGE};
pub use tokenizer::{tokenize, tokenize_spanned};
pub use url_filter::is_safe_link_url;
