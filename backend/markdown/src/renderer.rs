//! Renderer helpers for the token stream
//!
//! Visual rendering belongs to the UI layer. This module holds the pieces
//! every renderer shares: the emoji CDN convention and a plain-text
//! projection used for notifications, previews, and TTS.

use std::collections::HashMap;

use crate::resolver::{MentionRef, ResolvedMention};
use crate::token::Token;

/// CDN host used when none is configured.
pub const DEFAULT_EMOJI_CDN_HOST: &str = "cdn.discordapp.com";

pub struct Renderer;

impl Renderer {
    /// Image URL for a custom emoji: animated emoji are served as GIF.
    pub fn emoji_cdn_url(cdn_host: &str, emoji_id: &str, animated: bool) -> String {
        let ext = if animated { "gif" } else { "png" };
        format!("https://{}/emojis/{}.{}", cdn_host.trim_end_matches('/'), emoji_id, ext)
    }

    /// Renders tokens to plain text, dropping all styling.
    pub fn to_plain_text(tokens: &[Token]) -> String {
        Self::to_plain_text_resolved(tokens, &HashMap::new())
    }

    /// Like [`Renderer::to_plain_text`], but mentions found in `resolved`
    /// render with their display name.
    pub fn to_plain_text_resolved(
        tokens: &[Token],
        resolved: &HashMap<MentionRef, ResolvedMention>,
    ) -> String {
        let mut output = String::new();
        for token in tokens {
            match token {
                Token::Text { content }
                | Token::Bold { content }
                | Token::Italic { content }
                | Token::Strikethrough { content }
                | Token::Code { content }
                | Token::Blockquote { content }
                | Token::CodeBlock { content, .. }
                | Token::Newline { content } => output.push_str(content),
                Token::Link { content, url } => {
                    if content == url {
                        output.push_str(url);
                    } else {
                        output.push_str(&format!("{content} ({url})"));
                    }
                }
                Token::Audio { url, .. } | Token::Video { url, .. } => output.push_str(url),
                Token::DiscordEmoji { emoji_name, .. } => {
                    output.push(':');
                    output.push_str(emoji_name);
                    output.push(':');
                }
                Token::UserMention {
                    mention_type,
                    user_id,
                    ..
                } => {
                    let key = MentionRef::new(*mention_type, user_id.clone());
                    output.push('@');
                    match resolved.get(&key) {
                        Some(found) => output.push_str(&found.display_name),
                        None => output.push_str(user_id),
                    }
                }
            }
        }
        output
    }
}
