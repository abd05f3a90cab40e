//! Token taxonomy
//!
//! The closed set of token kinds the tokenizer emits. Each variant carries the
//! substring it was derived from plus exactly the fields a renderer needs.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Language assigned to a fenced code block without a tag.
pub const DEFAULT_CODE_LANGUAGE: &str = "text";

/// Which identity system a mention points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionType {
    /// `<@id>`
    Discord,
    /// `<@n:id>`
    Clerk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Token {
    Text {
        content: String,
    },
    Bold {
        content: String,
    },
    Italic {
        content: String,
    },
    Strikethrough {
        content: String,
    },
    Code {
        content: String,
    },
    #[serde(rename = "codeblock")]
    CodeBlock {
        content: String,
        language: String,
    },
    Blockquote {
        content: String,
    },
    Link {
        content: String,
        url: String,
    },
    Audio {
        content: String,
        url: String,
    },
    Video {
        content: String,
        url: String,
    },
    DiscordEmoji {
        content: String,
        animated: bool,
        emoji_id: String,
        emoji_name: String,
    },
    UserMention {
        content: String,
        mention_type: MentionType,
        user_id: String,
    },
    Newline {
        content: String,
    },
}

impl Token {
    pub fn text(content: impl Into<String>) -> Self {
        Token::Text {
            content: content.into(),
        }
    }

    pub fn newline() -> Self {
        Token::Newline {
            content: "\n".to_string(),
        }
    }

    /// The substring this token was derived from.
    ///
    /// For delimited kinds (bold, code, links...) this is the inner payload;
    /// use [`Spanned::span`] to recover the full source range.
    pub fn content(&self) -> &str {
        match self {
            Token::Text { content }
            | Token::Bold { content }
            | Token::Italic { content }
            | Token::Strikethrough { content }
            | Token::Code { content }
            | Token::CodeBlock { content, .. }
            | Token::Blockquote { content }
            | Token::Link { content, .. }
            | Token::Audio { content, .. }
            | Token::Video { content, .. }
            | Token::DiscordEmoji { content, .. }
            | Token::UserMention { content, .. }
            | Token::Newline { content } => content,
        }
    }

    /// Stable kind name, matching the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Text { .. } => "text",
            Token::Bold { .. } => "bold",
            Token::Italic { .. } => "italic",
            Token::Strikethrough { .. } => "strikethrough",
            Token::Code { .. } => "code",
            Token::CodeBlock { .. } => "codeblock",
            Token::Blockquote { .. } => "blockquote",
            Token::Link { .. } => "link",
            Token::Audio { .. } => "audio",
            Token::Video { .. } => "video",
            Token::DiscordEmoji { .. } => "discordEmoji",
            Token::UserMention { .. } => "userMention",
            Token::Newline { .. } => "newline",
        }
    }

    /// Target of a link or media token.
    pub fn url(&self) -> Option<&str> {
        match self {
            Token::Link { url, .. } | Token::Audio { url, .. } | Token::Video { url, .. } => {
                Some(url)
            }
            _ => None,
        }
    }
}

/// A token together with the byte range of the input it consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spanned {
    #[serde(flatten)]
    pub token: Token,
    pub span: Range<usize>,
}

impl Spanned {
    pub fn new(token: Token, span: Range<usize>) -> Self {
        Self { token, span }
    }

    /// The raw source slice this token was produced from.
    pub fn source<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_tags_and_fields() {
        let token = Token::DiscordEmoji {
            content: "<a:party:123>".into(),
            animated: true,
            emoji_id: "123".into(),
            emoji_name: "party".into(),
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["type"], "discordEmoji");
        assert_eq!(json["emojiId"], "123");
        assert_eq!(json["emojiName"], "party");
        assert_eq!(json["animated"], true);
    }

    #[test]
    fn codeblock_and_mention_tags() {
        let block = Token::CodeBlock {
            content: "fn main() {}".into(),
            language: DEFAULT_CODE_LANGUAGE.into(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "codeblock");
        assert_eq!(json["language"], "text");

        let mention = Token::UserMention {
            content: "<@n:abc>".into(),
            mention_type: MentionType::Clerk,
            user_id: "abc".into(),
        };
        let json = serde_json::to_value(&mention).unwrap();
        assert_eq!(json["type"], "userMention");
        assert_eq!(json["mentionType"], "clerk");
        assert_eq!(json["userId"], "abc");
    }

    #[test]
    fn kind_matches_serialized_tag() {
        let tokens = vec![
            Token::text("a"),
            Token::newline(),
            Token::Link {
                content: "x".into(),
                url: "https://x.io".into(),
            },
        ];
        for token in tokens {
            let json = serde_json::to_value(&token).unwrap();
            assert_eq!(json["type"], token.kind());
        }
    }

    #[test]
    fn spanned_flattens_token() {
        let spanned = Spanned::new(Token::text("hi"), 0..2);
        let json = serde_json::to_value(&spanned).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "hi");
        assert_eq!(json["span"]["start"], 0);
        assert_eq!(spanned.source("hi there"), "hi");
    }
}
