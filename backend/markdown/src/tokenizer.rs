//! Chat message tokenizer
//!
//! Walks the input with a byte cursor, applying the rule table at each
//! position and falling back to plain text. The emitted spans partition the
//! input exactly.

use tracing::trace;

use crate::rules::{fallback_text_len, first_match, Cursor};
use crate::token::{Spanned, Token};

/// Tokenize a raw chat message. Never fails; unrecognized input is text.
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_spanned(input)
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

/// Tokenize and keep the byte range each token was produced from.
pub fn tokenize_spanned(input: &str) -> Vec<Spanned> {
    let mut tokens: Vec<Spanned> = Vec::new();
    let mut pos = 0;
    let mut at_line_start = true;

    while pos < input.len() {
        let cursor = Cursor {
            rest: &input[pos..],
            at_line_start,
            at_message_start: pos == 0,
        };

        let (token, len) = match first_match(&cursor) {
            Some(m) => (m.token, m.len),
            None => {
                let len = fallback_text_len(cursor.rest);
                (Token::text(&cursor.rest[..len]), len)
            }
        };

        at_line_start = matches!(token, Token::Newline { .. });
        push_coalesced(&mut tokens, token, pos..pos + len);
        pos += len;
    }

    trace!(bytes = input.len(), tokens = tokens.len(), "Tokenized message");
    tokens
}

/// Append a token, merging it into a preceding text token when both are text.
fn push_coalesced(tokens: &mut Vec<Spanned>, token: Token, span: std::ops::Range<usize>) {
    if let (
        Some(Spanned {
            token: Token::Text { content: prev },
            span: prev_span,
        }),
        Token::Text { content },
    ) = (tokens.last_mut(), &token)
    {
        if prev_span.end == span.start {
            prev.push_str(content);
            prev_span.end = span.end;
            return;
        }
    }
    tokens.push(Spanned::new(token, span));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MentionType;
    use std::time::{Duration, Instant};

    fn text(s: &str) -> Token {
        Token::text(s)
    }

    fn assert_partition(input: &str) {
        let spanned = tokenize_spanned(input);
        let mut rebuilt = String::new();
        let mut expected_start = 0;
        for s in &spanned {
            assert_eq!(s.span.start, expected_start, "gap before {:?}", s.token);
            rebuilt.push_str(s.source(input));
            expected_start = s.span.end;
        }
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn plain_text_is_one_token() {
        assert_eq!(tokenize("just words here"), vec![text("just words here")]);
    }

    #[test]
    fn bold_is_not_read_as_nested_italics() {
        assert_eq!(
            tokenize("**bold**"),
            vec![Token::Bold {
                content: "bold".into()
            }]
        );
    }

    #[test]
    fn unclosed_italic_degrades_to_single_text() {
        assert_eq!(tokenize("*unclosed"), vec![text("*unclosed")]);
    }

    #[test]
    fn unsafe_markdown_link_is_literal() {
        assert_eq!(
            tokenize("[click](javascript:alert(1))"),
            vec![text("[click](javascript:alert(1))")]
        );
    }

    #[test]
    fn safe_markdown_link() {
        assert_eq!(
            tokenize("[click](https://example.com)"),
            vec![Token::Link {
                content: "click".into(),
                url: "https://example.com".into()
            }]
        );
    }

    #[test]
    fn unterminated_code_degrades_to_single_text() {
        assert_eq!(tokenize("`unclosed"), vec![text("`unclosed")]);
        assert_eq!(tokenize("```rust fn main() {}"), vec![text("```rust fn main() {}")]);
        assert_eq!(
            tokenize("```js\nx()"),
            vec![text("```js"), Token::newline(), text("x()")]
        );
    }

    #[test]
    fn media_autolinks_by_extension() {
        let audio = tokenize("check https://cdn.example.com/track.MP3 out");
        assert_eq!(
            audio,
            vec![
                text("check "),
                Token::Audio {
                    content: "https://cdn.example.com/track.MP3".into(),
                    url: "https://cdn.example.com/track.MP3".into()
                },
                text(" out"),
            ]
        );

        let video = tokenize("check https://cdn.example.com/track.mp4 out");
        assert!(matches!(video[1], Token::Video { .. }));

        let link = tokenize("check https://cdn.example.com/track.pdf out");
        assert!(matches!(link[1], Token::Link { .. }));
    }

    #[test]
    fn host_suffix_is_not_a_media_extension() {
        assert_eq!(
            tokenize("https://get.mov"),
            vec![Token::Link {
                content: "https://get.mov".into(),
                url: "https://get.mov".into()
            }]
        );
        assert!(matches!(
            tokenize("https://x.io/a.mov")[..],
            [Token::Video { .. }]
        ));
    }

    #[test]
    fn autolink_leaves_trailing_punctuation_as_text() {
        assert_eq!(
            tokenize("see https://example.com."),
            vec![
                text("see "),
                Token::Link {
                    content: "https://example.com".into(),
                    url: "https://example.com".into()
                },
                text("."),
            ]
        );
    }

    #[test]
    fn mentions() {
        assert_eq!(
            tokenize("<@123456>"),
            vec![Token::UserMention {
                content: "<@123456>".into(),
                mention_type: MentionType::Discord,
                user_id: "123456".into()
            }]
        );
        assert_eq!(
            tokenize("<@n:abcDEF_1>"),
            vec![Token::UserMention {
                content: "<@n:abcDEF_1>".into(),
                mention_type: MentionType::Clerk,
                user_id: "abcDEF_1".into()
            }]
        );
    }

    #[test]
    fn blockquote_does_not_swallow_next_line() {
        assert_eq!(
            tokenize("> hello\nworld"),
            vec![
                Token::Blockquote {
                    content: "hello".into()
                },
                Token::newline(),
                text("world"),
            ]
        );
    }

    #[test]
    fn blockquote_on_later_line_needs_space() {
        assert_eq!(
            tokenize("a\n> quoted\n>tight"),
            vec![
                text("a"),
                Token::newline(),
                Token::Blockquote {
                    content: "quoted".into()
                },
                Token::newline(),
                text(">tight"),
            ]
        );
    }

    #[test]
    fn quote_marker_mid_line_is_text() {
        assert_eq!(tokenize("a > b"), vec![text("a > b")]);
    }

    #[test]
    fn fenced_code_block_with_language() {
        assert_eq!(
            tokenize("look:\n```rust\nlet x = 1;\n```\ndone"),
            vec![
                text("look:"),
                Token::newline(),
                Token::CodeBlock {
                    content: "let x = 1;\n".into(),
                    language: "rust".into()
                },
                Token::newline(),
                text("done"),
            ]
        );
    }

    #[test]
    fn code_spans_hide_inner_markup() {
        assert_eq!(
            tokenize("`**not bold**` and **bold**"),
            vec![
                Token::Code {
                    content: "**not bold**".into()
                },
                text(" and "),
                Token::Bold {
                    content: "bold".into()
                },
            ]
        );
    }

    #[test]
    fn mixed_inline_constructs() {
        let tokens = tokenize("hi <:wave:42> ~~old~~ _new_ <@n:u1>\n");
        let kinds: Vec<_> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "text",
                "discordEmoji",
                "text",
                "strikethrough",
                "text",
                "italic",
                "text",
                "userMention",
                "newline",
            ]
        );
    }

    #[test]
    fn unknown_angle_sequences_resynchronize() {
        assert_eq!(
            tokenize("<b>bold?</b> <@42>"),
            vec![
                text("<b>bold?</b> "),
                Token::UserMention {
                    content: "<@42>".into(),
                    mention_type: MentionType::Discord,
                    user_id: "42".into()
                },
            ]
        );
    }

    #[test]
    fn http_inside_words_stays_text() {
        assert_eq!(tokenize("xhttpd is a server"), vec![text("xhttpd is a server")]);
    }

    #[test]
    fn spans_partition_input() {
        for input in [
            "",
            "plain",
            "**bold** and *it* and __b__ _i_ ~~s~~",
            "[click](javascript:alert(1)) [ok](https://a.io)",
            "> quote\n```js\nx()\n``` `c` <@1> <a:e:2> https://x.io/a.mp3, end",
            "*** ___ ~~~ ``` <<< [[[ ((( http http:// https://",
            "unicode: héllo 🎉 <:e:1> naïve_text_",
        ] {
            assert_partition(input);
        }
    }

    #[test]
    fn tokenizing_twice_is_identical() {
        let input = "> q\n**b** [l](https://a.io) <@n:x> https://a.io/v.webm";
        assert_eq!(tokenize(input), tokenize(input));
    }

    fn fastest_of_three(input: &str) -> Duration {
        (0..3)
            .map(|_| {
                let start = Instant::now();
                std::hint::black_box(tokenize(input));
                start.elapsed()
            })
            .min()
            .unwrap()
    }

    #[test]
    fn unmatched_link_openers_scale_linearly() {
        for unit in ["[", "[a", "[a]("] {
            let small = fastest_of_three(&unit.repeat(4_000));
            let large = fastest_of_three(&unit.repeat(32_000));
            // 8x the input: linear work stays near 8x, quadratic lands near 64x.
            assert!(
                large < small * 24 + Duration::from_millis(20),
                "{unit:?}: {small:?} at 4k vs {large:?} at 32k"
            );
        }
    }

    #[test]
    fn unmatched_link_openers_stay_text() {
        let input = "[a".repeat(50);
        assert_eq!(tokenize(&input), vec![text(&input)]);
    }

    #[test]
    fn multibyte_special_fallback_keeps_char_boundaries() {
        assert_eq!(tokenize("é*"), vec![text("é*")]);
        assert_eq!(tokenize("*é"), vec![text("*é")]);
    }
}
