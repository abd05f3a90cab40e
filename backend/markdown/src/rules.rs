//! Pattern rules and their priority table.
//!
//! Every rule is anchored at the cursor and either consumes a non-empty
//! prefix of the remaining input or declines. [`RULES`] is tried top to
//! bottom and the first rule that matches wins; reordering entries changes
//! tokenizer output.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::media::{classify_media_url, MediaKind};
use crate::token::{MentionType, Token, DEFAULT_CODE_LANGUAGE};
use crate::url_filter::is_safe_link_url;

static CODE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```([A-Za-z0-9_]*)\n((?s:.*?))```").unwrap());

static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`([^`\n]+)`").unwrap());

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@(n:)?([A-Za-z0-9_]+)>").unwrap());

static EMOJI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(a)?:([A-Za-z0-9_]+):([0-9]+)>").unwrap());

// One level of balanced parentheses is allowed inside the target so that
// `[x](javascript:alert(1))` is captured whole. The label may not contain `[`,
// so a failed match never scans past the next opener.
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([^\[\]]+)\]\(((?:[^()\s]|\([^()\s]*\))+)\)").unwrap()
});

static AUTOLINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s<]+").unwrap());

static BOLD_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^__(.+?)__").unwrap());
static ITALIC_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*(.+?)\*").unwrap());
static ITALIC_UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^_(.+?)_").unwrap());
static STRIKETHROUGH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^~~(.+?)~~").unwrap());

/// Characters stripped from the end of a bare autolink.
const AUTOLINK_TRAILING: &[char] = &['.', ',', ':', ';', '"', '\'', ')', ']'];

/// Bytes at which plain-text scanning stops to let the rules look again.
const SPECIAL_BYTES: &[u8] = b"*_~`<[\n";

/// Tokenizer position as seen by a rule.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    /// Unconsumed suffix of the input.
    pub rest: &'a str,
    /// Start of the input, or directly after a newline token.
    pub at_line_start: bool,
    /// Nothing has been consumed yet.
    pub at_message_start: bool,
}

/// A successful rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub token: Token,
    /// Bytes consumed from the cursor.
    pub len: usize,
}

impl RuleMatch {
    fn new(token: Token, len: usize) -> Self {
        Self { token, len }
    }
}

pub type RuleFn = fn(&Cursor<'_>) -> Option<RuleMatch>;

pub struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

/// Rules in priority order.
pub static RULES: &[Rule] = &[
    Rule { name: "codeblock", apply: code_block },
    Rule { name: "code", apply: inline_code },
    Rule { name: "userMention", apply: user_mention },
    Rule { name: "discordEmoji", apply: custom_emoji },
    Rule { name: "link", apply: markdown_link },
    Rule { name: "autolink", apply: autolink },
    Rule { name: "bold", apply: bold },
    Rule { name: "italic", apply: italic },
    Rule { name: "strikethrough", apply: strikethrough },
    Rule { name: "blockquote", apply: blockquote },
    Rule { name: "newline", apply: newline },
];

/// Apply the rule table at the cursor, returning the first match.
pub fn first_match(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(cursor))
        .filter(|m| m.len > 0)
}

/// Length of the plain-text run at the start of `rest`.
///
/// Stops before the next byte that could open a token or before `http`.
/// When `rest` already starts on such a position the run is exactly one
/// character, which guarantees forward progress.
pub fn fallback_text_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let stop = (0..bytes.len())
        .find(|&i| SPECIAL_BYTES.contains(&bytes[i]) || bytes[i..].starts_with(b"http"))
        .unwrap_or(bytes.len());

    if stop > 0 {
        return stop;
    }
    rest.chars().next().map(char::len_utf8).unwrap_or(0)
}

fn code_block(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    let caps = CODE_BLOCK_RE.captures(cursor.rest)?;
    let language = match &caps[1] {
        "" => DEFAULT_CODE_LANGUAGE.to_string(),
        lang => lang.to_string(),
    };
    let token = Token::CodeBlock {
        content: caps[2].to_string(),
        language,
    };
    Some(RuleMatch::new(token, caps[0].len()))
}

fn inline_code(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    delimited(&INLINE_CODE_RE, cursor, |content| Token::Code { content })
}

fn user_mention(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    let caps = MENTION_RE.captures(cursor.rest)?;
    let mention_type = if caps.get(1).is_some() {
        MentionType::Clerk
    } else {
        MentionType::Discord
    };
    let token = Token::UserMention {
        content: caps[0].to_string(),
        mention_type,
        user_id: caps[2].to_string(),
    };
    Some(RuleMatch::new(token, caps[0].len()))
}

fn custom_emoji(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    let caps = EMOJI_RE.captures(cursor.rest)?;
    let token = Token::DiscordEmoji {
        content: caps[0].to_string(),
        animated: caps.get(1).is_some(),
        emoji_name: caps[2].to_string(),
        emoji_id: caps[3].to_string(),
    };
    Some(RuleMatch::new(token, caps[0].len()))
}

fn markdown_link(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    let caps = LINK_RE.captures(cursor.rest)?;
    let whole = &caps[0];
    let url = &caps[2];

    let token = if is_safe_link_url(url) {
        Token::Link {
            content: caps[1].to_string(),
            url: url.to_string(),
        }
    } else {
        debug!(url = %url, "Rejected markdown link target; keeping literal text");
        Token::text(whole)
    };
    Some(RuleMatch::new(token, whole.len()))
}

fn autolink(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    let raw = AUTOLINK_RE.find(cursor.rest)?.as_str();
    let url = raw.trim_end_matches(AUTOLINK_TRAILING);

    // Nothing left after the scheme once punctuation is gone.
    let scheme_len = url.find("://").map(|i| i + 3).unwrap_or(url.len());
    if url.len() <= scheme_len {
        return None;
    }

    let content = url.to_string();
    let token = match classify_media_url(url) {
        Some(MediaKind::Audio) => Token::Audio {
            content,
            url: url.to_string(),
        },
        Some(MediaKind::Video) => Token::Video {
            content,
            url: url.to_string(),
        },
        None => Token::Link {
            content,
            url: url.to_string(),
        },
    };
    Some(RuleMatch::new(token, url.len()))
}

fn bold(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    delimited(&BOLD_STAR_RE, cursor, |content| Token::Bold { content })
        .or_else(|| delimited(&BOLD_UNDERSCORE_RE, cursor, |content| Token::Bold { content }))
}

fn italic(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    delimited(&ITALIC_STAR_RE, cursor, |content| Token::Italic { content })
        .or_else(|| delimited(&ITALIC_UNDERSCORE_RE, cursor, |content| Token::Italic { content }))
}

fn strikethrough(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    delimited(&STRIKETHROUGH_RE, cursor, |content| Token::Strikethrough { content })
}

fn blockquote(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    if !cursor.at_line_start {
        return None;
    }

    // A bare `>` only opens a quote at the very start of the message.
    let body_start = if cursor.rest.starts_with("> ") {
        2
    } else if cursor.at_message_start && cursor.rest.starts_with('>') {
        1
    } else {
        return None;
    };

    let line_end = cursor.rest.find('\n').unwrap_or(cursor.rest.len());
    let token = Token::Blockquote {
        content: cursor.rest[body_start..line_end].to_string(),
    };
    Some(RuleMatch::new(token, line_end))
}

fn newline(cursor: &Cursor<'_>) -> Option<RuleMatch> {
    cursor
        .rest
        .starts_with('\n')
        .then(|| RuleMatch::new(Token::newline(), 1))
}

/// Shared shape of the single-capture delimiter rules.
fn delimited(
    re: &Regex,
    cursor: &Cursor<'_>,
    build: impl FnOnce(String) -> Token,
) -> Option<RuleMatch> {
    let caps = re.captures(cursor.rest)?;
    Some(RuleMatch::new(build(caps[1].to_string()), caps[0].len()))
}
