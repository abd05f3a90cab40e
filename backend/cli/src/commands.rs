//! Subcommand implementations. Each returns the text to print on stdout.

use anyhow::{Context, Result};
use markdown::{is_safe_link_url, tokenize_spanned, Formatter, Spanned};

use crate::terminal_output::{render_table, Column};

/// Widest content cell shown in token tables.
const TABLE_CONTENT_WIDTH: usize = 48;

/// Tokens as pretty JSON, optionally with byte spans.
pub fn tokenize_json(formatter: &Formatter, text: &str, spans: bool) -> Result<String> {
    if spans {
        let spanned: Vec<Spanned> = tokenize_spanned(text);
        return serde_json::to_string_pretty(&spanned).context("Failed to serialize tokens");
    }
    let tokens = formatter.tokenize(text);
    serde_json::to_string_pretty(&*tokens).context("Failed to serialize tokens")
}

/// Tokens as a human-readable table.
pub fn tokenize_table(text: &str) -> String {
    let columns = vec![
        Column::left("Kind"),
        Column::right("Start"),
        Column::right("End"),
        Column::left("Content").max_width(TABLE_CONTENT_WIDTH),
    ];
    let rows: Vec<Vec<String>> = tokenize_spanned(text)
        .into_iter()
        .map(|s| {
            vec![
                s.token.kind().to_string(),
                s.span.start.to_string(),
                s.span.end.to_string(),
                s.token.content().escape_debug().to_string(),
            ]
        })
        .collect();
    render_table(&columns, &rows)
}

pub fn emoji_only(formatter: &Formatter, text: &str) -> String {
    formatter.is_emoji_only(text).to_string()
}

pub fn plain(formatter: &Formatter, text: &str) -> String {
    formatter.to_plain_text(text)
}

pub fn emoji_url(formatter: &Formatter, emoji_id: &str, animated: bool) -> String {
    formatter.emoji_url(emoji_id, animated)
}

pub fn check_url(url: &str) -> bool {
    is_safe_link_url(url)
}
