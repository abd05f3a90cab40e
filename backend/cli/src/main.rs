mod commands;
mod terminal_output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing::debug;

use chatfmt_config::{config_dir, config_file_path, load_and_prepare, FormatterConfig};
use markdown::Formatter;

#[derive(Parser)]
#[command(name = "chatfmt")]
#[command(about = "Tokenize chat messages into render-ready tokens")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.chatfmt/chatfmt.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Also write JSON logs to the configured log directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a message
    Tokenize {
        /// Message text; read from stdin when omitted
        text: Option<String>,
        /// Include the byte span of every token
        #[arg(long)]
        spans: bool,
        /// Print a table instead of JSON
        #[arg(long, conflicts_with = "spans")]
        table: bool,
    },
    /// Print whether a message renders in mega (emoji-only) mode
    EmojiOnly {
        text: Option<String>,
    },
    /// Print the plain-text projection of a message
    Plain {
        text: Option<String>,
    },
    /// Print the CDN image URL of a custom emoji
    EmojiUrl {
        emoji_id: String,
        #[arg(long)]
        animated: bool,
    },
    /// Check whether a URL may become a clickable link
    CheckUrl {
        url: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        terminal_output::note_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_file_path(&config_dir()));
    let config = load_and_prepare(&path).await?;

    if cli.log_file {
        chatfmt_logging::init_logger(config.log_dir(), config.log_level());
    } else {
        chatfmt_logging::init_console_logger(config.log_level());
    }
    debug!(path = %path.display(), "Using config");

    let formatter = build_formatter(&config);

    match cli.command {
        Commands::Tokenize { text, spans, table } => {
            let text = text_or_stdin(text).await?;
            if table {
                print!("{}", commands::tokenize_table(&text));
            } else {
                println!("{}", commands::tokenize_json(&formatter, &text, spans)?);
            }
        }
        Commands::EmojiOnly { text } => {
            let text = text_or_stdin(text).await?;
            println!("{}", commands::emoji_only(&formatter, &text));
        }
        Commands::Plain { text } => {
            let text = text_or_stdin(text).await?;
            println!("{}", commands::plain(&formatter, &text));
        }
        Commands::EmojiUrl { emoji_id, animated } => {
            println!("{}", commands::emoji_url(&formatter, &emoji_id, animated));
        }
        Commands::CheckUrl { url } => {
            if commands::check_url(&url) {
                terminal_output::note_success(&format!("{url} may be linked"));
            } else {
                anyhow::bail!("{url} is not an http(s) URL and will render as text");
            }
        }
    }

    Ok(())
}

fn build_formatter(config: &FormatterConfig) -> Formatter {
    Formatter::new(
        config.cache_capacity(),
        config.mega_max_count(),
        config.emoji_cdn_host(),
    )
}

async fn text_or_stdin(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("Failed to read message from stdin")?;
    Ok(strip_line_ending(&buf).to_string())
}

/// Drop the single trailing line ending most shells append.
fn strip_line_ending(buf: &str) -> &str {
    buf.strip_suffix("\r\n")
        .or_else(|| buf.strip_suffix('\n'))
        .unwrap_or(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_trailing_line_ending() {
        assert_eq!(strip_line_ending("hi\n"), "hi");
        assert_eq!(strip_line_ending("hi\r\n"), "hi");
        assert_eq!(strip_line_ending("hi\n\n"), "hi\n");
        assert_eq!(strip_line_ending("a\r\nb"), "a\r\nb");
        assert_eq!(strip_line_ending("hi"), "hi");
    }
}
