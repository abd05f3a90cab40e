//! Code Block Utility
//!
//! Pulls fenced code out of a token stream, or replaces it with a short
//! placeholder where code should not be read out (TTS, notifications).

use crate::token::Token;

pub struct CodeBlockAnalyzer;

impl CodeBlockAnalyzer {
    /// Extracts all fenced code blocks as `(language, code)` pairs.
    pub fn extract_blocks(tokens: &[Token]) -> Vec<(String, String)> {
        tokens
            .iter()
            .filter_map(|token| match token {
                Token::CodeBlock { content, language } => {
                    Some((language.clone(), content.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Replaces code blocks with a descriptive placeholder text token.
    pub fn strip_for_preview(tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|token| match token {
                Token::CodeBlock { language, .. } => {
                    Token::text(format!("[{} code block]", language))
                }
                other => other,
            })
            .collect()
    }
}
