//! Minimal readers for generated assembly text.
//!
//! These only understand what the generators emit; they are not a ca65
//! parser.

use std::sync::OnceLock;

use regex::Regex;

static BYTE_LITERAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn byte_literal_regex() -> &'static Regex {
    BYTE_LITERAL_REGEX
        .get_or_init(|| Regex::new(r"\$([0-9a-fA-F]{2})").expect("invalid regex pattern"))
}

/// One `.word` line of a generated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLine {
    /// Everything before the first literal, e.g. `"\t.word "`.
    pub marker: String,
    /// Literals in line order.
    pub tokens: Vec<String>,
}

/// Collects every `.word` line of `text`.
pub fn extract_word_tokens(text: &str) -> Vec<WordLine> {
    text.lines()
        .filter_map(|line| {
            let start = line.find(".word ")? + ".word ".len();
            Some(WordLine {
                marker: line[..start].to_string(),
                tokens: line[start..].split(", ").map(str::to_string).collect(),
            })
        })
        .collect()
}

/// Collects the `$xx` literals of every `.byte` line of `text`, in order.
pub fn extract_byte_literals(text: &str) -> Vec<u8> {
    text.lines()
        .filter(|line| line.trim_start().starts_with(".byte "))
        .flat_map(|line| {
            byte_literal_regex()
                .captures_iter(line)
                .filter_map(|caps| u8::from_str_radix(&caps[1], 16).ok())
                .collect::<Vec<_>>()
        })
        .collect()
}
