use crate::error::DefineError;
use crate::prompt::{CATEGORY_MARKER, DESCRIPTION_MARKER};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Non-greedy up to the first closing bracket; the list may wrap lines.
static CATEGORY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s){}\s*\[(.*?)\]", regex::escape(CATEGORY_MARKER)))
        .expect("category pattern")
});

static DESCRIPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s){}\s*(.*)", regex::escape(DESCRIPTION_MARKER)))
        .expect("description pattern")
});

/// A parsed dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionResult {
    pub categories: Vec<String>,
    pub description: String,
}

/// Extracts categories and description from a raw model reply.
///
/// Both markers must be present; nothing is recovered from a partial reply.
pub fn parse_reply(reply: &str) -> Result<DefinitionResult, DefineError> {
    let categories_raw = CATEGORY_LINE
        .captures(reply)
        .and_then(|c| c.get(1))
        .ok_or(DefineError::Format)?
        .as_str();

    let description = DESCRIPTION_LINE
        .captures(reply)
        .and_then(|c| c.get(1))
        .ok_or(DefineError::Format)?
        .as_str()
        .trim()
        .to_string();

    Ok(DefinitionResult {
        categories: split_categories(categories_raw),
        description,
    })
}

// Empty bracket means no categories; empty elements inside a list are kept.
fn split_categories(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',')
        .map(|item| item.trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '\\')))
        .map(str::to_string)
        .collect()
}
