//! Best-effort extraction of a JSON record array from raw generated text.
//!
//! Models wrap output in code fences, prepend apologies, or append notes
//! despite instructions. Strategies are tried in order; the first whose
//! candidate parses as a JSON array wins. Anything else is a parse failure
//! and MUST NOT overwrite previously cached data (the caller enforces that).

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON array found in generated text")]
    NoJsonArray,
}

type Strategy = for<'a> fn(&'a str) -> Option<&'a str>;

/// Ordered extraction strategies.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("fenced", fenced_block),
    ("bracketed", bracketed_array),
    ("raw", whole_text),
    ("trimmed", trim_to_brackets),
];

/// Extracts the first parseable JSON array from the text.
pub fn parse_records(text: &str) -> Result<Vec<Value>, ParseError> {
    for (name, strategy) in STRATEGIES {
        if let Some(candidate) = strategy(text) {
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(candidate) {
                debug!("parsed {} records via '{name}' strategy", items.len());
                return Ok(items);
            }
        }
    }
    Err(ParseError::NoJsonArray)
}

/// Body of the first ``` fence, tolerating a `json` language tag.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")? + 3;
    let rest = &text[start..];
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

/// The widest `[...]` slice found anywhere in the text.
fn bracketed_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn whole_text(text: &str) -> Option<&str> {
    Some(text.trim())
}

/// Strips leading non-`[` and trailing non-`]` characters.
fn trim_to_brackets(text: &str) -> Option<&str> {
    let trimmed = text
        .trim_start_matches(|c| c != '[')
        .trim_end_matches(|c| c != ']');
    (!trimmed.is_empty()).then_some(trimmed)
}
