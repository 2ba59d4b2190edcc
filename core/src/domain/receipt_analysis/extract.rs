use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::common::entities::app_errors::CoreError;

/// Fenced code block, optionally tagged `json`.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fence pattern"));

/// Curly-brace object, tolerating one level of nested braces.
static BRACE_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?:[^{}]|\{[^{}]*\})*\}").expect("brace pattern"));

type Strategy = fn(&str) -> Option<Map<String, Value>>;

/// Parsing strategies in priority order; the first to produce an object wins.
const STRATEGIES: &[Strategy] = &[parse_direct, parse_fenced_block, parse_brace_scan];

/// Best-effort recovery of a JSON object from model output.
///
/// Tries, in order: the whole reply as a JSON literal, the contents of
/// fenced code blocks, and finally a brace scan over the prose. Returns
/// `ExtractionFailed` carrying the original text when every strategy comes
/// up empty; never a partial record.
pub fn extract_json_from_response(raw: &str) -> Result<Map<String, Value>, CoreError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CoreError::ExtractionFailed {
            raw: raw.to_string(),
        });
    }

    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text))
        .ok_or_else(|| CoreError::ExtractionFailed {
            raw: raw.to_string(),
        })
}

/// Names every absent required key; passes the record through otherwise.
/// Extra unknown fields are never an error.
pub fn require_fields(record: &Map<String, Value>, required: &[&str]) -> Result<(), CoreError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| !record.contains_key(**field))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::MissingFields(missing))
    }
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn parse_direct(text: &str) -> Option<Map<String, Value>> {
    parse_object(text)
}

fn parse_fenced_block(text: &str) -> Option<Map<String, Value>> {
    FENCED_BLOCK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .find_map(|block| parse_object(block.as_str()))
}

fn parse_brace_scan(text: &str) -> Option<Map<String, Value>> {
    BRACE_OBJECT
        .find_iter(text)
        .find_map(|candidate| parse_object(candidate.as_str()))
}
