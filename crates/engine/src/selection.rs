use crate::error::{EngineError, Result};
use crate::message::VerbList;

/// Parse a comma-separated list of 1-based file numbers.
///
/// Returns 0-based indices in input order. Tokens that are not numbers or
/// fall outside `1..=len` are dropped; duplicates are kept.
pub fn parse_selection(input: &str, len: usize) -> Vec<usize> {
    input
        .split(',')
        .map(str::trim)
        .filter_map(|token| token.parse::<usize>().ok())
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .collect()
}

/// Resolve the verb prompt answer. An empty line picks the first verb.
///
/// `input` is the line without its terminator. Padding around a number is
/// tolerated, but a line of only whitespace is not empty.
///
/// # Errors
/// Returns [`EngineError::InvalidVerbChoice`] for anything other than an
/// empty line or a number within the list.
pub fn parse_verb_choice<'v>(input: &str, verbs: &'v VerbList) -> Result<&'v str> {
    if input.is_empty() {
        return Ok(verbs.first());
    }
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|n| verbs.get(n))
        .ok_or_else(|| EngineError::InvalidVerbChoice {
            input: trimmed.to_string(),
            max: verbs.len(),
        })
}
