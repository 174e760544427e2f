//! Placeholder Interpolation
//!
//! Substitutes `$name` / `${name}` placeholders in translated text with
//! values from a substitution mapping.

use crate::i18n::message::Mapping;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

/// Pattern for placeholder identifiers and attribute names.
pub const NAME_PATTERN: &str = "[a-zA-Z][-a-zA-Z0-9_]*";

lazy_static! {
    // The leading `(\$?)` captures an escaping dollar sign. The regex crate
    // has no lookbehind, so an escaped placeholder is matched whole and
    // emitted verbatim instead of being excluded from the match.
    static ref INTERP_PATTERN: Regex = Regex::new(&format!(
        r"(\$?)(\$(?:({name})|\{{({name})\}}))",
        name = NAME_PATTERN
    ))
    .unwrap();
}

/// Replaces recognized placeholders with their mapped values.
///
/// A `$$` before a would-be placeholder suppresses it and is left verbatim.
/// Unmapped placeholders stay unchanged. An absent or empty mapping returns
/// the input as is without scanning.
pub fn interpolate(text: &str, mapping: Option<&Mapping>) -> String {
    let mapping = match mapping {
        Some(mapping) if !mapping.is_empty() => mapping,
        _ => return text.to_string(),
    };

    INTERP_PATTERN
        .replace_all(text, |caps: &Captures| {
            if !caps[1].is_empty() {
                // Escaped: keep the `$$` and the placeholder text.
                return caps[0].to_string();
            }
            let name = caps
                .get(3)
                .or_else(|| caps.get(4))
                .map(|group| group.as_str())
                .unwrap_or_default();
            match mapping.get(name) {
                Some(value) => stringify(value),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Strings render without quotes; every other value uses its JSON rendering.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
