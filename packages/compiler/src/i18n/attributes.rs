//! i18n Attribute Specifications
//!
//! Parser for the `i18n:attributes` mini-language: a semicolon-separated
//! list of attribute names, each optionally followed by an explicit message
//! id. Also carries the closed set of attribute names recognized in the
//! `i18n:` namespace.

use crate::error::{CompilationError, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Attribute names recognized in the `i18n:` namespace.
pub static I18N_ATTRIBUTES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "translate",
        "domain",
        "context",
        "target",
        "source",
        "attributes",
        "data",
        "name",
        "mode",
        "xmlns",
        "xml",
        "comment",
        "ignore",
        "ignore-attributes",
    ]
    .into_iter()
    .collect()
});

pub fn is_i18n_attribute(name: &str) -> bool {
    I18N_ATTRIBUTES.contains(name)
}

/// Parses an `i18n:attributes` specification into an ordered mapping from
/// attribute name to optional message id.
///
/// `xml` selects case-sensitive attribute names; in HTML mode names are
/// folded to lowercase. Parsing is fail-fast: the first offending segment
/// aborts with a [`CompilationError`] and no partial mapping is returned.
pub fn parse_attributes(attrs: &str, xml: bool) -> Result<IndexMap<String, Option<String>>> {
    let mut parsed = IndexMap::new();

    // "value msgid; name msgid2;" yields a trailing empty segment; drop it.
    for spec in attrs.split(';').filter(|spec| !spec.is_empty()) {
        if spec.contains(',') {
            return Err(CompilationError::AmbiguousSeparator(spec.to_string()));
        }

        let parts: Vec<&str> = spec.split_whitespace().collect();
        let (attr, msgid) = match parts.as_slice() {
            [attr] => (*attr, None),
            [attr, msgid] => (*attr, Some((*msgid).to_string())),
            _ => return Err(CompilationError::MalformedAttributeSpec(spec.to_string())),
        };

        let attr = if xml {
            attr.trim().to_string()
        } else {
            attr.trim().to_lowercase()
        };

        if parsed.contains_key(&attr) {
            return Err(CompilationError::DuplicateAttribute(attr));
        }
        parsed.insert(attr, msgid);
    }

    Ok(parsed)
}
