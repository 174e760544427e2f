//! Translation Dispatch
//!
//! Resolves a message plus substitution mapping to final display text,
//! either locally or through an injected translation catalog.

use crate::i18n::interpolate::interpolate;
use crate::i18n::message::{Mapping, Message};
use serde_json::Value;

/// External catalog collaborator providing locale-aware message lookup.
///
/// The catalog is supplied explicitly at setup, present or absent; it is
/// never discovered by failure. When absent, callers use
/// [`simple_translate`] only. A fallible catalog wraps its own failures
/// before implementing this trait.
pub trait TranslationCatalog {
    fn translate(
        &self,
        msgid: &str,
        domain: Option<&str>,
        mapping: Option<&Mapping>,
        context: Option<&str>,
        target_language: Option<&str>,
        default: Option<&str>,
    ) -> String;

    fn interpolate(&self, text: &str, mapping: Option<&Mapping>) -> String;
}

/// Resolves a message locally, without a catalog.
///
/// Default text priority: explicit argument, then the message's own default,
/// then the message id itself. Mapping priority: explicit argument, then the
/// message's own mapping. `domain`, `context` and `target_language` are
/// accepted for signature parity with [`fast_translate`] and ignored here.
pub fn simple_translate(
    msgid: &Message,
    _domain: Option<&str>,
    mapping: Option<&Mapping>,
    _context: Option<&str>,
    _target_language: Option<&str>,
    default: Option<&str>,
) -> String {
    let default = default.or_else(|| msgid.default()).unwrap_or_else(|| msgid.id());
    let mapping = mapping.or_else(|| msgid.mapping());

    match mapping {
        Some(mapping) if !mapping.is_empty() => interpolate(default, Some(mapping)),
        // An explicitly empty mapping behaves like an absent one: the
        // default is returned verbatim.
        _ => default.to_string(),
    }
}

/// Catalog-assisted resolution, kept for backwards compatibility with
/// renderers that predate [`simple_translate`]. Do not use in new code.
///
/// When a `target_language` or `context` is supplied the catalog is asked
/// first; a result differing from the message id wins outright. Otherwise
/// the message's own default and mapping are extracted, a missing default
/// falls back to the message id, a structured (non-text) default is returned
/// untouched, and text defaults go through the catalog's interpolation.
pub fn fast_translate(
    catalog: &dyn TranslationCatalog,
    msgid: Option<&Message>,
    domain: Option<&str>,
    mapping: Option<&Mapping>,
    context: Option<&str>,
    target_language: Option<&str>,
    default: Option<&Value>,
) -> Option<Value> {
    let msgid = msgid?;

    if target_language.is_some() || context.is_some() {
        let default_text = default.and_then(Value::as_str);
        let result = catalog.translate(
            msgid.id(),
            domain,
            mapping,
            context,
            target_language,
            default_text,
        );
        if result != msgid.id() {
            return Some(Value::String(result));
        }
    }

    let (default, mapping) = match msgid {
        Message::Translatable(message) => (
            message.default.clone().map(Value::String),
            message.mapping.as_ref(),
        ),
        Message::PlainText(_) => (default.cloned(), mapping),
    };

    let default = default.unwrap_or_else(|| Value::String(msgid.id().to_string()));

    match default {
        Value::String(text) => Some(Value::String(catalog.interpolate(&text, mapping))),
        // A structured default payload is passed through untouched.
        structured => Some(structured),
    }
}
