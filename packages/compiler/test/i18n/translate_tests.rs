//! Translation Dispatch Tests

use serde_json::json;
use std::cell::Cell;
use std::collections::HashMap;
use tal_compiler::i18n::{
    fast_translate, interpolate, simple_translate, Mapping, Message, TranslatableMessage,
    TranslationCatalog,
};

fn mapping(pairs: &[(&str, serde_json::Value)]) -> Mapping {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// Catalog backed by a fixed msgid table; echoes unknown msgids and counts
/// lookups.
struct StaticCatalog {
    translations: HashMap<String, String>,
    lookups: Cell<usize>,
}

impl StaticCatalog {
    fn new(entries: &[(&str, &str)]) -> Self {
        StaticCatalog {
            translations: entries
                .iter()
                .map(|(msgid, text)| (msgid.to_string(), text.to_string()))
                .collect(),
            lookups: Cell::new(0),
        }
    }

    fn empty() -> Self {
        StaticCatalog::new(&[])
    }
}

impl TranslationCatalog for StaticCatalog {
    fn translate(
        &self,
        msgid: &str,
        _domain: Option<&str>,
        _mapping: Option<&Mapping>,
        _context: Option<&str>,
        _target_language: Option<&str>,
        _default: Option<&str>,
    ) -> String {
        self.lookups.set(self.lookups.get() + 1);
        self.translations
            .get(msgid)
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }

    fn interpolate(&self, text: &str, mapping: Option<&Mapping>) -> String {
        interpolate(text, mapping)
    }
}

// Local resolution.

#[test]
fn should_fall_back_to_the_msgid_itself() {
    let msg = Message::from("hello");
    assert_eq!(simple_translate(&msg, None, None, None, None, None), "hello");
}

#[test]
fn should_prefer_the_message_default_over_the_msgid() {
    let msg = Message::from(TranslatableMessage::new("greeting").with_default("Hello!"));
    assert_eq!(simple_translate(&msg, None, None, None, None, None), "Hello!");
}

#[test]
fn should_prefer_an_explicit_default_over_the_message_default() {
    let msg = Message::from(TranslatableMessage::new("greeting").with_default("Hello!"));
    assert_eq!(
        simple_translate(&msg, None, None, None, None, Some("Hi!")),
        "Hi!"
    );
}

#[test]
fn should_interpolate_the_message_mapping_into_the_default() {
    let msg = Message::from(
        TranslatableMessage::new("greeting")
            .with_default("Hello $name!")
            .with_mapping(mapping(&[("name", json!("World"))])),
    );
    assert_eq!(
        simple_translate(&msg, None, None, None, None, None),
        "Hello World!"
    );
}

#[test]
fn should_prefer_an_explicit_mapping_over_the_message_mapping() {
    let msg = Message::from(
        TranslatableMessage::new("greeting")
            .with_default("Hello $name!")
            .with_mapping(mapping(&[("name", json!("World"))])),
    );
    let explicit = mapping(&[("name", json!("Mars"))]);
    assert_eq!(
        simple_translate(&msg, None, Some(&explicit), None, None, None),
        "Hello Mars!"
    );
}

#[test]
fn should_return_the_default_verbatim_for_an_empty_mapping() {
    // An explicitly empty mapping behaves like an absent one.
    let msg = Message::from("hello");
    let empty = Mapping::new();
    assert_eq!(
        simple_translate(&msg, None, Some(&empty), None, None, Some("Hi $name")),
        "Hi $name"
    );
}

#[test]
fn should_return_text_without_placeholders_unchanged() {
    let msg = Message::from("hello");
    let m = mapping(&[("unused", json!("x"))]);
    assert_eq!(
        simple_translate(&msg, None, Some(&m), None, None, Some("no markers here")),
        "no markers here"
    );
}

// Catalog-assisted resolution.

#[test]
fn should_return_none_for_a_missing_msgid() {
    let catalog = StaticCatalog::empty();
    assert_eq!(
        fast_translate(&catalog, None, None, None, None, None, None),
        None
    );
}

#[test]
fn should_use_a_catalog_translation_when_a_target_language_is_given() {
    let catalog = StaticCatalog::new(&[("hello", "bonjour")]);
    let msg = Message::from("hello");
    let result = fast_translate(&catalog, Some(&msg), None, None, None, Some("fr"), None);
    assert_eq!(result, Some(json!("bonjour")));
    assert_eq!(catalog.lookups.get(), 1);
}

#[test]
fn should_use_a_catalog_translation_when_a_context_is_given() {
    let catalog = StaticCatalog::new(&[("open", "ouvrir")]);
    let msg = Message::from("open");
    let result = fast_translate(&catalog, Some(&msg), None, None, Some("menu"), None, None);
    assert_eq!(result, Some(json!("ouvrir")));
}

#[test]
fn should_not_consult_the_catalog_without_target_or_context() {
    let catalog = StaticCatalog::new(&[("hello", "bonjour")]);
    let msg = Message::from("hello");
    let result = fast_translate(&catalog, Some(&msg), None, None, None, None, None);
    assert_eq!(result, Some(json!("hello")));
    assert_eq!(catalog.lookups.get(), 0);
}

#[test]
fn should_fall_through_when_the_catalog_echoes_the_msgid() {
    let catalog = StaticCatalog::empty();
    let msg = Message::from(
        TranslatableMessage::new("greeting")
            .with_default("Hello $name!")
            .with_mapping(mapping(&[("name", json!("World"))])),
    );
    let result = fast_translate(&catalog, Some(&msg), None, None, None, Some("fr"), None);
    assert_eq!(result, Some(json!("Hello World!")));
    assert_eq!(catalog.lookups.get(), 1);
}

#[test]
fn message_default_and_mapping_replace_the_arguments() {
    let catalog = StaticCatalog::empty();
    let msg = Message::from(
        TranslatableMessage::new("greeting")
            .with_default("Hi $name")
            .with_mapping(mapping(&[("name", json!("A"))])),
    );
    let arg_mapping = mapping(&[("name", json!("B"))]);
    let arg_default = json!("ignored $name");
    let result = fast_translate(
        &catalog,
        Some(&msg),
        None,
        Some(&arg_mapping),
        None,
        None,
        Some(&arg_default),
    );
    assert_eq!(result, Some(json!("Hi A")));
}

#[test]
fn should_stringify_the_msgid_when_no_default_exists() {
    let catalog = StaticCatalog::empty();
    let msg = Message::from(TranslatableMessage::new("greeting"));
    let result = fast_translate(&catalog, Some(&msg), None, None, None, None, None);
    assert_eq!(result, Some(json!("greeting")));
}

#[test]
fn should_return_a_structured_default_untouched() {
    let catalog = StaticCatalog::empty();
    let msg = Message::from("payload");
    let structured = json!({"kind": "rich-text", "body": ["a", "b"]});
    let result = fast_translate(&catalog, Some(&msg), None, None, None, None, Some(&structured));
    assert_eq!(result, Some(structured));
}

#[test]
fn should_apply_catalog_interpolation_to_the_argument_default() {
    let catalog = StaticCatalog::empty();
    let msg = Message::from("greeting");
    let m = mapping(&[("name", json!("World"))]);
    let default = json!("Hello $name");
    let result = fast_translate(
        &catalog,
        Some(&msg),
        None,
        Some(&m),
        None,
        None,
        Some(&default),
    );
    assert_eq!(result, Some(json!("Hello World")));
}
