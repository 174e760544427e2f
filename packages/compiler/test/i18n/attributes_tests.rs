//! i18n Attribute Specification Tests

use tal_compiler::error::CompilationError;
use tal_compiler::i18n::{is_i18n_attribute, parse_attributes};

#[test]
fn should_parse_a_lone_attribute_name_without_msgid() {
    let parsed = parse_attributes("class", true).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed["class"], None);
}

#[test]
fn should_parse_names_with_explicit_msgids_preserving_order() {
    let parsed = parse_attributes("class label; title", true).unwrap();
    let entries: Vec<_> = parsed
        .iter()
        .map(|(name, msgid)| (name.as_str(), msgid.as_deref()))
        .collect();
    assert_eq!(entries, vec![("class", Some("label")), ("title", None)]);
}

#[test]
fn should_drop_empty_trailing_segments() {
    // A trailing semicolon produces an empty segment, which is discarded.
    let parsed = parse_attributes("value msgid; name msgid2;", true).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed["value"].as_deref(), Some("msgid"));
    assert_eq!(parsed["name"].as_deref(), Some("msgid2"));
}

#[test]
fn should_reject_whitespace_only_segments() {
    let err = parse_attributes("class label; ;", true).unwrap_err();
    assert_eq!(
        err,
        CompilationError::MalformedAttributeSpec(" ".to_string())
    );
}

#[test]
fn should_reject_duplicate_attribute_names() {
    let err = parse_attributes("a x; a y", true).unwrap_err();
    assert_eq!(err, CompilationError::DuplicateAttribute("a".to_string()));
}

#[test]
fn should_reject_commas_inside_a_segment() {
    let err = parse_attributes("a,b x", true).unwrap_err();
    assert_eq!(
        err,
        CompilationError::AmbiguousSeparator("a,b x".to_string())
    );
}

#[test]
fn should_reject_segments_with_more_than_two_tokens() {
    let err = parse_attributes("a b c", true).unwrap_err();
    assert_eq!(
        err,
        CompilationError::MalformedAttributeSpec("a b c".to_string())
    );
}

#[test]
fn should_lowercase_attribute_names_in_html_mode() {
    let parsed = parse_attributes("Class x", false).unwrap();
    assert_eq!(parsed["class"].as_deref(), Some("x"));
    assert!(!parsed.contains_key("Class"));
}

#[test]
fn should_keep_attribute_name_case_in_xml_mode() {
    let parsed = parse_attributes("Class x", true).unwrap();
    assert_eq!(parsed["Class"].as_deref(), Some("x"));
    assert!(!parsed.contains_key("class"));
}

#[test]
fn should_treat_duplicates_after_case_folding_as_duplicates() {
    let err = parse_attributes("Class x; class y", false).unwrap_err();
    assert_eq!(
        err,
        CompilationError::DuplicateAttribute("class".to_string())
    );
}

#[test]
fn should_return_an_empty_mapping_for_an_empty_spec() {
    let parsed = parse_attributes("", true).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn error_messages_carry_the_offending_fragment() {
    let err = parse_attributes("a,b x", true).unwrap_err();
    assert!(err.to_string().contains("a,b x"));
}

#[test]
fn should_recognize_whitelisted_i18n_attribute_names() {
    for name in ["translate", "domain", "context", "attributes", "ignore-attributes"] {
        assert!(is_i18n_attribute(name), "{name} should be recognized");
    }
    assert!(!is_i18n_attribute("onclick"));
    assert!(!is_i18n_attribute("Translate"));
}
