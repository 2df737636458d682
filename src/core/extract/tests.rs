//! Tests for call-site extraction.

use pretty_assertions::assert_eq;

use super::*;
use crate::core::collect::collect_calls;
use crate::core::parse::parse_source;

fn pair(key: &str, value: &str) -> ExtractedPair {
    ExtractedPair {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Parse inline source and run one pattern's extractor over every match.
fn extract_with(pattern: CallPattern, code: &str) -> Vec<Result<Vec<ExtractedPair>, String>> {
    let parsed = parse_source(code.to_string(), "test.ts").unwrap();
    collect_calls(&parsed.module, |call| pattern.matches(call))
        .iter()
        .map(|call| pattern.try_extract(call, &parsed))
        .collect()
}

fn extract_one(pattern: CallPattern, code: &str) -> Result<Vec<ExtractedPair>, String> {
    let mut results = extract_with(pattern, code);
    assert_eq!(results.len(), 1, "expected exactly one matched call");
    results.remove(0)
}

#[test]
fn localize_call_yields_key_and_value() {
    let result = extract_one(
        CallPattern::DirectLocalize,
        "const title = nls.localize('editor/save', 'Save File');",
    );
    assert_eq!(result, Ok(vec![pair("editor/save", "Save File")]));
}

#[test]
fn localize_value_is_unescaped() {
    let result = extract_one(
        CallPattern::DirectLocalize,
        r"nls.localize('editor/hint', 'line one\nline \'two\'');",
    );
    assert_eq!(result, Ok(vec![pair("editor/hint", "line one\nline 'two'")]));
}

#[test]
fn localize_unknown_escape_keeps_backslash() {
    let result = extract_one(
        CallPattern::DirectLocalize,
        r"nls.localize('editor/path', 'C:\qdir');",
    );
    assert_eq!(result, Ok(vec![pair("editor/path", r"C:\qdir")]));
}

#[test]
fn localize_with_one_argument_is_an_error() {
    let result = extract_one(CallPattern::DirectLocalize, "nls.localize('editor/save');");
    let message = result.unwrap_err();
    assert!(message.contains("at least two arguments"), "{message}");
}

#[test]
fn localize_with_non_literal_key_is_an_error() {
    let result = extract_one(
        CallPattern::DirectLocalize,
        "nls.localize(dynamicKey, 'Save');",
    );
    let message = result.unwrap_err();
    assert!(message.contains("expected a string literal"), "{message}");
    assert!(message.contains("dynamicKey"), "{message}");
}

#[test]
fn localize_with_non_literal_value_is_an_error() {
    let result = extract_one(
        CallPattern::DirectLocalize,
        "nls.localize('editor/save', `Save ${name}`);",
    );
    assert!(result.is_err());
}

#[test]
fn localize_matcher_requires_the_qualified_name() {
    let matches = extract_with(
        CallPattern::DirectLocalize,
        "other.localize('a', 'b'); localize('a', 'b'); nested.nls.localize('a', 'b');",
    );
    assert!(matches.is_empty());
}

#[test]
fn command_label_key_defaults_to_id() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ id: 'file.new', label: 'New File' });",
    );
    assert_eq!(result, Ok(vec![pair("file.new", "New File")]));
}

#[test]
fn command_without_category_yields_no_category_pair() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ id: 'file.new', label: 'New File', category: 'File' });",
    );
    // A category default value without a category key is silently omitted.
    assert_eq!(result, Ok(vec![pair("file.new", "New File")]));
}

#[test]
fn command_with_explicit_keys_yields_both_pairs() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand(
            { id: 'file.new', label: 'New File', category: 'File' },
            'file/new/label',
            'file/category',
        );",
    );
    assert_eq!(
        result,
        Ok(vec![
            pair("file/new/label", "New File"),
            pair("file/category", "File"),
        ])
    );
}

#[test]
fn command_category_key_without_category_value_is_omitted() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ id: 'file.new', label: 'New File' }, 'k', 'file/category');",
    );
    assert_eq!(result, Ok(vec![pair("k", "New File")]));
}

#[test]
fn command_empty_explicit_key_falls_back_to_id() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ id: 'file.new', label: 'New File' }, '');",
    );
    assert_eq!(result, Ok(vec![pair("file.new", "New File")]));
}

#[test]
fn command_explicit_key_is_the_only_source_without_id() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ label: 'New File' }, 'file/new');",
    );
    assert_eq!(result, Ok(vec![pair("file/new", "New File")]));
}

#[test]
fn command_without_any_label_key_is_an_error() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ label: 'New File' });",
    );
    let message = result.unwrap_err();
    assert!(message.contains("label key"), "{message}");
}

#[test]
fn command_without_label_property_is_an_error() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ id: 'file.new' });",
    );
    let message = result.unwrap_err();
    assert!(message.contains("'label' property"), "{message}");
}

#[test]
fn command_shorthand_property_is_an_error() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ id, label: 'New File' });",
    );
    let message = result.unwrap_err();
    assert!(message.contains("property assignments"), "{message}");
}

#[test]
fn command_spread_member_is_an_error() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ ...base, label: 'New File' });",
    );
    assert!(result.is_err());
}

#[test]
fn command_string_property_name_is_an_error() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ 'id': 'file.new', label: 'New File' });",
    );
    let message = result.unwrap_err();
    assert!(message.contains("identifier property name"), "{message}");
}

#[test]
fn command_irrelevant_properties_are_ignored() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ id: 'file.new', label: 'New File', iconClass: 'icon-new' });",
    );
    assert_eq!(result, Ok(vec![pair("file.new", "New File")]));
}

#[test]
fn command_non_literal_explicit_key_is_an_error() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand({ id: 'file.new', label: 'New File' }, key);",
    );
    assert!(result.is_err());
}

#[test]
fn command_non_object_first_argument_is_an_error() {
    let result = extract_one(
        CallPattern::LocalizedCommand,
        "Command.toLocalizedCommand(command);",
    );
    let message = result.unwrap_err();
    assert!(message.contains("object literal"), "{message}");
}
