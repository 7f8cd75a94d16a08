use crate::RedactedApiKey;

/// **VALUE**: Verifies the decoded key never shows up in Debug or Display output.
///
/// **WHY THIS MATTERS**: Request-building code logs its inputs at debug level. A leaking
/// Debug impl would write the live key into `courier-desk.log`.
#[test]
fn given_redacted_key_when_formatted_then_value_hidden() {
    // GIVEN: A decoded key
    let key = RedactedApiKey::new("super-secret");

    // WHEN: Formatting it both ways
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither contains the value
    assert!(!debug.contains("super-secret"));
    assert!(!display.contains("super-secret"));
    assert!(!key.is_empty());
}

/// **VALUE**: Verifies serialization of a decoded key is refused.
///
/// **BUG THIS CATCHES**: Would catch a derived `Serialize` that lets the key slip into a
/// booking payload or the override store.
#[test]
fn given_redacted_key_when_serialized_then_fails() {
    let key = RedactedApiKey::new("super-secret");

    let result = serde_json::to_string(&key);

    assert!(result.is_err());
}
