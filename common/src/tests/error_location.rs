use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures the file, line and column of the caller.
///
/// **WHY THIS MATTERS**: Every error in the workspace renders its construction site. If the
/// capture breaks, a failed quote says "Routing Error: 403" with no hint of which leg or layer built it.
///
/// **BUG THIS CATCHES**: Would catch if the constructor stopped reading from the passed
/// `Location` or swapped line and column.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: The current source position
    let expected_line = line!() + 3;

    // WHEN: Creating an ErrorLocation from it
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are captured
    assert!(location.file.ends_with("error_location.rs"));
    assert_eq!(location.line, expected_line);
    assert!(location.column > 0);
}

/// **VALUE**: Verifies the `[file:line:col]` display format.
///
/// **BUG THIS CATCHES**: Would catch format drift that breaks log grepping.
#[test]
fn given_error_location_when_displayed_then_uses_bracketed_format() {
    // GIVEN: A fixed location
    let location = ErrorLocation {
        file: "src/geocoder/mod.rs",
        line: 42,
        column: 9,
    };

    // WHEN / THEN
    assert_eq!(location.to_string(), "[src/geocoder/mod.rs:42:9]");
}
