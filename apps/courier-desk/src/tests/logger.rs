// Unit tests for logger initialization
// The global logger can be set once per process, so this binary has a single logger test.

use crate::logger::initialize;

/// **VALUE**: Verifies that calling initialize() twice succeeds and writes the log file.
///
/// **WHY THIS MATTERS**: Startup and test harnesses may both initialize logging. A second
/// call must not fail the desk on launch.
///
/// **BUG THIS CATCHES**: Would catch removal of the `Once`/`AtomicBool` guards, which makes
/// fern error on the second `apply()`.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN
    let temp_dir = tempfile::tempdir().expect("temp dir");

    // WHEN
    let first = initialize(temp_dir.path());
    let second = initialize(temp_dir.path());

    // THEN
    assert!(first.is_ok(), "First initialization should succeed: {first:?}");
    assert!(second.is_ok(), "Second initialization should be a no-op");
    assert!(temp_dir.path().join("courier-desk.log").exists());
}
