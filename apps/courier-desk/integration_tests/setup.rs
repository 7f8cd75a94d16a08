use courier_desk::commands::config::current_configuration;
use courier_desk::setup::start;

/// **VALUE**: Verifies startup creates the log file and points state at the data directory.
///
/// **WHY THIS MATTERS**: This is the only call a host makes before issuing commands. If the
/// desk ran without it, failures would go unlogged and overrides would be saved elsewhere.
#[tokio::test]
async fn given_empty_data_dir_when_started_then_logs_and_state_ready() {
    // GIVEN
    let data_dir = tempfile::tempdir().expect("temp dir");

    // WHEN
    let state = start(data_dir.path()).expect("startup succeeds");

    // THEN
    assert!(data_dir.path().join("logs").join("courier-desk.log").exists());
    assert_eq!(state.config_dir(), data_dir.path());
    assert!(state.get_quote().await.is_none());
    assert!(current_configuration(&state).is_ok());
}
