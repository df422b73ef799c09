use deploy_gate::AppError;

#[test]
fn config_error_display_starts_with_config_prefix() {
    let err = AppError::Config("timeout must be positive".into());
    assert!(err.to_string().starts_with("config:"));
}

#[test]
fn submission_error_display_includes_message() {
    let err = AppError::Submission("connection refused".into());
    assert_eq!(err.to_string(), "submission: connection refused");
}

#[test]
fn poll_error_is_distinct_from_submission_error() {
    let poll = AppError::Poll("connection refused".into());
    let submission = AppError::Submission("connection refused".into());
    assert_ne!(poll.to_string(), submission.to_string());
    assert!(poll.to_string().starts_with("poll:"));
}

#[test]
fn error_messages_have_no_trailing_period() {
    let err = AppError::Poll("verification failed".into());
    let s = err.to_string();
    assert!(
        !s.ends_with('.'),
        "error message must not end with a period: {s}"
    );
}

#[test]
fn errors_implement_std_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(AppError::Config("test".into()));
    assert!(!err.to_string().is_empty());
}
