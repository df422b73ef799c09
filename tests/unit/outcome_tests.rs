use deploy_gate::gate::Outcome;

#[test]
fn authorized_has_no_failure_reason() {
    assert!(Outcome::Authorized.failure_reason().is_none());
}

#[test]
fn denied_reason_is_the_exact_denial_message() {
    let reason = Outcome::Denied.failure_reason().expect("denied fails");
    assert_eq!(reason, "The deploy has been denied.");
}

#[test]
fn timed_out_reason_names_the_configured_timeout() {
    let reason = Outcome::TimedOut { timeout_minutes: 5 }
        .failure_reason()
        .expect("timeout fails");
    assert!(reason.contains("5 minutes"), "reason was: {reason}");
}
