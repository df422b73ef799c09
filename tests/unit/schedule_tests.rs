use std::time::Duration;

use deploy_gate::gate::{PollSchedule, POLL_INTERVAL_SECONDS};
use deploy_gate::AppError;

#[test]
fn five_minutes_allows_sixty_attempts() {
    let schedule = PollSchedule::from_timeout_minutes(5).expect("valid timeout");
    assert_eq!(schedule.max_attempts, 60);
}

#[test]
fn one_minute_allows_twelve_attempts() {
    let schedule = PollSchedule::from_timeout_minutes(1).expect("valid timeout");
    assert_eq!(schedule.max_attempts, 12);
}

#[test]
fn zero_timeout_is_a_configuration_error() {
    let err = PollSchedule::from_timeout_minutes(0).expect_err("zero allows no polls");
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn interval_is_five_seconds() {
    assert_eq!(POLL_INTERVAL_SECONDS, 5);
    let schedule = PollSchedule::from_timeout_minutes(1).expect("valid timeout");
    assert_eq!(schedule.interval, Duration::from_secs(5));
}
