use luna::core::scheduler;
use std::time::Duration;

#[test]
fn test_unit_one_is_seconds() {
    assert_eq!(scheduler::delay_for(45, 1).unwrap(), Duration::from_secs(45));
}

#[test]
fn test_unit_two_is_minutes() {
    assert_eq!(scheduler::delay_for(2, 2).unwrap(), Duration::from_secs(120));
}

#[test]
fn test_unit_three_is_hours() {
    assert_eq!(scheduler::delay_for(1, 3).unwrap(), Duration::from_secs(3600));
}

#[test]
fn test_unknown_unit_is_rejected() {
    let err = scheduler::delay_for(5, 4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration Error: Invalid time unit. Use 1 (Seconds), 2 (Minutes), or 3 (Hours)."
    );
}

#[test]
fn test_oversized_delay_is_rejected_not_wrapped() {
    let err = scheduler::delay_for(u64::MAX, 3).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Configuration Error: Delay too large: {}", u64::MAX)
    );
    assert!(scheduler::delay_for(u64::MAX, 2).is_err());
    // Seconds need no conversion, so the full range stays valid.
    assert!(scheduler::delay_for(u64::MAX, 1).is_ok());
}

#[test]
fn test_zero_delay_is_immediate() {
    assert_eq!(scheduler::delay_for(0, 1).unwrap(), Duration::ZERO);
}
