use tether_core::errors::*;
use tether_core::ContextId;

#[test]
fn unknown_context_carries_target_and_pool_size() {
    let err = SwitchError::UnknownContext {
        target: ContextId::new(9),
        context_count: 4,
    };
    let msg = err.to_string();
    assert!(msg.contains("ctx#9"));
    assert!(msg.contains('4'));
    assert_eq!(err.error_code(), "UNKNOWN_CONTEXT");
}

#[test]
fn switch_interruption_names_target() {
    let err = SwitchError::Interrupted {
        target: ContextId::new(1),
    };
    assert!(err.to_string().contains("ctx#1"));
    assert_eq!(err.error_code(), "INTERRUPTED");
}

#[test]
fn invalid_target_has_its_own_code() {
    assert_eq!(SwitchError::InvalidTarget.error_code(), "INVALID_TARGET");
}

#[test]
fn interrupted_message_is_stable() {
    assert_eq!(Interrupted.to_string(), "interrupted");
    assert_eq!(Interrupted.coded_string(), "[INTERRUPTED] interrupted");
}

#[test]
fn clock_truncation_carries_sizes() {
    let err = ClockError::Truncated {
        needed: 4,
        available: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains('4'));
    assert!(msg.contains('1'));
    assert_eq!(err.error_code(), "CLOCK_TRUNCATED");
}

#[test]
fn config_errors_carry_a_code_per_failure() {
    let rejected = ConfigError::ValidationFailed {
        field: "scheduler.context_count".into(),
        message: "must be positive".into(),
    };
    assert_eq!(
        rejected.coded_string(),
        "[CONFIG_REJECTED] scheduler.context_count rejected: must be positive"
    );

    let missing = ConfigError::FileNotFound {
        path: "/etc/tether.toml".into(),
    };
    assert_eq!(missing.error_code(), "CONFIG_NOT_FOUND");
    assert!(missing.to_string().contains("/etc/tether.toml"));

    let malformed = ConfigError::ParseError {
        path: "<string>".into(),
        message: "expected `=`".into(),
    };
    assert_eq!(malformed.error_code(), "CONFIG_MALFORMED");

    let bad_override = ConfigError::InvalidValue {
        field: "TETHER_CONTEXT_COUNT".into(),
        message: "invalid digit found in string".into(),
    };
    assert_eq!(
        bad_override.coded_string(),
        "[CONFIG_BAD_OVERRIDE] override TETHER_CONTEXT_COUNT is not usable: invalid digit found in string"
    );
}
