use crate::{
    config::DEFAULT_LOG_LEVEL,
    logging::{applied_level, init_logger},
};

#[test]
fn test_applied_level() {
    assert_eq!(applied_level("debug"), "debug");
    assert_eq!(applied_level("info,capped_set=trace"), "info,capped_set=trace");
    assert_eq!(
        applied_level("!!!not=a=spec!!!"),
        DEFAULT_LOG_LEVEL,
        "Rejected spec was reported as the applied level"
    );
}

// Whichever call ran first, the logger is never started again
#[test]
fn test_logger_starts_once() {
    init_logger("debug");
    assert!(!init_logger("debug"), "Logger started twice");
    assert!(!init_logger("!!!not=a=spec!!!"), "Logger started twice");
}
