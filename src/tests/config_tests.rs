use crate::{
    address::Address,
    capped_set::CappedSet,
    config::{CappedSetConfig, ConfigError, DEFAULT_CAPACITY, DEFAULT_LOG_LEVEL},
};

#[test]
fn test_defaults() -> Result<(), anyhow::Error> {
    let config = CappedSetConfig::default();
    assert_eq!(config.capacity, DEFAULT_CAPACITY);
    assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

    assert_eq!(CappedSetConfig::from_json_str("{}")?, config);
    Ok(())
}

#[test]
fn test_from_json() -> Result<(), anyhow::Error> {
    let config = CappedSetConfig::from_json_str(r#"{ "capacity": 5 }"#)?;
    assert_eq!(config.capacity, 5);
    assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

    let set: CappedSet<Address, u64> = config.build()?;
    assert_eq!(set.capacity(), 5);
    assert!(set.is_empty());
    Ok(())
}

#[test]
fn test_rejects_bad_config() {
    assert!(matches!(
        CappedSetConfig::from_json_str(r#"{ "capacity": 0 }"#),
        Err(ConfigError::InvalidCapacity(_))
    ));
    assert!(matches!(
        CappedSetConfig::from_json_str(r#"{ "capacity": -1 }"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        CappedSetConfig::from_json_str("capacity = 5"),
        Err(ConfigError::Parse(_))
    ));

    let config = CappedSetConfig {
        capacity: 0,
        ..Default::default()
    };
    assert!(config.build::<Address, u64>().is_err());
}
