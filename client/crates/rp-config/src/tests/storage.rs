use crate::StorageConfig;

use googletest::assert_that;
use googletest::prelude::{anything, ok};

#[test]
fn given_default_storage_config_when_validate_then_ok() {
    assert_that!(StorageConfig::default().validate(), ok(anything()));
}

#[test]
fn given_nested_relative_file_when_validate_then_ok() {
    let config = StorageConfig {
        file: String::from("state/storage.json"),
        ..Default::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_absolute_file_when_validate_then_error() {
    let config = StorageConfig {
        file: String::from("/etc/storage.json"),
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_parent_traversal_when_validate_then_error() {
    let config = StorageConfig {
        file: String::from("../outside.json"),
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_blank_session_key_when_validate_then_error() {
    let config = StorageConfig {
        session_key: String::from("  "),
        ..Default::default()
    };

    assert!(config.validate().is_err());
}
