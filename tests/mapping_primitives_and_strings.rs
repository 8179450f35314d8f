//! Integration tests for registering and retrieving primitive and string
//! values under string, integer, and enum keys.

use keyed_registry::{Registry, RegistryError};
use std::fmt;
use std::sync::Arc;

#[test]
fn test_full_registration_scenario() {
    let registry: Registry<&str, &str> = Registry::new("test");

    // Nothing registered yet.
    assert!(registry.get("foo").is_none());

    // First binding wins and is observable.
    registry.register("foo", "bar");
    assert_eq!(*registry.get("foo").unwrap(), "bar");

    // Re-registering fails even with an identical value.
    let err = registry.try_register("foo", "bar").unwrap_err();
    assert_eq!(err.to_string(), "registry(test): key already exists: foo");

    // A fresh key is accepted.
    registry.try_register("bar", "baz").unwrap();

    // Default marker lifecycle.
    assert!(registry.default_entry().is_none());

    let value = registry.set_default("foo").unwrap();
    assert_eq!(*value, "bar");

    let (key, value) = registry.default_entry().unwrap();
    assert_eq!(*key, "foo");
    assert_eq!(*value, "bar");

    let err = registry.set_default("foo").unwrap_err();
    assert!(matches!(err, RegistryError::KeyExists { .. }));
}

#[test]
fn test_owned_string_keys_and_values() {
    let registry: Registry<String, String> = Registry::new("strings");

    registry.register("greeting".to_string(), "hello".to_string());

    // Lookup works with a borrowed &str against String keys.
    let value: Arc<String> = registry.get("greeting").unwrap();
    assert_eq!(&*value, "hello");

    // Owned copies are available when the value type is Clone.
    let owned: String = registry.get_cloned("greeting").unwrap();
    assert_eq!(owned, "hello");
}

#[test]
fn test_integer_keys() {
    let registry: Registry<u16, &str> = Registry::new("ports");

    registry.register(80, "http");
    registry.register(443, "https");

    assert_eq!(*registry.get(&80).unwrap(), "http");
    assert_eq!(*registry.get(&443).unwrap(), "https");

    let err = registry.try_register(80, "http-alt").unwrap_err();
    assert_eq!(err.to_string(), "registry(ports): key already exists: 80");
}

#[test]
fn test_enum_keys() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Backend {
        Memory,
        Disk,
    }

    impl fmt::Display for Backend {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Backend::Memory => write!(f, "memory"),
                Backend::Disk => write!(f, "disk"),
            }
        }
    }

    let registry: Registry<Backend, u32> = Registry::new("backends");

    registry.register(Backend::Memory, 1);

    assert_eq!(*registry.get(&Backend::Memory).unwrap(), 1);
    assert!(registry.get(&Backend::Disk).is_none());

    // The error renders the key with its Display impl.
    let err = registry.try_register(Backend::Memory, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "registry(backends): key already exists: memory"
    );
}

#[test]
fn test_error_accessors() {
    let registry: Registry<&str, i32> = Registry::new("accessors");
    registry.register("present", 1);

    let err = registry.try_register("present", 2).unwrap_err();
    assert_eq!(err.registry(), "accessors");
    assert_eq!(err.key(), "present");

    let err = registry.set_default("absent").unwrap_err();
    assert_eq!(err.registry(), "accessors");
    assert_eq!(err.key(), "absent");
}

#[test]
fn test_values_survive_losing_attempts() {
    let registry: Registry<&str, Vec<i32>> = Registry::new("vectors");

    registry.register("data", vec![1, 2, 3]);

    for _ in 0..3 {
        assert!(registry.try_register("data", vec![9, 9, 9]).is_err());
    }

    assert_eq!(&*registry.get("data").unwrap(), &vec![1, 2, 3]);
}
