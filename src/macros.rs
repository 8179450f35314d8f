//! Macro for creating static, module-scoped registries.
//!
//! Most registries live for the whole process and are populated during
//! startup; this module provides a declarative way to stamp those out
//! without writing the static and the delegation boilerplate by hand.

/// Creates a static registry wrapped in a module, with free functions for
/// every registry operation.
///
/// The macro generates a `pub mod` containing:
/// - a private `LazyLock`-initialized [`Registry`](crate::Registry) static
/// - free functions `register`, `register_arc`, `try_register`,
///   `try_register_arc`, `get`, `contains`, `set_default`, and
///   `default_entry` that delegate to it
///
/// The registry's diagnostic name defaults to the module name; pass a second
/// argument to override it.
///
/// # Examples
///
/// ```rust
/// use keyed_registry::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(mime_types: &'static str => &'static str);
///
/// mime_types::register("json", "application/json");
/// mime_types::register("yaml", "application/x-yaml");
///
/// let json: Arc<&str> = mime_types::get(&"json").unwrap();
/// assert_eq!(*json, "application/json");
/// assert!(mime_types::try_register("json", "text/json").is_err());
/// ```
///
/// # Default entries
///
/// Static registries support the default marker like any other registry:
///
/// ```rust
/// use keyed_registry::define_registry;
///
/// // Explicit diagnostic label instead of the module name.
/// define_registry!(codecs: &'static str => u32, "encoders");
///
/// codecs::register("json", 1);
/// codecs::register("cbor", 2);
///
/// let value = codecs::set_default("json").unwrap();
/// assert_eq!(*value, 1);
///
/// let (key, _) = codecs::default_entry().unwrap();
/// assert_eq!(*key, "json");
///
/// let err = codecs::try_register("json", 3).unwrap_err();
/// assert_eq!(err.registry(), "encoders");
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident: $key:ty => $value:ty) => {
        $crate::define_registry!($name: $key => $value, stringify!($name));
    };
    ($name:ident: $key:ty => $value:ty, $label:expr) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;

            use std::sync::{Arc, LazyLock};

            // Storage for the module's registry (module-private).
            static REGISTRY: LazyLock<$crate::Registry<$key, $value>> =
                LazyLock::new(|| $crate::Registry::new($label));

            /// Binds `value` to `key`, panicking if the key is already bound.
            pub fn register(key: $key, value: $value) {
                REGISTRY.register(key, value)
            }

            /// Binds an `Arc`-wrapped value to `key`, panicking if the key is
            /// already bound.
            pub fn register_arc(key: $key, value: Arc<$value>) {
                REGISTRY.register_arc(key, value)
            }

            /// Attempts to bind `value` to `key`.
            pub fn try_register(key: $key, value: $value) -> Result<(), $crate::RegistryError> {
                REGISTRY.try_register(key, value)
            }

            /// Attempts to bind an `Arc`-wrapped value to `key`.
            pub fn try_register_arc(
                key: $key,
                value: Arc<$value>,
            ) -> Result<(), $crate::RegistryError> {
                REGISTRY.try_register_arc(key, value)
            }

            /// Returns a shared handle to the value bound to `key`.
            pub fn get(key: &$key) -> Option<Arc<$value>> {
                REGISTRY.get(key)
            }

            /// Checks whether `key` has been registered.
            pub fn contains(key: &$key) -> bool {
                REGISTRY.contains(key)
            }

            /// Marks `key` as the default entry and returns a handle to its
            /// value.
            pub fn set_default(key: $key) -> Result<Arc<$value>, $crate::RegistryError> {
                REGISTRY.set_default(key)
            }

            /// Returns the default key and a handle to its value, if set.
            pub fn default_entry() -> Option<(&'static $key, Arc<$value>)> {
                REGISTRY.default_entry()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    #[test]
    fn test_define_registry_macro() {
        define_registry!(test_reg: &'static str => i32);

        test_reg::register("answer", 42);
        let value: Arc<i32> = test_reg::get(&"answer").unwrap();
        assert_eq!(*value, 42);

        assert!(test_reg::contains(&"answer"));
        assert!(!test_reg::contains(&"question"));

        let err = test_reg::try_register("answer", 0).unwrap_err();
        assert_eq!(err.to_string(), "registry(test_reg): key already exists: answer");
    }

    #[test]
    fn test_custom_label() {
        define_registry!(internal_name: &'static str => i32, "public-name");

        let err = internal_name::try_register("k", 1)
            .and_then(|_| internal_name::try_register("k", 2))
            .unwrap_err();
        assert_eq!(err.registry(), "public-name");
    }

    #[test]
    fn test_multiple_registries_are_isolated() {
        define_registry!(reg_a: &'static str => i32);
        define_registry!(reg_b: &'static str => i32);

        reg_a::register("shared-key", 1);
        reg_b::register("shared-key", 2);

        assert_eq!(*reg_a::get(&"shared-key").unwrap(), 1);
        assert_eq!(*reg_b::get(&"shared-key").unwrap(), 2);
    }

    #[test]
    fn test_default_entry_through_macro() {
        define_registry!(with_default: &'static str => &'static str);

        with_default::register("primary", "first");
        with_default::register("secondary", "second");

        assert!(with_default::default_entry().is_none());

        let value = with_default::set_default("primary").unwrap();
        assert_eq!(*value, "first");

        let (key, value) = with_default::default_entry().unwrap();
        assert_eq!(*key, "primary");
        assert_eq!(*value, "first");

        assert!(with_default::set_default("secondary").is_err());
    }

    #[test]
    fn test_register_arc_through_macro() {
        define_registry!(arc_reg: &'static str => String);

        let value = Arc::new("payload".to_string());
        arc_reg::register_arc("key", Arc::clone(&value));

        let retrieved = arc_reg::get(&"key").unwrap();
        assert!(Arc::ptr_eq(&value, &retrieved));
    }
}
