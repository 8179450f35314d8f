//! A thread-safe key-value registry with write-once semantics.
//!
//! Every key can be bound to a value at most once; bindings never change and
//! are never removed for the lifetime of the registry. One registered key can
//! additionally be marked as the registry's default entry, also at most once.
//!
//! # Examples
//!
//! ```
//! use keyed_registry::Registry;
//! use std::sync::Arc;
//!
//! let ports: Registry<&str, u16> = Registry::new("ports");
//!
//! ports.register("http", 80);
//! ports.register("https", 443);
//!
//! let http: Arc<u16> = ports.get("http").unwrap();
//! assert_eq!(*http, 80);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::RegistryError;

/// A concurrency-safe, write-once key-value registry.
///
/// The registry maps keys to values, with each key bindable exactly once, and
/// optionally designates a single registered key as the default entry. Values
/// are stored behind [`Arc`] so lookups hand out cheap shared handles without
/// cloning the payload.
///
/// All operations are synchronous and safe to call from many threads without
/// external locking. Concurrent registrations of the same key race; exactly
/// one wins and every caller observes the winning value afterwards. The same
/// holds for concurrent attempts to set the default entry.
///
/// The `name` given at construction is a diagnostic label only; it appears in
/// error messages and log events.
pub struct Registry<K, V> {
    name: String,
    entries: DashMap<K, Arc<V>>,
    default_key: OnceLock<K>,
}

// -------------------------------------------------------------------------------------------------
// Lookups
// -------------------------------------------------------------------------------------------------

impl<K, V> Registry<K, V>
where
    K: Eq + Hash,
{
    /// Creates a new, empty registry tagged with a diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: DashMap::new(),
            default_key: OnceLock::new(),
        }
    }

    /// The registry's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a shared handle to the value bound to `key`, or `None` if the
    /// key has never been registered.
    ///
    /// A missing key is not an error; it is the normal "not found" signal.
    /// Lookups never block beyond the map's internal shard locking and are
    /// safe to run concurrently with registrations.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_registry::Registry;
    ///
    /// let registry: Registry<String, i32> = Registry::new("numbers");
    /// assert!(registry.get("answer").is_none());
    ///
    /// registry.register("answer".to_string(), 42);
    /// assert_eq!(*registry.get("answer").unwrap(), 42);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns an owned copy of the value bound to `key`.
    ///
    /// Useful when the caller needs to own the value rather than share it
    /// through an [`Arc`] handle.
    pub fn get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.get(key).map(|value| (*value).clone())
    }

    /// Checks whether `key` has been registered.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns the default key and a handle to its value, or `None` if no
    /// default entry has been set.
    ///
    /// Once [`set_default`](Self::set_default) has succeeded, this always
    /// returns that entry: bindings are never removed, so the value looked up
    /// when the default was set stays reachable.
    pub fn default_entry(&self) -> Option<(&K, Arc<V>)> {
        let key = self.default_key.get()?;
        self.get(key).map(|value| (key, value))
    }
}

// -------------------------------------------------------------------------------------------------
// Registration
// -------------------------------------------------------------------------------------------------

impl<K, V> Registry<K, V>
where
    K: Eq + Hash + fmt::Display,
{
    /// Attempts to bind `value` to `key`.
    ///
    /// The check-and-insert is a single atomic step on the underlying map:
    /// out of any number of concurrent callers registering the same key,
    /// exactly one succeeds. A failed attempt has no side effect.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyExists`] if the key is already bound,
    /// regardless of the value it is bound to.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_registry::Registry;
    ///
    /// let limits: Registry<&str, u32> = Registry::new("limits");
    ///
    /// limits.try_register("max-connections", 512).unwrap();
    ///
    /// let err = limits.try_register("max-connections", 1024).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "registry(limits): key already exists: max-connections",
    /// );
    /// ```
    pub fn try_register(&self, key: K, value: V) -> Result<(), RegistryError> {
        self.try_register_arc(key, Arc::new(value))
    }

    /// Attempts to bind an [`Arc`]-wrapped value to `key`.
    ///
    /// More efficient than [`try_register`](Self::try_register) when you
    /// already have an `Arc`, as it avoids an extra allocation.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyExists`] if the key is already bound.
    pub fn try_register_arc(&self, key: K, value: Arc<V>) -> Result<(), RegistryError> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                tracing::debug!(registry = %self.name, key = %entry.key(), "rejected duplicate key");
                Err(RegistryError::key_exists(&self.name, entry.key()))
            }
            Entry::Vacant(entry) => {
                tracing::trace!(registry = %self.name, key = %entry.key(), "registered entry");
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Binds `value` to `key`, panicking if the key is already bound.
    ///
    /// This is the fatal counterpart of [`try_register`](Self::try_register),
    /// for call sites that have established by construction that the key must
    /// be unique and treat a duplicate as a programming error.
    ///
    /// # Panics
    ///
    /// Panics with the formatted [`RegistryError`] if the key is already
    /// bound.
    pub fn register(&self, key: K, value: V) {
        if let Err(err) = self.try_register(key, value) {
            panic!("{err}");
        }
    }

    /// Binds an [`Arc`]-wrapped value to `key`, panicking if the key is
    /// already bound.
    ///
    /// # Panics
    ///
    /// Panics with the formatted [`RegistryError`] if the key is already
    /// bound.
    pub fn register_arc(&self, key: K, value: Arc<V>) {
        if let Err(err) = self.try_register_arc(key, value) {
            panic!("{err}");
        }
    }

    /// Marks `key` as the registry's default entry and returns a handle to
    /// its value.
    ///
    /// The key must already be registered, and the default marker can be set
    /// only once for the lifetime of the registry. Out of any number of
    /// concurrent callers, exactly one succeeds; every caller observes the
    /// winning entry through [`default_entry`](Self::default_entry)
    /// afterwards.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::KeyNotFound`] if `key` has never been registered.
    /// - [`RegistryError::KeyExists`] if a default entry is already set, even
    ///   if it is set to the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_registry::Registry;
    ///
    /// let codecs: Registry<&str, &str> = Registry::new("codecs");
    /// codecs.register("json", "application/json");
    ///
    /// let mime = codecs.set_default("json").unwrap();
    /// assert_eq!(*mime, "application/json");
    ///
    /// // The marker is write-once, same as the entries.
    /// assert!(codecs.set_default("json").is_err());
    /// ```
    pub fn set_default(&self, key: K) -> Result<Arc<V>, RegistryError> {
        let value = self
            .get(&key)
            .ok_or_else(|| RegistryError::key_not_found(&self.name, &key))?;

        // Bindings are never removed, so the value looked up above stays
        // reachable for whichever key wins the marker. If a removal API is
        // ever added, this lookup and the swap below must become one
        // critical section.
        self.default_key
            .set(key)
            .map_err(|key| RegistryError::key_exists(&self.name, &key))?;

        tracing::debug!(registry = %self.name, "default entry set");
        Ok(value)
    }
}

impl<K, V> fmt::Debug for Registry<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .field("default_set", &self.default_key.get().is_some())
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
