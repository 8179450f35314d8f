//! # Keyed Registry
//!
//! A thread-safe key-value registry that enforces write-once semantics per
//! key: every key can be bound to a value exactly once, bindings are never
//! replaced or removed, and one registered key can optionally be designated
//! as the registry's default entry.
//!
//! This is a building block for registering singleton-like objects (plugins,
//! drivers, handlers, codecs) under unique keys, one registry per logical
//! namespace.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyed_registry::Registry;
//! use std::sync::Arc;
//!
//! let drivers: Registry<&str, String> = Registry::new("drivers");
//!
//! // Register values; a key can be bound only once.
//! drivers.register("postgres", "postgresql://localhost".to_string());
//! drivers.register("sqlite", "sqlite://:memory:".to_string());
//!
//! // Look values up; lookups hand out shared Arc handles.
//! let dsn: Arc<String> = drivers.get("postgres").unwrap();
//! assert_eq!(&*dsn, "postgresql://localhost");
//!
//! // Designate one entry as the default, at most once.
//! drivers.set_default("postgres").unwrap();
//! let (name, _dsn) = drivers.default_entry().unwrap();
//! assert_eq!(*name, "postgres");
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: all operations can run from many threads without
//!   external locking; concurrent registrations of one key resolve to
//!   exactly one winner
//! - **Write-once**: bindings and the default marker are monotonic, absent
//!   to present, never reversed
//! - **Typed**: generic over any `Eq + Hash` key and any value type
//! - **Diagnosable**: errors carry the registry name and offending key, and
//!   operations emit [`tracing`] events
//!
//! ## Main Types
//!
//! - [`Registry`] - the write-once key-value registry
//! - [`RegistryError`] - the two error kinds, `KeyExists` and `KeyNotFound`
//! - [`define_registry!`] - creates a static, module-scoped registry

mod macros;
mod registry;
mod registry_error;

pub use registry::Registry;
pub use registry_error::RegistryError;
