//! Error kinds returned by the fallible registry operations.
//!
//! There are exactly two: a key was already bound when it must not be, or a
//! key was missing when it must be present. Both carry the registry's
//! diagnostic name and the offending key, pre-rendered so the error stays
//! `'static`, cloneable, and comparable by value.

use std::fmt;

use thiserror::Error;

/// An error from a fallible registry operation.
///
/// The `Display` form is stable and follows the pattern
/// `registry(<name>): <condition>: <key>`, e.g.
/// `registry(codecs): key already exists: json`. Matching on the variants
/// (or using [`registry`](Self::registry) / [`key`](Self::key)) is preferred
/// over matching on message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A registration targeted a key that is already bound, or a default
    /// entry was requested while one is already set.
    #[error("registry({name}): key already exists: {key}")]
    KeyExists {
        /// Diagnostic name of the registry that rejected the operation.
        name: String,
        /// The offending key, rendered with its `Display` impl.
        key: String,
    },

    /// A default entry was requested for a key that has never been bound.
    #[error("registry({name}): key does not exist: {key}")]
    KeyNotFound {
        /// Diagnostic name of the registry that rejected the operation.
        name: String,
        /// The offending key, rendered with its `Display` impl.
        key: String,
    },
}

impl RegistryError {
    pub(crate) fn key_exists(name: &str, key: &impl fmt::Display) -> Self {
        Self::KeyExists {
            name: name.to_owned(),
            key: key.to_string(),
        }
    }

    pub(crate) fn key_not_found(name: &str, key: &impl fmt::Display) -> Self {
        Self::KeyNotFound {
            name: name.to_owned(),
            key: key.to_string(),
        }
    }

    /// Diagnostic name of the registry the error originated from.
    pub fn registry(&self) -> &str {
        match self {
            Self::KeyExists { name, .. } | Self::KeyNotFound { name, .. } => name,
        }
    }

    /// The offending key, in its rendered form.
    pub fn key(&self) -> &str {
        match self {
            Self::KeyExists { key, .. } | Self::KeyNotFound { key, .. } => key,
        }
    }
}
