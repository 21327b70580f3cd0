//! Error Types
//!
//! This module defines the error types shared by the clipfade crates.
//!
//! # Overview
//!
//! The main error type [`AnimationError`] covers the two validation failures
//! the clip selector can report:
//! - Selecting or looking up a clip name that was never registered
//! - Registering the same clip name twice
//!
//! Neither is fatal. Callers are expected to log or ignore them; the
//! controller state is left untouched when one is returned.
//!
//! # Usage
//!
//! ```rust,ignore
//! use clipfade::errors::{AnimationError, Result};
//!
//! fn pick(controller: &mut ClipController, name: &str) -> Result<()> {
//!     controller.select(name)
//! }
//! ```

use thiserror::Error;

/// The main error type for clip registration and selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// The requested clip name is not present in the registry.
    #[error("Unknown animation clip: '{name}'")]
    UnknownClip {
        /// The name that failed to resolve
        name: String,
    },

    // ========================================================================
    // Registration Errors
    // ========================================================================
    /// A clip with the same name has already been registered.
    #[error("Duplicate animation clip name: '{name}'")]
    DuplicateName {
        /// The name that was registered twice
        name: String,
    },
}

impl AnimationError {
    #[must_use]
    pub fn unknown_clip(name: impl Into<String>) -> Self {
        Self::UnknownClip { name: name.into() }
    }

    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// The clip name this error refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownClip { name } | Self::DuplicateName { name } => name,
        }
    }
}

/// Alias for `Result<T, AnimationError>`.
pub type Result<T> = std::result::Result<T, AnimationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AnimationError::unknown_clip("wave").to_string(),
            "Unknown animation clip: 'wave'"
        );
        assert_eq!(
            AnimationError::duplicate_name("idle").to_string(),
            "Duplicate animation clip name: 'idle'"
        );
    }

    #[test]
    fn test_name_accessor() {
        assert_eq!(AnimationError::unknown_clip("salute").name(), "salute");
        assert_eq!(AnimationError::duplicate_name("victory").name(), "victory");
    }
}
