//! Configuration loading and merging
//!
//! Preferences come from three layers: built-in defaults, an optional JSON
//! file and command-line flags. See [`merge::resolve_prefs`] for the per-field
//! precedence.

pub mod loader;
pub mod merge;

pub use loader::{load_config, ConfigError};
pub use merge::{resolve_prefs, UncheckedPrefs, ValidationError};

/// The JSON preferences file is one optional-field layer.
pub type RawConfig = crate::domain::PrefsLayer;
