//! Typography engine boundary
//!
//! The CLI only talks to an engine through [`Engine`]. [`BuiltinEngine`] is the
//! adapter the binary ships with: a small, locale-neutral rule set plus the
//! HTML entity renderer.

use crate::domain::PreferenceSet;

pub mod builtin;
pub mod entity;
pub mod rules;

pub use builtin::BuiltinEngine;

/// One place in the input where an enabled rule would change the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    pub found: String,
    pub suggestion: String,
}

pub trait Engine {
    /// Whether `locale` is one the engine has rules for.
    fn has_locale(&self, locale: &str) -> bool;

    /// All supported locales, in display order.
    fn locales(&self) -> Vec<String>;

    /// Apply the enabled rules and entity rendering to `text`.
    fn execute(&self, text: &str, prefs: &PreferenceSet) -> String;

    /// Report what [`Engine::execute`] would change, without changing it.
    /// Empty exactly when `execute` would return `text` unchanged.
    fn lint(&self, text: &str, prefs: &PreferenceSet) -> Vec<Diagnostic>;
}
