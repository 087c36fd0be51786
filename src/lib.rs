//! typeset: fix typography in text from the command line
//!
//! Reads text from a file or standard input, runs it through a typography
//! engine with the selected locale, rules and HTML entity mode, and writes the
//! corrected text or lint diagnostics to standard output.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod engine;
pub mod input;
pub mod lint;
pub mod utils;
