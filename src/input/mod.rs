//! Input routing: a named file or standard input
//!
//! Either way the caller gets exactly one complete text or exactly one error.

use std::io::Read;
use std::path::PathBuf;

pub mod file;
pub mod stream;

pub use file::read_file;
pub use stream::{read_stream, StreamAccumulator};

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("{0}: no such file.")]
    NotFound(String),
    #[error("{0}: is not UTF-8.")]
    NotUtf8(String),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Read the whole input. `stdin` is only consumed for [`InputSource::Stdin`].
    pub fn read<R: Read>(&self, stdin: R) -> Result<String, InputError> {
        match self {
            InputSource::File(path) => read_file(path),
            InputSource::Stdin => read_stream(stdin)
                .map_err(|source| InputError::Io { path: "<stdin>".to_string(), source }),
        }
    }
}
