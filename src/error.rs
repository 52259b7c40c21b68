//! Errors raised while loading a cartridge.
//!
//! Only failures that make the image unusable are errors. A bad header
//! checksum or an unknown licensee/type code is reported on the loaded
//! `Cartridge` instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read rom file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("rom is too small to contain a header (got {len} bytes, expected at least {expected})")]
    Format { len: usize, expected: usize },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
