use std::{io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("cannot read migrations directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("cannot read migration file '{}': {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("migration file '{}' is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },

    #[error("failed to write to console: {0}")]
    Output(#[from] io::Error),

    #[error("failed to read operator input: {0}")]
    Input(io::Error),
}
