//! Error types for the word cloud pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read any text from {}", .0.display())]
    EmptyText(PathBuf),

    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    #[error("no words left to draw after filtering")]
    EmptyFrequencies,

    #[error("couldn't find space to draw; the canvas is too small")]
    NoRoom,

    #[error("no usable font found; set font_path or --font")]
    FontNotFound,

    #[error("invalid font {}: {message}", .path.display())]
    Font { path: PathBuf, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

pub type Result<T> = std::result::Result<T, Error>;
