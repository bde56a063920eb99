use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZipperError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Directory not found: {0:?}")]
    NotFound(PathBuf),
    #[error("Cannot rename {from:?} to {to:?}: target already exists")]
    RenameTarget { from: PathBuf, to: PathBuf },
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
    #[error("Cannot get filename from path: {0:?}")]
    NoFilename(PathBuf),
    #[error("File name is not valid UTF-8: {0:?}")]
    NonUtf8Name(PathBuf),
}
