//! Error types for the exam printing toolkit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the exam printing toolkit
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Driver download error
    #[error("Download error: {0}")]
    Download(#[from] reqwest::Error),

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// No booklets found in the input directory
    #[error("We did not find any booklets. Please check {}", .0.display())]
    NoBooklets(PathBuf),

    /// Batch size below the sender's minimum
    #[error("Batch size must be at least {min}, got {0}", min = crate::send::MIN_BATCH_SIZE)]
    BatchSizeTooSmall(usize),

    /// A file failed the PDF validity heuristic
    #[error("The PDF file {} is not a valid PDF", .0.display())]
    InvalidPdf(PathBuf),

    /// The print command for a file exited with a nonzero status
    #[error("Sending {} to the server failed; retry with: {command}", .file.display())]
    SendFailed { file: PathBuf, command: String },

    /// A privileged setup command exited with a nonzero status
    #[error("Command failed: sudo {command}")]
    CommandFailed { command: String },
}
