//! Exam Printing Toolkit
//!
//! A library for sending exam booklet PDFs to the printing service.
//! This library provides functionality to:
//! - Sniff PDF files for corruption before printing (header/trailer markers)
//! - Send booklets through the external `lp` command, optionally in batches
//! - Discover booklet files (`*-book.pdf`) in a directory
//! - Install the Linux printer driver (PPD download + CUPS setup)
//!
//! # Example
//!
//! ```no_run
//! use tum_exam_tools::process::SystemRunner;
//! use tum_exam_tools::prompt::StdinPrompt;
//! use tum_exam_tools::report::ConsoleReporter;
//! use tum_exam_tools::send::{send_booklets, SendOptions};
//! use std::path::PathBuf;
//!
//! let options = SendOptions {
//!     driver: "followmeppd".to_string(),
//!     batch_size: None,
//! };
//! let files = vec![PathBuf::from("E0001-book.pdf")];
//!
//! send_booklets(
//!     &options,
//!     &files,
//!     &mut SystemRunner,
//!     &mut StdinPrompt,
//!     &mut ConsoleReporter,
//! )
//! .expect("Failed to send booklets");
//! ```

pub mod error;
pub mod validate;
pub mod send;
pub mod discover;
pub mod process;
pub mod prompt;
pub mod report;
pub mod driver;
pub mod portal;

// Re-export commonly used items
pub use error::{Error, Result};
