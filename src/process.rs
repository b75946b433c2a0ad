//! External process execution
//!
//! The print and installation steps shell out to system commands
//! (`lp`, `sudo`). The [`ProcessRunner`] trait keeps that boundary
//! small so tests can substitute a fake.

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Runs external commands and reports their exit codes.
pub trait ProcessRunner {
    /// Run a command synchronously and return its exit code.
    fn run(&mut self, command: &[String]) -> io::Result<i32>;

    /// Run a command with `input` written to its stdin and return its exit code.
    fn run_with_input(&mut self, command: &[String], input: &str) -> io::Result<i32>;
}

/// [`ProcessRunner`] backed by [`std::process::Command`].
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, command: &[String]) -> io::Result<i32> {
        let status = Command::new(&command[0]).args(&command[1..]).status()?;
        // A process killed by a signal has no exit code; treat it as failed
        Ok(status.code().unwrap_or(-1))
    }

    fn run_with_input(&mut self, command: &[String], input: &str) -> io::Result<i32> {
        let mut child = Command::new(&command[0])
            .args(&command[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(input.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        Ok(output.status.code().unwrap_or(-1))
    }
}
