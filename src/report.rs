//! Status reporting
//!
//! Progress goes through an injected [`Reporter`] scoped to one
//! invocation rather than straight to the terminal. The binary wires
//! up [`ConsoleReporter`]; tests capture the lines instead.

/// Per-invocation status sink.
pub trait Reporter {
    /// Report normal progress.
    fn status(&mut self, message: &str);

    /// Report an operator-facing error.
    fn error(&mut self, message: &str);
}

/// [`Reporter`] writing status to stdout and errors to stderr.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn status(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}
