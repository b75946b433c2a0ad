//! Operator interaction
//!
//! Two blocking interaction points: the printing-rights confirmation
//! before anything is sent, and the pause between batches while the
//! operator walks to the next printer. Both sit behind
//! [`OperatorPrompt`] so tests can script the answers.

use std::io::{self, BufRead, Write};

/// Blocking operator interaction points.
pub trait OperatorPrompt {
    /// Ask a yes/no question; `false` aborts before any work starts.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;

    /// Block until the operator acknowledges that the next batch may start.
    fn wait_for_continue(&mut self, message: &str) -> io::Result<()>;
}

/// [`OperatorPrompt`] reading answers from stdin.
pub struct StdinPrompt;

impl OperatorPrompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        eprint!("{} [y/N] ", question);
        io::stderr().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn wait_for_continue(&mut self, message: &str) -> io::Result<()> {
        eprint!("{} Press <Enter> to continue with the next batch. ", message);
        io::stderr().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(())
    }
}
