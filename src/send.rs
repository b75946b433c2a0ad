//! Batch sending of booklets to the printing server
//!
//! Sending is two-phase: every candidate file is checked for
//! corruption first, and only when all of them pass does any `lp`
//! invocation happen. A failed send aborts the run and carries the
//! exact command line in the error so the operator can retry by hand.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;
use crate::prompt::OperatorPrompt;
use crate::report::Reporter;
use crate::validate::is_full_pdf;

/// Smallest useful batch; pausing after every single file defeats the point.
pub const MIN_BATCH_SIZE: usize = 2;

/// `lp` options for exam booklets: A3 landscape, duplexed without
/// tumbling, folded and stapled as a booklet, no banner page, forced
/// black and white.
const BOOKLET_OPTIONS: &[&str] = &[
    "PageSize=A3",
    "JCLBanner=False",
    "JCLColorCorrection=BlackWhite",
    "Duplex=DuplexNoTumble",
    "XRFold=BiFoldStaple",
    "landscape",
    "JCLPrintQuality=Enhanced",
];

/// `lp` options for the attendee list: label stock from the manual
/// feed tray, single-sided A4.
const ATTENDEE_OPTIONS: &[&str] = &[
    "PageSize=A4",
    "JCLBanner=False",
    "JCLColorCorrection=PressMatch",
    "Duplex=None",
    "JCLPrintQuality=Enhanced",
    "InputSlot=ManualFeed",
    "MediaType=Labels",
];

/// Options for one sending run
#[derive(Debug, Clone)]
pub struct SendOptions {
    /// Print queue the `lp` command targets
    pub driver: String,
    /// Pause for the operator after this many files; `None` sends
    /// everything in one go
    pub batch_size: Option<usize>,
}

fn lp_command(driver: &str, options: &[&str], file: &Path) -> Vec<String> {
    let mut command = vec!["lp".to_string(), format!("-d{}", driver)];
    for option in options {
        command.push("-o".to_string());
        command.push((*option).to_string());
    }
    command.push(file.display().to_string());
    command
}

/// Build the `lp` command for one booklet.
pub fn booklet_command(driver: &str, file: &Path) -> Vec<String> {
    lp_command(driver, BOOKLET_OPTIONS, file)
}

/// Build the `lp` command for the attendee list.
pub fn attendee_command(driver: &str, file: &Path) -> Vec<String> {
    lp_command(driver, ATTENDEE_OPTIONS, file)
}

/// Run one print command, aborting the run on a nonzero exit.
fn call_command(
    file: &Path,
    command: Vec<String>,
    runner: &mut dyn ProcessRunner,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let rendered = command.join(" ");
    info!("Calling ...");
    info!("{}", rendered);

    let code = runner.run(&command)?;
    info!("Done!");

    if code != 0 {
        reporter.error(&format!(
            "Something went wrong when sending {} to the server",
            file.display()
        ));
        reporter.error(&format!("Please open a shell and call {}", rendered));
        return Err(Error::SendFailed {
            file: file.to_path_buf(),
            command: rendered,
        });
    }
    Ok(())
}

/// Send every booklet to the printing server.
///
/// All files are validated before anything is sent; the first invalid
/// file aborts the run with nothing printed. Sends happen in input
/// order, and with a batch size configured the run pauses for the
/// operator after every full batch while more files remain.
pub fn send_booklets(
    options: &SendOptions,
    files: &[PathBuf],
    runner: &mut dyn ProcessRunner,
    prompt: &mut dyn OperatorPrompt,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    reporter.status("Check whether PDFs are corrupt");
    for file in files {
        if !is_full_pdf(file)? {
            reporter.error(&format!(
                "The PDF file {} is not a valid PDF.",
                file.display()
            ));
            return Err(Error::InvalidPdf(file.clone()));
        }
    }

    let mut sent = 0;
    for (index, file) in files.iter().enumerate() {
        reporter.status(&format!(
            "Sending document {} to the printing server ...",
            file.display()
        ));
        call_command(file, booklet_command(&options.driver, file), runner, reporter)?;
        sent += 1;

        if let Some(batch_size) = options.batch_size {
            if sent % batch_size == 0 && index + 1 < files.len() {
                prompt.wait_for_continue(&format!(
                    "Sent {} of {} booklets.",
                    sent,
                    files.len()
                ))?;
            }
        }
    }

    reporter.status("Done!");
    Ok(())
}

/// Send the attendee list to the printing server.
///
/// No validity check and no batching; the list is a single document
/// printed on label stock.
pub fn send_attendee_list(
    driver: &str,
    file: &Path,
    runner: &mut dyn ProcessRunner,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    reporter.status(&format!(
        "Sending document {} to the printing server ...",
        file.display()
    ));
    call_command(file, attendee_command(driver, file), runner, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booklet_command_shape() {
        let command = booklet_command("followmeppd", Path::new("E0001-book.pdf"));
        assert_eq!(command[0], "lp");
        assert_eq!(command[1], "-dfollowmeppd");
        assert_eq!(command.last().unwrap(), "E0001-book.pdf");

        let rendered = command.join(" ");
        assert!(rendered.contains("-o PageSize=A3"));
        assert!(rendered.contains("-o JCLBanner=False"));
        assert!(rendered.contains("-o JCLColorCorrection=BlackWhite"));
        assert!(rendered.contains("-o Duplex=DuplexNoTumble"));
        assert!(rendered.contains("-o XRFold=BiFoldStaple"));
        assert!(rendered.contains("-o landscape"));
        assert!(rendered.contains("-o JCLPrintQuality=Enhanced"));
    }

    #[test]
    fn test_attendee_command_shape() {
        let command = attendee_command("followmeppd", Path::new("attendeelist.pdf"));
        assert_eq!(command[0], "lp");
        assert_eq!(command[1], "-dfollowmeppd");
        assert_eq!(command.last().unwrap(), "attendeelist.pdf");

        let rendered = command.join(" ");
        assert!(rendered.contains("-o PageSize=A4"));
        assert!(rendered.contains("-o JCLColorCorrection=PressMatch"));
        assert!(rendered.contains("-o Duplex=None"));
        assert!(rendered.contains("-o InputSlot=ManualFeed"));
        assert!(rendered.contains("-o MediaType=Labels"));
        assert!(!rendered.contains("XRFold"));
    }
}
