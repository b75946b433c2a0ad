//! Linux printer driver installation
//!
//! The macOS driver cannot handle the booklet options, so Linux
//! machines register the Xerox PPD directly: download it, set up the
//! queue with `lpadmin`, and enable it in CUPS. The CUPS commands need
//! root and therefore run through `sudo -S` with the password piped to
//! stdin.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;
use crate::report::Reporter;

/// PPD file for the Xerox printers.
pub const DRIVER_PPD_URL: &str =
    "https://wiki.in.tum.de/foswiki/pub/Informatik/Benutzerwiki/XeroxDrucker/x2UNIV.ppd";

/// Print service URI the queue is registered against.
pub const PRINTER_URI: &str = "ipps://print.in.tum.de/printers/followme";

/// Run a command as root via `sudo -S`, piping the password to stdin.
pub fn sudo_call(
    command: &[String],
    password: &str,
    runner: &mut dyn ProcessRunner,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let mut changed_command = vec!["sudo".to_string(), "-S".to_string()];
    changed_command.extend_from_slice(command);

    info!("Calling ...");
    info!("{}", changed_command.join(" "));

    let code = runner.run_with_input(&changed_command, password)?;
    info!("Done!");

    if code != 0 {
        let rendered = command.join(" ");
        reporter.error("Installation went wrong.");
        reporter.error(&format!("Please open a shell and call 'sudo {}'", rendered));
        return Err(Error::CommandFailed { command: rendered });
    }
    Ok(())
}

/// Fetch the PPD file into `target`.
fn download_ppd(target: &Path, reporter: &mut dyn Reporter) -> Result<()> {
    reporter.status(&format!("Downloading {} ...", DRIVER_PPD_URL));
    let response = reqwest::blocking::get(DRIVER_PPD_URL)?.error_for_status()?;
    let bytes = response.bytes()?;
    fs::write(target, &bytes)?;
    Ok(())
}

/// Download the PPD, register the print queue, and enable it in CUPS.
///
/// Makes the printers available under `driver`. The user running this
/// needs sudo privileges.
pub fn install_linux_driver(
    driver: &str,
    password: &str,
    runner: &mut dyn ProcessRunner,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let local_file = std::env::temp_dir().join("x2UNIV.ppd");
    download_ppd(&local_file, reporter)?;

    let lpadmin = vec![
        "lpadmin".to_string(),
        "-E".to_string(),
        "-p".to_string(),
        driver.to_string(),
        "-v".to_string(),
        PRINTER_URI.to_string(),
        "-P".to_string(),
        local_file.display().to_string(),
        "-D".to_string(),
        "Xerox-Followme".to_string(),
        "-L".to_string(),
        "TUM".to_string(),
    ];
    sudo_call(&lpadmin, password, runner, reporter)?;
    sudo_call(
        &["cupsenable".to_string(), driver.to_string()],
        password,
        runner,
        reporter,
    )?;
    sudo_call(
        &["cupsaccept".to_string(), driver.to_string()],
        password,
        runner,
        reporter,
    )?;

    fs::remove_file(&local_file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedRunner {
        calls: Vec<(Vec<String>, String)>,
        exit_code: i32,
    }

    impl ProcessRunner for ScriptedRunner {
        fn run(&mut self, command: &[String]) -> std::io::Result<i32> {
            self.run_with_input(command, "")
        }

        fn run_with_input(&mut self, command: &[String], input: &str) -> std::io::Result<i32> {
            self.calls.push((command.to_vec(), input.to_string()));
            Ok(self.exit_code)
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn status(&mut self, _message: &str) {}

        fn error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    #[test]
    fn test_sudo_call_prefixes_command_and_pipes_password() {
        let mut runner = ScriptedRunner {
            calls: Vec::new(),
            exit_code: 0,
        };
        let mut reporter = RecordingReporter::default();
        let command = vec!["cupsenable".to_string(), "followmeppd".to_string()];

        sudo_call(&command, "hunter2", &mut runner, &mut reporter).unwrap();

        let (called, input) = &runner.calls[0];
        assert_eq!(called[0], "sudo");
        assert_eq!(called[1], "-S");
        assert_eq!(&called[2..], command.as_slice());
        assert_eq!(input, "hunter2");
        assert!(reporter.errors.is_empty());
    }

    #[test]
    fn test_sudo_call_failure_names_the_wrapped_command() {
        let mut runner = ScriptedRunner {
            calls: Vec::new(),
            exit_code: 1,
        };
        let mut reporter = RecordingReporter::default();
        let command = vec!["cupsaccept".to_string(), "followmeppd".to_string()];

        let result = sudo_call(&command, "hunter2", &mut runner, &mut reporter);

        match result {
            Err(Error::CommandFailed { command }) => {
                assert_eq!(command, "cupsaccept followmeppd");
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
        assert!(reporter
            .errors
            .iter()
            .any(|m| m == "Installation went wrong."));
        assert!(reporter
            .errors
            .iter()
            .any(|m| m.contains("'sudo cupsaccept followmeppd'")));
    }
}
