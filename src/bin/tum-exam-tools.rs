//! Exam printing CLI tool
//!
//! Command-line front end for sending exam booklets to the printing
//! service, plus the one-time driver and portal setup steps.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use tum_exam_tools::discover::find_booklets;
use tum_exam_tools::driver::install_linux_driver;
use tum_exam_tools::portal::open_printing_portal;
use tum_exam_tools::process::SystemRunner;
use tum_exam_tools::prompt::{OperatorPrompt, StdinPrompt};
use tum_exam_tools::report::{ConsoleReporter, Reporter};
use tum_exam_tools::send::{send_attendee_list, send_booklets, SendOptions, MIN_BATCH_SIZE};
use tum_exam_tools::Error;

/// Default print queue name.
const DEFAULT_DRIVER: &str = "followmeppd";

/// Question asked before anything is sent to the print queue.
const PRINTING_RIGHTS_QUESTION: &str =
    "Did you enable printing from your PC via https://ucentral.in.tum.de/cgi-bin/printman.cgi ?";

/// Exam Printing Toolkit - send booklets to the printing service
#[derive(Parser)]
#[command(name = "tum-exam-tools")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Send every booklet in a directory, pausing after batches of 50
    tum-exam-tools send-all-booklets -i /path/to/exams/ -b 50

    # Resend two specific booklets
    tum-exam-tools send-specific-booklets -P E0007-book.pdf -P E0009-book.pdf

    # Send the attendee list on label stock
    tum-exam-tools send-attendee-list -a attendeelist.pdf

    # One-time setup on a Linux machine
    tum-exam-tools install-linux-driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send all booklets in a directory to the printing server
    SendAllBooklets {
        /// Name of the print queue
        #[arg(short = 'd', long, default_value = DEFAULT_DRIVER)]
        driver_name: String,

        /// The directory with the exams from the exam website
        #[arg(short = 'i', long, default_value = ".")]
        input_directory: PathBuf,

        /// Pause for the operator after this many booklets (minimum 2)
        #[arg(short = 'b', long)]
        batch_size: Option<usize>,
    },

    /// Send only specific booklet PDFs to the printing server
    SendSpecificBooklets {
        /// A booklet PDF to send; can be passed multiple times
        #[arg(short = 'P', long = "booklet-pdf", required = true)]
        booklet_pdf: Vec<PathBuf>,

        /// Name of the print queue
        #[arg(short = 'd', long, default_value = DEFAULT_DRIVER)]
        driver_name: String,

        /// Pause for the operator after this many booklets (minimum 2)
        #[arg(short = 'b', long)]
        batch_size: Option<usize>,
    },

    /// Send the attendee list to the printing server
    SendAttendeeList {
        /// The attendee list PDF
        #[arg(short = 'a', long, default_value = "attendeelist.pdf")]
        attendee_list: PathBuf,

        /// Name of the print queue
        #[arg(short = 'd', long, default_value = DEFAULT_DRIVER)]
        driver_name: String,
    },

    /// Download the Xerox PPD and register the print queue (Linux, needs sudo)
    InstallLinuxDriver {
        /// Name of the print queue
        #[arg(short = 'd', long, default_value = DEFAULT_DRIVER)]
        driver_name: String,

        /// Your user password; read from stdin when omitted. The user
        /// needs sudo privileges.
        #[arg(short = 'p', long)]
        password: Option<String>,
    },

    /// Open the printing portal for the one-time per-machine setup
    OpenPrintingPortal,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::SendAllBooklets {
            driver_name,
            input_directory,
            batch_size,
        } => cmd_send_all_booklets(driver_name, input_directory, batch_size),
        Commands::SendSpecificBooklets {
            booklet_pdf,
            driver_name,
            batch_size,
        } => cmd_send_specific_booklets(booklet_pdf, driver_name, batch_size),
        Commands::SendAttendeeList {
            attendee_list,
            driver_name,
        } => cmd_send_attendee_list(attendee_list, driver_name),
        Commands::InstallLinuxDriver {
            driver_name,
            password,
        } => cmd_install_linux_driver(driver_name, password),
        Commands::OpenPrintingPortal => cmd_open_printing_portal(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Reject batch sizes below the sender's minimum.
fn check_batch_size(batch_size: Option<usize>) -> Result<(), Error> {
    if let Some(size) = batch_size {
        if size < MIN_BATCH_SIZE {
            return Err(Error::BatchSizeTooSmall(size));
        }
    }
    Ok(())
}

/// Ask for printing rights; `false` means the run should end quietly.
fn confirm_printing_rights(
    prompt: &mut dyn OperatorPrompt,
    reporter: &mut dyn Reporter,
) -> Result<bool, Box<dyn std::error::Error>> {
    if prompt.confirm(PRINTING_RIGHTS_QUESTION)? {
        Ok(true)
    } else {
        reporter.status("Please enable printing first!");
        Ok(false)
    }
}

/// Read the sudo password from stdin when it was not passed as an option.
fn read_password() -> io::Result<String> {
    eprint!("Your user password: ");
    io::stderr().flush()?;

    let mut password = String::new();
    io::stdin().lock().read_line(&mut password)?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}

/// Send every booklet found in a directory
fn cmd_send_all_booklets(
    driver_name: String,
    input_directory: PathBuf,
    batch_size: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    check_batch_size(batch_size)?;

    let mut prompt = StdinPrompt;
    let mut reporter = ConsoleReporter;
    if !confirm_printing_rights(&mut prompt, &mut reporter)? {
        return Ok(());
    }

    let booklets = find_booklets(&input_directory)?;
    if booklets.is_empty() {
        return Err(Error::NoBooklets(input_directory).into());
    }
    reporter.status(&format!("We found {} booklets.", booklets.len()));

    let options = SendOptions {
        driver: driver_name,
        batch_size,
    };
    send_booklets(
        &options,
        &booklets,
        &mut SystemRunner,
        &mut prompt,
        &mut reporter,
    )?;

    Ok(())
}

/// Send an explicit list of booklets
fn cmd_send_specific_booklets(
    booklet_pdf: Vec<PathBuf>,
    driver_name: String,
    batch_size: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    check_batch_size(batch_size)?;

    for file in &booklet_pdf {
        if !file.exists() {
            return Err(Error::FileNotFound(file.clone()).into());
        }
    }

    let mut prompt = StdinPrompt;
    let mut reporter = ConsoleReporter;
    if !confirm_printing_rights(&mut prompt, &mut reporter)? {
        return Ok(());
    }

    let options = SendOptions {
        driver: driver_name,
        batch_size,
    };
    send_booklets(
        &options,
        &booklet_pdf,
        &mut SystemRunner,
        &mut prompt,
        &mut reporter,
    )?;

    Ok(())
}

/// Send the attendee list on label stock
fn cmd_send_attendee_list(
    attendee_list: PathBuf,
    driver_name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    if !attendee_list.exists() {
        return Err(Error::FileNotFound(attendee_list).into());
    }

    let mut prompt = StdinPrompt;
    let mut reporter = ConsoleReporter;
    if !confirm_printing_rights(&mut prompt, &mut reporter)? {
        return Ok(());
    }

    send_attendee_list(
        &driver_name,
        &attendee_list,
        &mut SystemRunner,
        &mut reporter,
    )?;

    Ok(())
}

/// Install the Linux printer driver
fn cmd_install_linux_driver(
    driver_name: String,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };

    let mut reporter = ConsoleReporter;
    install_linux_driver(&driver_name, &password, &mut SystemRunner, &mut reporter)?;

    Ok(())
}

/// Open the printing portal in the browser
fn cmd_open_printing_portal() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = ConsoleReporter;
    open_printing_portal(&mut reporter)?;
    Ok(())
}
