//! Printing portal helper
//!
//! Printing rights are granted per machine through the university
//! portal. This opens the portal in the operator's browser and spells
//! out the clicks; the login itself stays with the operator.

use crate::error::Result;
use crate::report::Reporter;

/// Login page of the printing portal.
pub const PORTAL_URL: &str = "https://ucentral.in.tum.de/cgi-bin/index.cgi";

/// Open the portal in the default browser and print the steps for
/// enabling printing from this machine.
pub fn open_printing_portal(reporter: &mut dyn Reporter) -> Result<()> {
    open_url(PORTAL_URL)?;
    reporter.status("Your browser now shows the printing portal. To enable printing:");
    reporter.status("  1. Log in with your university account.");
    reporter.status("  2. Open \"Xerox Printing\".");
    reporter.status("  3. Click \"Diesen Rechner zum Drucken freischalten\".");
    reporter.status("  4. If nothing happens, refresh the page and click the button again.");
    reporter.status("NOTE: Keep the browser window open!");
    Ok(())
}

/// Open a URL with the system default browser.
fn open_url(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .spawn()?;
    }
    Ok(())
}
