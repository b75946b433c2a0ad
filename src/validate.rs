//! PDF corruption sniffing
//!
//! A cheap substitute for full PDF parsing: a complete PDF starts with
//! a `%PDF` header and ends with an `%%EOF` trailer, so inspecting the
//! first and last kilobyte catches the truncated downloads the exam
//! website occasionally produces.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::Result;

/// Files below this size are never accepted, even if the markers are present.
pub const MIN_PDF_SIZE: u64 = 1024;

/// Number of bytes inspected at each end of the file.
const PROBE_SIZE: usize = 1024;

/// Decode a byte chunk as ASCII, dropping undecodable bytes.
fn decode_ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}

/// Check whether a file is plausibly a complete PDF.
///
/// Files under [`MIN_PDF_SIZE`] bytes are rejected regardless of
/// content. Otherwise the first kilobyte must contain `%PDF`, and the
/// last kilobyte must either contain `%%EOF` or end with a NUL byte.
/// I/O failures propagate as errors; the boolean covers only the
/// heuristic outcome.
pub fn is_full_pdf(path: &Path) -> Result<bool> {
    let size = std::fs::metadata(path)?.len();
    if size < MIN_PDF_SIZE {
        return Ok(false);
    }

    let mut file = File::open(path)?;
    let mut probe = [0u8; PROBE_SIZE];

    file.read_exact(&mut probe)?;
    let start_content = decode_ascii_lossy(&probe);

    file.seek(SeekFrom::End(-(PROBE_SIZE as i64)))?;
    file.read_exact(&mut probe)?;
    let end_content = decode_ascii_lossy(&probe);

    let start_flag = start_content.contains("%PDF");
    if start_flag && end_content.contains("%%EOF") {
        return Ok(true);
    }
    // Some producers terminate the file with a NUL instead of a
    // readable trailer; accept that as long as the header matched.
    if start_flag && end_content.ends_with('\0') {
        return Ok(true);
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Build file content of `total` bytes with the given head and tail.
    fn padded(head: &[u8], tail: &[u8], total: usize) -> Vec<u8> {
        let mut content = head.to_vec();
        content.resize(total - tail.len(), b' ');
        content.extend_from_slice(tail);
        content
    }

    #[test]
    fn test_small_file_rejected_regardless_of_content() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "tiny.pdf", b"%PDF-1.5\n%%EOF\n");
        assert!(!is_full_pdf(&path).unwrap());
    }

    #[test]
    fn test_header_and_trailer_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ok.pdf", &padded(b"%PDF-1.5\n", b"\n%%EOF\n", 4096));
        assert!(is_full_pdf(&path).unwrap());
    }

    #[test]
    fn test_minimum_size_file_accepted() {
        // Exactly 1024 bytes: head and tail probes cover the same chunk
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "min.pdf", &padded(b"%PDF-1.5\n", b"\n%%EOF\n", 1024));
        assert!(is_full_pdf(&path).unwrap());
    }

    #[test]
    fn test_missing_trailer_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "cut.pdf", &padded(b"%PDF-1.5\n", b"endstream\n", 4096));
        assert!(!is_full_pdf(&path).unwrap());
    }

    #[test]
    fn test_missing_header_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "odd.pdf", &padded(b"not a pdf\n", b"\n%%EOF\n", 4096));
        assert!(!is_full_pdf(&path).unwrap());
    }

    #[test]
    fn test_trailing_nul_accepted_as_fallback() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "nul.pdf", &padded(b"%PDF-1.5\n", b"\0", 4096));
        assert!(is_full_pdf(&path).unwrap());
    }

    #[test]
    fn test_trailing_nul_without_header_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "nul-only.pdf", &padded(b"not a pdf\n", b"\0", 4096));
        assert!(!is_full_pdf(&path).unwrap());
    }

    #[test]
    fn test_non_ascii_bytes_are_dropped_not_fatal() {
        // The lossy decode removes high bytes, so a marker interrupted
        // by them still matches: b"%P\xC4DF" decodes to "%PDF".
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "high-bytes.pdf",
            &padded(b"%P\xC4DF-1.5\n\xFF\xFE", b"\xFF%%E\xC4OF\n", 4096),
        );
        assert!(is_full_pdf(&path).unwrap());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(is_full_pdf(Path::new("nonexistent.pdf")).is_err());
    }
}
