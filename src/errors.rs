use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type InspectResult<T> = Result<T, InspectError>;

/* ----- enum InspectError ----- */

/// Errors that stop the inspection of a capture.
///
/// Every variant is fatal: the inspector never skips a damaged record and goes on.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The capture file could not be opened.
    #[error("Error opening {}: {source}", path.display())]
    FileAccess {
        /// Path that was given to the inspector
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file ended before the 24 bytes of the global header.
    /// # Fields
    /// - 0: number of bytes actually read
    #[error("Error reading global header. Read {0} bytes.")]
    TruncatedHeader(usize),
    /// The file ended in the middle of a 16 bytes record header.
    /// # Fields
    /// - 0: number of bytes actually read, between 1 and 15
    #[error("Error: Incomplete packet header. Read {0} bytes.")]
    TruncatedPacketHeader(usize),
    /// The file ended before the end of a packet payload.
    #[error("Error reading packet data. Expected {expected}, got {actual}")]
    TruncatedPayload {
        /// Little endian included length of the record
        expected: u32,
        /// Number of payload bytes actually read
        actual: usize,
    },
    /// An I/O error occurred while reading the capture.
    #[error("Exception: I/O error while reading the file: {0}")]
    ReadFailed(#[source] std::io::Error),
    /// An I/O error occurred while writing the report.
    #[error("Exception: I/O error while writing the report: {0}")]
    WriteFailed(#[source] std::io::Error),
}
