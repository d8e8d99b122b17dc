//! Human readable dump of a capture.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use crate::errors::*;
use crate::inspector::Inspector;
use crate::record::{LinkSummary, RecordHeader};

/// Options of the report.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ReportOptions {
    /// Also print the included length read as big endian next to the little endian one.
    pub dual_endian: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions { dual_endian: true }
    }
}

/// Totals of a capture that was walked to its end.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Number of complete records
    pub packets: usize,
    /// Sum of the included lengths
    pub payload_bytes: u64,
    /// Number of payloads long enough for an EtherType / IP protocol line
    pub link_summaries: usize,
}

/// Opens `path` and dumps it to `out`. See [`inspect`].
///
/// The file is closed on return, whatever the outcome.
pub fn inspect_file<P: AsRef<Path>, W: Write>(path: P, options: &ReportOptions, out: W) -> InspectResult<Summary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InspectError::FileAccess { path: path.to_path_buf(), source })?;

    info!(path = %path.display(), "inspecting capture");
    inspect(file, options, out)
}

/// Dumps the capture held by `reader` to `out`, one block of lines per record.
///
/// Lines are written as soon as they are known, so on error everything up to the faulty
/// record has already been written.
pub fn inspect<R: Read, W: Write>(reader: R, options: &ReportOptions, out: W) -> InspectResult<Summary> {
    let mut report = Report { out, options: *options };
    let mut inspector = Inspector::new(reader)?;

    report.magic(inspector.header().magic())?;

    let mut summary = Summary::default();
    while let Some(record) = inspector.next_record() {
        let record = record?;
        report.record(inspector.packets_read(), &record)?;

        let payload = inspector.read_payload(&record)?;
        report.payload(payload.len())?;

        summary.packets += 1;
        summary.payload_bytes += payload.len() as u64;

        if let Some(link) = LinkSummary::from_payload(payload) {
            report.link(&link)?;
            summary.link_summaries += 1;
        }
    }

    report.end()?;
    info!(packets = summary.packets, payload_bytes = summary.payload_bytes, "capture complete");

    Ok(summary)
}

struct Report<W: Write> {
    out: W,
    options: ReportOptions,
}

impl<W: Write> Report<W> {
    fn magic(&mut self, magic: u32) -> InspectResult<()> {
        writeln!(self.out, "Global Header Magic: 0x{magic:08x}").map_err(InspectError::WriteFailed)
    }

    fn record(&mut self, index: usize, record: &RecordHeader) -> InspectResult<()> {
        let res = if self.options.dual_endian {
            writeln!(
                self.out,
                "Packet {index}: incl_len (LE) = {}, incl_len (BE) = {}",
                record.incl_len_le(),
                record.incl_len_be()
            )
        }
        else {
            writeln!(self.out, "Packet {index}: incl_len (LE) = {}", record.incl_len_le())
        };

        res.map_err(InspectError::WriteFailed)
    }

    fn payload(&mut self, len: usize) -> InspectResult<()> {
        writeln!(self.out, "  Read {len} bytes payload successfully.").map_err(InspectError::WriteFailed)
    }

    fn link(&mut self, link: &LinkSummary) -> InspectResult<()> {
        writeln!(self.out, "  EthType: 0x{:04x}, IP Proto: 0x{:02x}", link.ether_type, link.ip_proto)
            .map_err(InspectError::WriteFailed)
    }

    fn end(&mut self) -> InspectResult<()> {
        writeln!(self.out, "End of file reached normally.").map_err(InspectError::WriteFailed)?;
        self.out.flush().map_err(InspectError::WriteFailed)
    }
}
