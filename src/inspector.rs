use std::io::Read;

use tracing::{debug, trace, warn};

use crate::errors::*;
use crate::frame_reader::FrameReader;
use crate::header::{GlobalHeader, MagicKind, GLOBAL_HEADER_LEN};
use crate::record::{RecordHeader, RECORD_HEADER_LEN};


/// Walks a pcap capture one record at a time, checking its framing.
///
/// The global header is read on creation. Then each record is read in two steps,
/// [`next_record`](Inspector::next_record) for its header and
/// [`read_payload`](Inspector::read_payload) for its data, so the caller can report the
/// header before the payload is known to be complete.
///
/// # Examples
///
/// ```rust,no_run
/// use std::fs::File;
///
/// use pcap_inspect::Inspector;
///
/// let file_in = File::open("test.pcap").expect("Error opening file");
/// let mut inspector = Inspector::new(file_in).unwrap();
///
/// while let Some(record) = inspector.next_record() {
///     let record = record.unwrap();
///     let payload = inspector.read_payload(&record).unwrap();
///
///     //Do something
/// }
/// ```
#[derive(Debug)]
pub struct Inspector<R: Read> {
    header: GlobalHeader,
    reader: FrameReader<R>,
    packets_read: usize,
}

impl<R: Read> Inspector<R> {
    /// Creates a new `Inspector` and reads the 24 bytes global header.
    ///
    /// # Errors
    /// Returns [`InspectError::TruncatedHeader`] if the reader holds less than 24 bytes.
    pub fn new(reader: R) -> InspectResult<Inspector<R>> {
        let mut reader = FrameReader::new(reader);

        let mut bytes = [0_u8; GLOBAL_HEADER_LEN];
        let nb_read = reader.fill(&mut bytes)?;
        if nb_read != GLOBAL_HEADER_LEN {
            return Err(InspectError::TruncatedHeader(nb_read));
        }

        let header = GlobalHeader::new(bytes);
        match header.magic_kind() {
            MagicKind::Known { endianness, ts_resolution, swapped } => {
                debug!(?endianness, ?ts_resolution, swapped, "standard pcap magic")
            },
            MagicKind::Unknown(magic) => warn!("magic 0x{magic:08x} is not a standard pcap magic"),
        }

        Ok(Inspector { header, reader, packets_read: 0 })
    }

    /// Returns the header of the next record, or `None` on a clean end of capture.
    ///
    /// A clean end means the capture stops exactly on a record boundary.
    pub fn next_record(&mut self) -> Option<InspectResult<RecordHeader>> {
        let mut bytes = [0_u8; RECORD_HEADER_LEN];

        match self.reader.fill(&mut bytes) {
            Ok(0) => None,
            Ok(RECORD_HEADER_LEN) => {
                let record = RecordHeader::new(bytes);
                trace!(
                    index = self.packets_read,
                    incl_len_le = record.incl_len_le(),
                    incl_len_be = record.incl_len_be(),
                    "record header"
                );
                Some(Ok(record))
            },
            Ok(nb_read) => Some(Err(InspectError::TruncatedPacketHeader(nb_read))),
            Err(e) => Some(Err(e)),
        }
    }

    /// Reads the payload of `record`, framed by its little endian included length.
    ///
    /// # Errors
    /// Returns [`InspectError::TruncatedPayload`] if the capture ends before the payload does.
    pub fn read_payload(&mut self, record: &RecordHeader) -> InspectResult<&[u8]> {
        let expected = record.incl_len_le();
        let payload = self.reader.read_payload(expected)?;

        if payload.len() as u64 != u64::from(expected) {
            return Err(InspectError::TruncatedPayload { expected, actual: payload.len() });
        }

        self.packets_read += 1;

        Ok(payload)
    }

    /// Returns the global header of the capture.
    pub fn header(&self) -> &GlobalHeader {
        &self.header
    }

    /// Number of records whose payload was read completely.
    ///
    /// This is also the zero based index of the record being read.
    pub fn packets_read(&self) -> usize {
        self.packets_read
    }

    /// Consumes the `Inspector`, returning the wrapped reader.
    pub fn into_reader(self) -> R {
        self.reader.into_inner()
    }
}
