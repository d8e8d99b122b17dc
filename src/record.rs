//! Per packet record header and the link layer summary of its payload.

use byteorder_slice::byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Size of the header preceding each packet payload.
pub const RECORD_HEADER_LEN: usize = 16;

/// Smallest payload holding an Ethernet header, an IPv4 header and the start of the next layer.
pub const LINK_SUMMARY_MIN_LEN: usize = 42;

/// Pcap record header, kept as the raw 16 bytes read from the file.
///
/// The timestamps and the original length are never interpreted. The included length is
/// exposed in both byte orders so a producer with the wrong endianness is easy to spot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RecordHeader {
    bytes: [u8; RECORD_HEADER_LEN],
}

impl RecordHeader {
    /// Wraps the 16 bytes of a record header.
    pub fn new(bytes: [u8; RECORD_HEADER_LEN]) -> Self {
        RecordHeader { bytes }
    }

    /// Included length read as little endian. This one drives the payload framing.
    pub fn incl_len_le(&self) -> u32 {
        LittleEndian::read_u32(self.incl_len_bytes())
    }

    /// Included length read as big endian, for display only.
    pub fn incl_len_be(&self) -> u32 {
        BigEndian::read_u32(self.incl_len_bytes())
    }

    /// The whole header as read from the file.
    pub fn as_bytes(&self) -> &[u8; RECORD_HEADER_LEN] {
        &self.bytes
    }

    fn incl_len_bytes(&self) -> &[u8] {
        &self.bytes[8..12]
    }
}

/// EtherType and IPv4 protocol read at fixed offsets of an Ethernet frame.
///
/// No check is made that the frame really is Ethernet carrying IPv4.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LinkSummary {
    /// Bytes 12..14, network order
    pub ether_type: u16,
    /// Byte 23: 14 bytes of Ethernet header then byte 9 of the IPv4 header
    pub ip_proto: u8,
}

impl LinkSummary {
    /// Returns `None` when the payload is shorter than [`LINK_SUMMARY_MIN_LEN`].
    pub fn from_payload(payload: &[u8]) -> Option<LinkSummary> {
        if payload.len() < LINK_SUMMARY_MIN_LEN {
            return None;
        }

        Some(LinkSummary {
            ether_type: BigEndian::read_u16(&payload[12..14]),
            ip_proto: payload[23],
        })
    }
}
