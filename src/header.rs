//! This module contains the `GlobalHeader` struct which represents the global pcap header.

use byteorder_slice::byteorder::{ByteOrder, NativeEndian};

/// Size of the global header at the start of every capture.
pub const GLOBAL_HEADER_LEN: usize = 24;

/// Endianness of a capture, as implied by its magic number.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Endianness of the running CPU.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        }
        else {
            Endianness::Little
        }
    }
}

/// Timestamp resolution of a capture, as implied by its magic number.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TsResolution {
    MicroSecond,
    NanoSecond,
}

/// What the magic number looks like when read in native byte order.
///
/// Purely informational: the inspector prints the raw value and never rejects a capture
/// because of its magic.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MagicKind {
    /// One of the four standard magic numbers.
    ///
    /// `swapped` is true when the file was written with the opposite byte order of this CPU.
    Known {
        endianness: Endianness,
        ts_resolution: TsResolution,
        swapped: bool,
    },
    /// Anything else
    Unknown(u32),
}

/// Pcap global header, kept as the raw 24 bytes read from the file.
///
/// Only the magic number is interpreted. Version, timezone, sigfigs, snaplen and linktype
/// are carried as an opaque block.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GlobalHeader {
    bytes: [u8; GLOBAL_HEADER_LEN],
}

impl GlobalHeader {
    /// Wraps the 24 bytes read at the start of a capture.
    pub fn new(bytes: [u8; GLOBAL_HEADER_LEN]) -> Self {
        GlobalHeader { bytes }
    }

    /// Magic number: bytes 0..4 read in the native byte order of the CPU.
    pub fn magic(&self) -> u32 {
        NativeEndian::read_u32(&self.bytes[0..4])
    }

    /// Classifies the magic number against the standard pcap values.
    pub fn magic_kind(&self) -> MagicKind {
        let magic = self.magic();

        let (ts_resolution, swapped) = match magic {
            0xa1b2c3d4 => (TsResolution::MicroSecond, false),
            0xa1b23c4d => (TsResolution::NanoSecond, false),
            0xd4c3b2a1 => (TsResolution::MicroSecond, true),
            0x4d3cb2a1 => (TsResolution::NanoSecond, true),
            _ => return MagicKind::Unknown(magic),
        };

        let endianness = match (Endianness::native(), swapped) {
            (Endianness::Little, false) | (Endianness::Big, true) => Endianness::Little,
            (Endianness::Big, false) | (Endianness::Little, true) => Endianness::Big,
        };

        MagicKind::Known { endianness, ts_resolution, swapped }
    }

    /// The 20 bytes following the magic number.
    pub fn opaque(&self) -> &[u8] {
        &self.bytes[4..]
    }

    /// The whole header as read from the file.
    pub fn as_bytes(&self) -> &[u8; GLOBAL_HEADER_LEN] {
        &self.bytes
    }
}
