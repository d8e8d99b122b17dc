use std::io::{ErrorKind, Read};

use crate::errors::*;

/// Wraps a reader to read fixed size frames, reporting how many bytes were really available.
///
/// Unlike `Read::read_exact`, a short frame is not an error here: the caller decides what a
/// partial frame means.
#[derive(Debug)]
pub(crate) struct FrameReader<R: Read> {
    reader: R,
    payload: Vec<u8>,
}

impl<R: Read> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, payload: Vec::new() }
    }

    /// Fills `buf` until it is full or the reader is exhausted.
    /// Returns the number of bytes read.
    pub fn fill(&mut self, buf: &mut [u8]) -> InspectResult<usize> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(nb_read) => filled += nb_read,
                Err(e) if e.kind() == ErrorKind::Interrupted => {},
                Err(e) => return Err(InspectError::ReadFailed(e)),
            }
        }

        Ok(filled)
    }

    /// Reads up to `len` bytes into the internal payload buffer and returns them.
    ///
    /// The buffer only grows with the bytes actually read, never with the declared length.
    pub fn read_payload(&mut self, len: u32) -> InspectResult<&[u8]> {
        self.payload.clear();

        // read_to_end already retries on Interrupted
        (&mut self.reader)
            .take(u64::from(len))
            .read_to_end(&mut self.payload)
            .map_err(InspectError::ReadFailed)?;

        Ok(&self.payload)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
