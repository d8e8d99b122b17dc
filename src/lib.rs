//! Dumps the framing of a pcap capture, packet by packet.
//!
//! The capture is walked in a single forward pass. For each record the included length is
//! printed in both byte orders, the payload is read using the little endian one, and the
//! EtherType and IP protocol of Ethernet/IPv4 frames are shown. Any framing problem stops
//! the walk with an [`InspectError`].
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//!
//! use pcap_inspect::{inspect_file, ReportOptions};
//!
//! let summary = inspect_file("test.pcap", &ReportOptions::default(), io::stdout()).unwrap();
//! println!("{} packets", summary.packets);
//! ```

pub mod errors;
mod frame_reader;
mod header;
mod inspector;
mod record;
mod report;

pub use errors::*;
pub use header::*;
pub use inspector::*;
pub use record::*;
pub use report::*;
