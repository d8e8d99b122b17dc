#![no_main]
use libfuzzer_sys::fuzz_target;
use pcap_inspect::{inspect, ReportOptions};

fuzz_target!(|data: &[u8]| {
    let _ = inspect(data, &ReportOptions::default(), std::io::sink());
});
