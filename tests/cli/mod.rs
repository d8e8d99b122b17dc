use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::{capture, eth_ipv4_frame, record};

fn pcap_inspect(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pcap-inspect"))
        .args(args)
        .output()
        .expect("Failed to run pcap-inspect")
}

/// Writes `data` to a capture file private to this test process.
fn temp_capture(name: &str, data: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pcap-inspect-cli-{}-{name}.pcap", std::process::id()));
    fs::write(&path, data).unwrap();
    path
}

fn last_line(output: &Output) -> String {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    stdout.lines().last().unwrap_or_default().to_string()
}


#[test]
#[cfg(target_endian = "little")]
fn golden_capture_succeeds() {
    let capture = Path::new("tests/captures/valid/udp_tcp_mix.pcap");
    let expected = fs::read_to_string(capture.with_extension("txt")).unwrap();

    let output = pcap_inspect(&[capture]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn no_dual_endian_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_pcap-inspect"))
        .arg("--no-dual-endian")
        .arg("tests/captures/valid/udp_tcp_mix.pcap")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Packet 0: incl_len (LE) = 42\n"));
    assert!(!stdout.contains("(BE)"));
}

#[test]
fn empty_file_fails() {
    let path = temp_capture("empty", &[]);
    let output = pcap_inspect(&[&path]);
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(last_line(&output), "Error reading global header. Read 0 bytes.");
}

#[test]
fn truncated_capture_fails() {
    let frame = eth_ipv4_frame(0x06);
    let mut data = capture(&[record(42, &frame)]);
    data.extend_from_slice(&[0; 9]);
    let path = temp_capture("truncated", &data);

    let output = pcap_inspect(&[&path]);
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(last_line(&output), "Error: Incomplete packet header. Read 9 bytes.");
    assert!(String::from_utf8(output.stdout).unwrap().contains("Read 42 bytes payload successfully."));
}

#[test]
fn truncated_payload_fails() {
    let path = temp_capture("short-payload", &capture(&[record(64, &[0; 10])]));

    let output = pcap_inspect(&[&path]);
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(last_line(&output), "Error reading packet data. Expected 64, got 10");
}

#[test]
fn missing_file_fails() {
    let path = std::env::temp_dir().join("pcap-inspect-cli-does-not-exist.pcap");

    let output = pcap_inspect(&[&path]);

    assert_eq!(output.status.code(), Some(1));
    assert!(last_line(&output).starts_with("Error opening "), "{output:?}");
}

#[test]
fn missing_argument_is_usage_error() {
    let output = pcap_inspect(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

/// A report that cannot be written is an error like any other, not a crash.
#[test]
#[cfg(target_os = "linux")]
fn full_stdout_fails_cleanly() {
    let full = OpenOptions::new().write(true).open("/dev/full").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pcap-inspect"))
        .arg("tests/captures/valid/udp_tcp_mix.pcap")
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("I/O error while writing the report"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
