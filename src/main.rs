//! pcap-inspect CLI entry point.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pcap_inspect::{inspect_file, ReportOptions};

/// Print the framing of a pcap capture, packet by packet.
#[derive(Parser, Debug)]
#[command(name = "pcap-inspect")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Capture file to inspect
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Only print the little endian included length of each record
    #[arg(long = "no-dual-endian")]
    no_dual_endian: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();

    let options = ReportOptions { dual_endian: !args.no_dual_endian };

    match inspect_file(&args.file, &options, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "inspection failed");
            // stdout may be the sink that failed
            if writeln!(io::stdout(), "{e}").is_err() {
                let _ = writeln!(io::stderr(), "{e}");
            }
            ExitCode::FAILURE
        },
    }
}
