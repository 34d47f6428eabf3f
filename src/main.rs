use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use linesift::{FilterError, FilterMode};

/// Remove code lines or duplicate lines from a text file.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Filter to apply: `code` drops code lines, `dupes` drops duplicate
    /// lines and collapses blank runs.
    #[arg(long = "type", value_name = "TYPE", default_value = "dupes")]
    mode: String,

    /// Input text file.
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Accept `-type` and `-type=...` as spellings of `--type`.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some("-type") => Some(OsString::from("--type")),
            Some(s) if s.starts_with("-type=") => Some(OsString::from(format!("-{s}"))),
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let mode: FilterMode = cli.mode.parse().map_err(|e: FilterError| {
        eprintln!("error: {e}");
        ExitCode::from(2)
    })?;

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    linesift::filter_file(&cli.file, mode, out).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(1)
    })?;

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}
