use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "USAGE: md5sum <path> - where path is the file you want to hash";

/// Print the MD5 digest of a file.
#[derive(Debug, Parser)]
#[command(name = "md5sum", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// The file to hash.
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,
}

impl Args {
    /// Parses exactly one operand, taken literally as a path even when it
    /// looks like a flag or is `--`.
    fn from_operands(mut argv: Vec<OsString>) -> Option<Self> {
        if argv.len() != 2 {
            return None;
        }
        let path = argv.pop()?;
        let program = argv.pop()?;
        match Args::try_parse_from([program, OsString::from("--"), path]) {
            Ok(args) => Some(args),
            Err(err) => {
                log::debug!("rejected arguments: {err}");
                None
            }
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let digest = md5sum::digest_file(&args.path)
        .with_context(|| format!("failed to hash {}", args.path.display()))?;
    println!("{digest}");
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let Some(args) = Args::from_operands(std::env::args_os().collect()) else {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
