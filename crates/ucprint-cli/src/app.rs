//! CLI Application logic
//!
//! Argument handling and the per-argument encode loop.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, warn};
use ucprint::{encode, parse_hex};

use crate::error::{EXIT_OK, EXIT_USAGE, RunError};
use crate::logging;
use crate::options::{InvalidArgumentPolicy, RunOptions};

#[derive(Parser)]
#[command(name = "ucprint")]
#[command(version, about = "Print Unicode code points as UTF-8", long_about = None)]
struct Cli {
    /// Code points in hexadecimal, e.g. `41 e9 1f600`
    #[arg(value_name = "HEX_CODEPOINT", allow_hyphen_values = true)]
    codepoints: Vec<String>,

    /// Print arguments that are not hexadecimal integers verbatim instead of
    /// failing
    #[arg(long)]
    passthrough: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> RunOptions {
        RunOptions {
            invalid_argument: if self.passthrough {
                InvalidArgumentPolicy::Passthrough
            } else {
                InvalidArgumentPolicy::Reject
            },
        }
    }
}

/// Parse the process arguments, run, and report the outcome.
///
/// Errors from the run itself are printed on standard error and turned into
/// an exit status; only failures to set up the process are returned as `Err`.
///
/// # Errors
///
/// Fails if logging cannot be initialised or usage text cannot be printed.
pub fn run_cli() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { EXIT_OK };
            err.print().context("Failed to print usage")?;
            return Ok(ExitCode::from(code));
        }
    };

    logging::init(cli.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli.codepoints.as_slice(), &cli.options(), &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

/// Encode every argument in order and write the results to `out`.
///
/// Empty arguments are checked for up front, so that usage error leaves
/// `out` untouched. Any other failure stops at the offending argument;
/// whatever was written for earlier arguments stays written. The trailing
/// newline is only written when every argument succeeded, and nothing at all
/// is written for an empty argument list.
///
/// # Errors
///
/// See [`RunError`].
pub fn run<S, W>(args: &[S], options: &RunOptions, out: &mut W) -> Result<(), RunError>
where
    S: AsRef<str>,
    W: Write + ?Sized,
{
    if let Some(index) = args.iter().position(|arg| arg.as_ref().is_empty()) {
        return Err(RunError::EmptyArgument { index });
    }
    if args.is_empty() {
        debug!("no arguments");
        return Ok(());
    }

    let written = write_args(args, options, out);
    let flushed = out.flush().map_err(RunError::from);
    written.and(flushed)
}

fn write_args<S, W>(args: &[S], options: &RunOptions, out: &mut W) -> Result<(), RunError>
where
    S: AsRef<str>,
    W: Write + ?Sized,
{
    for (index, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        match parse_hex(arg) {
            Ok(codepoint) => {
                let bytes = encode(codepoint)?;
                debug!(index, arg, codepoint, len = bytes.len(), "encoded");
                out.write_all(&bytes)?;
            }
            Err(source) => match options.invalid_argument {
                InvalidArgumentPolicy::Reject => {
                    return Err(RunError::from_hex(index, arg, source));
                }
                InvalidArgumentPolicy::Passthrough => {
                    warn!(index, arg, %source, "not a hexadecimal integer, printing verbatim");
                    out.write_all(arg.as_bytes())?;
                }
            },
        }
    }

    out.write_all(b"\n")?;
    Ok(())
}
