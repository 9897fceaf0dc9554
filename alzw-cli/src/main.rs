//! alzw CLI - adaptive LZW file compressor
//!
//! `alzw - <n|r|m> <input> <output>` compresses, `alzw + <input> <output>`
//! expands.

mod utils;

use alzw_codec::{CodecStats, LzwConfig, Mode, compress_file, decompress_file};
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use utils::{create_spinner, print_stats};

#[derive(Parser, Debug)]
#[command(name = "alzw")]
#[command(author, version, about = "Adaptive LZW file compressor")]
#[command(long_about = "
Compresses files with LZW using codewords that widen from 9 to 16 bits.
The policy letter picks what happens once the dictionary is full:
  n  keep the dictionary as it is
  r  reset the dictionary
  m  reset only when the compression ratio degrades

Examples:
  alzw - m notes.txt notes.alzw
  alzw + notes.alzw notes.txt
")]
struct Cli {
    /// `-` to compress, `+` to expand
    #[arg(value_parser = parse_direction)]
    direction: Direction,

    /// Compress: <n|r|m> <input> <output>. Expand: <input> <output>
    #[arg(num_args = 2..=3, required = true, value_name = "OPERAND")]
    operands: Vec<String>,

    /// Print statistics and enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Show a spinner while working
    #[arg(long)]
    progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Compress,
    Expand,
}

fn parse_direction(value: &str) -> Result<Direction, String> {
    match value {
        "-" => Ok(Direction::Compress),
        "+" => Ok(Direction::Expand),
        other => Err(format!("expected '-' or '+', found '{other}'")),
    }
}

/// A fully resolved command line.
#[derive(Debug, PartialEq)]
enum Job {
    Compress {
        mode: Mode,
        input: PathBuf,
        output: PathBuf,
    },
    Expand {
        input: PathBuf,
        output: PathBuf,
    },
}

fn resolve(direction: Direction, operands: &[String]) -> Result<Job, String> {
    match (direction, operands) {
        (Direction::Compress, [letter, input, output]) => {
            let mode = single_char(letter)
                .and_then(Mode::from_letter)
                .ok_or_else(|| format!("unknown policy '{letter}', expected n, r or m"))?;
            Ok(Job::Compress {
                mode,
                input: input.into(),
                output: output.into(),
            })
        }
        (Direction::Compress, _) => Err("compress expects <n|r|m> <input> <output>".to_string()),
        (Direction::Expand, [input, output]) => Ok(Job::Expand {
            input: input.into(),
            output: output.into(),
        }),
        (Direction::Expand, _) => Err("expand expects <input> <output>".to_string()),
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "alzw_codec=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(job: &Job, progress: bool) -> Result<CodecStats, Box<dyn std::error::Error>> {
    let stats = match job {
        Job::Compress {
            mode,
            input,
            output,
        } => {
            debug!(%mode, input = %input.display(), output = %output.display(), "compressing");
            let pb = create_spinner(format!("Compressing {}", input.display()), progress);
            let result = compress_file(input, output, LzwConfig::new(*mode));
            pb.finish_and_clear();
            result?
        }
        Job::Expand { input, output } => {
            debug!(input = %input.display(), output = %output.display(), "expanding");
            let pb = create_spinner(format!("Expanding {}", input.display()), progress);
            let result = decompress_file(input, output, LzwConfig::default());
            pb.finish_and_clear();
            result?
        }
    };
    Ok(stats)
}

/// Run a resolved job and report the outcome on `stderr`.
///
/// Failures while compressing or expanding are reported but still count as
/// a completed run; only command-line errors change the exit status.
fn execute(job: &Job, progress: bool, verbose: bool, stderr: &mut impl Write) -> ExitStatus {
    match run(job, progress) {
        Ok(stats) => {
            if verbose {
                let action = match job {
                    Job::Compress { .. } => "Compressed",
                    Job::Expand { .. } => "Expanded",
                };
                let _ = print_stats(stderr, action, &stats);
            }
        }
        Err(e) => {
            let _ = writeln!(stderr, "Error: {}", e);
        }
    }
    ExitStatus::Done
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitStatus {
    /// The job ran, whether or not it succeeded.
    Done,
    /// The command line could not be understood.
    Usage,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Done => ExitCode::SUCCESS,
            ExitStatus::Usage => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitStatus::Usage.into(),
            };
        }
    };

    let job = match resolve(cli.direction, &cli.operands) {
        Ok(job) => job,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Usage: alzw - <n|r|m> <input> <output>");
            eprintln!("       alzw + <input> <output>");
            return ExitStatus::Usage.into();
        }
    };

    init_logging(cli.verbose);

    execute(&job, cli.progress, cli.verbose, &mut io::stderr().lock()).into()
}
