use clap::Parser;
use locomotive_check_digit::logger;
use locomotive_check_digit::{render, CheckDigitGenerator, GeneratorConfig, OutputFormat};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "locomotive-check-digit")]
#[command(about = "Computes the check digit of 11-digit locomotive serial numbers")]
struct Args {
    /// Serial numbers (or complete locomotive numbers with --verify)
    inputs: Vec<String>,

    /// Read inputs from stdin, one per line
    #[arg(long)]
    stdin: bool,

    /// Check complete 12-digit locomotive numbers instead of generating check digits
    #[arg(long)]
    verify: bool,

    /// Output format: text or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Process inputs on all cores
    #[arg(long)]
    parallel: bool,

    /// JSON configuration file. Command line flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read config file {path:?}: {source}")]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("Invalid config file {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No input given. Pass serial numbers as arguments or use --stdin")]
    NoInput,

    #[error("Failed to read input: {0}")]
    ReadInput(io::Error),

    #[error("Failed to write output: {0}")]
    WriteOutput(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn load_config(args: &Args) -> Result<GeneratorConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&content).map_err(|source| CliError::ParseConfig {
                path: path.clone(),
                source,
            })?
        }
        None => GeneratorConfig::new(),
    };

    if let Some(format) = args.format {
        config = config.output_format(format);
    }
    if args.parallel {
        config = config.parallel(true);
    }
    Ok(config)
}

/// Strips the line ending left by `BufRead::lines` on CRLF input. Nothing else is trimmed, so
/// padded input is reported as invalid instead of silently fixed.
fn normalize_line(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn read_inputs(args: &Args, stdin: impl BufRead) -> Result<Vec<String>, CliError> {
    let mut inputs = args.inputs.clone();
    if args.stdin {
        for line in stdin.lines() {
            let line = line.map_err(CliError::ReadInput)?;
            inputs.push(normalize_line(&line).to_owned());
        }
    }
    if inputs.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(inputs)
}

/// Returns whether every input succeeded.
fn run(args: &Args, stdin: impl BufRead, mut out: impl Write) -> Result<bool, CliError> {
    let config = load_config(args)?;
    tracing::debug!("config: {:?}", config);
    let inputs = read_inputs(args, stdin)?;
    let format = config.output_format;
    let generator = CheckDigitGenerator::new(config);

    let all_succeeded = if args.verify {
        let reports = generator.verify_all(&inputs);
        for report in &reports {
            writeln!(out, "{}", render(report, format)?)?;
        }
        reports.iter().all(|report| report.valid)
    } else {
        let reports = generator.generate_all(&inputs);
        for report in &reports {
            writeln!(out, "{}", render(report, format)?)?;
        }
        reports.iter().all(|report| report.is_generated())
    };
    out.flush()?;

    tracing::info!(inputs = inputs.len(), all_succeeded, "finished");
    Ok(all_succeeded)
}

fn exit_status(result: &Result<bool, CliError>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let result = run(&args, io::stdin().lock(), io::stdout().lock());
    if let Err(err) = &result {
        eprintln!("{err}");
    }
    ExitCode::from(exit_status(&result))
}
