use std::{
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};

use hexwords::{Config, DEFAULT_MAX_INPUT_SIZE};

/// Packs a text file of hex digits into a binary file, four digits per
/// big endian 16 bit word. `0x`/`0X` prefixes are skipped.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Hex listing to read
    input : PathBuf,

    /// Binary file to create, must not exist yet
    output : PathBuf,

    /// Largest input accepted, in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_INPUT_SIZE)]
    max_size : usize,

    /// Fail on the first invalid digit instead of warning
    #[arg(long)]
    strict : bool,

    /// Verbose output
    #[arg(short, long)]
    verbose : bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // not enough arguments is a usage request, not a failure
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("{}", Args::command().render_usage());
            return ExitCode::SUCCESS
        },
        Err(e) => e.exit(),
    };

    let env = env_logger::Env::default()
        .default_filter_or(if args.verbose { "debug" } else { "warn" });
    env_logger::Builder::from_env(env).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR]: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args : &Args) -> anyhow::Result<()> {
    let config = Config::default()
        .max_input_size(args.max_size)
        .strict(args.strict);

    let report = hexwords::decode_file(&args.input, &args.output, &config)
        .with_context(|| format!("cannot convert '{}'", args.input.display()))?;

    if !report.invalid.is_empty() {
        log::warn!("{} invalid digits were written as 0", report.invalid.len());
    }

    println!(
        "Successfully wrote file '{}' of size '{}'",
        report.output.display(),
        report.written,
    );

    Ok(())
}
