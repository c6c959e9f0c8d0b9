#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::Write;

use esl_cli::args::{CliArgs, Command};
use esl_cli::driver;

fn main() -> Result<()> {
    // No-op unless ESL_LOG or RUST_LOG is set.
    esl_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match args.command {
        Command::Lower(lower) => {
            let outcome = driver::run_lower(&lower)?;
            if lower.out.is_none() {
                std::io::stdout().lock().write_all(outcome.output.as_bytes())?;
            }
            if lower.verbose {
                eprintln!("{}: {} change(s)", lower.program.display(), outcome.changes);
            }
        }
    }
    Ok(())
}
