use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the esl binary.
#[derive(Parser, Debug)]
#[command(name = "esl", version, about = "ES5 lowering passes over serialized program trees")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert super constructor calls in a lowered program.
    Lower(LowerArgs),
}

#[derive(Args, Debug, Clone)]
pub struct LowerArgs {
    /// Serialized program (externs and main tree) to transform.
    pub program: PathBuf,

    /// JSON file with pass options (`inheritsFunction`, `dropSuperInExterns`).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// What to write: printed JavaScript of the main tree, or the transformed
    /// program as JSON.
    #[arg(long, value_enum, default_value = "js", ignore_case = true)]
    pub emit: Emit,

    /// Write the output to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Report the number of changes on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    Js,
    Json,
}
