//! `esl lower`: load a program, run the pass, render the result.

use anyhow::{Context, Result, bail};
use esl_transpile::{ChangeTracker, CompilerPass, ConvertSuperConstructorCalls, TranspileOptions};
use esl_tree::{Printer, Program};
use std::path::Path;

use crate::args::{Emit, LowerArgs};

#[derive(Debug)]
pub struct LowerOutcome {
    pub output: String,
    pub changes: usize,
}

pub fn load_program(path: &Path) -> Result<Program> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read program {}", path.display()))?;
    let program = Program::from_json(&text)
        .with_context(|| format!("failed to parse program {}", path.display()))?;
    verify_program(&program).with_context(|| format!("malformed program tree in {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        nodes = program.arena.len(),
        files = program.arena.source_files().len(),
        "loaded program"
    );
    Ok(program)
}

fn verify_program(program: &Program) -> Result<()> {
    if program.root.is_none() {
        bail!("program has no root script");
    }
    program.arena.verify_ownership(program.root)?;
    if program.externs.is_some() {
        program.arena.verify_ownership(program.externs)?;
    }
    Ok(())
}

/// Options from `path`, or the defaults when no config file is given.
pub fn load_options(path: Option<&Path>) -> Result<TranspileOptions> {
    let Some(path) = path else {
        return Ok(TranspileOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    TranspileOptions::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Run the conversion over a loaded program and return the change count.
pub fn lower_program(program: &mut Program, options: &TranspileOptions) -> Result<usize> {
    let mut changes = ChangeTracker::new();
    ConvertSuperConstructorCalls::new(options, &mut changes)
        .process(&mut program.arena, program.externs, program.root)
        .context("super constructor call conversion failed")?;
    verify_program(program).context("conversion left a malformed tree")?;
    if !changes.has_changes() {
        tracing::debug!("program has no super constructor calls");
    }
    Ok(changes.changes())
}

pub fn render(program: &Program, emit: Emit) -> Result<String> {
    match emit {
        Emit::Js => {
            let mut js = Printer::print(&program.arena, program.root);
            js.push('\n');
            Ok(js)
        }
        Emit::Json => program.to_json().context("failed to serialize program"),
    }
}

pub fn run_lower(args: &LowerArgs) -> Result<LowerOutcome> {
    let options = load_options(args.config.as_deref())?;
    let mut program = load_program(&args.program)?;
    let changes = lower_program(&mut program, &options)?;
    let output = render(&program, args.emit)?;

    if let Some(out) = &args.out {
        std::fs::write(out, &output).with_context(|| format!("failed to write {}", out.display()))?;
        tracing::debug!(path = %out.display(), bytes = output.len(), "wrote output");
    }
    Ok(LowerOutcome { output, changes })
}
