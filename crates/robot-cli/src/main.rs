//! robotscript
//!
//! Loads a script file and runs its commands in order. The platform input
//! layer is external; commands are driven through the dry-run backend, which
//! logs input operations and starts `exec` processes for real.

mod args;

use anyhow::{bail, Context, Result};
use args::CliArgs;
use clap::Parser;
use robot_input::{DryRunBackend, TracingObserver};
use robot_script::{ExecutorConfig, Script, ScriptExecutor};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    let path = match args.path {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let script = Script::from_file(&path)
        .with_context(|| format!("failed to load script {}", path.display()))?;

    if args.check {
        println!("{}", serde_json::to_string_pretty(&script)?);
        return Ok(());
    }

    let config = ExecutorConfig::from_env()?;
    info!(
        commands = script.len(),
        path = %path.display(),
        coordinates = ?config.coordinate_policy,
        "Running script"
    );

    let executor = ScriptExecutor::new(config);
    let report = executor.run(&script, &mut DryRunBackend::new(), &mut TracingObserver);

    if report.is_clean() {
        info!(executed = report.executed, "Script finished");
    } else {
        warn!(
            executed = report.executed,
            failed = report.failures.len(),
            "Script finished with failures"
        );
    }

    Ok(())
}

/// Ask for the script path on stdin
fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter the path to your script file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read script path")?;

    let path = line.trim();
    if path.is_empty() {
        bail!("no script path given");
    }
    Ok(PathBuf::from(path))
}
