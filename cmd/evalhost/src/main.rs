use std::{io::Write, path::PathBuf};

use common::config::RunConfig;
use runtime::{files, HostOptions, HostRuntime, RuntimeError, V8FlagsOutcome};
use tracing::{error, info};

fn main() {
    let config = common::common_init();

    match runtime::init_v8_flags(&config.v8_flags) {
        Ok(V8FlagsOutcome::Applied) => {}
        Ok(V8FlagsOutcome::HelpPrinted) => std::process::exit(0),
        Err(err) => {
            error!(%err, "fatal");
            std::process::exit(err.exit_code());
        }
    }

    if let Err(err) = run(&config) {
        error!(%err, "fatal");
        std::process::exit(err.exit_code());
    }
}

// the host runtime is dropped before this returns, on every path
fn run(config: &RunConfig) -> Result<(), RuntimeError> {
    let bootstrap = match &config.bootstrap {
        Some(path) => Some(files::read_source(path)?),
        None => None,
    };

    let mut host = HostRuntime::initialize(HostOptions {
        bootstrap,
        ..Default::default()
    })?;

    let stdout = std::io::stdout();
    evaluate_paths(&mut host, &config.paths, &mut stdout.lock())?;

    info!("evaluated {} files", config.paths.len());
    host.teardown();

    Ok(())
}

/// Evaluates each path in order and writes one result line per path to `out`.
///
/// A script that throws gets `null` as its line and the next path is evaluated, an
/// unreadable file stops the run.
fn evaluate_paths(
    host: &mut HostRuntime,
    paths: &[PathBuf],
    out: &mut impl Write,
) -> Result<(), RuntimeError> {
    for path in paths {
        match host.evaluate_file(path) {
            Ok(result) => writeln!(out, "{}", result)?,
            Err(err @ RuntimeError::ReadFile { .. }) => return Err(err),
            Err(err) => {
                error!(path = %path.display(), %err, "evaluation failed");
                writeln!(out, "null")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
