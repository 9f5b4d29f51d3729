use deno_core::v8_set_flags;
use tracing::info;

use crate::RuntimeError;

// V8 parses flags like a command line and ignores the first entry
const ARG0: &str = "evalhost";

#[derive(Debug, PartialEq, Eq)]
pub enum V8FlagsOutcome {
    Applied,
    /// V8 printed its flag help, the caller should exit.
    HelpPrinted,
}

/// Hands `flags` to V8. Has to run before the first isolate is created.
pub fn init_v8_flags(flags: &[String]) -> Result<V8FlagsOutcome, RuntimeError> {
    let unrecognized = v8_set_flags(with_arg0(flags))
        .into_iter()
        .skip(1)
        .collect::<Vec<_>>();

    if !unrecognized.is_empty() {
        return Err(RuntimeError::UnrecognizedV8Flags(unrecognized));
    }

    if !flags.is_empty() {
        info!("applied v8 flags: {}", flags.join(" "));
    }

    if requests_help(flags) {
        Ok(V8FlagsOutcome::HelpPrinted)
    } else {
        Ok(V8FlagsOutcome::Applied)
    }
}

fn with_arg0(flags: &[String]) -> Vec<String> {
    std::iter::once(ARG0.to_owned())
        .chain(flags.iter().cloned())
        .collect()
}

fn requests_help(flags: &[String]) -> bool {
    flags.iter().any(|flag| flag == "-help" || flag == "--help")
}
