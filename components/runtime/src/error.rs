use std::path::PathBuf;

use sandbox::AnyError;

/// Exit status used when the bootstrap source fails to evaluate, the engine's error status.
pub const BOOTSTRAP_FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("couldn't read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("bootstrap evaluation failed: {0}")]
    Bootstrap(AnyError),

    #[error("{0}")]
    Eval(AnyError),

    #[error("V8 did not recognize flags: {}", .0.join(" "))]
    UnrecognizedV8Flags(Vec<String>),

    #[error("failed writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RuntimeError::ReadFile { .. } => 1,
            RuntimeError::Bootstrap(_) => BOOTSTRAP_FAILURE_EXIT_CODE,
            RuntimeError::Eval(_) => 1,
            RuntimeError::UnrecognizedV8Flags(_) => 1,
            RuntimeError::Output(_) => 1,
        }
    }
}
