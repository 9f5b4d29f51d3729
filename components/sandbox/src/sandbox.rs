use deno_core::{op_sync, serde_json, v8, Extension, OpState, RuntimeOptions};
use isolatecell::{IsolateCell, ManagedIsolate};

use crate::{util, AnyError, Outcome};

pub const SANDBOX_FILENAME: &str = "sandboxed.js";

/// A fresh isolate with nothing but the engine defaults in its global namespace.
///
/// None of the host functions are registered here, so code running inside can't print, read
/// files or open further sandboxes.
pub struct Sandbox {
    runtime: ManagedIsolate,
}

impl Sandbox {
    pub fn new() -> Self {
        let options = RuntimeOptions {
            extensions: vec![isolation_extension()],
            ..Default::default()
        };

        Sandbox {
            runtime: ManagedIsolate::new(options),
        }
    }

    /// Evaluates `source` as a classic script and converts the completion value to a string.
    ///
    /// Syntax errors, runtime errors and errors thrown while converting the value all end up
    /// in `Err` as a description, nothing is propagated.
    pub fn eval(&mut self, cell: &IsolateCell, source: &str) -> Outcome {
        let mut rt = cell.enter_isolate(&mut self.runtime);

        let value = match rt.execute_script(SANDBOX_FILENAME, source) {
            Ok(v) => v,
            Err(e) => return Err(util::describe_error(&e)),
        };

        let scope = &mut rt.handle_scope();
        let local = v8::Local::new(scope, value);
        util::display_string(scope, local)
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

// the engine ships its own print op, sandboxed code doesn't get to use it
fn isolation_extension() -> Extension {
    Extension::builder()
        .middleware(Box::new(|name, b| match name {
            "op_print" => op_sync(disabled_op),
            _ => b,
        }))
        .build()
}

pub fn disabled_op(
    _state: &mut OpState,
    _args: serde_json::Value,
    _: serde_json::Value,
) -> Result<(), AnyError> {
    Err(anyhow::anyhow!("this op is disabled"))
}
