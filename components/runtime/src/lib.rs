use std::{cell::RefCell, path::Path, rc::Rc};

use deno_core::{v8, RuntimeOptions};
use isolatecell::{IsolateCell, ManagedIsolate};
use sandbox::AnyError;
use tracing::info;

pub mod bootstrap;
pub mod error;
pub mod extensions;
pub mod files;
pub mod v8flags;

pub use error::{RuntimeError, BOOTSTRAP_FAILURE_EXIT_CODE};
pub use extensions::{OutputSink, RuntimeContext};
pub use v8flags::{init_v8_flags, V8FlagsOutcome};

pub struct HostOptions {
    /// Replaces the embedded bootstrap source when set.
    pub bootstrap: Option<String>,
    pub output: OutputSink,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            bootstrap: None,
            output: Rc::new(RefCell::new(std::io::stdout())),
        }
    }
}

/// The long lived top level isolate with the host functions bound into it.
///
/// Dropping it tears the isolate down.
pub struct HostRuntime {
    runtime: ManagedIsolate,
    isolate_cell: Rc<IsolateCell>,
}

impl HostRuntime {
    /// Creates the host isolate, binds `print`, `sandbox` and `readfile`, then evaluates the
    /// bootstrap source.
    pub fn initialize(opts: HostOptions) -> Result<Self, RuntimeError> {
        let isolate_cell = Rc::new(IsolateCell::default());

        let ctx = RuntimeContext {
            isolate_cell: isolate_cell.clone(),
            output: opts.output,
        };

        let options = RuntimeOptions {
            extensions: extensions::create_extensions(ctx),
            ..Default::default()
        };

        let mut rt = Self {
            runtime: ManagedIsolate::new(options),
            isolate_cell,
        };

        let source = match &opts.bootstrap {
            Some(src) => src.as_str(),
            None => bootstrap::BOOTSTRAP_SOURCE,
        };

        info!("evaluating bootstrap ({} bytes)", source.len());
        rt.execute(bootstrap::BOOTSTRAP_FILENAME, source)
            .map_err(RuntimeError::Bootstrap)?;

        Ok(rt)
    }

    /// Reads and evaluates a file in the host isolate, returning the result as a string.
    ///
    /// Errors thrown by the script are returned, not caught.
    pub fn evaluate_file(&mut self, path: &Path) -> Result<String, RuntimeError> {
        let source = files::read_source(path)?;
        self.evaluate_source(&path.display().to_string(), &source)
    }

    pub fn evaluate_source(&mut self, name: &str, source: &str) -> Result<String, RuntimeError> {
        info!("evaluating {}", name);
        self.execute(name, source).map_err(RuntimeError::Eval)
    }

    pub fn isolate_cell(&self) -> &IsolateCell {
        &self.isolate_cell
    }

    /// Destroys the host isolate, equivalent to dropping the runtime.
    pub fn teardown(self) {
        info!("tearing down host runtime");
    }

    fn execute(&mut self, name: &str, source: &str) -> Result<String, AnyError> {
        let mut rt = self.isolate_cell.enter_isolate(&mut self.runtime);

        let value = rt.execute_script(name, source)?;
        futures::executor::block_on(rt.run_event_loop(false))?;

        let scope = &mut rt.handle_scope();
        let local = v8::Local::new(scope, value);
        sandbox::display_string(scope, local).map_err(|desc| anyhow::anyhow!(desc))
    }
}

pub fn in_mem_source_load_fn(src: &'static str) -> Box<dyn Fn() -> Result<String, AnyError>> {
    Box::new(move || Ok(src.to_string()))
}
