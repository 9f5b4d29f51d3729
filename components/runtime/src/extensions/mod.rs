use std::{cell::RefCell, io::Write, rc::Rc};

use deno_core::{op_sync, Extension};
use isolatecell::IsolateCell;

use crate::{bootstrap, in_mem_source_load_fn};

pub mod isolated;
pub mod print;
pub mod readfile;

/// Where `print` writes its lines.
pub type OutputSink = Rc<RefCell<dyn Write>>;

/// State shared by the host ops, stored in the host isolate's op state.
#[derive(Clone)]
pub struct RuntimeContext {
    pub isolate_cell: Rc<IsolateCell>,
    pub output: OutputSink,
}

/// Builds the capability table bound into the host isolate: `print`, `sandbox` and `readfile`.
pub fn create_extensions(ctx: RuntimeContext) -> Vec<Extension> {
    let (globals_name, globals_source) = bootstrap::HOST_GLOBALS;

    let core_extension = Extension::builder()
        .ops(vec![
            ("op_host_print", op_sync(print::op_host_print)),
            ("op_host_sandbox", op_sync(isolated::op_host_sandbox)),
            ("op_host_readfile", op_sync(readfile::op_host_readfile)),
        ])
        .js(vec![(globals_name, in_mem_source_load_fn(globals_source))])
        .state(move |state| {
            state.put(ctx.clone());
            Ok(())
        })
        .middleware(Box::new(|name, b| match name {
            // we have our own custom print function
            "op_print" => op_sync(sandbox::disabled_op),
            _ => b,
        }))
        .build();

    vec![core_extension]
}
