use deno_core::OpState;
use sandbox::AnyError;

use super::RuntimeContext;

/// Evaluates `source` in a new isolate stacked on top of the host one.
///
/// Never fails: whatever happens inside the sandbox comes back as the returned string.
pub fn op_host_sandbox(state: &mut OpState, source: String, _: ()) -> Result<String, AnyError> {
    let cell = state.borrow::<RuntimeContext>().isolate_cell.clone();

    Ok(sandbox::eval_isolated(&cell, &source))
}
