use std::io::Write;

use deno_core::OpState;
use sandbox::AnyError;

use super::RuntimeContext;

/// Writes the already stringified arguments as one space separated line.
pub fn op_host_print(state: &mut OpState, args: Vec<String>, _: ()) -> Result<(), AnyError> {
    let ctx = state.borrow::<RuntimeContext>();

    let mut out = ctx.output.borrow_mut();
    writeln!(out, "{}", args.join(" "))?;
    out.flush()?;

    Ok(())
}
