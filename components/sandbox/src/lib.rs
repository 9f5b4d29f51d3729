pub use sandbox::{disabled_op, Sandbox, SANDBOX_FILENAME};
pub use util::{describe_error, display_string, eval_isolated, FALLBACK_DESCRIPTION};

/// Polymorphic error type able to represent different error domains.
///
/// Currently reusing [anyhow::Error](../anyhow/enum.Error.html).
// use through deno_core, to make sure same version of anyhow crate is used
pub type AnyError = deno_core::error::AnyError;

/// Outcome of a single isolated evaluation before it's collapsed to a string.
///
/// `Ok` holds the display string of the completion value, `Err` the description of whatever
/// was thrown.
pub type Outcome = Result<String, String>;

mod sandbox;
mod util;
