use deno_core::{error::JsError, v8};
use isolatecell::IsolateCell;
use tracing::{info, warn};

use crate::{AnyError, Outcome, Sandbox};

/// Substituted when neither a value nor the error raised while stringifying it can be turned
/// into a string.
pub const FALLBACK_DESCRIPTION: &str = "Error";

/// Evaluates `source` in a brand new isolate and returns the outcome as a plain string.
///
/// The isolate is destroyed before this returns, on both the success and the failure path.
/// Success and failure are indistinguishable by type to the caller, failures are only
/// reported through the log.
pub fn eval_isolated(cell: &IsolateCell, source: &str) -> String {
    let outcome = {
        let mut sandbox = Sandbox::new();
        sandbox.eval(cell, source)
    };

    match outcome {
        Ok(result) => {
            info!(depth = cell.depth(), bytes = result.len(), "sandbox evaluated");
            result
        }
        Err(result) => {
            warn!(%result, code = source, "sandbox evaluation failed");
            result
        }
    }
}

/// Converts `value` to its string form the way `String(value)` would.
///
/// If the conversion throws, the description of that exception is returned as `Err` instead.
pub fn display_string<'s>(
    scope: &mut v8::HandleScope<'s>,
    value: v8::Local<'s, v8::Value>,
) -> Outcome {
    let tc = &mut v8::TryCatch::new(scope);

    if let Some(s) = value.to_string(tc) {
        return Ok(s.to_rust_string_lossy(tc));
    }

    let exception = match tc.exception() {
        Some(e) => e,
        None => return Err(FALLBACK_DESCRIPTION.to_string()),
    };

    match exception.to_string(tc) {
        Some(s) => Err(non_empty(s.to_rust_string_lossy(tc))),
        None => Err(FALLBACK_DESCRIPTION.to_string()),
    }
}

/// Turns an evaluation error into the description of the thrown value, e.g. `Error: x`.
pub fn describe_error(err: &AnyError) -> String {
    let desc = match err.downcast_ref::<JsError>() {
        Some(js_err) => match js_err.message.strip_prefix("Uncaught") {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest).to_string(),
            None => js_err.message.clone(),
        },
        None => err.to_string(),
    };

    non_empty(desc)
}

fn non_empty(desc: String) -> String {
    if desc.is_empty() {
        FALLBACK_DESCRIPTION.to_string()
    } else {
        desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_isolated_returns_plain_strings() {
        let cell = IsolateCell::default();
        assert_eq!(eval_isolated(&cell, "1+1"), "2");
        assert!(eval_isolated(&cell, "throw new Error('x')").contains('x'));
        assert_eq!(cell.depth(), 0);
    }

    #[test]
    fn sequential_calls_share_nothing() {
        let cell = IsolateCell::default();
        assert_eq!(eval_isolated(&cell, "globalThis.leak = 41; leak + 1"), "42");
        assert_eq!(eval_isolated(&cell, "typeof leak"), "undefined");
    }

    #[test]
    fn empty_throw_gets_fallback_description() {
        let cell = IsolateCell::default();
        assert_eq!(eval_isolated(&cell, "throw ''"), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn non_js_errors_use_their_display() {
        let err = anyhow::anyhow!("plain failure");
        assert_eq!(describe_error(&err), "plain failure");
    }
}
