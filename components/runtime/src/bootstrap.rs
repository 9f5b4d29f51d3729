macro_rules! include_js {
    ($f:tt) => {
        include_str!(concat!("js/", $f))
    };
}

pub const BOOTSTRAP_FILENAME: &str = "bootstrap.js";

/// The environment evaluated once in the host isolate before any input file.
pub const BOOTSTRAP_SOURCE: &str = include_js!("bootstrap.js");

/// Binds the host functions into the global namespace, run as part of the extension so the
/// bindings exist before the bootstrap.
pub const HOST_GLOBALS: (&str, &str) = ("host_globals.js", include_js!("host_globals.js"));
