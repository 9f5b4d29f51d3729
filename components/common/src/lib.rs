use structopt::StructOpt;
use tracing_subscriber::{fmt::format::FmtSpan, util::SubscriberInitExt, EnvFilter};

pub mod config;

use crate::config::RunConfig;

pub fn common_init() -> RunConfig {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(dotenv::Error::Io(_)) => {} // ignore io errors
        Err(e) => panic!("failed loading dotenv file: {}", e),
    }
    init_tracing();

    RunConfig::from_args()
}

// stdout carries script output, so all diagnostics go to stderr.
// init also installs the log -> tracing bridge
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .finish()
        .init();
}
