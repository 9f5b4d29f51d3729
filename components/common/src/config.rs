use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Clone, Debug, StructOpt)]
#[structopt(name = "evalhost", about = "Evaluates script files in a host isolate")]
pub struct RunConfig {
    /// Script evaluated once before the input files, replacing the built in bootstrap
    #[structopt(long, env = "EVALHOST_BOOTSTRAP", parse(from_os_str))]
    pub bootstrap: Option<PathBuf>,

    /// Flags passed on to V8, e.g. --v8-flags=--optimize_for_size
    #[structopt(
        long = "v8-flags",
        allow_hyphen_values = true,
        number_of_values = 1,
        use_delimiter = true
    )]
    pub v8_flags: Vec<String>,

    /// Files to evaluate, in order
    #[structopt(required = true, min_values = 1, parse(from_os_str))]
    pub paths: Vec<PathBuf>,
}
