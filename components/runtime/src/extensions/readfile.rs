use std::path::Path;

use deno_core::OpState;
use sandbox::AnyError;

use crate::files;

// a failed read is thrown in the calling script, it's up to the script to catch it
pub fn op_host_readfile(_state: &mut OpState, path: String, _: ()) -> Result<String, AnyError> {
    Ok(files::read_source(Path::new(&path))?)
}
