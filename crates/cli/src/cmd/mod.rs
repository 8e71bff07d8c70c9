pub mod convert;
pub mod doctor;
pub mod notion;
pub mod single;
pub mod split;

use std::path::Path;

use mdqmd_core::config::{ConfigLoader, ResolvedConfig};

use crate::logging;

/// Load configuration and install logging, or exit with the load error.
pub(crate) fn init(config: Option<&Path>, verbose: bool) -> ResolvedConfig {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&rc, verbose);
    rc
}

/// Flush logs and exit with status 1.
pub(crate) fn exit_failure() -> ! {
    logging::flush();
    std::process::exit(1)
}
