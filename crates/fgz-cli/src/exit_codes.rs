//! Exit codes for the `fgz` binary. Build pipelines key off these.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PACK_FAILED: i32 = 1; // Filesystem, encoding or compression failure
pub const EXIT_CONFIG_ERROR: i32 = 2; // Missing destination or invalid settings
