//! FGZ archive packing.
//!
//! An FGZ archive is a gzip stream whose decompressed content is a plain
//! concatenation of length-prefixed records, one per file:
//!
//! ```text
//! [u32 BE name_len][name][u32 BE data_len][data] ...
//! ```
//!
//! There is no header, footer, entry count or checksum.
//!
//! # Modules
//!
//! - [`record`]: encode one (name, payload) pair
//! - [`archive`]: collect records with `ArchiveBuilder` and compress them
//! - [`compress`]: the gzip stage
//! - [`hook`]: pack a build output directory to a destination file
//!
//! # Example
//!
//! ```no_run
//! use fgz_core::{run_build_hook, EntryOrder, HookConfig};
//!
//! # async fn pack() -> fgz_core::PackResult<()> {
//! let config = HookConfig::new("dist")
//!     .with_destination("build/webview.fgz")
//!     .with_order(EntryOrder::Sorted);
//! let report = run_build_hook(&config).await?;
//! println!("{} entries", report.entries);
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod compress;
pub mod cursor;
pub mod error;
pub mod hook;
pub mod record;

pub use archive::ArchiveBuilder;
pub use compress::{compress, compress_async, CompressionLevel};
pub use error::{ErrorClass, LengthField, PackError, PackResult};
pub use hook::{
    collect_entries, run_build_hook, EntryOrder, HookConfig, PackReport, ValidatedHook,
    DEFAULT_SOURCE_DIR,
};
pub use record::{encode, record_len, Entry};
