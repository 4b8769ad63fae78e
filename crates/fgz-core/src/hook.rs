//! Build-hook integration: pack a finished output directory into one archive.
//!
//! The hook runs once after the build tool has written its output directory:
//!
//! 1. Validate the configuration (destination required)
//! 2. Read every regular file directly inside `source_dir`
//! 3. Append them to an [`ArchiveBuilder`] and compress
//! 4. Create the destination's parent (one level only) and write the archive
//!
//! The first failure aborts the run. Nothing is retried.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::archive::ArchiveBuilder;
use crate::compress::CompressionLevel;
use crate::error::{PackError, PackResult};
use crate::record::Entry;

/// Default build output directory.
pub const DEFAULT_SOURCE_DIR: &str = "dist";

/// Order in which directory entries are appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Directory-iteration order as returned by the OS. Not reproducible
    /// across platforms or filesystems.
    #[default]
    Filesystem,
    /// Sorted by name bytes.
    Sorted,
}

/// Configuration for one hook invocation.
#[derive(Debug, Clone)]
pub struct HookConfig {
    pub source_dir: PathBuf,
    pub destination: Option<PathBuf>,
    pub order: EntryOrder,
    pub level: CompressionLevel,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            destination: None,
            order: EntryOrder::default(),
            level: CompressionLevel::default(),
        }
    }
}

impl HookConfig {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    /// Check the configuration without touching the filesystem.
    pub fn validate(&self) -> PackResult<ValidatedHook<'_>> {
        let destination = self
            .destination
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(PackError::MissingDestination)?;
        Ok(ValidatedHook {
            source_dir: &self.source_dir,
            destination,
            order: self.order,
            level: self.level,
        })
    }
}

/// A [`HookConfig`] whose destination is known to be present.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedHook<'a> {
    pub source_dir: &'a Path,
    pub destination: &'a Path,
    pub order: EntryOrder,
    pub level: CompressionLevel,
}

/// Summary of a completed pack run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PackReport {
    pub destination: PathBuf,
    pub entries: usize,
    /// Entry names in archive order, lossily decoded for display.
    pub names: Vec<String>,
    pub raw_bytes: usize,
    pub compressed_bytes: usize,
}

/// Run the hook end to end.
pub async fn run_build_hook(config: &HookConfig) -> PackResult<PackReport> {
    let hook = config.validate()?;
    info!("packaging {}", hook.destination.display());

    let entries = collect_entries(hook.source_dir, hook.order)?;

    let mut builder = ArchiveBuilder::new().with_level(hook.level);
    let mut names = Vec::with_capacity(entries.len());
    for entry in entries {
        builder.append(&entry.name, &entry.payload)?;
        names.push(String::from_utf8_lossy(&entry.name).into_owned());
    }
    let raw_bytes = builder.pending_bytes();

    let data = builder.finish_async().await?;

    ensure_parent_dir(hook.destination)?;
    fs::write(hook.destination, &data)
        .map_err(|e| PackError::filesystem("write", hook.destination, e))?;

    let report = PackReport {
        destination: hook.destination.to_path_buf(),
        entries: names.len(),
        names,
        raw_bytes,
        compressed_bytes: data.len(),
    };
    info!(
        entries = report.entries,
        raw_bytes = report.raw_bytes,
        compressed_bytes = report.compressed_bytes,
        "wrote {}",
        report.destination.display()
    );
    Ok(report)
}

/// Read the direct children of `dir` that are regular files.
///
/// Symlinks are followed. Directories and other file types are skipped.
pub fn collect_entries(dir: &Path, order: EntryOrder) -> PackResult<Vec<Entry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| PackError::filesystem("read directory", dir, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| PackError::filesystem("read directory", dir, e))?;
        let path = dir_entry.path();
        let metadata =
            fs::metadata(&path).map_err(|e| PackError::filesystem("stat", &path, e))?;
        if !metadata.is_file() {
            debug!("skipping non-regular entry {}", path.display());
            continue;
        }

        let payload = fs::read(&path).map_err(|e| PackError::filesystem("read", &path, e))?;
        let name = dir_entry.file_name().into_encoded_bytes();
        entries.push(Entry { name, payload });
    }

    if order == EntryOrder::Sorted {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(entries)
}

/// Create the destination's parent directory if missing. Only one level is
/// created; a missing grandparent is an error.
fn ensure_parent_dir(destination: &Path) -> PackResult<()> {
    let Some(parent) = destination.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    debug!("creating {}", parent.display());
    fs::create_dir(parent).map_err(|e| PackError::filesystem("create directory", parent, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_requires_destination() {
        let cfg = HookConfig::default();
        assert!(matches!(cfg.validate(), Err(PackError::MissingDestination)));

        let cfg = HookConfig::default().with_destination("");
        assert!(matches!(cfg.validate(), Err(PackError::MissingDestination)));

        let cfg = HookConfig::default().with_destination("out/app.fgz");
        let hook = cfg.validate().unwrap();
        assert_eq!(hook.destination, Path::new("out/app.fgz"));
        assert_eq!(hook.source_dir, Path::new(DEFAULT_SOURCE_DIR));
    }

    #[test]
    fn test_collect_entries_skips_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.js"), b"js").unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets").join("nested.png"), b"png").unwrap();

        let entries = collect_entries(dir.path(), EntryOrder::Sorted).unwrap();
        assert_eq!(entries, vec![Entry::new("app.js", "js")]);
    }

    #[test]
    fn test_collect_entries_sorted_by_name_bytes() {
        let dir = tempdir().unwrap();
        for name in ["b.css", "a.js", "C.txt"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        let names: Vec<Vec<u8>> = collect_entries(dir.path(), EntryOrder::Sorted)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            names,
            vec![b"C.txt".to_vec(), b"a.js".to_vec(), b"b.css".to_vec()]
        );
    }

    #[test]
    fn test_collect_entries_missing_dir_is_filesystem_error() {
        let dir = tempdir().unwrap();
        let err = collect_entries(&dir.path().join("nope"), EntryOrder::Filesystem).unwrap_err();
        assert!(matches!(
            err,
            PackError::Filesystem {
                action: "read directory",
                ..
            }
        ));
    }

    #[test]
    fn test_ensure_parent_dir_creates_one_level() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out").join("app.fgz");
        ensure_parent_dir(&dest).unwrap();
        assert!(dir.path().join("out").is_dir());

        let nested = dir.path().join("x").join("y").join("app.fgz");
        let err = ensure_parent_dir(&nested).unwrap_err();
        assert!(matches!(
            err,
            PackError::Filesystem {
                action: "create directory",
                ..
            }
        ));
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        ensure_parent_dir(Path::new("app.fgz")).unwrap();
    }
}
