//! Freshness scanning: map a filesystem path to its most recent modification time.
//!
//! Two policies exist and they disagree on directories:
//! - [`RecursiveWalk`] reports the newest non-directory entry anywhere below the root.
//! - [`SingleStat`] reports the path's own mtime. Many filesystems leave a
//!   directory's mtime untouched when a contained file is rewritten in place.
//!
//! A deployment runs exactly one of them, chosen through [`ScanPolicy`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Deserialize;

use crate::error::{ProbeError, Result};

/// Timestamp reported when a walk finds no files.
pub const ZERO_TIMESTAMP: SystemTime = SystemTime::UNIX_EPOCH;

/// A blocking scan of one path.
pub trait FreshnessScanner: Send + Sync {
    fn scan(&self, path: &Path) -> Result<SystemTime>;
}

/// Which scanner a deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanPolicy {
    #[default]
    Recursive,
    Stat,
}

impl ScanPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ScanPolicy::Recursive => "recursive",
            ScanPolicy::Stat => "stat",
        }
    }

    pub fn scanner(self) -> &'static dyn FreshnessScanner {
        match self {
            ScanPolicy::Recursive => &RecursiveWalk,
            ScanPolicy::Stat => &SingleStat,
        }
    }

    /// Scan `path` with this policy.
    pub fn scan(self, path: &Path) -> Result<SystemTime> {
        self.scanner().scan(path)
    }
}

impl fmt::Display for ScanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Newest mtime among all non-directory entries of a tree.
///
/// The root is resolved through symlinks; entries below it are not, so a
/// symlink counts as a plain entry with its own mtime. The first error
/// (listing a directory or reading an entry's metadata) aborts the walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveWalk;

impl FreshnessScanner for RecursiveWalk {
    fn scan(&self, path: &Path) -> Result<SystemTime> {
        let root = fs::metadata(path).map_err(|e| ProbeError::scan(path, e))?;
        if !root.is_dir() {
            return root.modified().map_err(|e| ProbeError::scan(path, e));
        }

        let mut most_recent = ZERO_TIMESTAMP;
        let mut pending: Vec<PathBuf> = vec![path.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).map_err(|e| ProbeError::scan(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| ProbeError::scan(&dir, e))?;
                let entry_path = entry.path();
                // DirEntry::metadata does not follow symlinks.
                let meta = entry
                    .metadata()
                    .map_err(|e| ProbeError::scan(&entry_path, e))?;

                if meta.is_dir() {
                    pending.push(entry_path);
                    continue;
                }

                let modified = meta
                    .modified()
                    .map_err(|e| ProbeError::scan(&entry_path, e))?;
                if modified > most_recent {
                    most_recent = modified;
                }
            }
        }

        tracing::trace!(path = %path.display(), ?most_recent, "recursive walk finished");
        Ok(most_recent)
    }
}

/// The path's own mtime, without traversal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleStat;

impl FreshnessScanner for SingleStat {
    fn scan(&self, path: &Path) -> Result<SystemTime> {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| ProbeError::scan(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_names_are_lowercase() {
        assert_eq!(ScanPolicy::Recursive.to_string(), "recursive");
        assert_eq!(ScanPolicy::Stat.to_string(), "stat");
        assert_eq!(ScanPolicy::default(), ScanPolicy::Recursive);
    }
}
