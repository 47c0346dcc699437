use crate::domain::model::ConversionJob;
use crate::utils::error::Result;
use std::io;
use std::path::{Path, PathBuf};

/// File access used by the reader and renderer.
///
/// Methods return raw [`io::Result`] so callers can tell a missing source apart
/// from other failures.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replaces `path` with `data` in full, or leaves it untouched on error.
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Location of `path` as seen from the working directory.
    fn resolve(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

pub trait JobProvider {
    fn base_dir(&self) -> &Path;
    fn jobs(&self) -> Result<Vec<ConversionJob>>;
}
