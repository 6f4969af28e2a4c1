use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use linecut_domain::{Document, Error};

impl crate::LinecutFS {
    /// Replaces the file at `path` with `doc`. See [`Self::write_atomic`].
    pub fn save_document<T: AsRef<Path>>(path: T, doc: &Document) -> Result<()> {
        Self::write_atomic(path, doc.to_content().as_bytes())
    }

    /// Replaces the file at `path` with `contents` without ever exposing a
    /// partially written file.
    ///
    /// The data goes to a temporary file in the same directory, is flushed
    /// to disk, inherits the permissions of the file it replaces, and is then
    /// renamed over `path`. On failure the temporary file is removed and the
    /// existing file is left as it was.
    pub fn write_atomic<T: AsRef<Path>>(path: T, contents: &[u8]) -> Result<()> {
        let path_ref = path.as_ref();
        // Replace the link target, not the link.
        let target = std::fs::canonicalize(path_ref).unwrap_or_else(|_| path_ref.to_path_buf());

        Self::replace(&target, contents)
            .map_err(|source| Error::Write { path: path_ref.to_path_buf(), source })?;

        tracing::debug!(path = %target.display(), bytes = contents.len(), "Replaced file");
        Ok(())
    }

    fn replace(target: &Path, contents: &[u8]) -> io::Result<()> {
        Self::replace_with(target, contents, copy_permissions)
    }

    /// Stages `contents` next to `target` and runs `prepare` on the staged
    /// file before it is renamed into place. An error from any step drops
    /// the staged file, which deletes it.
    fn replace_with<F>(target: &Path, contents: &[u8], prepare: F) -> io::Result<()>
    where
        F: FnOnce(&Path, &File) -> io::Result<()>,
    {
        let dir = parent_dir(target);
        let mut temp = tempfile::Builder::new()
            .prefix(".linecut-")
            .suffix(".tmp")
            .tempfile_in(&dir)?;

        temp.write_all(contents)?;
        temp.as_file().sync_all()?;
        prepare(target, temp.as_file())?;

        temp.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}

fn copy_permissions(target: &Path, staged: &File) -> io::Result<()> {
    match std::fs::metadata(target) {
        Ok(meta) => staged.set_permissions(meta.permissions()),
        Err(_) => Ok(()),
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
