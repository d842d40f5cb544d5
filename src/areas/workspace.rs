//! Working tree access.
//!
//! The workspace is the file tree the repository tracks. It resolves
//! user-supplied paths against the repository root, expands directories to
//! the files beneath them, and reads file content for staging. The
//! metadata area itself is never part of the workspace.

use crate::areas::repository::METADATA_DIR;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expand a path argument to the repository-relative files it names.
    ///
    /// A file expands to itself; a directory expands to every file beneath
    /// it. Entries under the metadata area are skipped.
    pub fn list_files(&self, path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let absolute_path = self.absolutize(path)?;

        if !absolute_path.exists() {
            anyhow::bail!("the specified path does not exist: {}", path.display());
        }

        if absolute_path.is_dir() {
            Ok(WalkDir::new(&absolute_path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_file())
                .filter_map(|entry| self.relative_to_root(entry.path()))
                .filter(|relative_path| !Self::is_metadata_path(relative_path))
                .collect::<Vec<_>>())
        } else {
            let relative_path = self
                .relative_to_root(&absolute_path)
                .with_context(|| format!("path is outside the repository: {}", path.display()))?;

            if Self::is_metadata_path(&relative_path) {
                anyhow::bail!("refusing to track the metadata area: {}", path.display());
            }

            Ok(vec![relative_path])
        }
    }

    pub fn read_file(&self, relative_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(relative_path);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    /// Render a repository-relative path with `/` separators, the form
    /// used for index keys and commit tree entries on every platform.
    pub fn relative_name(relative_path: &Path) -> anyhow::Result<String> {
        let components = relative_path
            .components()
            .map(|component| {
                component
                    .as_os_str()
                    .to_str()
                    .context("path is not valid UTF-8")
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(components.join("/"))
    }

    fn absolutize(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };

        joined
            .canonicalize()
            .with_context(|| format!("unable to resolve path {}", path.display()))
    }

    fn relative_to_root(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(self.path.as_ref())
            .ok()
            .map(Path::to_path_buf)
    }

    fn is_metadata_path(relative_path: &Path) -> bool {
        relative_path
            .components()
            .next()
            .is_some_and(|component| component.as_os_str() == METADATA_DIR)
    }
}
