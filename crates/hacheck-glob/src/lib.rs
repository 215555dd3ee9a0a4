//! hacheck-glob: find package files to check.
//!
//! A directory is searched recursively for files with one extension
//! (`yaml` by default). Results are sorted by path so every run sees the
//! files in the same order. Hidden files and `.gitignore` rules are not
//! special; a package directory is checked in full.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::types::TypesBuilder;
use thiserror::Error;

/// Extension searched for when none is given.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Errors from file discovery.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("invalid extension '{0}'")]
    InvalidExtension(String),

    #[error("walk failed: {0}")]
    Walk(#[from] ignore::Error),
}

/// A file found on disk, with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackageFile {
    pub path: PathBuf,
    /// Path relative to the search root, `/`-separated.
    pub display_name: String,
}

impl PackageFile {
    /// A file named explicitly by the user; shown as given.
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = slash_separated(&path);
        Self { path, display_name }
    }
}

fn slash_separated(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
        .replace("//", "/")
}

/// Recursive search for package files under one root.
#[derive(Debug, Clone)]
pub struct PackageWalker {
    root: PathBuf,
    extension: String,
}

impl PackageWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Extension to match, with or without a leading dot.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Walk the root and return matching files sorted by path.
    pub fn discover(&self) -> Result<Vec<PackageFile>, DiscoverError> {
        if !self.root.is_dir() {
            return Err(DiscoverError::NotADirectory(self.root.clone()));
        }
        if self.extension.is_empty() || self.extension.contains(['/', '*']) {
            return Err(DiscoverError::InvalidExtension(self.extension.clone()));
        }

        let mut types = TypesBuilder::new();
        types.add("package", &format!("*.{}", self.extension))?;
        types.select("package");

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .types(types.build()?)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.into_path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            let display_name = slash_separated(relative);
            files.push(PackageFile { path, display_name });
        }
        files.sort();

        tracing::debug!(root = %self.root.display(), count = files.len(), "discovered package files");
        Ok(files)
    }
}

/// Find every `*.yaml` file under `root`.
pub fn discover(root: impl Into<PathBuf>) -> Result<Vec<PackageFile>, DiscoverError> {
    PackageWalker::new(root).discover()
}
