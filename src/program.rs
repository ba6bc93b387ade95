//! Project-level driver: discover source files under a root and rewrite them.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, TransformError, ERR_IO};
use crate::transformer::{SvgJsxTransformer, TransformOutput};

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

/// Result of transforming one file of a project.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub output: Result<TransformOutput>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectProgram {
    root: PathBuf,
    files: Vec<PathBuf>,
}

fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.ends_with(".d.ts") || name.ends_with(".d.mts") || name.ends_with(".d.cts") {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

impl ProjectProgram {
    /// Collect every source file under `root`, skipping `node_modules`.
    pub fn discover(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let mut files = Vec::new();

        let walker = WalkDir::new(&root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != "node_modules");

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if entry.file_type().is_file() && is_source_file(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => warn!(error = %e, "skipping unreadable entry"),
            }
        }

        files.sort();
        debug!(root = %root.display(), files = files.len(), "discovered source files");
        Self { root, files }
    }

    /// A program over an explicit file list.
    pub fn from_files(root: impl AsRef<Path>, files: Vec<PathBuf>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            files,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Transform every file in parallel. Results keep discovery order.
    pub fn transform_all(&self, transformer: &SvgJsxTransformer) -> Vec<FileResult> {
        self.files
            .par_iter()
            .map(|path| FileResult {
                path: path.clone(),
                output: transform_file(transformer, path),
            })
            .collect()
    }
}

pub fn transform_file(transformer: &SvgJsxTransformer, path: &Path) -> Result<TransformOutput> {
    let source = fs::read_to_string(path).map_err(|e| {
        TransformError::new(
            ERR_IO,
            format!("Failed to read \"{}\": {}", path.display(), e),
            path,
        )
    })?;
    transformer.transform(&source, path)
}
