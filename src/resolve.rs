//! Resolution of sentinel path arguments and loading of the SVG they name.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, TransformError, ERR_IO, ERR_OPTIMIZE};
use crate::markup::{parse_markup, MarkupRoot};
use crate::optimize::MarkupOptimizer;
use crate::options::OptimizerOptions;

pub fn is_relative_path(target: &str) -> bool {
    target.starts_with("./") || target.starts_with("../")
}

/// Lexically normalize `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolve `target` as written in the call inside `from`.
///
/// `./` and `../` paths are joined to the directory of `from`. Anything else
/// goes through module resolution: absolute paths are taken as-is, bare
/// specifiers are looked up in `node_modules` directories from the calling
/// file upwards. Returns `None` when no candidate exists.
pub fn resolve_path(target: &str, from: &Path) -> Option<PathBuf> {
    let base = from.parent().unwrap_or_else(|| Path::new(""));

    if is_relative_path(target) {
        return Some(normalize(&base.join(target)));
    }

    let target_path = Path::new(target);
    if target_path.is_absolute() {
        return target_path.is_file().then(|| normalize(target_path));
    }

    base.ancestors()
        .map(|dir| dir.join("node_modules").join(target_path))
        .find(|candidate| candidate.is_file())
        .map(|candidate| normalize(&candidate))
}

/// Read the SVG at `svg_path`, run the optimizer when configured, and parse it.
/// `from` is the file containing the call, used for error reporting.
pub fn read_svg_file(
    svg_path: &Path,
    from: &Path,
    optimizer: Option<(&dyn MarkupOptimizer, &OptimizerOptions)>,
) -> Result<MarkupRoot> {
    let mut content = match fs::read_to_string(svg_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TransformError::file_not_found(svg_path, from));
        }
        Err(e) => {
            return Err(TransformError::new(
                ERR_IO,
                format!("Failed to read \"{}\": {}", svg_path.display(), e),
                from,
            ));
        }
    };

    if let Some((optimizer, options)) = optimizer {
        content = optimizer
            .optimize(&content, svg_path, options)
            .map_err(|e| {
                TransformError::new(
                    ERR_OPTIMIZE,
                    format!("Failed to optimize \"{}\": {}", svg_path.display(), e),
                    from,
                )
            })?;
    }

    parse_markup(&content, svg_path)
}
