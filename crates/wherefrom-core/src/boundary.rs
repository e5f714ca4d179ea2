//! Package-boundary discovery and the tilde-strategy upward walk.

use crate::error::Error;
use std::path::{Path, PathBuf};

/// Manifest file name marking a package boundary.
pub const MANIFEST_FILE: &str = "package.json";

/// Locates the nearest enclosing package boundary for a source file.
///
/// Modeled as a trait so a caller can layer memoization or a virtual
/// filesystem over the lookup without touching the resolution logic.
pub trait BoundaryFinder {
    /// Find the boundary directory for `file`.
    ///
    /// Failure here is fatal to a resolve call: a source file outside any
    /// package is a broken invocation context, not a resolution miss.
    fn find_boundary(&self, file: &Path) -> Result<PathBuf, Error>;
}

/// Default finder: walk up from the file's directory to the first directory
/// containing a `package.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestBoundaryFinder;

impl BoundaryFinder for ManifestBoundaryFinder {
    fn find_boundary(&self, file: &Path) -> Result<PathBuf, Error> {
        let mut current = file.parent().map(Path::to_path_buf).unwrap_or_default();

        loop {
            if current.join(MANIFEST_FILE).is_file() {
                return Ok(current);
            }

            if !current.pop() {
                return Err(Error::BoundaryNotFound {
                    start: file.to_path_buf(),
                });
            }
        }
    }
}

/// Find the root directory a tilde specifier resolves against.
///
/// Starting at the *parent* of the source file's directory, step upward one
/// directory at a time and stop at the first of:
/// 1. the directory equals `project_root`;
/// 2. the directory sits directly under a `node_modules` directory (the
///    source file lives inside an installed dependency, whose own root must
///    not be escaped);
/// 3. the filesystem root.
///
/// The walk is bounded by the starting path's component count, so it always
/// terminates even on malformed inputs.
#[must_use]
pub fn tilde_boundary(source_dir: &Path, project_root: &Path) -> PathBuf {
    let mut current = source_dir
        .parent()
        .unwrap_or(source_dir)
        .to_path_buf();

    let max_steps = current.components().count();
    for _ in 0..max_steps {
        if current == project_root {
            break;
        }

        let under_node_modules = current
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name == "node_modules");
        if under_node_modules {
            break;
        }

        let Some(parent) = current.parent() else {
            break;
        };
        current = parent.to_path_buf();
    }

    current
}
