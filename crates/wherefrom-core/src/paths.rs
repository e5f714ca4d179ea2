//! Lexical path helpers.
//!
//! Probing and boundary-containment checks need paths with `.` and `..`
//! already folded away, including for candidates that do not exist on disk,
//! so normalization here is purely lexical and never touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components lexically.
///
/// `..` pops the previous normal component; at the root it is dropped, so a
/// path can never normalize above the filesystem root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    // Relative paths keep leading `..`; absolute ones stop
                    // at the root.
                    if !out.has_root() {
                        out.push(Component::ParentDir);
                    }
                }
            }
            other => out.push(other),
        }
    }

    out
}

/// Join `rest` onto `base` and normalize the result.
///
/// Mirrors `path.resolve(base, rest)`: an absolute `rest` wins outright.
#[must_use]
pub fn join_normalized(base: &Path, rest: &str) -> PathBuf {
    normalize(&base.join(rest))
}
