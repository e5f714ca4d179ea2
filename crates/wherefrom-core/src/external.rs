//! External (bare) specifier resolution.
//!
//! The host tool owns the real external-module algorithm; this module only
//! models the consumed interface and ships a node_modules-style default so
//! the resolver works stand-alone. Conditional exports and multiple entry
//! points are out of scope.

use crate::probe;
use std::path::{Path, PathBuf};

/// Node built-in module names. A specifier naming one resolves to the bare
/// identifier itself rather than a filesystem path.
const BUILTIN_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "worker_threads",
    "zlib",
];

/// Host external-module resolution, constrained to a starting directory.
///
/// Any resolver failure is a plain miss (`None`); nothing propagates.
pub trait ExternalResolver {
    /// Resolve `specifier` searching from `from_dir`.
    ///
    /// On success returns either an absolute filesystem path or a bare
    /// module identifier (for runtime built-ins).
    fn resolve_external(&self, specifier: &str, from_dir: &Path) -> Option<String>;
}

/// Default resolver: built-in names, then an upward `node_modules` walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeModulesResolver;

impl ExternalResolver for NodeModulesResolver {
    fn resolve_external(&self, specifier: &str, from_dir: &Path) -> Option<String> {
        if specifier.is_empty() {
            return None;
        }

        if BUILTIN_MODULES.contains(&specifier) {
            return Some(specifier.to_string());
        }

        let (pkg_name, subpath) = split_bare_specifier(specifier);

        let mut current = Some(from_dir);
        while let Some(dir) = current {
            let pkg_dir = dir.join("node_modules").join(pkg_name);
            if pkg_dir.is_dir() {
                let resolved = match subpath {
                    Some(sub) => resolve_subpath(&pkg_dir, sub),
                    None => resolve_package_root(&pkg_dir),
                };
                if let Some(path) = resolved {
                    return Some(path.to_string_lossy().into_owned());
                }
            }
            current = dir.parent();
        }

        None
    }
}

/// Split a bare specifier into package name and optional subpath.
///
/// `lodash/fp` splits at the first slash; `@scope/pkg/sub` keeps the scope
/// with the package name and splits at the second.
fn split_bare_specifier(spec: &str) -> (&str, Option<&str>) {
    if spec.starts_with('@') {
        let mut slashes = 0;
        for (i, c) in spec.char_indices() {
            if c == '/' {
                slashes += 1;
                if slashes == 2 {
                    return (&spec[..i], Some(&spec[i + 1..]));
                }
            }
        }
        return (spec, None);
    }

    match spec.find('/') {
        Some(pos) => (&spec[..pos], Some(&spec[pos + 1..])),
        None => (spec, None),
    }
}

/// Resolve a file inside a package (`pkg/sub/path`).
fn resolve_subpath(pkg_dir: &Path, subpath: &str) -> Option<PathBuf> {
    let extensions = vec!["js".to_string()];
    probe::probe(&pkg_dir.join(subpath), &extensions)
}

/// Resolve a package root via its manifest `main`, falling back to
/// `index.js`.
fn resolve_package_root(pkg_dir: &Path) -> Option<PathBuf> {
    let manifest_path = pkg_dir.join("package.json");

    if let Ok(content) = std::fs::read_to_string(&manifest_path) {
        if let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&content) {
            if let Some(main) = manifest.get("main").and_then(|v| v.as_str()) {
                let main_path = pkg_dir.join(main);
                if main_path.is_file() {
                    return Some(main_path);
                }
                // `main` may omit the extension or point at a directory.
                let extensions = vec!["js".to_string()];
                if let Some(found) = probe::probe(&main_path, &extensions) {
                    return Some(found);
                }
            }
        }
    }

    let index = pkg_dir.join("index.js");
    index.is_file().then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_resolves_to_identifier() {
        let dir = tempdir().unwrap();
        let resolved = NodeModulesResolver.resolve_external("fs", dir.path());
        assert_eq!(resolved, Some("fs".to_string()));
    }

    #[test]
    fn test_split_scoped_specifier() {
        assert_eq!(split_bare_specifier("@scope/pkg"), ("@scope/pkg", None));
        assert_eq!(
            split_bare_specifier("@scope/pkg/sub/file"),
            ("@scope/pkg", Some("sub/file"))
        );
        assert_eq!(split_bare_specifier("lodash/fp"), ("lodash", Some("fp")));
    }

    #[test]
    fn test_package_main_lookup() {
        let dir = tempdir().unwrap();
        let pkg = dir.path().join("node_modules/dep");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("package.json"), r#"{"main": "lib/entry.js"}"#).unwrap();
        fs::create_dir(pkg.join("lib")).unwrap();
        fs::write(pkg.join("lib/entry.js"), "").unwrap();

        let resolved = NodeModulesResolver
            .resolve_external("dep", dir.path())
            .unwrap();
        assert!(resolved.ends_with("entry.js"));
    }

    #[test]
    fn test_package_index_fallback() {
        let dir = tempdir().unwrap();
        let pkg = dir.path().join("node_modules/dep");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("package.json"), r#"{"name": "dep"}"#).unwrap();
        fs::write(pkg.join("index.js"), "").unwrap();

        let resolved = NodeModulesResolver
            .resolve_external("dep", dir.path())
            .unwrap();
        assert!(resolved.ends_with("index.js"));
    }

    #[test]
    fn test_subpath_file_inside_package() {
        let dir = tempdir().unwrap();
        let pkg = dir.path().join("node_modules/dep");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("package.json"), "{}").unwrap();

        let resolved = NodeModulesResolver
            .resolve_external("dep/package.json", dir.path())
            .unwrap();
        assert!(resolved.ends_with("package.json"));
    }

    #[test]
    fn test_walks_up_to_outer_node_modules() {
        let dir = tempdir().unwrap();
        let pkg = dir.path().join("node_modules/dep");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("index.js"), "").unwrap();

        let nested = dir.path().join("src/deep/deeper");
        fs::create_dir_all(&nested).unwrap();

        let resolved = NodeModulesResolver.resolve_external("dep", &nested).unwrap();
        assert!(resolved.ends_with("index.js"));
    }

    #[test]
    fn test_unknown_module_misses() {
        let dir = tempdir().unwrap();
        assert_eq!(
            NodeModulesResolver.resolve_external("no-such-module", dir.path()),
            None
        );
    }

    #[test]
    fn test_empty_specifier_misses() {
        let dir = tempdir().unwrap();
        assert_eq!(NodeModulesResolver.resolve_external("", dir.path()), None);
    }
}
