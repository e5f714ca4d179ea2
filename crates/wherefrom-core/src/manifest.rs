//! Package manifest loading and alias substitution.

use crate::boundary::MANIFEST_FILE;
use crate::error::Error;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The subset of a package manifest this resolver consumes.
///
/// Every other manifest field is ignored; a missing `alias` section is an
/// empty mapping, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Specifier-to-specifier substitutions.
    #[serde(default)]
    pub alias: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Apply alias substitution to a specifier.
    ///
    /// A single non-recursive exact-key lookup: the whole specifier either
    /// matches a key and is wholly replaced, or passes through unchanged.
    /// Prefix matches never apply. Runs once, before classification, so a
    /// replacement is itself classified as if the caller had written it.
    #[must_use]
    pub fn apply_alias<'a>(&'a self, specifier: &'a str) -> &'a str {
        self.alias
            .get(specifier)
            .map_or(specifier, String::as_str)
    }
}

/// Loads the manifest at a package boundary.
///
/// A trait seam so callers can cache parsed manifests or serve them from a
/// virtual filesystem without touching the resolution logic.
pub trait ManifestSource {
    fn read_manifest(&self, boundary: &Path) -> Result<PackageManifest, Error>;
}

/// Default source: read and parse `<boundary>/package.json` from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManifestSource;

impl ManifestSource for FsManifestSource {
    fn read_manifest(&self, boundary: &Path) -> Result<PackageManifest, Error> {
        let path = boundary.join(MANIFEST_FILE);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            // No manifest file means no aliases. Only reachable with a
            // non-default boundary finder; the default one defines the
            // boundary by this file's presence.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PackageManifest::default());
            }
            Err(source) => return Err(Error::ManifestRead { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| Error::ManifestParse { path, source })
    }
}
