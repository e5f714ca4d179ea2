//! Resolution orchestrator.
//!
//! One call per specifier: locate the package boundary, load its manifest,
//! apply alias substitution, classify, dispatch. Everything is rebuilt from
//! disk per call; no state survives between invocations, so concurrent use
//! from independent threads is safe.

use crate::boundary::{tilde_boundary, BoundaryFinder, ManifestBoundaryFinder};
use crate::config::ResolverConfig;
use crate::error::Error;
use crate::external::{ExternalResolver, NodeModulesResolver};
use crate::manifest::{FsManifestSource, ManifestSource};
use crate::paths::{join_normalized, normalize};
use crate::probe::probe;
use crate::specifier::SpecifierKind;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of a resolve call.
///
/// `found` and `path` move together: construct through [`Self::resolved`] or
/// [`Self::miss`] and the invariant `found == path.is_some()` holds by
/// construction. For external resolutions `path` may be a bare module
/// identifier rather than a filesystem path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResolutionResult {
    pub found: bool,
    pub path: Option<String>,
}

impl ResolutionResult {
    /// A successful resolution.
    #[must_use]
    pub fn resolved(path: impl Into<String>) -> Self {
        Self {
            found: true,
            path: Some(path.into()),
        }
    }

    /// A resolution miss. Normal outcome, not an error.
    #[must_use]
    pub fn miss() -> Self {
        Self {
            found: false,
            path: None,
        }
    }
}

impl From<Option<PathBuf>> for ResolutionResult {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or_else(Self::miss, |p| {
            Self::resolved(p.to_string_lossy().into_owned())
        })
    }
}

/// Specifier resolver with injectable collaborators.
///
/// The default wiring reads everything from the live filesystem; tests and
/// caching layers substitute their own collaborators.
pub struct Resolver {
    boundaries: Box<dyn BoundaryFinder>,
    manifests: Box<dyn ManifestSource>,
    external: Box<dyn ExternalResolver>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(
            Box::new(ManifestBoundaryFinder),
            Box::new(FsManifestSource),
            Box::new(NodeModulesResolver),
        )
    }
}

impl Resolver {
    /// Build a resolver from explicit collaborators.
    #[must_use]
    pub fn new(
        boundaries: Box<dyn BoundaryFinder>,
        manifests: Box<dyn ManifestSource>,
        external: Box<dyn ExternalResolver>,
    ) -> Self {
        Self {
            boundaries,
            manifests,
            external,
        }
    }

    /// Resolve an import specifier written in `source_file`.
    ///
    /// A specifier with no matching file is a miss in the returned result.
    /// A source file with no package boundary above it, or an unreadable
    /// manifest, is a fatal error and propagates.
    pub fn resolve(
        &self,
        specifier: &str,
        source_file: &Path,
        config: &ResolverConfig,
    ) -> Result<ResolutionResult, Error> {
        let source_dir = source_file.parent().unwrap_or_else(|| Path::new("."));
        let boundary = self.boundaries.find_boundary(source_file)?;

        let manifest = self.manifests.read_manifest(&boundary)?;
        let specifier = manifest.apply_alias(specifier);

        let extensions = config.normalized_extensions();
        let project_root = match &config.root_dir {
            Some(root_dir) => normalize(&boundary.join(root_dir)),
            None => source_dir.to_path_buf(),
        };

        let result = match SpecifierKind::classify(specifier) {
            SpecifierKind::PackageAbsolute => {
                let rest = &specifier[1..];
                probe(&join_normalized(&boundary, rest), &extensions).into()
            }
            SpecifierKind::TildeRoot => {
                self.resolve_tilde(specifier, source_dir, &project_root, &extensions)
            }
            SpecifierKind::Relative => {
                probe(&join_normalized(source_dir, specifier), &extensions).into()
            }
            SpecifierKind::External => self
                .external
                .resolve_external(specifier, source_dir)
                .map_or_else(ResolutionResult::miss, ResolutionResult::resolved),
        };

        Ok(result)
    }

    fn resolve_tilde(
        &self,
        specifier: &str,
        source_dir: &Path,
        project_root: &Path,
        extensions: &[String],
    ) -> ResolutionResult {
        let rest = specifier
            .strip_prefix('~')
            .map(|r| r.strip_prefix('/').unwrap_or(r))
            .unwrap_or(specifier);

        let root = tilde_boundary(source_dir, project_root);
        let candidate = join_normalized(&root, rest);

        // A target above the boundary is never probed, even if the file
        // exists on disk.
        if !candidate.starts_with(&root) {
            return ResolutionResult::miss();
        }

        probe(&candidate, extensions).into()
    }
}
