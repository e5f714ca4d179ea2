use serde::Deserialize;
use std::path::PathBuf;

/// Default extension list when `fileExtensions` is not configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js"];

/// Caller-supplied resolver configuration.
///
/// Field names mirror the host plugin's config keys (`fileExtensions`,
/// `rootDir`), so a host config block deserializes directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Extensions to probe, in precedence order. Entries may carry a leading
    /// dot (`".js"`) or not (`"js"`). Unset means `["js"]`; an explicitly
    /// empty list disables extension probing.
    #[serde(default)]
    pub file_extensions: Option<Vec<String>>,

    /// Project root for tilde resolution, interpreted relative to the
    /// package boundary. Unset means the source file's own directory.
    #[serde(default)]
    pub root_dir: Option<PathBuf>,
}

impl ResolverConfig {
    /// Create a config with the given extensions.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.file_extensions = Some(extensions);
        self
    }

    /// Set the tilde project root (package-boundary-relative).
    #[must_use]
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    /// Extension list with at most one leading dot stripped per entry.
    ///
    /// An unset list falls back to [`DEFAULT_EXTENSIONS`]; an explicitly
    /// empty list stays empty.
    #[must_use]
    pub fn normalized_extensions(&self) -> Vec<String> {
        match &self.file_extensions {
            Some(exts) => exts
                .iter()
                .map(|ext| ext.strip_prefix('.').unwrap_or(ext).to_string())
                .collect(),
            None => DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}
