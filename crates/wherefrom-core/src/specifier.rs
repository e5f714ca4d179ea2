//! Specifier classification.
//!
//! A specifier is routed to exactly one of four strategies based on its
//! first character. Classification never inspects the filesystem.

/// Resolution strategy selected by a specifier's leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// `/...` — resolved against the package boundary.
    PackageAbsolute,
    /// `~...` — resolved against the nearest enclosing root.
    TildeRoot,
    /// `....` — resolved against the source file's directory.
    Relative,
    /// Anything else (including the empty string) — delegated to the
    /// external module resolver.
    External,
}

impl SpecifierKind {
    /// Classify a specifier by its first character.
    #[must_use]
    pub fn classify(specifier: &str) -> Self {
        match specifier.chars().next() {
            Some('/') => Self::PackageAbsolute,
            Some('~') => Self::TildeRoot,
            Some('.') => Self::Relative,
            _ => Self::External,
        }
    }
}
