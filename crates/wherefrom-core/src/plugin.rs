//! Host plugin adapter.
//!
//! The host tool speaks to resolver plugins through a versioned contract: a
//! protocol version identifier plus a single synchronous resolve entry
//! point. This adapter sits outside the core so the core stays testable
//! without the host present.

use crate::config::ResolverConfig;
use crate::error::Error;
use crate::resolve::{ResolutionResult, Resolver};
use std::path::Path;

/// Plugin protocol version exposed to the host.
pub const INTERFACE_VERSION: u32 = 2;

/// Resolve a specifier with the default filesystem-backed collaborators.
///
/// Pure with respect to program state: the outcome depends only on the
/// arguments and filesystem contents.
pub fn resolve(
    specifier: &str,
    source_file: &Path,
    config: &ResolverConfig,
) -> Result<ResolutionResult, Error> {
    Resolver::default().resolve(specifier, source_file, config)
}
