#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod boundary;
pub mod config;
pub mod error;
pub mod external;
pub mod manifest;
pub mod paths;
pub mod plugin;
pub mod probe;
pub mod resolve;
pub mod scan;
pub mod specifier;
pub mod version;

pub use boundary::{tilde_boundary, BoundaryFinder, ManifestBoundaryFinder};
pub use config::ResolverConfig;
pub use error::Error;
pub use external::{ExternalResolver, NodeModulesResolver};
pub use manifest::{FsManifestSource, ManifestSource, PackageManifest};
pub use plugin::INTERFACE_VERSION;
pub use resolve::{ResolutionResult, Resolver};
pub use scan::{scan_imports, ImportKind, ImportSpec};
pub use specifier::SpecifierKind;
pub use version::VERSION;
