//! Build pipeline for block packages.
//!
//! [`PackageBuilder`] turns one package's sources into `dist/` bundles;
//! [`Orchestrator`] runs it over every package under a blocks root, one at a
//! time, stopping at the first failure.

pub mod builder;
pub mod orchestrator;

#[cfg(test)]
mod test_support;

pub use builder::{BuildArtifacts, BuildError, PackageBuilder};
pub use orchestrator::{BuildAllReport, Orchestrator};
