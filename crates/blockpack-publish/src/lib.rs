//! CDN publishing for built block packages.
//!
//! Copies each package's `dist/` tree to `<public>/<name>/<version>/` so every
//! released version stays addressable side by side.

pub mod copy;
pub mod publisher;

pub use copy::copy_tree;
pub use publisher::{PublishConfig, PublishError, PublishReport, PublishedArtifact, Publisher};
