//! Block package conventions and metadata.
//!
//! This crate knows where things live inside a block package (source entries,
//! build output, `package.json`) and how to enumerate the packages under a
//! blocks root.

pub mod discover;
pub mod layout;
pub mod metadata;

pub use discover::{discover_packages, DiscoverError, PackageDir};
pub use layout::Layout;
pub use metadata::{read_metadata, MetadataError, PackageMetadata};
