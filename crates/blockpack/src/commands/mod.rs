//! CLI command implementations.

pub mod build;
pub mod build_all;
pub mod init;
pub mod publish;
