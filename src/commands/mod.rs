//! Subcommand implementations.

pub mod snippet;
pub mod tree;
pub mod view;
