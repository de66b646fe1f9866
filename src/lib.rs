//! Pact Showcase - documentation for the Spring Boot Kafka Pact demo project
//!
//! This crate provides:
//! - A collapsible project tree with per-folder expansion state
//! - Tabbed code samples and a Getting Started guide
//! - An interactive terminal page with a not-found fallback route

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod router;
pub mod tree;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ShowcaseError};
pub use router::Route;
pub use tree::{TreeNode, TreeView};
