//! Static content of the documentation page.
//!
//! Everything here is fixed at compile time. Nothing is parsed or executed.

pub mod page;
mod project;
mod snippets;

pub use project::{project_structure, PROJECT_NAME};
pub use snippets::{
    all_snippets, find_snippet, tab, tabs, Snippet, TabContent, DEFAULT_TAB, TAB_IDS,
};
