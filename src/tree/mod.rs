//! Collapsible tree: immutable node data plus per-folder expansion state.

mod node;
mod outline;
mod view;

pub use node::TreeNode;
pub use outline::{format_outline, format_row, indent, Icons};
pub use view::{Disclosure, NodePath, RowKind, TreeRow, TreeView, DEFAULT_EXPAND_DEPTH};
