pub mod code_block;
pub mod tabs;
pub mod tree;

pub use code_block::CodeBlock;
pub use tabs::{Tab, TabGroup};
pub use tree::TreeWidget;
