use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A single entry in the displayed hierarchy.
///
/// Folders own their children outright; files never have any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Folder { name: String, children: Vec<TreeNode> },
    File { name: String },
}

impl TreeNode {
    pub fn folder(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        TreeNode::File { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::Folder { name, .. } | TreeNode::File { name } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }

    /// Children in display order. Always empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Folder { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }

    /// Resolve an index path relative to this node.
    pub fn get(&self, path: &[usize]) -> Option<&TreeNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(TreeNode::count).sum::<usize>()
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeNode::Folder { name, children } => {
                let mut s = serializer.serialize_struct("TreeNode", 3)?;
                s.serialize_field("name", name)?;
                s.serialize_field("is_folder", &true)?;
                s.serialize_field("children", children)?;
                s.end()
            }
            TreeNode::File { name } => {
                let mut s = serializer.serialize_struct("TreeNode", 2)?;
                s.serialize_field("name", name)?;
                s.serialize_field("is_folder", &false)?;
                s.end()
            }
        }
    }
}
