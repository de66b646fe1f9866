//! Expansion state and visible-row flattening for a [`TreeNode`].

use std::fmt;

use super::node::TreeNode;

/// Folders shallower than this start expanded. Only the root by default.
pub const DEFAULT_EXPAND_DEPTH: usize = 1;

/// Index path from the root to a node. The root is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Nesting level relative to the root (root = 0).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// Disclosure indicator shown in front of a folder row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    Expanded,
    Collapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Folder { expanded: bool },
    File,
}

/// A visible row in the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: NodePath,
    pub name: String,
    pub depth: usize,
    pub kind: RowKind,
}

impl TreeRow {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, RowKind::Folder { .. })
    }

    /// `None` for files, which never show an indicator.
    pub fn disclosure(&self) -> Option<Disclosure> {
        match self.kind {
            RowKind::Folder { expanded: true } => Some(Disclosure::Expanded),
            RowKind::Folder { expanded: false } => Some(Disclosure::Collapsed),
            RowKind::File => None,
        }
    }
}

/// Per-node expansion flag, shaped exactly like the tree it belongs to.
#[derive(Debug, Clone)]
struct NodeState {
    expanded: bool,
    children: Vec<NodeState>,
}

impl NodeState {
    fn build(node: &TreeNode, depth: usize, expand_depth: usize) -> Self {
        Self {
            expanded: node.is_folder() && depth < expand_depth,
            children: node
                .children()
                .iter()
                .map(|child| Self::build(child, depth + 1, expand_depth))
                .collect(),
        }
    }

    fn get(&self, path: &[usize]) -> Option<&NodeState> {
        path.iter()
            .try_fold(self, |state, &index| state.children.get(index))
    }

    fn get_mut(&mut self, path: &[usize]) -> Option<&mut NodeState> {
        let mut state = self;
        for &index in path {
            state = state.children.get_mut(index)?;
        }
        Some(state)
    }

    fn set_all(&mut self, node: &TreeNode, expanded: bool) {
        self.expanded = node.is_folder() && expanded;
        for (child_state, child) in self.children.iter_mut().zip(node.children()) {
            child_state.set_all(child, expanded);
        }
    }
}

/// A collapsible view over an immutable tree.
///
/// The tree itself never changes; only the per-folder expansion flags do,
/// and toggling one folder never affects any other folder's flag.
#[derive(Debug, Clone)]
pub struct TreeView {
    root: TreeNode,
    state: NodeState,
}

impl TreeView {
    pub fn new(root: TreeNode) -> Self {
        Self::with_expand_depth(root, DEFAULT_EXPAND_DEPTH)
    }

    /// Folders at `depth < expand_depth` start expanded, deeper ones collapsed.
    pub fn with_expand_depth(root: TreeNode, expand_depth: usize) -> Self {
        let state = NodeState::build(&root, 0, expand_depth);
        Self { root, state }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn node(&self, path: &NodePath) -> Option<&TreeNode> {
        self.root.get(path.as_slice())
    }

    /// Expansion flag of a folder; `None` for files and unknown paths.
    pub fn is_expanded(&self, path: &NodePath) -> Option<bool> {
        let node = self.node(path)?;
        if !node.is_folder() {
            return None;
        }
        self.state.get(path.as_slice()).map(|s| s.expanded)
    }

    /// Flip the expansion flag of the folder at `path`.
    ///
    /// Returns `false` without changing anything when `path` is a file or
    /// does not resolve.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        match self.node(path) {
            Some(node) if node.is_folder() => {}
            _ => return false,
        }

        let Some(state) = self.state.get_mut(path.as_slice()) else {
            return false;
        };
        state.expanded = !state.expanded;
        tracing::debug!(path = %path, expanded = state.expanded, "Toggled folder");
        true
    }

    pub fn expand_all(&mut self) {
        self.state.set_all(&self.root, true);
    }

    pub fn collapse_all(&mut self) {
        self.state.set_all(&self.root, false);
    }

    /// Path of the first node named `name` in pre-order, visible or not.
    pub fn find(&self, name: &str) -> Option<NodePath> {
        fn walk(node: &TreeNode, path: NodePath, name: &str) -> Option<NodePath> {
            if node.name() == name {
                return Some(path);
            }
            node.children()
                .iter()
                .enumerate()
                .find_map(|(i, child)| walk(child, path.child(i), name))
        }
        walk(&self.root, NodePath::root(), name)
    }

    /// Visible rows in depth-first pre-order, children in input order.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        collect_rows(&self.root, &self.state, NodePath::root(), &mut rows);
        rows
    }
}

fn collect_rows(node: &TreeNode, state: &NodeState, path: NodePath, rows: &mut Vec<TreeRow>) {
    let kind = if node.is_folder() {
        RowKind::Folder {
            expanded: state.expanded,
        }
    } else {
        RowKind::File
    };

    rows.push(TreeRow {
        depth: path.depth(),
        name: node.name().to_string(),
        path: path.clone(),
        kind,
    });

    if !state.expanded {
        return;
    }

    for (i, (child, child_state)) in node.children().iter().zip(&state.children).enumerate() {
        collect_rows(child, child_state, path.child(i), rows);
    }
}
