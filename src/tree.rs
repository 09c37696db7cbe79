use tracing::{debug, trace};

use crate::{
    branch::{Branch, BranchChooser, NodePath},
    iterator::TreeIter,
    Content,
};

type Subtree = Option<Box<BinaryTree>>;

/// Structural classification of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// No content and no children
    Empty,
    /// Content and no children
    Leaf,
    /// At least one child, with or without content
    Internal,
}

/// A binary tree node that is at the same time a whole (sub)tree.
///
/// Every node owns its content and up to two child subtrees. There are no
/// parent links and no shared subtrees.
///
/// ```
/// use adtkit::{BinaryTree, Content};
///
/// let mut tree = BinaryTree::with_content("W");
/// tree.set_left(BinaryTree::with_content("G"));
///
/// assert!(tree.has_left());
/// assert!(!tree.has_right());
/// assert_eq!(tree.depth(), 2);
/// assert_eq!(tree.get_left().map(|left| left.get_item()), Some(&Content::from("G")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BinaryTree {
    content: Content,
    left: Subtree,
    right: Subtree,
}

impl BinaryTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            left: None,
            right: None,
        }
    }

    /// Whether the root holds content
    pub fn has_item(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn get_item(&self) -> &Content {
        &self.content
    }

    /// Replaces the root content, returning the previous one.
    pub fn set_item(&mut self, content: impl Into<Content>) -> Content {
        std::mem::replace(&mut self.content, content.into())
    }

    /// Clears the root content, returning what was there.
    pub fn delete_item(&mut self) -> Content {
        std::mem::take(&mut self.content)
    }

    pub fn is_leaf(&self) -> bool {
        self.has_item() && self.left.is_none() && self.right.is_none()
    }

    pub fn state(&self) -> NodeState {
        if self.left.is_some() || self.right.is_some() {
            NodeState::Internal
        } else if self.has_item() {
            NodeState::Leaf
        } else {
            NodeState::Empty
        }
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn get_left(&self) -> Option<&BinaryTree> {
        self.left.as_deref()
    }

    pub fn get_left_mut(&mut self) -> Option<&mut BinaryTree> {
        self.left.as_deref_mut()
    }

    /// Attaches `tree` as left subtree, returning the subtree it replaced.
    pub fn set_left(&mut self, tree: BinaryTree) -> Option<BinaryTree> {
        self.set_child(Branch::Left, tree)
    }

    pub fn delete_left(&mut self) -> Option<BinaryTree> {
        self.delete_child(Branch::Left)
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn get_right(&self) -> Option<&BinaryTree> {
        self.right.as_deref()
    }

    pub fn get_right_mut(&mut self) -> Option<&mut BinaryTree> {
        self.right.as_deref_mut()
    }

    /// Attaches `tree` as right subtree, returning the subtree it replaced.
    pub fn set_right(&mut self, tree: BinaryTree) -> Option<BinaryTree> {
        self.set_child(Branch::Right, tree)
    }

    pub fn delete_right(&mut self) -> Option<BinaryTree> {
        self.delete_child(Branch::Right)
    }

    pub fn child(&self, branch: Branch) -> Option<&BinaryTree> {
        match branch {
            Branch::Left => self.get_left(),
            Branch::Right => self.get_right(),
        }
    }

    pub fn child_mut(&mut self, branch: Branch) -> Option<&mut BinaryTree> {
        match branch {
            Branch::Left => self.get_left_mut(),
            Branch::Right => self.get_right_mut(),
        }
    }

    pub fn set_child(&mut self, branch: Branch, tree: BinaryTree) -> Option<BinaryTree> {
        self.slot(branch).replace(Box::new(tree)).map(|old| *old)
    }

    pub fn delete_child(&mut self, branch: Branch) -> Option<BinaryTree> {
        self.slot(branch).take().map(|old| *old)
    }

    fn slot(&mut self, branch: Branch) -> &mut Subtree {
        match branch {
            Branch::Left => &mut self.left,
            Branch::Right => &mut self.right,
        }
    }

    /// Follows `path` from this node.
    pub fn get_path(&self, path: &NodePath) -> Option<&BinaryTree> {
        path.branches()
            .iter()
            .try_fold(self, |node, branch| node.child(*branch))
    }

    /// Height of the tree counted in content-bearing nodes.
    ///
    /// A root without content has depth 0, even if it has children. Otherwise
    /// the depth is one more than the deeper child, where a missing child or
    /// one without content contributes 0.
    pub fn depth(&self) -> usize {
        if !self.has_item() {
            return 0;
        }

        let left = self.left.as_deref().map_or(0, BinaryTree::depth);
        let right = self.right.as_deref().map_or(0, BinaryTree::depth);
        left.max(right) + 1
    }

    /// Number of nodes holding content
    pub fn node_count(&self) -> usize {
        self.iter().filter(|node| node.has_item()).count()
    }

    /// Pre-order traversal, the root first, then the left subtree, then the right.
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter::new(self)
    }

    /// Adds `value` without any ordering.
    ///
    /// An empty root takes the value. Otherwise the value becomes a new left
    /// leaf, or a new right leaf if the left child exists. When both children
    /// exist, `chooser` picks the child to descend into and the process repeats
    /// there. Returns the path of the node that received the value.
    pub fn add_node_to_tree<C>(&mut self, value: impl Into<Content>, chooser: &mut C) -> NodePath
    where
        C: BranchChooser + ?Sized,
    {
        let mut path = NodePath::root();
        self.add_node_at(value.into(), chooser, &mut path);

        trace!("Added node at {}", path);
        path
    }

    fn add_node_at<C>(&mut self, value: Content, chooser: &mut C, path: &mut NodePath)
    where
        C: BranchChooser + ?Sized,
    {
        if !self.has_item() {
            self.content = value;
            return;
        }

        let branch = if self.left.is_none() {
            Branch::Left
        } else if self.right.is_none() {
            Branch::Right
        } else {
            chooser.choose()
        };
        path.push(branch);

        match self.child_mut(branch) {
            Some(child) => child.add_node_at(value, chooser, path),
            None => {
                self.set_child(branch, BinaryTree::with_content(value));
            }
        }
    }

    /// Turns this node back into a single empty node.
    pub fn reset(&mut self) {
        self.content = Content::Empty;
        self.left = None;
        self.right = None;

        debug!("Reset binary tree");
    }
}

impl From<Content> for BinaryTree {
    fn from(content: Content) -> Self {
        Self::with_content(content)
    }
}

impl From<i64> for BinaryTree {
    fn from(value: i64) -> Self {
        Self::with_content(value)
    }
}

impl From<&str> for BinaryTree {
    fn from(value: &str) -> Self {
        Self::with_content(value)
    }
}

impl From<String> for BinaryTree {
    fn from(value: String) -> Self {
        Self::with_content(value)
    }
}
