use std::{collections::VecDeque, ops::Deref};

use crate::{branch::Branch, BinaryTree};

/// A node yielded by [`TreeIter`], along with where it sits in the tree.
#[derive(Debug, Clone, Copy)]
pub struct IterNode<'iter> {
    depth: usize,
    branch: Option<Branch>,
    node: &'iter BinaryTree,
}

impl<'iter> IterNode<'iter> {
    /// Distance from the root the iterator started at
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Which child of its parent this node is. `None` for the root.
    pub fn branch(&self) -> Option<Branch> {
        self.branch
    }

    pub fn node(&self) -> &'iter BinaryTree {
        self.node
    }
}

impl<'iter> Deref for IterNode<'iter> {
    type Target = BinaryTree;

    fn deref(&self) -> &Self::Target {
        self.node
    }
}

/// Pre-order traversal of a [`BinaryTree`], including nodes without content.
pub struct TreeIter<'iter> {
    stack: VecDeque<IterNode<'iter>>,
}

impl<'iter> TreeIter<'iter> {
    pub fn new(root: &'iter BinaryTree) -> Self {
        Self {
            stack: VecDeque::from([IterNode {
                depth: 0,
                branch: None,
                node: root,
            }]),
        }
    }
}

impl<'iter> Iterator for TreeIter<'iter> {
    type Item = IterNode<'iter>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop_front();

        current.map(|current| {
            // Push right first so the left subtree is visited first
            for branch in [Branch::Right, Branch::Left] {
                if let Some(child) = current.node.child(branch) {
                    self.stack.push_front(IterNode {
                        depth: current.depth + 1,
                        branch: Some(branch),
                        node: child,
                    });
                }
            }
            current
        })
    }
}

impl<'iter> IntoIterator for &'iter BinaryTree {
    type Item = IterNode<'iter>;
    type IntoIter = TreeIter<'iter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
