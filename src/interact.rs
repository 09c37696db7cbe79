//! Capability interface between the containers and a front end.
//!
//! A front end (a canvas, a terminal, or a headless test) only needs two things:
//! reading the current state through [`Inspect`] and changing it through
//! [`Interact`]. Queries never change the container, so they are safe to call
//! once per frame from a polling loop.

use tracing::trace;

use crate::{
    AdtError, AdtResult, BinaryTree, BranchChooser, Change, Content, DynamicArray, Queue, Stack,
};

/// The four container kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdtKind {
    Stack,
    Queue,
    DynamicArray,
    BinaryTree,
}

impl std::fmt::Display for AdtKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AdtKind::Stack => "stack",
            AdtKind::Queue => "queue",
            AdtKind::DynamicArray => "dynamic array",
            AdtKind::BinaryTree => "binary tree",
        })
    }
}

/// Read access to a container's state.
pub trait Inspect {
    type Item;

    fn kind(&self) -> AdtKind;

    fn is_empty(&self) -> bool;

    /// Number of stored items. For a tree, the nodes holding content.
    fn len(&self) -> usize;

    /// Calls `f` for every item in display order with its position.
    ///
    /// The position is the index for linear containers (top of a stack and
    /// head of a queue are 0) and the depth for a tree, visited in pre-order.
    /// Contentless tree nodes are skipped.
    fn for_each_item<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnMut(usize, &Self::Item) -> Result<(), E>;
}

/// A request coming from a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T> {
    /// Push, enqueue, append or add a tree node
    Add(T),
    /// Pop, dequeue or delete the last element
    Remove,
    InsertAt { index: usize, value: T },
    Delete { index: usize },
    Set { index: usize, value: T },
    /// Empty the container
    Reset,
}

impl<T> Command<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Remove => "remove",
            Command::InsertAt { .. } => "insert_at",
            Command::Delete { .. } => "delete",
            Command::Set { .. } => "set",
            Command::Reset => "reset",
        }
    }
}

/// Write access to a container's state.
pub trait Interact: Inspect {
    /// Applies `command`, returning what changed.
    ///
    /// `branches` is only consulted by a tree adding a node below two occupied
    /// children. Commands a container does not offer fail with
    /// [`AdtError::Unsupported`] and leave it untouched.
    fn apply(
        &mut self,
        command: Command<Self::Item>,
        branches: &mut dyn BranchChooser,
    ) -> AdtResult<Change<Self::Item>>;
}

fn unsupported<T>(kind: AdtKind, command: &Command<T>) -> AdtError {
    trace!("Rejected {} on {}", command.name(), kind);
    AdtError::Unsupported {
        kind,
        command: command.name(),
    }
}

impl<T> Inspect for Stack<T> {
    type Item = T;

    fn kind(&self) -> AdtKind {
        AdtKind::Stack
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn for_each_item<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize, &T) -> Result<(), E>,
    {
        self.iter()
            .enumerate()
            .try_for_each(|(index, item)| f(index, item))
    }
}

impl<T> Interact for Stack<T> {
    fn apply(
        &mut self,
        command: Command<T>,
        _branches: &mut dyn BranchChooser,
    ) -> AdtResult<Change<T>> {
        match command {
            Command::Add(item) => {
                self.push(item);
                Ok(Change::Pushed)
            }
            Command::Remove => self.pop().map(|item| Change::Popped { item }),
            Command::Reset => Ok(Change::Cleared {
                removed: self.clear(),
            }),
            other => Err(unsupported(AdtKind::Stack, &other)),
        }
    }
}

impl<T> Inspect for Queue<T> {
    type Item = T;

    fn kind(&self) -> AdtKind {
        AdtKind::Queue
    }

    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn for_each_item<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize, &T) -> Result<(), E>,
    {
        self.iter()
            .enumerate()
            .try_for_each(|(index, item)| f(index, item))
    }
}

impl<T> Interact for Queue<T> {
    fn apply(
        &mut self,
        command: Command<T>,
        _branches: &mut dyn BranchChooser,
    ) -> AdtResult<Change<T>> {
        match command {
            Command::Add(item) => {
                self.enqueue(item);
                Ok(Change::Enqueued)
            }
            Command::Remove => self.dequeue().map(|item| Change::Dequeued { item }),
            Command::Reset => Ok(Change::Cleared {
                removed: self.clear(),
            }),
            other => Err(unsupported(AdtKind::Queue, &other)),
        }
    }
}

impl<T> Inspect for DynamicArray<T> {
    type Item = T;

    fn kind(&self) -> AdtKind {
        AdtKind::DynamicArray
    }

    fn is_empty(&self) -> bool {
        DynamicArray::is_empty(self)
    }

    fn len(&self) -> usize {
        self.length()
    }

    fn for_each_item<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize, &T) -> Result<(), E>,
    {
        self.iter()
            .enumerate()
            .try_for_each(|(index, item)| f(index, item))
    }
}

impl<T> Interact for DynamicArray<T> {
    fn apply(
        &mut self,
        command: Command<T>,
        _branches: &mut dyn BranchChooser,
    ) -> AdtResult<Change<T>> {
        match command {
            Command::Add(item) => {
                self.append(item);
                Ok(Change::Inserted {
                    index: self.length() - 1,
                })
            }
            Command::Remove => {
                let index = self
                    .length()
                    .checked_sub(1)
                    .ok_or_else(|| AdtError::empty(AdtKind::DynamicArray, "remove"))?;
                self.delete(index)
                    .map(|item| Change::Deleted { index, item })
            }
            Command::InsertAt { index, value } => {
                self.insert_at(index, value)?;
                Ok(Change::Inserted { index })
            }
            Command::Delete { index } => self
                .delete(index)
                .map(|item| Change::Deleted { index, item }),
            Command::Set { index, value } => self
                .set_item(index, value)
                .map(|previous| Change::Replaced { index, previous }),
            Command::Reset => Ok(Change::Cleared {
                removed: self.clear(),
            }),
        }
    }
}

impl Inspect for BinaryTree {
    type Item = Content;

    fn kind(&self) -> AdtKind {
        AdtKind::BinaryTree
    }

    /// A tree is empty when no node holds content
    fn is_empty(&self) -> bool {
        self.iter().all(|node| !node.has_item())
    }

    fn len(&self) -> usize {
        self.node_count()
    }

    fn for_each_item<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize, &Content) -> Result<(), E>,
    {
        self.iter()
            .filter(|node| node.has_item())
            .try_for_each(|node| f(node.depth(), node.node().get_item()))
    }
}

impl Interact for BinaryTree {
    fn apply(
        &mut self,
        command: Command<Content>,
        branches: &mut dyn BranchChooser,
    ) -> AdtResult<Change<Content>> {
        match command {
            Command::Add(content) => {
                if content.is_empty() {
                    return Err(AdtError::MissingInput);
                }
                let path = self.add_node_to_tree(content, branches);
                Ok(Change::NodeAdded { path })
            }
            Command::Reset => {
                let removed = self.node_count();
                self.reset();
                Ok(Change::Cleared { removed })
            }
            other => Err(unsupported(AdtKind::BinaryTree, &other)),
        }
    }
}
