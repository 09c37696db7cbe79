//! # adtkit
//!
//! Classic abstract data types built from owned, linked nodes.
//!
//! ## Overview
//!
//! adtkit provides a [`Stack`], a [`Queue`], a [`DynamicArray`] and an unordered
//! [`BinaryTree`], each with the operations a visualizer or a teaching tool needs.
//! Every container can be read through [`Inspect`], changed through [`Interact`]
//! commands, rendered as text with [`Render`] and fingerprinted with
//! [`Fingerprint`] so a polling front end knows when to redraw.
//!
//! ```
//! use adtkit::{Command, Interact, RandomBranch, Stack};
//!
//! let mut stack = Stack::new();
//! let mut branches = RandomBranch::seeded(7);
//!
//! stack.apply(Command::Add(1), &mut branches).unwrap();
//! stack.apply(Command::Add(2), &mut branches).unwrap();
//!
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.len(), 1);
//! ```

mod branch;
mod builder;
mod content;
mod display;
mod dyn_array;
mod error;
mod event;
mod hash;
mod interact;
mod iterator;
mod queue;
mod stack;
mod tree;

pub use branch::{Branch, BranchChooser, NodePath, RandomBranch};
pub use builder::*;
pub use content::Content;
pub use display::{Render, RenderOptions};
pub use dyn_array::DynamicArray;
pub use error::{AdtError, AdtResult};
pub use event::Change;
pub use hash::{Fingerprint, HashInto};
pub use interact::{AdtKind, Command, Inspect, Interact};
pub use iterator::{IterNode, TreeIter};
pub use queue::Queue;
pub use stack::Stack;
pub use tree::{BinaryTree, NodeState};
