use crate::NodePath;

/// What a [`Command`](crate::Command) did to a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<T> {
    /// Item placed on top of a stack
    Pushed,

    /// Top item removed from a stack
    Popped { item: T },

    /// Item appended to the back of a queue
    Enqueued,

    /// Head item removed from a queue
    Dequeued { item: T },

    /// Element inserted into a dynamic array at index
    Inserted { index: usize },

    /// Element at index replaced. Holds the element that was there before.
    Replaced { index: usize, previous: T },

    /// Element removed from a dynamic array at index
    Deleted { index: usize, item: T },

    /// Content placed into a binary tree at the node reached by `path`
    NodeAdded { path: NodePath },

    /// Container emptied, `removed` counts the elements or nodes dropped
    Cleared { removed: usize },
}
