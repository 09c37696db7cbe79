use thiserror::Error;

use crate::AdtKind;

/// Errors returned by the container operations.
///
/// Every error is local to the call that produced it. Nothing is retried and
/// the container is left unchanged when an operation fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdtError {
    #[error("{op} called on an empty {kind}")]
    EmptyContainer { kind: AdtKind, op: &'static str },

    #[error("index {index} out of range for {op} on {kind} of length {len}")]
    IndexOutOfRange {
        kind: AdtKind,
        op: &'static str,
        index: usize,
        len: usize,
    },

    #[error("missing input")]
    MissingInput,

    #[error("{command} is not supported by {kind}")]
    Unsupported {
        kind: AdtKind,
        command: &'static str,
    },
}

pub type AdtResult<T> = Result<T, AdtError>;

impl AdtError {
    pub(crate) fn empty(kind: AdtKind, op: &'static str) -> Self {
        tracing::error!("Attempted {} on an empty {}", op, kind);
        AdtError::EmptyContainer { kind, op }
    }

    pub(crate) fn out_of_range(kind: AdtKind, op: &'static str, index: usize, len: usize) -> Self {
        tracing::error!(
            "Attempted {} with index {} on {} with length {}",
            op,
            index,
            kind,
            len
        );
        AdtError::IndexOutOfRange {
            kind,
            op,
            index,
            len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = AdtError::EmptyContainer {
            kind: AdtKind::Stack,
            op: "pop",
        };
        assert_eq!(err.to_string(), "pop called on an empty stack");

        let err = AdtError::IndexOutOfRange {
            kind: AdtKind::DynamicArray,
            op: "get_item",
            index: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "index 4 out of range for get_item on dynamic array of length 2"
        );

        let err = AdtError::Unsupported {
            kind: AdtKind::BinaryTree,
            command: "remove",
        };
        assert_eq!(err.to_string(), "remove is not supported by binary tree");
    }
}
