use crate::{AdtError, AdtResult};

/// Payload of a [`BinaryTree`](crate::BinaryTree) node.
///
/// `Empty` is the only "no content" value. `Integer(-1)` and `Text("")` are
/// ordinary contents and count as present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Content {
    #[default]
    Empty,
    Integer(i64),
    Text(String),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Content::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Converts raw user input into content.
    ///
    /// Input is trimmed. Blank input is rejected, input that parses as an
    /// integer becomes [`Content::Integer`], anything else [`Content::Text`].
    pub fn parse(input: &str) -> AdtResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AdtError::MissingInput);
        }

        Ok(input
            .parse::<i64>()
            .map(Content::Integer)
            .unwrap_or_else(|_| Content::Text(input.to_string())))
    }
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Empty => Ok(()),
            Content::Integer(value) => write!(f, "{}", value),
            Content::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Content {
    fn from(value: i64) -> Self {
        Content::Integer(value)
    }
}

impl From<i32> for Content {
    fn from(value: i32) -> Self {
        Content::Integer(value.into())
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}
