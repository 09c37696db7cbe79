use tracing::{debug, trace};

use crate::{AdtError, AdtKind, AdtResult};

type Link<T> = Option<Box<Item<T>>>;

struct Item<T> {
    data: T,
    // The item directly below this one
    below: Link<T>,
}

/// A LIFO stack over a singly linked list, newest item on top.
///
/// ```
/// use adtkit::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.is_empty());
/// ```
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the top item without removing it.
    pub fn top(&self) -> AdtResult<&T> {
        self.top
            .as_ref()
            .map(|item| &item.data)
            .ok_or_else(|| AdtError::empty(AdtKind::Stack, "top"))
    }

    /// Returns a mutable reference to the top item.
    pub fn top_mut(&mut self) -> AdtResult<&mut T> {
        self.top
            .as_mut()
            .map(|item| &mut item.data)
            .ok_or_else(|| AdtError::empty(AdtKind::Stack, "top"))
    }

    /// Removes the top item and returns it.
    pub fn pop(&mut self) -> AdtResult<T> {
        let item = self
            .top
            .take()
            .ok_or_else(|| AdtError::empty(AdtKind::Stack, "pop"))?;

        let Item { data, below } = *item;
        self.top = below;
        self.len -= 1;

        trace!("Popped stack item, {} remaining", self.len);
        Ok(data)
    }

    /// Places a new item on top of the stack.
    pub fn push(&mut self, data: T) {
        let item = Box::new(Item {
            data,
            below: self.top.take(),
        });
        self.top = Some(item);
        self.len += 1;

        trace!("Pushed stack item, {} total", self.len);
    }

    /// Removes every item, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.len;
        drop_chain(self.top.take(), |item| item.below.take());
        self.len = 0;

        debug!("Cleared stack of {} items", removed);
        removed
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

/// Unlinks a chain one node at a time so dropping a long chain does not recurse.
pub(crate) fn drop_chain<N>(
    mut link: Option<Box<N>>,
    mut next: impl FnMut(&mut N) -> Option<Box<N>>,
) {
    while let Some(mut node) = link {
        link = next(&mut *node);
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        drop_chain(self.top.take(), |item| item.below.take());
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        // Iteration runs top to bottom, so rebuild bottom first
        let items: Vec<&T> = self.iter().collect();
        items.into_iter().rev().cloned().collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: std::hash::Hash> std::hash::Hash for Stack<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for data in self.iter() {
            data.hash(state);
        }
    }
}

/// Pushes items in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.push(data);
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Item<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|item| {
            self.next = item.below.as_deref();
            &item.data
        })
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, pops items in LIFO order.
pub struct IntoIter<T>(Stack<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        self.0.pop().ok()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[traced_test]
    #[test]
    fn push_pop_scenario() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn lifo_law() {
        let input: Vec<i64> = (0..50).map(|i| i * 7 - 3).collect();

        let mut stack = Stack::new();
        for value in &input {
            stack.push(*value);
        }

        let mut popped = Vec::new();
        while !stack.is_empty() {
            popped.push(stack.pop().unwrap());
        }

        let mut expected = input.clone();
        expected.reverse();
        assert_eq!(popped, expected);
    }

    #[test]
    fn top_does_not_remove() {
        let mut stack = Stack::new();
        stack.push("a");

        assert_eq!(stack.top(), Ok(&"a"));
        assert_eq!(stack.top(), Ok(&"a"));
        assert_eq!(stack.len(), 1);

        *stack.top_mut().unwrap() = "b";
        assert_eq!(stack.pop(), Ok("b"));
    }

    #[traced_test]
    #[test]
    fn empty_stack_errors() {
        let mut stack: Stack<u8> = Stack::new();

        assert_eq!(
            stack.top(),
            Err(AdtError::EmptyContainer {
                kind: AdtKind::Stack,
                op: "top"
            })
        );
        assert_eq!(
            stack.pop(),
            Err(AdtError::EmptyContainer {
                kind: AdtKind::Stack,
                op: "pop"
            })
        );
        assert!(logs_contain("Attempted pop on an empty stack"));

        // Failed calls leave the stack usable
        stack.push(9);
        assert_eq!(stack.pop(), Ok(9));
    }

    #[test]
    fn iter_and_collect() {
        let stack: Stack<i32> = (1..=4).collect();

        assert_eq!(stack.len(), 4);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(format!("{:?}", stack), "[4, 3, 2, 1]");

        let cloned = stack.clone();
        assert_eq!(cloned, stack);
        assert_eq!(cloned.into_iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn clear_and_long_chain() {
        let mut stack: Stack<usize> = (0..200_000).collect();
        assert_eq!(stack.clear(), 200_000);
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);

        // Dropping a long chain must not overflow the call stack
        let stack: Stack<usize> = (0..200_000).collect();
        drop(stack);
    }

    #[traced_test]
    #[test]
    fn draining_owned_iterator_is_quiet() {
        let stack: Stack<i32> = (1..=3).collect();

        assert_eq!(stack.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert!(!logs_contain("Attempted"));
    }
}
