use tracing::{debug, trace};

use crate::{stack::drop_chain, AdtError, AdtKind, AdtResult};

type Link<T> = Option<Box<Item<T>>>;

struct Item<T> {
    data: T,
    next: Link<T>,
}

/// A FIFO queue over a singly linked list.
///
/// The queue owns its chain through `head` and reaches the back by walking it.
/// `size` always equals the chain length.
pub struct Queue<T> {
    head: Link<T>,
    size: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the first item without removing it.
    pub fn head(&self) -> AdtResult<&T> {
        self.head
            .as_ref()
            .map(|item| &item.data)
            .ok_or_else(|| AdtError::empty(AdtKind::Queue, "head"))
    }

    /// Returns the last item without removing it.
    pub fn back(&self) -> AdtResult<&T> {
        self.iter()
            .last()
            .ok_or_else(|| AdtError::empty(AdtKind::Queue, "back"))
    }

    /// Removes the first item and returns it.
    pub fn dequeue(&mut self) -> AdtResult<T> {
        let item = self
            .head
            .take()
            .ok_or_else(|| AdtError::empty(AdtKind::Queue, "dequeue"))?;

        let Item { data, next } = *item;
        self.head = next;
        self.size -= 1;

        trace!("Dequeued item, {} remaining", self.size);
        Ok(data)
    }

    /// Appends an item at the back of the queue.
    pub fn enqueue(&mut self, data: T) {
        *self.tail() = Some(Box::new(Item { data, next: None }));
        self.size += 1;

        trace!("Enqueued item, {} total", self.size);
    }

    /// The empty link after the last item
    fn tail(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(item) = link {
            link = &mut item.next;
        }
        link
    }

    /// Removes every item, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.size;
        drop_chain(self.head.take(), |item| item.next.take());
        self.size = 0;

        debug!("Cleared queue of {} items", removed);
        removed
    }

    /// Iterates from the head of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take(), |item| item.next.take());
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: std::hash::Hash> std::hash::Hash for Queue<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for data in self.iter() {
            data.hash(state);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.enqueue(data);
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
            self.next = item.next.as_deref();
            &item.data
        })
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, dequeues items in FIFO order.
pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        self.0.dequeue().ok()
    }
}

impl<T> IntoIterator for Queue<T> {
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
    fn enqueue_dequeue_scenario() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.dequeue(), Ok("c"));
        assert!(queue.is_empty());
    }

    #[test]
    fn fifo_law() {
        let input: Vec<String> = (0..40).map(|i| format!("item-{i}")).collect();

        let mut queue = Queue::new();
        for value in &input {
            queue.enqueue(value.clone());
        }

        let mut dequeued = Vec::new();
        while !queue.is_empty() {
            dequeued.push(queue.dequeue().unwrap());
        }

        assert_eq!(dequeued, input);
    }

    #[test]
    fn size_tracks_chain_length() {
        let mut queue = Queue::new();
        assert_eq!(queue.len(), 0);

        for i in 0..5 {
            queue.enqueue(i);
            assert_eq!(queue.len(), i + 1);
            assert_eq!(queue.iter().count(), queue.len());
        }

        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.iter().count(), 3);

        assert_eq!(queue.clear(), 3);
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn head_and_back() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        assert_eq!(queue.head(), Ok(&1));
        assert_eq!(queue.back(), Ok(&1));

        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.head(), Ok(&1));
        assert_eq!(queue.back(), Ok(&3));

        while queue.dequeue().is_ok() {}
        assert!(queue.back().is_err());

        queue.enqueue(7);
        assert_eq!(queue.head(), Ok(&7));
        assert_eq!(queue.back(), Ok(&7));
        queue.enqueue(8);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![7, 8]);
    }

    #[traced_test]
    #[test]
    fn empty_queue_errors() {
        let mut queue: Queue<i64> = Queue::new();

        assert_eq!(
            queue.head(),
            Err(AdtError::EmptyContainer {
                kind: AdtKind::Queue,
                op: "head"
            })
        );
        assert_eq!(
            queue.dequeue(),
            Err(AdtError::EmptyContainer {
                kind: AdtKind::Queue,
                op: "dequeue"
            })
        );
        assert!(logs_contain("Attempted dequeue on an empty queue"));
    }

    #[test]
    fn clone_is_independent() {
        let mut queue: Queue<i32> = (1..=3).collect();
        let cloned = queue.clone();

        queue.enqueue(4);
        assert_eq!(cloned.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_ne!(cloned, queue);
        assert_eq!(format!("{:?}", queue), "[1, 2, 3, 4]");
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn interleaved_enqueue_dequeue() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Ok(1));

        queue.enqueue(3);
        assert_eq!(queue.head(), Ok(&2));
        assert_eq!(queue.back(), Ok(&3));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        queue.enqueue(4);
        assert_eq!(queue.back(), Ok(&4));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[traced_test]
    #[test]
    fn draining_owned_iterator_is_quiet() {
        let queue: Queue<i32> = (1..=3).collect();

        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!logs_contain("Attempted"));
    }
}
