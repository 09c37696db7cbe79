//! A dynamic array backed by a singly linked list.
//!
//! All operations use 0-based indices. Indexed operations walk the list from
//! the head, so they are O(index).

use tracing::{debug, trace};

use crate::{stack::drop_chain, AdtError, AdtKind, AdtResult};

type Link<T> = Option<Box<Element<T>>>;

struct Element<T> {
    data: T,
    next: Link<T>,
}

/// Ordered sequence with array-like indexed access.
///
/// | operation      | valid indices        |
/// |----------------|----------------------|
/// | `get_item`     | `0 <= i < length`    |
/// | `set_item`     | `0 <= i < length`    |
/// | `insert_at`    | `0 <= i <= length`   |
/// | `delete`       | `0 <= i < length`    |
///
/// ```
/// use adtkit::DynamicArray;
///
/// let mut array: DynamicArray<i32> = [10, 20, 30].into_iter().collect();
/// array.insert_at(1, 99).unwrap();
/// assert_eq!(array.to_string(), "[10, 99, 20, 30]");
/// array.delete(0).unwrap();
/// assert_eq!(array.to_string(), "[99, 20, 30]");
/// ```
pub struct DynamicArray<T> {
    head: Link<T>,
    length: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns the element at `index`, or `None` if there is none.
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current.map(|element| &element.data)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current.map(|element| &mut element.data)
    }

    /// Returns the element at `index`.
    pub fn get_item(&self, index: usize) -> AdtResult<&T> {
        let length = self.length;
        self.get(index).ok_or_else(|| {
            AdtError::out_of_range(AdtKind::DynamicArray, "get_item", index, length)
        })
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set_item(&mut self, index: usize, data: T) -> AdtResult<T> {
        let length = self.length;
        let slot = self.get_mut(index).ok_or_else(|| {
            AdtError::out_of_range(AdtKind::DynamicArray, "set_item", index, length)
        })?;

        trace!("Set element {}", index);
        Ok(std::mem::replace(slot, data))
    }

    /// Appends an element at the end.
    pub fn append(&mut self, data: T) {
        let length = self.length;
        if let Some(tail) = self.link_at(length) {
            *tail = Some(Box::new(Element { data, next: None }));
            self.length += 1;
        }

        trace!("Appended element, length {}", self.length);
    }

    /// Inserts an element so that it ends up at `index`. Elements from `index`
    /// onwards move one position back. `index == length` appends.
    pub fn insert_at(&mut self, index: usize, data: T) -> AdtResult<()> {
        let length = self.length;
        let link = self.link_at(index).ok_or_else(|| {
            AdtError::out_of_range(AdtKind::DynamicArray, "insert_at", index, length)
        })?;

        let next = link.take();
        *link = Some(Box::new(Element { data, next }));
        self.length += 1;

        trace!("Inserted element at {}, length {}", index, self.length);
        Ok(())
    }

    /// Removes the element at `index` and returns it. Later elements move one
    /// position towards the front.
    pub fn delete(&mut self, index: usize) -> AdtResult<T> {
        let length = self.length;
        let out_of_range =
            || AdtError::out_of_range(AdtKind::DynamicArray, "delete", index, length);

        let link = self.link_at(index).ok_or_else(out_of_range)?;
        let removed = link.take().ok_or_else(out_of_range)?;

        let Element { data, next } = *removed;
        *link = next;
        self.length -= 1;

        trace!("Deleted element at {}, length {}", index, self.length);
        Ok(data)
    }

    /// Removes every element, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.length;
        drop_chain(self.head.take(), |element| element.next.take());
        self.length = 0;

        debug!("Cleared dynamic array of {} elements", removed);
        removed
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns the link that holds (or would hold) the element at `index`,
    /// or `None` when `index > length`.
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take(), |element| element.next.take());
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (index, data) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", data)?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: std::hash::Hash> std::hash::Hash for DynamicArray<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for data in self.iter() {
            data.hash(state);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the tail once instead of once per element
        let length = self.length;
        let Some(mut link) = self.link_at(length) else {
            return;
        };

        let mut added = 0;
        for data in iter {
            link = &mut link.insert(Box::new(Element { data, next: None })).next;
            added += 1;
        }
        self.length += added;
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Element<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|element| {
            self.next = element.next.as_deref();
            &element.data
        })
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator, yields elements front to back.
pub struct IntoIter<T>(DynamicArray<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        self.0.delete(0).ok()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tracing_test::traced_test;

    use super::*;

    fn contents<T: Clone>(array: &DynamicArray<T>) -> Vec<T> {
        array.iter().cloned().collect()
    }

    #[traced_test]
    #[test]
    fn insert_delete_scenario() {
        let mut array = DynamicArray::new();
        array.append(10);
        array.append(20);
        array.append(30);

        array.insert_at(1, 99).unwrap();
        assert_eq!(contents(&array), vec![10, 99, 20, 30]);

        assert_eq!(array.delete(0), Ok(10));
        assert_eq!(contents(&array), vec![99, 20, 30]);
    }

    #[test]
    fn append_then_get_last() {
        let mut array = DynamicArray::new();
        for value in ["x", "y", "z"] {
            let before = array.length();
            array.append(value.to_string());
            assert_eq!(array.length(), before + 1);
            assert_eq!(array.get_item(array.length() - 1).unwrap(), value);
        }
    }

    #[rstest]
    #[case::front(0, vec![5, 1, 2, 3])]
    #[case::middle(2, vec![1, 2, 5, 3])]
    #[case::end(3, vec![1, 2, 3, 5])]
    fn insert_at_boundaries(#[case] index: usize, #[case] expected: Vec<i32>) {
        let mut array: DynamicArray<i32> = [1, 2, 3].into_iter().collect();
        let previous = array.get(index).copied();

        array.insert_at(index, 5).unwrap();

        assert_eq!(array.get_item(index), Ok(&5));
        assert_eq!(array.get(index + 1).copied(), previous);
        assert_eq!(array.length(), 4);
        assert_eq!(contents(&array), expected);
    }

    #[rstest]
    #[case::front(0, vec![2, 3, 4])]
    #[case::middle(1, vec![1, 3, 4])]
    #[case::last(3, vec![1, 2, 3])]
    fn delete_shifts_later_elements(#[case] index: usize, #[case] expected: Vec<i32>) {
        let mut array: DynamicArray<i32> = [1, 2, 3, 4].into_iter().collect();

        assert_eq!(array.delete(index), Ok(index as i32 + 1));
        assert_eq!(array.length(), 3);
        assert_eq!(contents(&array), expected);
    }

    #[traced_test]
    #[test]
    fn out_of_range_errors() {
        let mut array: DynamicArray<i32> = [1, 2].into_iter().collect();

        assert_eq!(
            array.get_item(2),
            Err(AdtError::IndexOutOfRange {
                kind: AdtKind::DynamicArray,
                op: "get_item",
                index: 2,
                len: 2,
            })
        );
        assert!(array.set_item(2, 0).is_err());
        assert!(array.insert_at(3, 0).is_err());
        assert!(array.delete(2).is_err());
        assert!(logs_contain("Attempted delete with index 2"));

        assert_eq!(array.get(5), None);
        assert_eq!(contents(&array), vec![1, 2]);

        let mut empty: DynamicArray<i32> = DynamicArray::new();
        assert!(empty.delete(0).is_err());
        assert!(empty.insert_at(0, 4).is_ok());
        assert_eq!(contents(&empty), vec![4]);
    }

    #[test]
    fn set_item_replaces() {
        let mut array: DynamicArray<&str> = ["a", "b", "c"].into_iter().collect();

        assert_eq!(array.set_item(1, "B"), Ok("b"));
        assert_eq!(contents(&array), vec!["a", "B", "c"]);
        assert_eq!(array.length(), 3);

        *array.get_mut(2).unwrap() = "C";
        assert_eq!(array.to_string(), "[a, B, C]");
    }

    #[test]
    fn extend_and_clear() {
        let mut array: DynamicArray<u32> = DynamicArray::new();
        array.extend(0..3);
        array.extend(3..6);
        assert_eq!(contents(&array), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(array.length(), 6);

        let cloned = array.clone();
        assert_eq!(array.clear(), 6);
        assert!(array.is_empty());
        assert_eq!(array.to_string(), "[]");

        assert_eq!(cloned.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    }
}
