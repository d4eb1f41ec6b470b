use alloc::boxed::Box;

use core::{
    fmt::{self, Debug, Formatter},
    iter::{Extend, FromIterator},
    mem,
};

use crate::error::IndexOutOfBounds;

type Link<T> = Option<Box<SinglyLinkedListNode<T>>>;

/// An index addressable list built from forward linked nodes.
///
/// Only the head is kept, so appending walks the whole chain.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Builds a list holding `elements` in iteration order.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an element to the end of the list
    pub fn push(&mut self, item: T) {
        *self.tail_link() = Some(SinglyLinkedListNode::new(item, None));
        self.len += 1;
    }

    /// Inserts an element before position `index`, shifting everything after it.
    ///
    /// `index == len` appends. Anything past that is rejected and the list is left untouched.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }
        let link = if index == 0 {
            &mut self.head
        } else {
            &mut self.node_mut(index - 1)?.next
        };
        let next = link.take();
        *link = Some(SinglyLinkedListNode::new(item, next));
        self.len += 1;
        Ok(())
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(&mut self.node_mut(index)?.value, item))
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.node(index).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.node_mut(index).map(|node| &mut node.value)
    }

    /// Unlinks the node at `index` and returns its element.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        let link = if index == 0 {
            &mut self.head
        } else {
            &mut self.node_mut(index - 1)?.next
        };
        // index < len, so the link always holds a node here
        let SinglyLinkedListNode { value, next } = *link.take().ok_or(IndexOutOfBounds { index, len })?;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let SinglyLinkedListNode { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn contains<Q: PartialEq<T> + ?Sized>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    /// Drops every node. Runs in a loop so long chains don't recurse through `Box::drop`.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: &self.head,
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            node: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    // only valid for index in [0, len - 1]
    fn node(&self, index: usize) -> Result<&SinglyLinkedListNode<T>, IndexOutOfBounds> {
        let len = self.len;
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        let mut current = self.head.as_deref();
        // a chain of `len` nodes, so `index` hops never run off the end
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref());
        }
        current.ok_or(IndexOutOfBounds { index, len })
    }

    fn node_mut(&mut self, index: usize) -> Result<&mut SinglyLinkedListNode<T>, IndexOutOfBounds> {
        let len = self.len;
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        let mut current = self.head.as_deref_mut();
        // same invariant as `node`
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current.ok_or(IndexOutOfBounds { index, len })
    }

    /// The empty link after the last node.
    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len;
        write!(f, "SinglyLinkedList {{ length: {len}, items: {{")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    // walks to the end once, then keeps a cursor on the new tail
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut link = self.tail_link();
        for i in iter.into_iter() {
            let node = link.insert(SinglyLinkedListNode::new(i, None));
            link = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

pub use iters::*;
mod iters {
    use super::*;
    use core::iter::FusedIterator;

    impl<T> IntoIterator for SinglyLinkedList<T> {
        type Item = T;
        type IntoIter = IntoIter<T>;
        fn into_iter(self) -> Self::IntoIter {
            IntoIter { list: self }
        }
    }

    impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;
        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
        type Item = &'a mut T;
        type IntoIter = IterMut<'a, T>;
        fn into_iter(self) -> Self::IntoIter {
            self.iter_mut()
        }
    }

    pub struct IntoIter<T> {
        pub(crate) list: SinglyLinkedList<T>,
    }

    impl<T> Iterator for IntoIter<T> {
        type Item = T;
        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop_front()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.list.len, Some(self.list.len))
        }
    }

    impl<T> ExactSizeIterator for IntoIter<T> {}
    impl<T> FusedIterator for IntoIter<T> {}

    pub struct Iter<'a, T> {
        pub(crate) node: &'a Link<T>,
        pub(crate) remaining: usize,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;
        fn next(&mut self) -> Option<Self::Item> {
            if let Some(s) = self.node {
                self.node = &s.next;
                self.remaining -= 1;
                Some(&s.value)
            } else {
                None
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.remaining, Some(self.remaining))
        }
    }

    impl<T> ExactSizeIterator for Iter<'_, T> {}
    impl<T> FusedIterator for Iter<'_, T> {}

    pub struct IterMut<'a, T> {
        pub(crate) node: Option<&'a mut SinglyLinkedListNode<T>>,
        pub(crate) remaining: usize,
    }

    impl<'a, T> Iterator for IterMut<'a, T> {
        type Item = &'a mut T;
        fn next(&mut self) -> Option<Self::Item> {
            self.node.take().map(|node| {
                self.node = node.next.as_deref_mut();
                self.remaining -= 1;
                &mut node.value
            })
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.remaining, Some(self.remaining))
        }
    }

    impl<T> ExactSizeIterator for IterMut<'_, T> {}
    impl<T> FusedIterator for IterMut<'_, T> {}
}

pub(crate) struct SinglyLinkedListNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> SinglyLinkedListNode<T> {
    fn new(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}
