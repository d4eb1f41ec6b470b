use alloc::boxed::Box;
use core::{
    fmt::{self, Debug, Formatter},
    iter::{Extend, FromIterator},
    marker::PhantomData,
    ptr::NonNull,
};
mod iters;
pub use iters::*;

type NodePtr<T> = NonNull<QueueNode<T>>;

/// A FIFO queue of singly linked nodes.
///
/// Every node is a leaked `Box` held through `NonNull`; `head` and `tail` both
/// point into the same chain so `push` and `poll` are O(1). Nodes are only
/// turned back into a `Box` when they are unlinked.
pub struct LinkedQueue<T> {
    head: Option<NodePtr<T>>,
    tail: Option<NodePtr<T>>,
    len: usize,
    marker: PhantomData<Box<QueueNode<T>>>,
}

// SAFETY: the queue owns every node reachable from `head` and hands out
// references only through `&self`/`&mut self`, same as `Box<T>`.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
// SAFETY: see above; `&LinkedQueue` only gives out `&T`.
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds an element to the back of the queue.
    pub fn push(&mut self, item: T) {
        let node = QueueNode::alloc(item);
        match self.tail {
            // SAFETY: tail is a live node of this queue, and we hold &mut self so
            // no reference into it exists.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn poll(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: head came from `QueueNode::alloc` and is unlinked right here,
            // so nothing else frees or reads it afterwards.
            let QueueNode { value, next } = unsafe { QueueNode::free(head) };
            self.head = next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            value
        })
    }

    pub fn peek(&self) -> Option<&T> {
        // SAFETY: head is live for as long as the queue is borrowed
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        // SAFETY: head is live and &mut self makes the access unique
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Frees every node one at a time.
    pub fn clear(&mut self) {
        while self.poll().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len;
        write!(f, "LinkedQueue {{ length: {len}, items: {{")?;
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

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter.into_iter() {
            self.push(i);
        }
    }
}

pub(crate) struct QueueNode<T> {
    value: T,
    next: Option<NodePtr<T>>,
}

impl<T> QueueNode<T> {
    fn alloc(value: T) -> NodePtr<T> {
        NonNull::from(Box::leak(Box::new(Self { value, next: None })))
    }

    /// # Safety
    /// `ptr` must come from [`QueueNode::alloc`] and must not be used again.
    unsafe fn free(ptr: NodePtr<T>) -> Self {
        *Box::from_raw(ptr.as_ptr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = LinkedQueue::new();
        queue.push('a');
        queue.push('b');
        queue.push('c');
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.poll(), Some('a'));
        assert_eq!(queue.poll(), Some('b'));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.poll(), Some('c'));
        assert_eq!(queue.poll(), None);
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn push_after_poll_keeps_tail_valid() {
        let mut queue = LinkedQueue::new();
        queue.push(1);
        queue.push(2);
        assert_eq!(queue.poll(), Some(1));
        queue.push(3);
        assert_eq!(queue.poll(), Some(2));
        assert_eq!(queue.poll(), Some(3));
        assert_eq!(queue.poll(), None);
        queue.push(4);
        assert_eq!(queue.peek(), Some(&4));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn drops_every_element() {
        use std::rc::Rc;
        let counter = Rc::new(());
        let mut queue: LinkedQueue<Rc<()>> = (0..10).map(|_| counter.clone()).collect();
        queue.poll();
        queue.push(counter.clone());
        assert_eq!(Rc::strong_count(&counter), 11);
        let mut iter = queue.into_iter();
        iter.next();
        drop(iter);
        assert_eq!(Rc::strong_count(&counter), 1);
    }

    #[test]
    fn send_and_sync_follow_element() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<LinkedQueue<u32>>();
        assert_send_sync::<Iter<'static, String>>();

        let queue: LinkedQueue<u32> = (0..100).collect();
        let total = std::thread::spawn(move || queue.into_iter().sum::<u32>())
            .join()
            .unwrap();
        assert_eq!(total, (0..100).sum());
    }

    #[test]
    fn poll_empty() {
        let mut queue = LinkedQueue::<i32>::new();
        assert_eq!(queue.poll(), None);
        assert_eq!(queue.peek(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn option_elements_are_not_confused_with_empty() {
        let mut queue = LinkedQueue::new();
        queue.push(None::<i32>);
        assert_eq!(queue.poll(), Some(None));
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn reuse_after_drain() {
        let mut queue = LinkedQueue::new();
        queue.push(1);
        assert_eq!(queue.poll(), Some(1));
        // tail must have been reset with the head
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.peek(), Some(&2));
        assert_eq!(queue.poll(), Some(2));
        assert_eq!(queue.poll(), Some(3));
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn queue_enqueue_dequeue_loop() {
        const STEP: usize = 5;
        let mut queue: LinkedQueue<usize> = LinkedQueue::new();
        let range = 0..1000;
        let mut items = range.clone().rev().collect::<Vec<usize>>();
        for i in range.step_by(STEP) {
            for i in i..i + STEP {
                queue.push(i);
            }
            for _ in 0..STEP {
                assert_eq!(queue.poll(), items.pop());
            }
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn peek_mut() {
        let mut queue: LinkedQueue<i32> = (0..3).collect();
        if let Some(front) = queue.peek_mut() {
            *front = 10;
        }
        assert_eq!(queue.poll(), Some(10));
    }

    #[test]
    fn clear() {
        let mut queue: LinkedQueue<i32> = (0..100).collect();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.poll(), None);
        queue.push(5);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [5]);
    }

    #[test]
    fn iter() {
        let queue: LinkedQueue<usize> = (0..1000).collect();
        let a = (0..1000).collect::<Vec<_>>();
        let b = queue.iter().copied().collect::<Vec<_>>();
        assert_eq!(a, b);
        assert_eq!(queue.iter().len(), 1000);
    }

    #[test]
    fn into_iter() {
        let queue: LinkedQueue<usize> = (0..1000).collect();
        let a = (0..1000).collect::<Vec<_>>();
        let b = queue.into_iter().collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn debug() {
        let queue: LinkedQueue<i32> = (1..=3).collect();
        assert_eq!(
            format!("{queue:?}"),
            "LinkedQueue { length: 3, items: {1, 2, 3} }"
        );
    }

    #[test]
    fn long_chain_drops() {
        let queue: LinkedQueue<u32> = (0..1_000_000).collect();
        drop(queue);
    }

    #[test]
    fn interleaved_against_vecdeque() {
        use rand::{rngs::StdRng, Rng, SeedableRng};
        use std::collections::VecDeque;

        let mut rng = StdRng::seed_from_u64(42);
        let mut queue = LinkedQueue::new();
        let mut model = VecDeque::new();
        for i in 0..10_000u32 {
            if rng.gen_bool(0.6) {
                queue.push(i);
                model.push_back(i);
            } else {
                assert_eq!(queue.poll(), model.pop_front());
            }
            assert_eq!(queue.len(), model.len());
        }
    }
}
