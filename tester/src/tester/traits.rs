use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};

/// deterministically applies an operation to a T returning the result
pub trait Operation {
    type Result: Sized;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

pub trait OperationGen<R: Rng + SeedableRng>: Operation + Sized {
    type Generator: OperationGenerator<R, Operation = Self, Item = (Self, Self::Result)>;
    fn gen_from_seed(seed: R::Seed) -> Self::Generator {
        Self::Generator::from_seed(seed)
    }
}

// deterministically generates a sequence of valid operations
pub trait OperationGenerator<R>:
    Iterator<Item = (Self::Operation, <Self::Operation as Operation>::Result)> + Sized
where
    R: Rng + SeedableRng,
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_seed(seed: R::Seed) -> Self;
    fn data(self) -> Self::ReferenceImpl;
}

pub use impls::*;
mod impls {
    use super::*;
    use crate::MIN_LEN;
    use linked_structures::{IndexOutOfBounds, LinkedQueue, SinglyLinkedList};
    use rand::rngs::StdRng;
    use std::collections::VecDeque;
    use std::mem;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum ListOperation<T> {
        Push(T),
        Insert(usize, T),
        Set(usize, T),
        Get(usize),
        Remove(usize),
        Contains(T),
        Len,
        Clear,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum ListOutcome<T> {
        Done,
        Inserted(Result<(), IndexOutOfBounds>),
        Element(Result<T, IndexOutOfBounds>),
        Contains(bool),
        Len(usize),
    }

    impl<T: Clone + PartialEq> Operation for ListOperation<T> {
        type Result = ListOutcome<T>;
        type Target = SinglyLinkedList<T>;

        fn apply(&self, list: &mut Self::Target) -> Self::Result {
            match self {
                Self::Push(item) => {
                    list.push(item.clone());
                    ListOutcome::Done
                }
                Self::Insert(index, item) => ListOutcome::Inserted(list.insert(*index, item.clone())),
                Self::Set(index, item) => ListOutcome::Element(list.set(*index, item.clone())),
                Self::Get(index) => ListOutcome::Element(list.get(*index).cloned()),
                Self::Remove(index) => ListOutcome::Element(list.remove(*index)),
                Self::Contains(item) => ListOutcome::Contains(list.contains(item)),
                Self::Len => ListOutcome::Len(list.len()),
                Self::Clear => {
                    list.clear();
                    ListOutcome::Done
                }
            }
        }
    }

    impl<T> OperationGen<StdRng> for ListOperation<T>
    where
        T: Clone + PartialEq,
        Standard: Distribution<T>,
    {
        type Generator = ListOperationGenerator<T, StdRng>;
    }

    /// Generates list operations, mirroring each on a `Vec`.
    ///
    /// Roughly one index in ten is out of bounds so the error paths get hit too.
    pub struct ListOperationGenerator<T, R = StdRng>
    where
        R: Rng + SeedableRng,
    {
        rng: R,
        data: Vec<T>,
    }

    impl<T, R> ListOperationGenerator<T, R>
    where
        R: Rng + SeedableRng,
    {
        fn index(&mut self, max_valid: usize) -> usize {
            if self.rng.gen_bool(0.9) {
                self.rng.gen_range(0..=max_valid)
            } else {
                max_valid + self.rng.gen_range(1..=3)
            }
        }

        fn bounds(&self, index: usize) -> IndexOutOfBounds {
            IndexOutOfBounds {
                index,
                len: self.data.len(),
            }
        }
    }

    impl<T, R> OperationGenerator<R> for ListOperationGenerator<T, R>
    where
        T: Clone + PartialEq,
        R: Rng + SeedableRng,
        Standard: Distribution<T>,
    {
        type Operation = ListOperation<T>;
        type ReferenceImpl = Vec<T>;
        fn from_seed(seed: R::Seed) -> Self {
            Self {
                rng: R::from_seed(seed),
                data: Vec::new(),
            }
        }
        fn data(self) -> Self::ReferenceImpl {
            self.data
        }
    }

    impl<T, R> Iterator for ListOperationGenerator<T, R>
    where
        T: Clone + PartialEq,
        R: Rng + SeedableRng,
        Standard: Distribution<T>,
    {
        type Item = (ListOperation<T>, ListOutcome<T>);

        fn next(&mut self) -> Option<Self::Item> {
            // short lists only grow
            let roll = if self.data.len() > MIN_LEN {
                self.rng.gen_range(0..100)
            } else {
                self.rng.gen_range(0..40)
            };
            let len = self.data.len();

            let item = match roll {
                0..=19 => {
                    let value: T = self.rng.gen();
                    self.data.push(value.clone());
                    (ListOperation::Push(value), ListOutcome::Done)
                }
                20..=39 => {
                    let index = self.index(len);
                    let value: T = self.rng.gen();
                    let res = if index <= len {
                        self.data.insert(index, value.clone());
                        Ok(())
                    } else {
                        Err(self.bounds(index))
                    };
                    (ListOperation::Insert(index, value), ListOutcome::Inserted(res))
                }
                40..=54 => {
                    let index = self.index(len.saturating_sub(1));
                    let value: T = self.rng.gen();
                    let res = match self.data.get_mut(index) {
                        Some(slot) => Ok(mem::replace(slot, value.clone())),
                        None => Err(self.bounds(index)),
                    };
                    (ListOperation::Set(index, value), ListOutcome::Element(res))
                }
                55..=69 => {
                    let index = self.index(len.saturating_sub(1));
                    let res = self.data.get(index).cloned().ok_or(self.bounds(index));
                    (ListOperation::Get(index), ListOutcome::Element(res))
                }
                70..=89 => {
                    let index = self.index(len.saturating_sub(1));
                    let res = if index < len {
                        Ok(self.data.remove(index))
                    } else {
                        Err(self.bounds(index))
                    };
                    (ListOperation::Remove(index), ListOutcome::Element(res))
                }
                90..=95 => {
                    let value: T = if len > 0 && self.rng.gen_bool(0.75) {
                        self.data[self.rng.gen_range(0..len)].clone()
                    } else {
                        self.rng.gen()
                    };
                    let res = self.data.contains(&value);
                    (ListOperation::Contains(value), ListOutcome::Contains(res))
                }
                96..=98 => (ListOperation::Len, ListOutcome::Len(len)),
                99 => {
                    self.data.clear();
                    (ListOperation::Clear, ListOutcome::Done)
                }
                _ => unreachable!(),
            };
            Some(item)
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum QueueOperation<T> {
        Push(T),
        Poll,
        Peek,
        Len,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum QueueOutcome<T> {
        Done,
        Element(Option<T>),
        Len(usize),
    }

    impl<T: Clone> Operation for QueueOperation<T> {
        type Result = QueueOutcome<T>;
        type Target = LinkedQueue<T>;

        fn apply(&self, queue: &mut Self::Target) -> Self::Result {
            match self {
                Self::Push(item) => {
                    queue.push(item.clone());
                    QueueOutcome::Done
                }
                Self::Poll => QueueOutcome::Element(queue.poll()),
                Self::Peek => QueueOutcome::Element(queue.peek().cloned()),
                Self::Len => QueueOutcome::Len(queue.len()),
            }
        }
    }

    impl<T> OperationGen<StdRng> for QueueOperation<T>
    where
        T: Clone,
        Standard: Distribution<T>,
    {
        type Generator = QueueOperationGenerator<T, StdRng>;
    }

    /// Generates queue operations, mirroring each on a `VecDeque`.
    ///
    /// Pushes are slightly favoured so the queue drifts between empty and a few
    /// hundred elements instead of staying empty.
    pub struct QueueOperationGenerator<T, R = StdRng>
    where
        R: Rng + SeedableRng,
    {
        rng: R,
        data: VecDeque<T>,
    }

    impl<T, R> OperationGenerator<R> for QueueOperationGenerator<T, R>
    where
        T: Clone,
        R: Rng + SeedableRng,
        Standard: Distribution<T>,
    {
        type Operation = QueueOperation<T>;
        type ReferenceImpl = VecDeque<T>;
        fn from_seed(seed: R::Seed) -> Self {
            Self {
                rng: R::from_seed(seed),
                data: VecDeque::new(),
            }
        }
        fn data(self) -> Self::ReferenceImpl {
            self.data
        }
    }

    impl<T, R> Iterator for QueueOperationGenerator<T, R>
    where
        T: Clone,
        R: Rng + SeedableRng,
        Standard: Distribution<T>,
    {
        type Item = (QueueOperation<T>, QueueOutcome<T>);

        fn next(&mut self) -> Option<Self::Item> {
            let item = match self.rng.gen_range(0..100) {
                0..=54 => {
                    let value: T = self.rng.gen();
                    self.data.push_back(value.clone());
                    (QueueOperation::Push(value), QueueOutcome::Done)
                }
                55..=89 => (
                    QueueOperation::Poll,
                    QueueOutcome::Element(self.data.pop_front()),
                ),
                90..=96 => (
                    QueueOperation::Peek,
                    QueueOutcome::Element(self.data.front().cloned()),
                ),
                97..=99 => (QueueOperation::Len, QueueOutcome::Len(self.data.len())),
                _ => unreachable!(),
            };
            Some(item)
        }
    }
}
