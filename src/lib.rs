#![cfg_attr(not(test), no_std)]

//! Singly linked collections: an index addressable list and a FIFO queue,
//! plus a small range helper.

extern crate alloc;

pub mod error;
pub mod linked_lists;
pub mod queue;
pub mod sum_of_squares;

pub use error::{IndexOutOfBounds, InvalidRange};
pub use linked_lists::SinglyLinkedList;
pub use queue::LinkedQueue;
pub use sum_of_squares::sum_of_squares_in_range;
