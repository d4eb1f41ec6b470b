//! Seeded differential testing for the `linked_structures` collections.
//!
//! Operation generators replay a random sequence of operations against a std
//! reference model and record the result each one should produce. `run_ops`
//! applies the same sequence to the real collection and stops at the first
//! operation whose result differs.

mod tester;

pub use tester::*;

/// Below this many elements the list generator only grows the list.
pub const MIN_LEN: usize = 8;
