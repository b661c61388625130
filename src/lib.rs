//! ## Introduction
//!
//! This crate implements ordered symbol tables - maps from keys to values that also answer
//! ordered queries - backed by plain, unbalanced binary search trees. Keys are sorted into an
//! 'ascending' order within the collection by comparing keys pairwise, and the tree never
//! rebalances: its shape is exactly the shape the insertion order produces.
//!
//! ## Benefits
//!
//! The crate complements the standard `std::collection` routines, but provides the following
//! benefits:
//!
//! - Keys stored in the collections do not need to be hashable, only comparable.
//! - The ordered queries come with the container: smallest and largest key, inclusive range
//!   queries, level order traversal, whole-tree and per-key heights, and leaf enumeration.
//! - Every walk through a tree - lookup, insertion, iteration, cloning, even `Drop` - uses an
//!   explicit heap-allocated stack or queue, so a badly shaped tree cannot overflow the call
//!   stack.
//! - Keys are never removed, so the subtree bookkeeping stays simple: a map only grows, and
//!   the number of keys is always available in constant time.
//! - The crate is small and `#![no_std]`.
//!
//! ## Contents
//!
//! <center>
//!
//! | Type        | Stores       | Sorts By | Iterator     |
//! |:------------|:-------------|:---------|--------------|
//! | `Map`       | Key/Value    | Ord      | `Iter`       |
//! | `StringMap` | String/Value | Ord      | `StringIter` |
//!
//! </center>
//!
//! The crate exposes an additional type `tree::Tree` that provides the foundation of the other
//! types. It is provided to support development of additional collection types.

#![no_std]
#![warn(missing_docs)]

mod error;
mod map;
pub mod tree;

pub use error::TreeError;
pub use map::*;
pub use tree::{Iter, Keys, Leaves, LevelOrder, Range};
