//! A destructive left-leaning red-black tree for Rust.
//!
//! This crate provides [`LlrbTree`], an ordered collection whose order comes
//! from a pluggable [`Comparator`] rather than a fixed `Ord` impl:
//!
//! - [`insert`](LlrbTree::insert) / [`remove`](LlrbTree::remove) in O(log n)
//! - [`find`](LlrbTree::find), [`find_all`](LlrbTree::find_all) and the
//!   neighbour queries [`find_bounds`](LlrbTree::find_bounds) and
//!   [`find_bounds_excl`](LlrbTree::find_bounds_excl)
//! - [`min`](LlrbTree::min), [`max`](LlrbTree::max) and in-order traversal
//! - Equivalent values either replace one another or accumulate in one node,
//!   see [`DuplicatePolicy`]
//!
//! # Example
//!
//! ```
//! use llrb_tree::LlrbTree;
//!
//! // Order events by time only; events at the same time accumulate.
//! let mut events = LlrbTree::with_comparator(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
//! events.insert((30, "close"));
//! events.insert((10, "open"));
//! events.insert((10, "log"));
//!
//! assert_eq!(events.len(), 3);
//! assert_eq!(events.min(), Some(&(10, "open")));
//! assert_eq!(events.find_all(&(10, "")), [&(10, "open"), &(10, "log")]);
//!
//! // The first event after t=10.
//! let (_, next) = events.find_bounds(&(10, ""));
//! assert_eq!(next.map(|n| n.datum().1), Some("close"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Runtime ordering** - Any `Fn(&T, &T) -> Ordering`, swappable on a live tree
//! - **Read-only node access** - [`NodeRef`] exposes colors and links for
//!   renderers and checkers without allowing mutation
//!
//! # Implementation
//!
//! The tree is a left-leaning red-black tree (Sedgewick, 2008): red links only
//! ever lean left, so insertion and deletion each need just rotations, color
//! flips and the two "move red" operations, applied on the way back up a
//! recursive descent. Nodes live in an arena and are linked by compact
//! handles; each node also records its parent.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod color;
mod compare;
mod duplicates;
mod error;
mod node_ref;
mod raw;

pub mod llrb_tree;

pub use color::Color;
pub use compare::{Comparator, NaturalOrder};
pub use duplicates::{DuplicatePolicy, Removal};
pub use error::InvariantError;
pub use llrb_tree::{Bounds, Builder, LlrbTree};
pub use node_ref::{NodeRef, Values};
