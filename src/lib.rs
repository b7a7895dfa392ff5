//! Self-balancing ordered collections for Rust.
//!
//! This crate provides three tree structures:
//!
//! - [`TreeMap`] — an ordered map backed by a Red-Black tree with O(log n)
//!   insert, lookup, and remove
//! - [`TreeSet`] — an ordered set built on [`TreeMap`], with `union`,
//!   `intersection`, and `difference`
//! - [`BPlusTree`] — a B+ Tree index with point lookup, ordered range scans
//!   over a linked leaf chain, and reverse value lookup
//!
//! # Example
//!
//! ```
//! use kaede_tree::{BPlusTree, TreeMap};
//!
//! let mut ranks = TreeMap::new();
//! ranks.insert("gold", 1);
//! ranks.insert("silver", 2);
//! assert_eq!(ranks.get("gold"), Some(&1));
//!
//! let mut index = BPlusTree::new(4).expect("order is valid");
//! index.insert(10, "A");
//! index.insert(20, "B");
//! index.insert(30, "C");
//! assert_eq!(index.range_search(&15, &35), [&"B", &"C"]);
//! ```
//!
//! # Implementation
//!
//! Both trees store their nodes in a slot arena and link them with plain
//! index handles — parent back-references and the B+ leaf chain included —
//! so there are no reference-counted cycles and no unsafe pointer graphs.
//! Cloning a collection clones the arenas, producing a fully independent
//! structure.
//!
//! The crate is `no_std` (requires `alloc`). The structures are
//! single-owner and do no internal locking; wrap them yourself if you need
//! to share one across threads.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod error;
mod raw;

pub mod bplus_tree;
pub mod tree_map;
pub mod tree_set;

pub use bplus_tree::BPlusTree;
pub use error::{Error, Result};
pub use tree_map::TreeMap;
pub use tree_set::TreeSet;
