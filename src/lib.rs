//! Ordered views derived from any sorted multiset.
//!
//! This crate implements a framework of views over sorted multisets, which
//! are multisets whose distinct elements are totally ordered by a
//! [`Comparator`]. A multiset only needs to provide a couple of primitives
//! through the [`SortedMultiset`] trait, namely its order and an ascending
//! traversal of its entries, to get the following for free:
//!
//! - Extremal queries and polling: getting or removing the entry of the
//!   smallest or largest element, with all of its occurences.
//! - Range views: the entries below, above or between bounds, where each
//!   bound is either [`Inclusive`](BoundType::Inclusive) or
//!   [`Exclusive`](BoundType::Exclusive). Range views are sorted multisets
//!   themselves, so they can be restricted further or reversed.
//! - A [`DescendingMultiset`] view, which presents the same entries in
//!   reverse order by rewriting every operation in terms of the forward
//!   multiset. Reversing a descending view gets back the original multiset.
//! - An [`ElementSet`] of the distinct elements, with the ordered set
//!   operations of [`SortedElementSet`] and the floor/ceiling style
//!   navigation of [`NavigableElementSet`].
//! - An [`EntrySet`] of the `(element, count)` entries.
//!
//! None of these views copy data. They hold a reference to the multiset they
//! were derived from and query it on every call, so that a mutation through
//! any of them (e.g. polling the first entry of a descending view) is
//! immediately visible through all the others.
//!
//! This crate also provides [`BTreeMultiset`], a sorted multiset of [`Ord`]
//! elements based on a sparse histogram, which serves both as a ready-to-use
//! collection and as an example of how a backend plugs into the framework.
//!
//! Everything is built around [`Rc`](std::rc::Rc) and interior mutability,
//! so multisets and their views are meant to be used from a single thread.
//!
//! # Examples
//!
//! ```
//! use sorted_multiset_views::{
//!     BTreeMultiset, BoundType, NavigableElementSet, SortedElementSet, SortedMultiset,
//! };
//!
//! let set = BTreeMultiset::from_elements([1, 1, 3, 5, 5, 5]);
//! assert_eq!(set.count(&5), 3);
//!
//! // Reversed order, and the bound algebra that comes with it
//! let descending = set.descending_multiset();
//! assert_eq!(descending.entry_iter().next().map(|e| e.element), Some(5));
//! let below_3 = descending.tail_multiset(3, BoundType::Exclusive);
//! assert!(below_3.iter().eq([1, 1]));
//!
//! // Navigation over distinct elements
//! assert_eq!(set.element_set().floor(4), Some(3));
//! assert_eq!(descending.element_set().floor(4), Some(5));
//!
//! // Polling through any view removes from the underlying multiset
//! let first = set.poll_first_entry().unwrap();
//! assert_eq!((first.element, first.count.get()), (1, 2));
//! assert!(below_3.is_empty());
//! ```

mod bound;
mod btree;
mod comparator;
mod descending;
mod element_set;
mod entry;
mod error;
mod multiset;
mod range;

pub use crate::{
    bound::{BoundType, Endpoint, GeneralRange},
    btree::BTreeMultiset,
    comparator::Comparator,
    descending::DescendingMultiset,
    element_set::{ElementSet, NavigableElementSet, SortedElementSet},
    entry::{Entry, EntrySet},
    error::ViewError,
    multiset::{EntryIter, SortedMultiset, SortedMultisetRef, ViewCache},
    range::RangeMultiset,
};
