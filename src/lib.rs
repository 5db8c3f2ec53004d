//! xseq - push-style sequences with pull cursors
//!
//! This crate implements basic adapters for composing iterator-like sequences:
//!
//! - [`Seq`] and [`Seq2`] are push-style producers that drive a per-element
//!   callback until it asks them to stop.
//! - [`pull`] and [`pull2`] convert a push-style producer into a demand-driven
//!   [`Pull`] cursor backed by a dedicated driver thread.
//! - [`merge`], [`merge_by`], [`merge2`], and [`merge_by2`] merge two ordered
//!   sequences.
//! - [`zip`] and [`zip2`] iterate over two sequences in parallel.
//! - [`equal`], [`equal2`], [`equal_by`], and [`equal_by2`] check whether two
//!   sequences contain equal values.
//! - [`concat`], [`filter`], [`limit`], [`map`], [`reduce`] and friends are
//!   the sequential plumbing built on top.

pub mod seq;

// Re-export the whole sequence surface at the crate root
pub use seq::*;
