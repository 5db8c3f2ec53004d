//! Push-style sequences and the adapters that compose them.
//!
//! A [`Seq`] inverts control: the producer calls the consumer for every
//! element. [`pull`] inverts it back, turning any producer into a cursor the
//! consumer advances one value at a time. [`merge`] and [`zip`] are built on
//! that cursor, since both need two independently advanceable inputs.

pub mod combinators;
pub mod constructors;
pub mod core;
pub mod merge;
pub mod pull;
pub mod zip;

// Core types
pub use self::core::{Seq, Seq2};

// Constructors
pub use constructors::{
    empty, from_channel, from_iter, from_map, from_map_keys, from_map_values, from_slice,
    from_slice_idx, from_slice_reverse, from_slice_shuffle,
};

// Push combinators and queries
pub use combinators::{
    all, any, at, avg, avg_by, concat, concat2, contains, contains_all, contains_any,
    contains_by, count, difference, filter, filter2, find, for_each_idx, head, intersect, join,
    limit, limit2, map, map2, max, max_by, mean, mean_by, min, min_by, moderate, reduce,
    reduce2, repeat, replace, replace_all, reverse, skip, union,
};

// Pull cursors
pub use pull::{pull, pull2, pull_out, Pull, Pull2};

// Ordered merge
pub use merge::{merge, merge2, merge_by, merge_by2};

// Parallel zip and equality
pub use zip::{equal, equal2, equal_by, equal_by2, zip, zip2, Zipped, Zipped2};
