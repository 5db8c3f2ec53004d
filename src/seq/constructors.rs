//! Constructors turning collections and channels into sequences.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::seq::core::{Seq, Seq2};

/// A sequence with no elements.
pub fn empty<T: 'static>() -> Seq<T> {
    Seq::new(|_out| {})
}

/// A sequence over the elements of a slice, in order. Elements are cloned
/// out on each yield.
///
/// # Examples
/// ```
/// use xseq::from_slice;
///
/// let seq = from_slice(vec![1, 2, 3]);
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// // re-invocable: iterating again restarts from the beginning
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// ```
pub fn from_slice<T>(items: Vec<T>) -> Seq<T>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::new(move |out| {
        for item in &items {
            if !out(item.clone()) {
                break;
            }
        }
    })
}

/// A pair sequence over a slice, keyed by index.
pub fn from_slice_idx<T>(items: Vec<T>) -> Seq2<usize, T>
where
    T: Clone + Send + Sync + 'static,
{
    Seq2::new(move |out| {
        for (i, item) in items.iter().enumerate() {
            if !out(i, item.clone()) {
                break;
            }
        }
    })
}

/// A sequence over the elements of a slice, last to first.
pub fn from_slice_reverse<T>(items: Vec<T>) -> Seq<T>
where
    T: Clone + Send + Sync + 'static,
{
    Seq::new(move |out| {
        for item in items.iter().rev() {
            if !out(item.clone()) {
                break;
            }
        }
    })
}

/// A sequence over the elements of a slice in a random order.
///
/// The permutation is drawn once, at construction; re-invoking the sequence
/// replays the same order.
pub fn from_slice_shuffle<T>(items: Vec<T>) -> Seq<T>
where
    T: Clone + Send + Sync + 'static,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.shuffle(&mut thread_rng());
    Seq::new(move |out| {
        for &i in &order {
            if !out(items[i].clone()) {
                break;
            }
        }
    })
}

/// A sequence over any cloneable iterable. The iterable is cloned on each
/// invocation, so ranges and slices restart cleanly.
///
/// # Examples
/// ```
/// use xseq::from_iter;
///
/// assert_eq!(from_iter(0..4).to_vec(), vec![0, 1, 2, 3]);
/// ```
pub fn from_iter<I>(iter: I) -> Seq<I::Item>
where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: 'static,
{
    Seq::new(move |out| {
        for v in iter.clone() {
            if !out(v) {
                break;
            }
        }
    })
}

/// The keys of a map, in arbitrary order.
pub fn from_map_keys<K, V>(m: HashMap<K, V>) -> Seq<K>
where
    K: Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    Seq::new(move |out| {
        for k in m.keys() {
            if !out(k.clone()) {
                break;
            }
        }
    })
}

/// The values of a map, in arbitrary order.
pub fn from_map_values<K, V>(m: HashMap<K, V>) -> Seq<V>
where
    K: Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Seq::new(move |out| {
        for v in m.values() {
            if !out(v.clone()) {
                break;
            }
        }
    })
}

/// The entries of a map as a pair sequence, in arbitrary order.
pub fn from_map<K, V>(m: HashMap<K, V>) -> Seq2<K, V>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Seq2::new(move |out| {
        for (k, v) in &m {
            if !out(k.clone(), v.clone()) {
                break;
            }
        }
    })
}

/// A sequence that drains a channel, yielding until the channel is closed
/// or the consumer stops iterating.
///
/// Unlike most constructors this one is stateful across invocations: each
/// run continues draining from wherever the previous one left off, because
/// received values cannot be put back.
pub fn from_channel<T>(rx: crossbeam_channel::Receiver<T>) -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(move |out| {
        for v in rx.iter() {
            if !out(v) {
                break;
            }
        }
    })
}
