//! Push-style combinators and queries.
//!
//! Everything here is sequential plumbing over [`Seq`]/[`Seq2`]: direct
//! traversals with no concurrency of their own. Combinators return sequences
//! that are stateless across re-invocations.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::ops::{Add, Div};

use crate::seq::core::{Seq, Seq2};

/// Apply `f` to every element of `seq`.
///
/// # Examples
/// ```
/// use xseq::{from_iter, map};
///
/// let doubled = map(from_iter(1..4), |v| v * 2);
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// ```
pub fn map<A, B, F>(seq: Seq<A>, f: F) -> Seq<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    Seq::new(move |out| seq.each(|v| out(f(v))))
}

/// Apply `f` to every pair of `seq`.
pub fn map2<K, V, K2, V2, F>(seq: Seq2<K, V>, f: F) -> Seq2<K2, V2>
where
    K: 'static,
    V: 'static,
    K2: 'static,
    V2: 'static,
    F: Fn(K, V) -> (K2, V2) + Send + Sync + 'static,
{
    Seq2::new(move |out| {
        seq.each(|k, v| {
            let (k2, v2) = f(k, v);
            out(k2, v2)
        })
    })
}

/// Keep only the elements for which `pred` returns `true`.
pub fn filter<T, F>(seq: Seq<T>, pred: F) -> Seq<T>
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Seq::new(move |out| {
        seq.each(|v| {
            if pred(&v) {
                out(v)
            } else {
                true
            }
        })
    })
}

/// Keep only the pairs for which `pred` returns `true`.
pub fn filter2<K, V, F>(seq: Seq2<K, V>, pred: F) -> Seq2<K, V>
where
    K: 'static,
    V: 'static,
    F: Fn(&K, &V) -> bool + Send + Sync + 'static,
{
    Seq2::new(move |out| {
        seq.each(|k, v| {
            if pred(&k, &v) {
                out(k, v)
            } else {
                true
            }
        })
    })
}

/// Concatenate sequences, yielding each one to exhaustion in turn.
pub fn concat<T: 'static>(seqs: Vec<Seq<T>>) -> Seq<T> {
    Seq::new(move |out| {
        let mut live = true;
        for seq in &seqs {
            if !live {
                break;
            }
            seq.each(|v| {
                live = out(v);
                live
            });
        }
    })
}

/// Concatenate pair sequences.
pub fn concat2<K: 'static, V: 'static>(seqs: Vec<Seq2<K, V>>) -> Seq2<K, V> {
    Seq2::new(move |out| {
        let mut live = true;
        for seq in &seqs {
            if !live {
                break;
            }
            seq.each(|k, v| {
                live = out(k, v);
                live
            });
        }
    })
}

/// Truncate `seq` after `n` elements.
pub fn limit<T: 'static>(seq: Seq<T>, n: usize) -> Seq<T> {
    Seq::new(move |out| {
        if n == 0 {
            return;
        }
        let mut left = n;
        seq.each(|v| {
            left -= 1;
            out(v) && left > 0
        });
    })
}

/// Truncate a pair sequence after `n` pairs.
pub fn limit2<K: 'static, V: 'static>(seq: Seq2<K, V>, n: usize) -> Seq2<K, V> {
    Seq2::new(move |out| {
        if n == 0 {
            return;
        }
        let mut left = n;
        seq.each(|k, v| {
            left -= 1;
            out(k, v) && left > 0
        });
    })
}

/// Skip the first `n` elements of `seq`.
pub fn skip<T: 'static>(seq: Seq<T>, n: usize) -> Seq<T> {
    Seq::new(move |out| {
        let mut left = n;
        seq.each(|v| {
            if left == 0 {
                out(v)
            } else {
                left -= 1;
                true
            }
        });
    })
}

/// Replace up to `n` occurrences of `from` with `to`. A negative `n`
/// replaces every occurrence.
pub fn replace<T>(seq: Seq<T>, from: T, to: T, n: i64) -> Seq<T>
where
    T: PartialEq + Clone + Send + Sync + 'static,
{
    Seq::new(move |out| {
        let mut left = n;
        seq.each(|v| {
            if left == 0 || v != from {
                return out(v);
            }
            if left > 0 {
                left -= 1;
            }
            out(to.clone())
        })
    })
}

/// Replace every occurrence of `from` with `to`.
pub fn replace_all<T>(seq: Seq<T>, from: T, to: T) -> Seq<T>
where
    T: PartialEq + Clone + Send + Sync + 'static,
{
    replace(seq, from, to, -1)
}

/// Reverse `seq`. The input is buffered once, at construction.
pub fn reverse<T>(seq: Seq<T>) -> Seq<T>
where
    T: Clone + Send + Sync + 'static,
{
    let all = seq.to_vec();
    Seq::new(move |out| {
        for v in all.iter().rev() {
            if !out(v.clone()) {
                break;
            }
        }
    })
}

/// Repeat `seq` end-to-end `count` times.
pub fn repeat<T: 'static>(seq: Seq<T>, count: usize) -> Seq<T> {
    concat(vec![seq; count])
}

/// Fold every element of `seq` into an accumulator.
///
/// # Examples
/// ```
/// use xseq::{from_iter, reduce};
///
/// let sum = reduce(&from_iter(1..=10), 0, |acc, v| acc + v);
/// assert_eq!(sum, 55);
/// ```
pub fn reduce<T, A, F>(seq: &Seq<T>, init: A, mut f: F) -> A
where
    F: FnMut(A, T) -> A,
{
    let mut acc = Some(init);
    seq.each(|v| {
        let folded = f(acc.take().expect("accumulator present"), v);
        acc = Some(folded);
        true
    });
    acc.expect("accumulator present")
}

/// Fold every pair of `seq` into an accumulator.
pub fn reduce2<K, V, A, F>(seq: &Seq2<K, V>, init: A, mut f: F) -> A
where
    F: FnMut(A, K, V) -> A,
{
    let mut acc = Some(init);
    seq.each(|k, v| {
        let folded = f(acc.take().expect("accumulator present"), k, v);
        acc = Some(folded);
        true
    });
    acc.expect("accumulator present")
}

/// `true` if every element satisfies `pred`. Stops at the first failure.
pub fn all<T, F>(seq: &Seq<T>, mut pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    let mut res = true;
    seq.each(|v| {
        if pred(&v) {
            true
        } else {
            res = false;
            false
        }
    });
    res
}

/// `true` if any element satisfies `pred`. Stops at the first hit.
pub fn any<T, F>(seq: &Seq<T>, mut pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    let mut res = false;
    seq.each(|v| {
        if pred(&v) {
            res = true;
            false
        } else {
            true
        }
    });
    res
}

/// The number of elements in `seq`.
pub fn count<T>(seq: &Seq<T>) -> usize {
    let mut n = 0;
    seq.for_each(|_| n += 1);
    n
}

/// `true` if `target` occurs in `seq`.
pub fn contains<T: PartialEq>(seq: &Seq<T>, target: &T) -> bool {
    any(seq, |v| v == target)
}

/// `true` if some element satisfies `f`. Equivalent to [`any`].
pub fn contains_by<T, F>(seq: &Seq<T>, f: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    any(seq, f)
}

/// `true` if any of `targets` occurs in `seq`. An empty `targets` matches
/// nothing.
pub fn contains_any<T>(seq: &Seq<T>, targets: &[T]) -> bool
where
    T: Eq + Hash,
{
    if targets.is_empty() {
        return false;
    }
    let wanted: HashSet<&T> = targets.iter().collect();
    any(seq, |v| wanted.contains(v))
}

/// `true` if every one of `targets` occurs in `seq`. An empty `targets` is
/// trivially satisfied. Stops as soon as the last outstanding target is
/// seen.
pub fn contains_all<T>(seq: &Seq<T>, targets: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut missing: HashSet<&T> = targets.iter().collect();
    if missing.is_empty() {
        return true;
    }
    seq.each(|v| {
        missing.remove(&v);
        !missing.is_empty()
    });
    missing.is_empty()
}

/// The first element satisfying `pred`, if any.
pub fn find<T, F>(seq: &Seq<T>, mut pred: F) -> Option<T>
where
    F: FnMut(&T) -> bool,
{
    let mut found = None;
    seq.each(|v| {
        if pred(&v) {
            found = Some(v);
            false
        } else {
            true
        }
    });
    found
}

/// The first element of `seq`, if any.
pub fn head<T>(seq: &Seq<T>) -> Option<T> {
    find(seq, |_| true)
}

/// The element at `index`, if `seq` is long enough. Stops walking as soon
/// as the element is found.
pub fn at<T>(seq: &Seq<T>, index: usize) -> Option<T> {
    let mut left = index;
    find(seq, |_| {
        if left == 0 {
            true
        } else {
            left -= 1;
            false
        }
    })
}

/// Walk `seq` handing each element to `f` with its position, until `f`
/// returns `false` or the sequence is exhausted.
pub fn for_each_idx<T, F>(seq: &Seq<T>, mut f: F)
where
    F: FnMut(usize, T) -> bool,
{
    let mut idx = 0;
    seq.each(|v| {
        let more = f(idx, v);
        idx += 1;
        more
    });
}

/// The minimum element of `seq`, if any.
pub fn min<T: PartialOrd>(seq: &Seq<T>) -> Option<T> {
    min_by(seq, |a, b| a < b)
}

/// The minimum element under `less`, if any.
pub fn min_by<T, F>(seq: &Seq<T>, mut less: F) -> Option<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut best: Option<T> = None;
    seq.for_each(|v| match &best {
        Some(b) if !less(&v, b) => {}
        _ => best = Some(v),
    });
    best
}

/// The maximum element of `seq`, if any.
pub fn max<T: PartialOrd>(seq: &Seq<T>) -> Option<T> {
    max_by(seq, |a, b| a < b)
}

/// The maximum element under `less`, if any.
pub fn max_by<T, F>(seq: &Seq<T>, mut less: F) -> Option<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut best: Option<T> = None;
    seq.for_each(|v| match &best {
        Some(b) if !less(b, &v) => {}
        _ => best = Some(v),
    });
    best
}

/// The arithmetic mean of `seq` as a float. Zero when `seq` is empty.
///
/// # Examples
/// ```
/// use xseq::{avg, from_iter};
///
/// assert_eq!(avg(&from_iter(vec![1, 2, 3, 4])), 2.5);
/// ```
pub fn avg<T>(seq: &Seq<T>) -> f64
where
    T: Into<f64>,
{
    avg_by(seq, |v| v)
}

/// The arithmetic mean of `f` over `seq` as a float. Zero when `seq` is
/// empty.
pub fn avg_by<T, N, F>(seq: &Seq<T>, mut f: F) -> f64
where
    N: Into<f64>,
    F: FnMut(T) -> N,
{
    let mut sum = 0.0;
    let mut n = 0usize;
    seq.for_each(|v| {
        sum += f(v).into();
        n += 1;
    });
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// The mean of `seq` in the element type's own arithmetic, so integer
/// sequences divide with truncation. Zero when `seq` is empty.
pub fn mean<T>(seq: &Seq<T>) -> T
where
    T: Copy + Add<Output = T> + Div<Output = T> + From<u8>,
{
    mean_by(seq, |v| v)
}

/// The mean of `f` over `seq` in the result type's own arithmetic. Zero
/// when `seq` is empty.
pub fn mean_by<T, N, F>(seq: &Seq<T>, mut f: F) -> N
where
    N: Copy + Add<Output = N> + Div<Output = N> + From<u8>,
    F: FnMut(T) -> N,
{
    let one = N::from(1u8);
    let mut sum = N::from(0u8);
    let mut n = N::from(0u8);
    let mut empty = true;
    seq.for_each(|v| {
        sum = sum + f(v);
        n = n + one;
        empty = false;
    });
    if empty {
        sum
    } else {
        sum / n
    }
}

/// The most frequent element of `seq`, if any. When counts tie, the
/// element that reached the winning count first is kept.
///
/// # Examples
/// ```
/// use xseq::{from_slice, moderate};
///
/// assert_eq!(moderate(&from_slice(vec![1, 2, 2, 3, 2])), Some(2));
/// ```
pub fn moderate<T>(seq: &Seq<T>) -> Option<T>
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut best: Option<(T, usize)> = None;
    seq.for_each(|v| {
        let n = counts.entry(v.clone()).or_insert(0);
        *n += 1;
        match &best {
            Some((_, m)) if *n <= *m => {}
            _ => best = Some((v, *n)),
        }
    });
    best.map(|(v, _)| v)
}

/// Concatenate the display form of every element, separated by `sep`.
pub fn join<T: Display>(seq: &Seq<T>, sep: &str) -> String {
    let parts: Vec<String> = map_collect(seq);
    parts.join(sep)
}

fn map_collect<T: Display>(seq: &Seq<T>) -> Vec<String> {
    let mut parts = Vec::new();
    seq.for_each(|v| parts.push(v.to_string()));
    parts
}

fn to_set<T>(seq: &Seq<T>) -> HashSet<T>
where
    T: Eq + Hash,
{
    let mut set = HashSet::new();
    seq.for_each(|v| {
        set.insert(v);
    });
    set
}

/// Split `x` and `y` into the elements only in `x` and the elements only in
/// `y`.
pub fn difference<T>(x: Seq<T>, y: Seq<T>) -> (Seq<T>, Seq<T>)
where
    T: Eq + Hash + Send + Sync + 'static,
{
    let in_x = to_set(&x);
    let in_y = to_set(&y);
    (
        filter(x, move |v| !in_y.contains(v)),
        filter(y, move |v| !in_x.contains(v)),
    )
}

/// The elements of `y` that also occur in `x`.
pub fn intersect<T>(x: Seq<T>, y: Seq<T>) -> Seq<T>
where
    T: Eq + Hash + Send + Sync + 'static,
{
    let in_x = to_set(&x);
    filter(y, move |v| in_x.contains(v))
}

/// All of `x`, then the elements of `y` not already in `x`.
pub fn union<T>(x: Seq<T>, y: Seq<T>) -> Seq<T>
where
    T: Eq + Hash + Send + Sync + 'static,
{
    let in_x = to_set(&x);
    concat(vec![x, filter(y, move |v| !in_x.contains(v))])
}
