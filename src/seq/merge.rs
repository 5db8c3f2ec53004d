//! Ordered merge of two sequences.
//!
//! Merging needs two independently advanceable inputs, so the second
//! sequence is wrapped in a pull cursor while the first is walked directly.

use std::cmp::Ordering;

use crate::seq::core::{Seq, Seq2};
use crate::seq::pull::{pull, pull2};

/// Merge two sequences of ordered values into one ordered sequence.
///
/// If the inputs are each sorted, the output is their sorted
/// union-with-multiplicity; equal elements are yielded from `x` before `y`.
/// If the inputs are not sorted, the output is unordered but still contains
/// every element of both inputs exactly once.
///
/// # Examples
/// ```
/// use xseq::{from_slice, merge};
///
/// let merged = merge(from_slice(vec![0, 2, 4]), from_slice(vec![1, 3, 5]));
/// assert_eq!(merged.to_vec(), vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn merge<T>(x: Seq<T>, y: Seq<T>) -> Seq<T>
where
    T: Ord + Send + 'static,
{
    merge_by(x, y, |a, b| a.cmp(b))
}

/// Merge two sequences of values ordered by `cmp`. See [`merge`].
///
/// Each invocation of the merged sequence starts one cursor on `y`; the
/// cursor is stopped on every exit path, including early consumer stops, so
/// no driver thread outlives iteration. Abandoning the merged sequence
/// early does not drain `x`.
pub fn merge_by<T, F>(x: Seq<T>, y: Seq<T>, cmp: F) -> Seq<T>
where
    T: Send + 'static,
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    Seq::new(move |out| {
        let mut cursor = pull(y.clone());
        let mut pending = cursor.next();
        let mut live = true;
        x.each(|xv| {
            // Yield every buffered y element that strictly precedes xv.
            while let Some(yv) = pending.take() {
                if cmp(&xv, &yv) == Ordering::Greater {
                    live = out(yv);
                    if !live {
                        return false;
                    }
                    pending = cursor.next();
                } else {
                    pending = Some(yv);
                    break;
                }
            }
            live = out(xv);
            live
        });
        if live {
            while let Some(yv) = pending.take() {
                if !out(yv) {
                    break;
                }
                pending = cursor.next();
            }
        }
        cursor.stop();
    })
}

/// Merge two pair sequences ordered by key. See [`merge`].
pub fn merge2<K, V>(x: Seq2<K, V>, y: Seq2<K, V>) -> Seq2<K, V>
where
    K: Ord + Send + 'static,
    V: Send + 'static,
{
    merge_by2(x, y, |a, b| a.cmp(b))
}

/// Merge two pair sequences whose keys are ordered by `cmp`. Values are
/// carried along; only keys are compared.
pub fn merge_by2<K, V, F>(x: Seq2<K, V>, y: Seq2<K, V>, cmp: F) -> Seq2<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
    F: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
{
    Seq2::new(move |out| {
        let mut cursor = pull2(y.clone());
        let mut pending = cursor.next();
        let mut live = true;
        x.each(|xk, xv| {
            while let Some((yk, yv)) = pending.take() {
                if cmp(&xk, &yk) == Ordering::Greater {
                    live = out(yk, yv);
                    if !live {
                        return false;
                    }
                    pending = cursor.next();
                } else {
                    pending = Some((yk, yv));
                    break;
                }
            }
            live = out(xk, xv);
            live
        });
        if live {
            while let Some((yk, yv)) = pending.take() {
                if !out(yk, yv) {
                    break;
                }
                pending = cursor.next();
            }
        }
        cursor.stop();
    })
}
