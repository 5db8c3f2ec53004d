//! Parallel walk of two sequences, and the equality checks built on it.

use crate::seq::core::{Seq, Seq2};
use crate::seq::pull::{pull, pull2};

/// One position of a pairwise walk over two sequences. A `None` side means
/// that sequence had already ended at this position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zipped<V1, V2> {
    pub v1: Option<V1>,
    pub v2: Option<V2>,
}

/// One position of a pairwise walk over two pair sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zipped2<K1, V1, K2, V2> {
    pub kv1: Option<(K1, V1)>,
    pub kv2: Option<(K2, V2)>,
}

/// Advance two sequences in lockstep, yielding one [`Zipped`] per position
/// until both are exhausted.
///
/// # Examples
/// ```
/// use xseq::{from_slice, zip, Zipped};
///
/// let pairs = zip(from_slice(vec![1, 2]), from_slice(vec![10, 20, 30]));
/// assert_eq!(
///     pairs.to_vec(),
///     vec![
///         Zipped { v1: Some(1), v2: Some(10) },
///         Zipped { v1: Some(2), v2: Some(20) },
///         Zipped { v1: None, v2: Some(30) },
///     ]
/// );
/// ```
pub fn zip<A, B>(x: Seq<A>, y: Seq<B>) -> Seq<Zipped<A, B>>
where
    A: 'static,
    B: Send + 'static,
{
    Seq::new(move |out| {
        let mut cursor = pull(y.clone());
        let mut live = true;
        x.each(|xv| {
            live = out(Zipped {
                v1: Some(xv),
                v2: cursor.next(),
            });
            live
        });
        if live {
            while let Some(yv) = cursor.next() {
                if !out(Zipped {
                    v1: None,
                    v2: Some(yv),
                }) {
                    break;
                }
            }
        }
        cursor.stop();
    })
}

/// Advance two pair sequences in lockstep. See [`zip`].
pub fn zip2<K1, V1, K2, V2>(x: Seq2<K1, V1>, y: Seq2<K2, V2>) -> Seq<Zipped2<K1, V1, K2, V2>>
where
    K1: 'static,
    V1: 'static,
    K2: Send + 'static,
    V2: Send + 'static,
{
    Seq::new(move |out| {
        let mut cursor = pull2(y.clone());
        let mut live = true;
        x.each(|k, v| {
            live = out(Zipped2 {
                kv1: Some((k, v)),
                kv2: cursor.next(),
            });
            live
        });
        if live {
            while let Some(kv) = cursor.next() {
                if !out(Zipped2 {
                    kv1: None,
                    kv2: Some(kv),
                }) {
                    break;
                }
            }
        }
        cursor.stop();
    })
}

/// `true` if both sequences have the same length and pointwise-equal
/// elements. Stops walking (and stops the underlying cursor) at the first
/// mismatch.
pub fn equal<T>(x: Seq<T>, y: Seq<T>) -> bool
where
    T: PartialEq + Send + 'static,
{
    equal_by(x, y, |a, b| a == b)
}

/// Pointwise equality under `eq`. See [`equal`].
pub fn equal_by<A, B, F>(x: Seq<A>, y: Seq<B>, eq: F) -> bool
where
    A: 'static,
    B: Send + 'static,
    F: Fn(&A, &B) -> bool,
{
    let mut result = true;
    zip(x, y).each(|z| match (z.v1, z.v2) {
        (Some(a), Some(b)) if eq(&a, &b) => true,
        _ => {
            result = false;
            false
        }
    });
    result
}

/// `true` if both pair sequences have the same length and pointwise-equal
/// keys and values.
pub fn equal2<K, V>(x: Seq2<K, V>, y: Seq2<K, V>) -> bool
where
    K: PartialEq + Send + 'static,
    V: PartialEq + Send + 'static,
{
    equal_by2(x, y, |k1, v1, k2, v2| k1 == k2 && v1 == v2)
}

/// Pointwise equality of pair sequences under `eq`. See [`equal`].
pub fn equal_by2<K1, V1, K2, V2, F>(x: Seq2<K1, V1>, y: Seq2<K2, V2>, eq: F) -> bool
where
    K1: 'static,
    V1: 'static,
    K2: Send + 'static,
    V2: Send + 'static,
    F: Fn(&K1, &V1, &K2, &V2) -> bool,
{
    let mut result = true;
    zip2(x, y).each(|z| match (z.kv1, z.kv2) {
        (Some((k1, v1)), Some((k2, v2))) if eq(&k1, &v1, &k2, &v2) => true,
        _ => {
            result = false;
            false
        }
    });
    result
}
