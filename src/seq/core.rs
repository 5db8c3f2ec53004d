//! Core sequence types.
//!
//! A [`Seq`] is a push-style producer: calling it walks the elements and
//! hands each one to a yield callback, stopping as soon as the callback
//! returns `false`. A [`Seq2`] is the same contract over key/value pairs.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A sequence of elements provided by an iterator-like producer function.
///
/// The producer contract: invoke the yield callback once per element, in
/// order, and stop immediately once it returns `false`. A `Seq` is
/// re-invocable: every call to [`Seq::each`] restarts iteration from the
/// beginning. Producers must not retain state between invocations unless
/// the constructor documents otherwise (see
/// [`from_channel`](crate::seq::constructors::from_channel)).
///
/// Cloning is cheap: the producer is shared behind an [`Arc`], analogous to
/// passing a function value around.
pub struct Seq<T> {
    producer: Arc<dyn Fn(&mut dyn FnMut(T) -> bool) + Send + Sync>,
}

/// A sequence of key/value pairs provided by an iterator-like producer
/// function. Same contract as [`Seq`].
pub struct Seq2<K, V> {
    producer: Arc<dyn Fn(&mut dyn FnMut(K, V) -> bool) + Send + Sync>,
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<K, V> Clone for Seq2<K, V> {
    fn clone(&self) -> Self {
        Seq2 {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<K, V> fmt::Debug for Seq2<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq2").finish_non_exhaustive()
    }
}

impl<T> Seq<T> {
    /// Wrap a producer function as a sequence.
    ///
    /// # Examples
    /// ```
    /// use xseq::Seq;
    ///
    /// let evens = Seq::new(|out| {
    ///     for i in (0..10).step_by(2) {
    ///         if !out(i) {
    ///             break;
    ///         }
    ///     }
    /// });
    /// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn new<F>(producer: F) -> Self
    where
        T: 'static,
        F: Fn(&mut dyn FnMut(T) -> bool) + Send + Sync + 'static,
    {
        Seq {
            producer: Arc::new(producer),
        }
    }

    /// Drive the producer, handing each element to `f` until `f` returns
    /// `false` or the sequence is exhausted.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(T) -> bool,
    {
        (self.producer)(&mut f);
    }

    /// Drive the producer to exhaustion, handing every element to `f`.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(T),
    {
        self.each(|v| {
            f(v);
            true
        });
    }

    /// Collect every element into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::new();
        self.for_each(|v| out.push(v));
        out
    }
}

impl<K, V> Seq2<K, V> {
    /// Wrap a pairwise producer function as a sequence.
    pub fn new<F>(producer: F) -> Self
    where
        K: 'static,
        V: 'static,
        F: Fn(&mut dyn FnMut(K, V) -> bool) + Send + Sync + 'static,
    {
        Seq2 {
            producer: Arc::new(producer),
        }
    }

    /// Drive the producer, handing each pair to `f` until `f` returns
    /// `false` or the sequence is exhausted.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(K, V) -> bool,
    {
        (self.producer)(&mut f);
    }

    /// Drive the producer to exhaustion, handing every pair to `f`.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(K, V),
    {
        self.each(|k, v| {
            f(k, v);
            true
        });
    }

    /// The keys of this sequence, as a [`Seq`].
    pub fn keys(&self) -> Seq<K>
    where
        K: 'static,
        V: 'static,
    {
        let seq = self.clone();
        Seq::new(move |out| seq.each(|k, _| out(k)))
    }

    /// The values of this sequence, as a [`Seq`].
    pub fn values(&self) -> Seq<V>
    where
        K: 'static,
        V: 'static,
    {
        let seq = self.clone();
        Seq::new(move |out| seq.each(|_, v| out(v)))
    }

    /// The pairs of this sequence, as a [`Seq`] of tuples.
    pub fn entries(&self) -> Seq<(K, V)>
    where
        K: 'static,
        V: 'static,
    {
        let seq = self.clone();
        Seq::new(move |out| seq.each(|k, v| out((k, v))))
    }

    /// Collect the pairs into a map. Later pairs overwrite earlier ones with
    /// the same key.
    pub fn to_map(&self) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        let mut out = HashMap::new();
        self.for_each(|k, v| {
            out.insert(k, v);
        });
        out
    }
}
