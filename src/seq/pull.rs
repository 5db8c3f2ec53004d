//! Demand-driven cursors over push-style sequences.
//!
//! [`pull`] converts a [`Seq`], a producer that drives a callback, into a
//! [`Pull`] cursor the consumer advances one value at a time. The producer
//! runs on a dedicated driver thread and suspends at every yield on a
//! zero-capacity rendezvous channel, racing the handoff against a
//! cancellation signal. Producer panics are captured at the thread boundary
//! and replayed, exactly once, to whichever of [`Pull::next`] or
//! [`Pull::stop`] observes termination first.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle, ThreadId};

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::seq::core::{Seq, Seq2};

/// Monotonic id used to name driver threads.
static NEXT_CURSOR_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    /// Driver alive; values may still arrive.
    Running,
    /// Producer returned normally.
    Exhausted,
    /// Producer panicked; the payload has been replayed.
    Failed,
    /// Consumer requested early termination.
    Stopped,
}

/// A pull cursor over a [`Seq`], created by [`pull`].
///
/// Exactly one background driver thread belongs to each cursor. The thread
/// is always joined, never leaked: by [`Pull::stop`], by observing
/// exhaustion through [`Pull::next`], or by dropping the cursor.
///
/// The `&mut self` receivers make this a single-consumer API by
/// construction; hand the cursor itself to whichever context should advance
/// or stop it.
///
/// Dropping a cursor whose producer panicked forwards the panic to the
/// dropping thread, unless that thread is already panicking.
pub struct Pull<T> {
    values: Option<Receiver<T>>,
    quit: Option<Sender<()>>,
    driver: Option<JoinHandle<Result<(), Box<dyn Any + Send>>>>,
    driver_thread: ThreadId,
    state: CursorState,
    id: u64,
}

/// A pull cursor over a [`Seq2`], created by [`pull2`].
pub type Pull2<K, V> = Pull<(K, V)>;

/// Convert a push-style sequence into a pull cursor.
///
/// The producer starts running immediately on its driver thread and blocks
/// at the first yield; it therefore runs at most one element ahead of
/// demand.
///
/// # Examples
/// ```
/// use xseq::{from_iter, pull};
///
/// let mut cursor = pull(from_iter(0..3));
/// assert_eq!(cursor.next(), Some(0));
/// assert_eq!(cursor.next(), Some(1));
/// cursor.stop();
/// assert_eq!(cursor.next(), None);
/// ```
pub fn pull<T>(seq: Seq<T>) -> Pull<T>
where
    T: Send + 'static,
{
    let (value_tx, value_rx) = bounded::<T>(0);
    let (quit_tx, quit_rx) = bounded::<()>(0);
    let id = NEXT_CURSOR_ID.fetch_add(1, Ordering::Relaxed);
    let driver = thread::Builder::new()
        .name(format!("seq-pull-{}", id))
        .spawn(move || drive(seq, value_tx, quit_rx))
        .expect("failed to spawn sequence driver thread");
    let driver_thread = driver.thread().id();
    log::trace!("pull cursor {} started", id);
    Pull {
        values: Some(value_rx),
        quit: Some(quit_tx),
        driver: Some(driver),
        driver_thread,
        state: CursorState::Running,
        id,
    }
}

/// Convert a push-style pair sequence into a pull cursor over tuples.
pub fn pull2<K, V>(seq: Seq2<K, V>) -> Pull2<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    pull(seq.entries())
}

/// Collect up to `n` values through a pull cursor, then stop it. A negative
/// `n` drains the whole sequence.
///
/// # Examples
/// ```
/// use xseq::{from_iter, pull_out};
///
/// assert_eq!(pull_out(from_iter(0..100), 3), vec![0, 1, 2]);
/// assert_eq!(pull_out(from_iter(0..3), -1), vec![0, 1, 2]);
/// ```
pub fn pull_out<T>(seq: Seq<T>, n: i64) -> Vec<T>
where
    T: Send + 'static,
{
    if n == 0 {
        return Vec::new();
    }
    let mut cursor = pull(seq);
    let mut out = Vec::new();
    while n < 0 || (out.len() as i64) < n {
        match cursor.next() {
            Some(v) => out.push(v),
            None => break,
        }
    }
    cursor.stop();
    out
}

/// Driver loop: run the producer, offering each value through the rendezvous
/// channel while racing the quit signal. The value sender is dropped on
/// every exit path (normal return or unwind), which is what `next()`
/// observes as termination.
fn drive<T: Send>(
    seq: Seq<T>,
    values: Sender<T>,
    quit: Receiver<()>,
) -> Result<(), Box<dyn Any + Send>> {
    panic::catch_unwind(AssertUnwindSafe(move || {
        seq.each(|v| {
            crossbeam_channel::select! {
                send(values, v) -> res => res.is_ok(),
                // The consumer signals cancellation by dropping its end.
                recv(quit) -> _ => false,
            }
        });
    }))
}

impl<T> Pull<T> {
    /// Advance the cursor, returning the next value, or `None` once the
    /// sequence is exhausted, stopped, or failed.
    ///
    /// If the producer panicked, the first call that observes the
    /// termination replays that panic; every later call returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if called from the cursor's own driver thread, i.e. from
    /// inside the producing sequence. That call could never make progress:
    /// the producer would be waiting on itself.
    pub fn next(&mut self) -> Option<T> {
        if self.state != CursorState::Running {
            return None;
        }
        if thread::current().id() == self.driver_thread {
            panic!("Pull::next() called from inside its own producing sequence");
        }
        let recv = match &self.values {
            Some(rx) => rx.recv(),
            None => return None,
        };
        match recv {
            Ok(v) => Some(v),
            Err(_) => {
                // Sender dropped: the producer is done. Join the driver to
                // tell exhaustion apart from failure.
                self.values = None;
                self.quit = None;
                match self.join_driver() {
                    Ok(()) => {
                        log::trace!("pull cursor {} exhausted", self.id);
                        self.state = CursorState::Exhausted;
                        None
                    }
                    Err(payload) => {
                        log::trace!("pull cursor {} failed", self.id);
                        self.state = CursorState::Failed;
                        panic::resume_unwind(payload);
                    }
                }
            }
        }
    }

    /// Request early termination and wait for the driver thread to finish.
    ///
    /// The producer's in-flight yield (if any) returns `false`, letting it
    /// unwind its stack normally. `stop` is idempotent and safe to call
    /// after exhaustion or failure. When `stop` returns, no background
    /// activity from this cursor remains.
    ///
    /// # Panics
    ///
    /// If the producer panics while cleaning up in response to the
    /// cancellation, that panic surfaces from this call.
    pub fn stop(&mut self) {
        self.quit = None;
        self.values = None;
        if self.state == CursorState::Running {
            log::trace!("pull cursor {} stopped", self.id);
            self.state = CursorState::Stopped;
        }
        if let Err(payload) = self.join_driver() {
            panic::resume_unwind(payload);
        }
    }

    fn join_driver(&mut self) -> Result<(), Box<dyn Any + Send>> {
        match self.driver.take() {
            Some(handle) => match handle.join() {
                Ok(outcome) => outcome,
                // The driver catches producer panics itself; a join error
                // here would mean the drive loop panicked outside that
                // guard. Treat it the same way.
                Err(payload) => Err(payload),
            },
            None => Ok(()),
        }
    }
}

impl<T> Drop for Pull<T> {
    fn drop(&mut self) {
        self.quit = None;
        self.values = None;
        if let Err(payload) = self.join_driver() {
            if !thread::panicking() {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl<T> Iterator for Pull<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Pull::next(self)
    }
}
