//! Emission queue: input-dispatch thread → engine thread handoff.
//!
//! A FIFO of [`Emission`] values with exactly one producer (the platform's
//! input-dispatch callbacks) and one consumer (the engine's render/update
//! thread). [`EmissionQueue::push`] never blocks; the producer fires and
//! forgets. The consumer drains with [`pop`](EmissionQueue::pop),
//! [`pop_wait`](EmissionQueue::pop_wait), or
//! [`pump`](EmissionQueue::pump).
//!
//! Ordering: emissions are delivered in push order, with no coalescing.
//! Button sequences are edge-sensitive (a press must be observed before its
//! matching release), so reordering here would corrupt downstream state.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

use crate::emission::{Emission, EngineSink};

/// Cloneable handle to the shared emission FIFO.
///
/// Clones refer to the same queue; hand one clone to the producer and one to
/// the consumer thread.
#[derive(Clone, Default)]
pub struct EmissionQueue {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    queue: Mutex<VecDeque<Emission>>,
    available: Condvar,
}

impl EmissionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an emission. Never blocks; the queue is unbounded.
    pub fn push(&self, emission: Emission) {
        #[cfg(feature = "debug-log")]
        eprintln!("[QUEUE/PUSH] {:?}", emission);

        let mut queue = self.inner.queue.lock().unwrap();
        queue.push_back(emission);
        self.inner.available.notify_one();
    }

    /// Dequeue the oldest emission, or `None` if the queue is empty.
    pub fn pop(&self) -> Option<Emission> {
        self.inner.queue.lock().unwrap().pop_front()
    }

    /// Dequeue the oldest emission, blocking until one is available.
    pub fn pop_wait(&self) -> Emission {
        let mut queue = self.inner.queue.lock().unwrap();
        loop {
            if let Some(emission) = queue.pop_front() {
                return emission;
            }
            queue = self.inner.available.wait(queue).unwrap();
        }
    }

    /// Drain everything currently queued onto `sink`, in FIFO order.
    ///
    /// Returns the number of emissions delivered. Emissions pushed while the
    /// drain is in progress are picked up by the next call; the loop pops
    /// one-at-a-time so the producer is never blocked for the whole drain.
    pub fn pump(&self, sink: &mut dyn EngineSink) -> usize {
        let mut delivered = 0;
        while let Some(emission) = self.pop() {
            emission.apply(sink);
            delivered += 1;
        }
        delivered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.queue.lock().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
