//! Shared queue cell backing one channel.
//!
//! The cell is jointly owned (through `Arc`) by every sender and by the receiver. It
//! holds the pending items, the condvar a waiting receiver parks on, and the count of
//! live senders. The queue is only touched under the mutex; the sender count is an
//! atomic so clones and drops never contend with a sleeping receiver.

use std::collections::VecDeque;

use crate::error::{ChannelClosed, ChannelResult};
use crate::sync::{AtomicUsize, Condvar, Mutex, Ordering};

pub(crate) struct QueueCell<T> {
    queue: Mutex<VecDeque<T>>,
    available: Condvar,
    live_senders: AtomicUsize,
}

impl<T> QueueCell<T> {
    /// Allocates an empty cell owned by a single sender.
    pub(crate) fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
            live_senders: AtomicUsize::new(1),
        }
    }

    /// Appends `item` at the tail and wakes the receiver if it is parked.
    pub(crate) fn push(&self, item: T) {
        {
            let mut queue = self.queue.lock();
            queue.push_back(item);
        }
        self.available.notify_one();
    }

    /// Pops the head item, parking until one arrives or the channel closes.
    ///
    /// Every wake is treated as a hint: the loop rechecks the queue before the sender
    /// count, so items pushed before the last sender dropped are still delivered.
    pub(crate) fn pop_blocking(&self) -> ChannelResult<T> {
        let mut queue = self.queue.lock();
        loop {
            if let Some(item) = queue.pop_front() {
                return Ok(item);
            }
            if self.live_senders.load(Ordering::Acquire) == 0 {
                tracing::trace!("recv observed closed channel");
                return Err(ChannelClosed);
            }
            queue = self.available.wait(queue);
        }
    }

    pub(crate) fn attach_sender(&self) {
        self.live_senders.fetch_add(1, Ordering::Relaxed);
    }

    /// Releases one sender; the sender that brings the count to zero wakes the single receiver.
    pub(crate) fn detach_sender(&self) {
        if self.live_senders.fetch_sub(1, Ordering::AcqRel) != 1 {
            return;
        }
        // Taking the lock orders this wake after any in-flight count check: the
        // receiver is either about to read zero or already parked on the condvar.
        let pending = self.queue.lock().len();
        tracing::trace!(pending, "last sender dropped, channel closing");
        self.available.notify_one();
    }

    pub(crate) fn live_senders(&self) -> usize {
        self.live_senders.load(Ordering::Acquire)
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.lock().len()
    }
}
