use std::fmt;

use crate::cell::QueueCell;
use crate::sync::Arc;

/// Producer handle for a channel.
///
/// Cloning registers another live sender on the same cell; dropping unregisters it.
/// When the last clone drops, a receiver blocked in [`crate::Receiver::recv`] wakes
/// and observes closure once the queue is drained.
pub struct Sender<T> {
    cell: Arc<QueueCell<T>>,
}

impl<T> Sender<T> {
    /// Wraps a cell whose sender count already accounts for this handle.
    pub(crate) fn from_cell(cell: Arc<QueueCell<T>>) -> Self {
        Self { cell }
    }

    /// Appends `item` to the tail of the queue.
    ///
    /// Never blocks and never fails; the queue is unbounded. Items sent from one
    /// handle are received in send order.
    pub fn send(&self, item: T) {
        self.cell.push(item);
    }

    /// Number of sender handles currently alive for this channel, this one included.
    pub fn live_senders(&self) -> usize {
        self.cell.live_senders()
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        self.cell.attach_sender();
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        self.cell.detach_sender();
    }
}

impl<T> fmt::Debug for Sender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("live_senders", &self.live_senders())
            .finish()
    }
}
