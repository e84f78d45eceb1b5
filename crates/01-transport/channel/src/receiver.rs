use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;

use crate::cell::QueueCell;
use crate::error::ChannelResult;
use crate::sync::Arc;

/// Consumer handle for a channel.
///
/// Exactly one usable receiver exists per cell. The type is not `Clone`; ownership
/// moves either by a plain Rust move or, for handles stored in struct fields, by
/// [`Receiver::take`], which leaves the source detached. Using a detached receiver
/// is a programming error and panics.
///
/// The handle is `Send` but not `Sync`, so it cannot be shared by reference
/// between consuming threads:
///
/// ```compile_fail
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<channel::Receiver<u32>>();
/// ```
pub struct Receiver<T> {
    cell: Option<Arc<QueueCell<T>>>,
    _not_sync: PhantomData<Cell<()>>,
}

impl<T> Receiver<T> {
    pub(crate) fn from_cell(cell: Arc<QueueCell<T>>) -> Self {
        Self {
            cell: Some(cell),
            _not_sync: PhantomData,
        }
    }

    /// Removes and returns the oldest pending item.
    ///
    /// Blocks while the queue is empty and at least one sender is alive. Returns
    /// [`crate::ChannelClosed`] when the queue is empty and no senders remain; that
    /// state is terminal, so every later call returns it too.
    ///
    /// # Panics
    /// Panics if this handle was detached by [`Receiver::take`].
    pub fn recv(&self) -> ChannelResult<T> {
        self.cell().pop_blocking()
    }

    /// Transfers ownership of the channel's consuming side into a new handle.
    ///
    /// `self` is left detached; any further `recv`, `take`, `len`, or iteration on it
    /// panics.
    ///
    /// # Panics
    /// Panics if this handle is already detached.
    pub fn take(&mut self) -> Receiver<T> {
        let cell = self
            .cell
            .take()
            .expect("receiver used after its ownership was transferred");
        Receiver::from_cell(cell)
    }

    /// Returns true once ownership has been moved out through [`Receiver::take`].
    pub fn is_detached(&self) -> bool {
        self.cell.is_none()
    }

    /// Number of items waiting in the queue. A snapshot; senders may add more.
    pub fn len(&self) -> usize {
        self.cell().len()
    }

    /// Returns true when no items are waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of sender handles currently alive for this channel.
    pub fn live_senders(&self) -> usize {
        self.cell().live_senders()
    }

    /// Blocking iterator that yields items until the channel closes.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { receiver: self }
    }

    fn cell(&self) -> &QueueCell<T> {
        self.cell
            .as_deref()
            .expect("receiver used after its ownership was transferred")
    }
}

impl<T> fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cell {
            Some(cell) => f
                .debug_struct("Receiver")
                .field("pending", &cell.len())
                .field("live_senders", &cell.live_senders())
                .finish(),
            None => f.write_str("Receiver(detached)"),
        }
    }
}

/// Borrowing iterator returned by [`Receiver::iter`].
pub struct Iter<'a, T> {
    receiver: &'a Receiver<T>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.recv().ok()
    }
}

/// Owning iterator produced by `Receiver::into_iter`.
pub struct IntoIter<T> {
    receiver: Receiver<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.recv().ok()
    }
}

impl<T> IntoIterator for Receiver<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { receiver: self }
    }
}

impl<'a, T> IntoIterator for &'a Receiver<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
