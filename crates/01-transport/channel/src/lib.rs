//! Typed multi-producer/single-consumer blocking channel.
//!
//! The crate exposes the pieces every actor-style module builds on:
//! * [`channel`] – allocates a fresh queue cell and returns its handle pair.
//! * [`Sender`] – cloneable producer handle; dropping the last clone closes the channel.
//! * [`Receiver`] – unique consumer handle whose [`Receiver::recv`] blocks until an item
//!   arrives or the channel is closed.
//! * [`Fallible`] / [`Maybe`] – tagged outcome values with tag-checked unwraps.
//! * [`ChannelClosed`] / [`IllegalUnwrap`] – the error surface.
//!
//! Queues are unbounded and purely in-memory. Fan-out is not supported: a cell has
//! exactly one consumer, so broadcasting means one channel per consumer.

mod cell;
mod error;
mod fallible;
mod receiver;
mod sender;
mod sync;

pub use error::{ChannelClosed, ChannelResult, IllegalUnwrap};
pub use fallible::{Fallible, FallibleTag, Maybe, MaybeTag};
pub use receiver::{IntoIter, Iter, Receiver};
pub use sender::Sender;

use cell::QueueCell;
use sync::Arc;

/// Creates a channel carrying items of type `T`.
///
/// The returned sender is the only live sender (`live_senders == 1`) and the queue
/// starts empty. Clone the sender to add producers; move the receiver to hand the
/// consuming side to another thread.
pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    let cell = Arc::new(QueueCell::new());
    let sender = Sender::from_cell(Arc::clone(&cell));
    let receiver = Receiver::from_cell(cell);
    (sender, receiver)
}
