//! Error surface for channel and fallible-wrapper operations.
//!
//! Only two conditions exist. Closure is an expected end-of-stream signal that
//! consumers handle; an illegal unwrap is a defect at the call site.

use thiserror::Error;

/// Convenience result alias for operations that can observe a closed channel.
pub type ChannelResult<T, E = ChannelClosed> = Result<T, E>;

/// Raised by [`crate::Receiver::recv`] once the queue is empty and every sender is gone.
///
/// Closure is terminal for a cell: once observed, every later `recv` reports it again.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("channel closed: queue drained and no live senders remain")]
pub struct ChannelClosed;

/// Raised when a [`crate::Fallible`] or [`crate::Maybe`] is unwrapped against the wrong tag.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("illegal unwrap: expected {expected} but value is {found}")]
pub struct IllegalUnwrap {
    /// Tag the caller asked for.
    pub expected: &'static str,
    /// Tag the value actually carries.
    pub found: &'static str,
}

impl IllegalUnwrap {
    pub(crate) const fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }

    /// Unwinds with `self` as the panic payload.
    ///
    /// Supervisors can recover the payload with `downcast_ref::<IllegalUnwrap>()`.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}
