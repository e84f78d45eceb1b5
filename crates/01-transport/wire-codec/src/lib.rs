//! Binary wire codec layered on a byte channel.
//!
//! Encoding a value is a sequence of [`Sender::send`] calls on a `Sender<u8>`;
//! decoding is the matching sequence of [`Receiver::recv`] calls. The format is
//! driven purely by type and field order:
//!
//! ```text
//! integers   little-endian, fixed width (usize/isize travel as 64-bit)
//! bool       one byte, 0 or 1
//! String     [u64 byte length][raw bytes]
//! Vec<T>     [u64 element count][element encodings ...]
//! records    field encodings concatenated in declared order
//! ```
//!
//! There is no type tag, checksum, or version. The reader must know the schema it
//! is decoding; decoding bytes written for a different schema yields garbage values
//! rather than an error. The only decode failure is [`ChannelClosed`], raised when
//! the byte channel runs dry mid-value; the partially read value is dropped.
//! A 64-bit size that does not fit the host's `usize` saturates, so an oversized
//! length prefix reads until closure rather than a truncated count.

#![allow(missing_docs)]

mod primitives;
mod record;
mod sequence;

pub use channel::{ChannelClosed, ChannelResult, Receiver, Sender};

/// Byte-typed producer handle the codec writes to.
pub type ByteSender = Sender<u8>;
/// Byte-typed consumer handle the codec reads from.
pub type ByteReceiver = Receiver<u8>;

/// Creates a byte channel suitable for carrying encoded values.
pub fn byte_channel() -> (ByteSender, ByteReceiver) {
    channel::channel()
}

/// A type with a deterministic byte encoding.
///
/// Implementations must satisfy `decode(encode(v)) == v` and must write exactly
/// `wire_len()` bytes.
pub trait Wire: Sized {
    /// Exact number of bytes [`Wire::encode`] sends for this value.
    fn wire_len(&self) -> usize;

    /// Sends the encoding of `self` onto `tx`.
    fn encode(&self, tx: &ByteSender);

    /// Reads one value from `rx`, blocking until enough bytes arrive.
    fn decode(rx: &ByteReceiver) -> ChannelResult<Self>;
}

/// Stream-style encoding helpers on a byte sender.
pub trait SendWire {
    /// Encodes `value` and returns `self` so writes can be chained.
    fn send_wire<T: Wire>(&self, value: &T) -> &Self;
}

impl SendWire for ByteSender {
    fn send_wire<T: Wire>(&self, value: &T) -> &Self {
        value.encode(self);
        self
    }
}

/// Stream-style decoding helpers on a byte receiver.
pub trait RecvWire {
    /// Decodes the next value of type `T`.
    fn recv_wire<T: Wire>(&self) -> ChannelResult<T>;
}

impl RecvWire for ByteReceiver {
    fn recv_wire<T: Wire>(&self) -> ChannelResult<T> {
        T::decode(self)
    }
}

/// Encodes `value` onto `tx`.
pub fn encode<T: Wire>(value: &T, tx: &ByteSender) {
    value.encode(tx);
}

/// Decodes one `T` from `rx`.
pub fn decode<T: Wire>(rx: &ByteReceiver) -> ChannelResult<T> {
    T::decode(rx)
}

/// Encodes a borrowed string with the same layout as [`String`].
pub fn encode_str(value: &str, tx: &ByteSender) {
    sequence::encode_bytes(value.as_bytes(), tx);
}
