//! Fixed-width scalar encodings.

use std::mem::size_of;

use crate::{ByteReceiver, ByteSender, ChannelResult, Wire};

/// Reads exactly `N` bytes in arrival order.
pub(crate) fn recv_array<const N: usize>(rx: &ByteReceiver) -> ChannelResult<[u8; N]> {
    let mut buf = [0u8; N];
    for byte in buf.iter_mut() {
        *byte = rx.recv()?;
    }
    Ok(buf)
}

pub(crate) fn send_all(bytes: &[u8], tx: &ByteSender) {
    for &byte in bytes {
        tx.send(byte);
    }
}

macro_rules! impl_wire_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Wire for $ty {
                fn wire_len(&self) -> usize {
                    size_of::<$ty>()
                }

                fn encode(&self, tx: &ByteSender) {
                    send_all(&self.to_le_bytes(), tx);
                }

                fn decode(rx: &ByteReceiver) -> ChannelResult<Self> {
                    Ok(<$ty>::from_le_bytes(recv_array(rx)?))
                }
            }
        )+
    };
}

impl_wire_int!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Narrows a decoded 64-bit size to the host width, saturating at `usize::MAX`.
///
/// A saturated length prefix makes the reader consume bytes until the channel
/// closes, so an oversized value surfaces as [`crate::ChannelClosed`].
pub(crate) fn usize_from_wire(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Narrows a decoded 64-bit signed value to the host width, saturating toward its sign.
pub(crate) fn isize_from_wire(value: i64) -> isize {
    isize::try_from(value).unwrap_or(if value < 0 { isize::MIN } else { isize::MAX })
}

// Sizes and indices travel as 64-bit so both ends agree regardless of host width.
impl Wire for usize {
    fn wire_len(&self) -> usize {
        size_of::<u64>()
    }

    fn encode(&self, tx: &ByteSender) {
        (*self as u64).encode(tx);
    }

    fn decode(rx: &ByteReceiver) -> ChannelResult<Self> {
        Ok(usize_from_wire(u64::decode(rx)?))
    }
}

impl Wire for isize {
    fn wire_len(&self) -> usize {
        size_of::<i64>()
    }

    fn encode(&self, tx: &ByteSender) {
        (*self as i64).encode(tx);
    }

    fn decode(rx: &ByteReceiver) -> ChannelResult<Self> {
        Ok(isize_from_wire(i64::decode(rx)?))
    }
}

impl Wire for bool {
    fn wire_len(&self) -> usize {
        1
    }

    fn encode(&self, tx: &ByteSender) {
        tx.send(u8::from(*self));
    }

    /// Any nonzero byte reads as `true`.
    fn decode(rx: &ByteReceiver) -> ChannelResult<Self> {
        Ok(rx.recv()? != 0)
    }
}

impl Wire for () {
    fn wire_len(&self) -> usize {
        0
    }

    fn encode(&self, _tx: &ByteSender) {}

    fn decode(_rx: &ByteReceiver) -> ChannelResult<Self> {
        Ok(())
    }
}
