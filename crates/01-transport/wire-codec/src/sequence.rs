//! Length-prefixed sequences and tuple records.

use crate::primitives::send_all;
use crate::{ByteReceiver, ByteSender, ChannelResult, Wire};

/// Upper bound on capacity reserved up front from an untrusted length prefix.
const PREALLOC_LIMIT: usize = 4096;

const LEN_PREFIX: usize = 8;

pub(crate) fn encode_bytes(bytes: &[u8], tx: &ByteSender) {
    bytes.len().encode(tx);
    send_all(bytes, tx);
}

fn decode_len(rx: &ByteReceiver) -> ChannelResult<usize> {
    usize::decode(rx)
}

impl Wire for String {
    fn wire_len(&self) -> usize {
        LEN_PREFIX + self.len()
    }

    fn encode(&self, tx: &ByteSender) {
        encode_bytes(self.as_bytes(), tx);
    }

    fn decode(rx: &ByteReceiver) -> ChannelResult<Self> {
        let len = decode_len(rx)?;
        let mut bytes = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            bytes.push(rx.recv()?);
        }
        Ok(String::from_utf8(bytes).unwrap_or_else(|err| {
            tracing::debug!("decoded string is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }))
    }
}

impl<T: Wire> Wire for Vec<T> {
    fn wire_len(&self) -> usize {
        LEN_PREFIX + self.iter().map(Wire::wire_len).sum::<usize>()
    }

    fn encode(&self, tx: &ByteSender) {
        self.len().encode(tx);
        for item in self {
            item.encode(tx);
        }
    }

    fn decode(rx: &ByteReceiver) -> ChannelResult<Self> {
        let count = decode_len(rx)?;
        let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            items.push(T::decode(rx)?);
        }
        Ok(items)
    }
}

macro_rules! impl_wire_tuple {
    ($($name:ident),+) => {
        impl<$($name: Wire),+> Wire for ($($name,)+) {
            #[allow(non_snake_case)]
            fn wire_len(&self) -> usize {
                let ($($name,)+) = self;
                0 $(+ $name.wire_len())+
            }

            #[allow(non_snake_case)]
            fn encode(&self, tx: &ByteSender) {
                let ($($name,)+) = self;
                $($name.encode(tx);)+
            }

            #[allow(non_snake_case)]
            fn decode(rx: &ByteReceiver) -> ChannelResult<Self> {
                $(let $name = $name::decode(rx)?;)+
                Ok(($($name,)+))
            }
        }
    };
}

impl_wire_tuple!(A);
impl_wire_tuple!(A, B);
impl_wire_tuple!(A, B, C);
impl_wire_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{byte_channel, ChannelClosed};

    #[test]
    fn hello_consumes_thirteen_bytes() {
        let (tx, rx) = byte_channel();
        let hello = String::from("hello");
        hello.encode(&tx);
        assert_eq!(rx.len(), 8 + 5);
        assert_eq!(hello.wire_len(), 13);

        assert_eq!(String::decode(&rx).as_deref(), Ok("hello"));
        assert!(rx.is_empty());
    }

    #[test]
    fn empty_string_is_just_a_prefix() {
        let (tx, rx) = byte_channel();
        String::new().encode(&tx);
        drop(tx);
        let bytes: Vec<u8> = rx.iter().collect();
        assert_eq!(bytes, vec![0; 8]);
    }

    #[test]
    fn vec_prefix_counts_elements_not_bytes() {
        let (tx, rx) = byte_channel();
        let values = vec![9i32, -28, 22];
        values.encode(&tx);
        assert_eq!(rx.len(), 8 + 3 * 4);
        assert_eq!(values.wire_len(), rx.len());

        assert_eq!(u64::decode(&rx), Ok(3));
        assert_eq!(i32::decode(&rx), Ok(9));
        assert_eq!(i32::decode(&rx), Ok(-28));
        assert_eq!(i32::decode(&rx), Ok(22));
    }

    #[test]
    fn nested_sequences_round_trip() {
        let (tx, rx) = byte_channel();
        let value = vec![
            (String::from("a"), vec![1u16, 2]),
            (String::new(), Vec::new()),
        ];
        value.encode(&tx);
        assert_eq!(rx.len(), value.wire_len());
        assert_eq!(Vec::<(String, Vec<u16>)>::decode(&rx), Ok(value));
    }

    #[test]
    fn truncated_string_payload_reports_closed() {
        let (tx, rx) = byte_channel();
        5usize.encode(&tx);
        for b in b"hel" {
            tx.send(*b);
        }
        drop(tx);
        assert_eq!(String::decode(&rx), Err(ChannelClosed));
    }

    /// A length prefix larger than anything sent drains the channel and reports
    /// closure instead of returning a short value.
    #[test]
    fn oversized_length_prefix_reports_closed() {
        let (tx, rx) = byte_channel();
        u64::MAX.encode(&tx);
        for b in b"abc" {
            tx.send(*b);
        }
        drop(tx);
        assert_eq!(String::decode(&rx), Err(ChannelClosed));
        assert!(rx.is_empty());

        let (tx, rx) = byte_channel();
        (1u64 << 40).encode(&tx);
        7u8.encode(&tx);
        drop(tx);
        assert_eq!(Vec::<u8>::decode(&rx), Err(ChannelClosed));
    }

    #[test]
    fn invalid_utf8_decodes_lossily() {
        let (tx, rx) = byte_channel();
        encode_bytes(&[b'o', 0xFF, b'k'], &tx);
        let decoded = String::decode(&rx).unwrap();
        assert_eq!(decoded, "o\u{FFFD}k");
    }

    #[test]
    fn tuple_fields_follow_declared_order() {
        let (tx, rx) = byte_channel();
        (1u8, 2u16, 3u32).encode(&tx);
        drop(tx);
        let bytes: Vec<u8> = rx.iter().collect();
        assert_eq!(bytes, vec![1, 2, 0, 3, 0, 0, 0]);
    }
}
