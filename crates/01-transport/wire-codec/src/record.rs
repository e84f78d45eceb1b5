//! Composite record support.

/// Implements [`Wire`](crate::Wire) for a struct with named fields.
///
/// Fields are encoded and decoded in the order they are listed, which must be the
/// order both ends agree on. Decoding stops at the first field that hits a closed
/// channel, discarding the fields read so far.
///
/// ```
/// use wire_codec::{byte_channel, wire_record, Wire};
///
/// #[derive(Debug, PartialEq)]
/// struct RangeQuery {
///     lo: u64,
///     hi: u64,
/// }
///
/// wire_record!(RangeQuery { lo, hi });
///
/// let (tx, rx) = byte_channel();
/// RangeQuery { lo: 5, hi: 22 }.encode(&tx);
/// assert_eq!(RangeQuery::decode(&rx), Ok(RangeQuery { lo: 5, hi: 22 }));
/// ```
#[macro_export]
macro_rules! wire_record {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Wire for $ty {
            fn wire_len(&self) -> usize {
                0 $(+ $crate::Wire::wire_len(&self.$field))+
            }

            fn encode(&self, tx: &$crate::ByteSender) {
                $($crate::Wire::encode(&self.$field, tx);)+
            }

            fn decode(rx: &$crate::ByteReceiver) -> $crate::ChannelResult<Self> {
                $(let $field = $crate::Wire::decode(rx)?;)+
                Ok(Self { $($field),+ })
            }
        }
    };
}
