//! Record schemas carried over byte channels by the pipe scenario.

use wire_codec::wire_record;

/// Text record: a label plus a sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextTick {
    pub text: String,
    pub num: i32,
}

wire_record!(TextTick { text, num });

/// Half-open index range request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeQuery {
    pub lo: u64,
    pub hi: u64,
}

wire_record!(RangeQuery { lo, hi });

/// Union of everything a pipe can forward into the shared inbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inbound {
    Text(TextTick),
    Range(RangeQuery),
}

/// Identifies one value by the producer that sent it and its position in that producer's stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stamp {
    pub producer: u32,
    pub seq: u32,
}

impl Stamp {
    pub fn new(producer: u32, seq: u32) -> Self {
        Self { producer, seq }
    }
}

pub(crate) const TEXT_PRODUCER: u32 = 0;
pub(crate) const RANGE_PRODUCER: u32 = 1;

impl From<&Inbound> for Stamp {
    fn from(msg: &Inbound) -> Self {
        match msg {
            Inbound::Text(tick) => Stamp::new(TEXT_PRODUCER, tick.num as u32),
            Inbound::Range(query) => Stamp::new(RANGE_PRODUCER, query.lo as u32),
        }
    }
}
