pub mod error;
pub mod grid;
pub mod predictor;
pub mod varint;

pub use error::{CodecError, CodecResult};
pub use grid::Grid;
pub use predictor::{l1_sum, select_predictor, Predictor};
pub use varint::{
    read_varint, read_zigzag_varint, write_varint, write_zigzag_varint, zigzag_decode,
    zigzag_encode,
};

/// container magic, four bytes: "BPR5".
pub const MAGIC: [u8; 4] = *b"BPR5";

/// rows per LZMA block. fixed per the format's design; not configurable.
pub const BLOCK_ROWS: usize = 8;

/// delta mode selected for a row: first-order vs. row-internal second-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeltaMode {
    FirstOrder = 0,
    SecondOrder = 1,
}

impl TryFrom<u8> for DeltaMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(DeltaMode::FirstOrder),
            1 => Ok(DeltaMode::SecondOrder),
            other => Err(other),
        }
    }
}
