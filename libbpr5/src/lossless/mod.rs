//! Lossless codec pipeline for sea-level height grids.
//!
//! Per-row predictor selection among four candidates, per-row first- vs.
//! second-order residual mode, ZigZag + varint, block-wise LZMA. Every stage
//! is reversible; see [`crate::Encoder`]/[`crate::Decoder`] for the
//! orchestration and [`crate::Writer`]/[`crate::Reader`] for the container
//! framing around it.

pub mod decoder;
pub mod encoder;
pub mod residual;
pub mod select;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use residual::{
    decode_mode0, decode_mode1, decode_row_zero, encode_mode0, encode_mode1, encode_row_zero, l1,
};
pub use select::{select_row_encoding, RowEncoding};
