//! libbpr5: a lossless codec for 2D grids of integer sea-level heights.
//!
//! Pipeline: text grid → per-row predictor/mode selection → ZigZag + varint
//! residuals → block-wise LZMA → the self-describing BPR5 container. See
//! [`core`] for the shared primitives, [`lossless`] for the per-row coding
//! stages and orchestration, [`block`] for the LZMA framing, and
//! [`Writer`]/[`Reader`] for the container itself.

pub mod block;
pub mod core;
pub mod lossless;

mod reader;
mod writer;

pub use core::{
    read_varint, read_zigzag_varint, write_varint, write_zigzag_varint, zigzag_decode,
    zigzag_encode, CodecError, CodecResult, DeltaMode, Grid, Predictor, BLOCK_ROWS, MAGIC,
};
pub use lossless::{Decoder, Encoder};
pub use reader::Reader;
pub use writer::Writer;
