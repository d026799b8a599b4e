use crate::core::{CodecResult, Grid};
use crate::Writer;

/// encodes a [`Grid`] to its BPR5 container bytes.
pub struct Encoder;

impl Encoder {
    pub fn new() -> Self {
        Encoder
    }

    /// encode `grid` to a complete BPR5 byte buffer.
    pub fn encode(&self, grid: &Grid) -> CodecResult<Vec<u8>> {
        Writer::new().write(grid)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
