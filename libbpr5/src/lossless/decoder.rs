use crate::core::{CodecResult, Grid};
use crate::Reader;

/// decodes BPR5 container bytes back to a [`Grid`].
pub struct Decoder;

impl Decoder {
    pub fn new() -> Self {
        Decoder
    }

    /// decode a complete BPR5 byte buffer back to its original grid.
    pub fn decode(&self, data: &[u8]) -> CodecResult<Grid> {
        Reader::new().read(data)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lossless::Encoder;

    #[test]
    fn roundtrips_a_simple_grid() {
        let grid = Grid::new(vec![vec![1, 2, 3], vec![2, 3, 4], vec![1, 1, 1]]);
        let bytes = Encoder::new().encode(&grid).unwrap();
        let decoded = Decoder::new().decode(&bytes).unwrap();
        assert_eq!(decoded.rows(), grid.rows());
    }

    #[test]
    fn roundtrips_an_empty_grid() {
        let grid = Grid::new(Vec::new());
        let bytes = Encoder::new().encode(&grid).unwrap();
        let decoded = Decoder::new().decode(&bytes).unwrap();
        assert_eq!(decoded.rows(), grid.rows());
    }

    #[test]
    fn rejects_bad_magic() {
        let err = Decoder::new().decode(&[0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, crate::core::CodecError::Malformed(_)));
    }
}
