//! binary reader for the BPR5 container (§4.6/§4.7).

use crate::block::decompress_block;
use crate::core::{
    read_varint, read_zigzag_varint, CodecError, CodecResult, DeltaMode, Grid, Predictor,
    BLOCK_ROWS, MAGIC,
};
use crate::lossless::{decode_mode0, decode_mode1, decode_row_zero};

/// binary reader for the bpr5 format.
pub struct Reader;

impl Reader {
    pub fn new() -> Self {
        Reader
    }

    /// parse and decode a complete BPR5 container back into a [`Grid`].
    pub fn read(&self, data: &[u8]) -> CodecResult<Grid> {
        let mut cursor = Cursor::new(data);

        let magic = cursor.read_bytes(4)?;
        if magic != MAGIC {
            return Err(CodecError::Malformed(format!(
                "bad magic: expected {:?}, found {:?}",
                MAGIC, magic
            )));
        }

        let row_count = cursor.read_varint()? as usize;
        let mut lengths = Vec::with_capacity(row_count);
        for _ in 0..row_count {
            lengths.push(cursor.read_varint()? as usize);
        }

        let total_samples: usize = lengths.iter().sum();
        if total_samples == 0 {
            return Ok(Grid::new(vec![Vec::new(); row_count]));
        }

        let seed = cursor.read_zigzag_varint()?;

        let predictors = cursor.read_predictors(row_count)?;
        let modes = cursor.read_modes(row_count)?;

        let mut rows: Vec<Vec<i32>> = Vec::with_capacity(row_count);

        let mut row_idx = 0usize;
        let mut block_idx = 0usize;
        while row_idx < row_count {
            let block_len = (row_count - row_idx).min(BLOCK_ROWS);
            let compressed_len = cursor.read_varint()? as usize;
            let compressed = cursor.read_bytes(compressed_len).map_err(|_| {
                CodecError::Malformed(format!(
                    "block {block_idx}: compressed length {compressed_len} exceeds remaining input"
                ))
            })?;

            let block_bytes = decompress_block(compressed)?;
            let mut block_cursor = Cursor::new(&block_bytes);

            for _ in 0..block_len {
                let length = lengths[row_idx];

                let rec = if length == 0 {
                    Vec::new()
                } else if row_idx == 0 {
                    let residuals =
                        block_cursor.read_residuals(length - 1, block_idx)?;
                    decode_row_zero(seed, &residuals, length)
                } else {
                    let residuals = block_cursor.read_residuals(length, block_idx)?;
                    let prev: &[i32] = &rows[row_idx - 1];
                    let predictor = predictors[row_idx];
                    match modes[row_idx] {
                        DeltaMode::FirstOrder => decode_mode0(&residuals, prev, predictor),
                        DeltaMode::SecondOrder => decode_mode1(&residuals, prev, predictor),
                    }
                };

                rows.push(rec);
                row_idx += 1;
            }

            if block_cursor.remaining() != 0 {
                return Err(CodecError::ResidualUnderflow {
                    block: block_idx,
                    detail: format!(
                        "{} unread byte(s) remained after decoding every row in the block",
                        block_cursor.remaining()
                    ),
                });
            }

            block_idx += 1;
        }

        Ok(Grid::new(rows))
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

/// a cursor over an in-memory container (or block) buffer: owns the slice
/// and a read position, and advances that position field by field. mirrors
/// the teacher's own `Reader`-side `Cursor` (`libflo::reader::Cursor`), just
/// specialized to this format's varint/byte-table vocabulary instead of
/// fixed-width little-endian fields.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_bytes(&mut self, count: usize) -> CodecResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| CodecError::Malformed("unexpected end of container".to_string()))?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> CodecResult<u8> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or_else(|| CodecError::Malformed("unexpected end of container".to_string()))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_varint(&mut self) -> CodecResult<u64> {
        read_varint(self.data, &mut self.pos)
    }

    fn read_zigzag_varint(&mut self) -> CodecResult<i32> {
        read_zigzag_varint(self.data, &mut self.pos)
    }

    fn read_predictors(&mut self, count: usize) -> CodecResult<Vec<Predictor>> {
        (0..count)
            .map(|_| {
                let byte = self.read_u8().map_err(|_| {
                    CodecError::Malformed("truncated predictor id table".to_string())
                })?;
                Predictor::try_from(byte).map_err(CodecError::UnknownPredictor)
            })
            .collect()
    }

    fn read_modes(&mut self, count: usize) -> CodecResult<Vec<DeltaMode>> {
        (0..count)
            .map(|_| {
                let byte = self
                    .read_u8()
                    .map_err(|_| CodecError::Malformed("truncated delta mode table".to_string()))?;
                DeltaMode::try_from(byte).map_err(CodecError::UnknownDeltaMode)
            })
            .collect()
    }

    /// read `count` ZigZag-varint residuals, reporting any truncation as a
    /// residual underflow in `block_idx` rather than a generic malformed-
    /// varint error.
    fn read_residuals(&mut self, count: usize, block_idx: usize) -> CodecResult<Vec<i32>> {
        (0..count)
            .map(|_| {
                self.read_zigzag_varint().map_err(|_| CodecError::ResidualUnderflow {
                    block: block_idx,
                    detail: "decompressed stream ended before every row was consumed".to_string(),
                })
            })
            .collect()
    }
}
