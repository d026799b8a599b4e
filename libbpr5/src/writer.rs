//! binary writer for the BPR5 container (§4.6).

use crate::block::compress_block;
use crate::core::{
    write_varint, write_zigzag_varint, CodecResult, DeltaMode, Grid, Predictor, BLOCK_ROWS, MAGIC,
};
use crate::lossless::{encode_row_zero, select_row_encoding};

/// binary writer for the bpr5 format.
pub struct Writer;

impl Writer {
    pub fn new() -> Self {
        Writer
    }

    /// serialize `grid` to its complete BPR5 container.
    pub fn write(&self, grid: &Grid) -> CodecResult<Vec<u8>> {
        let rows = grid.rows();
        let row_count = rows.len();

        let mut buffer = Vec::new();
        buffer.extend_from_slice(&MAGIC);
        write_varint(&mut buffer, row_count as u64);
        for row in rows {
            write_varint(&mut buffer, row.len() as u64);
        }

        if grid.total_samples() == 0 {
            return Ok(buffer);
        }

        let seed = rows.first().and_then(|r| r.first().copied()).unwrap_or(0);
        write_zigzag_varint(&mut buffer, seed);

        let mut predictors = Vec::with_capacity(row_count);
        let mut modes = Vec::with_capacity(row_count);
        let mut residuals_per_row: Vec<Vec<i32>> = Vec::with_capacity(row_count);

        for (i, row) in rows.iter().enumerate() {
            if i == 0 {
                predictors.push(Predictor::Left);
                modes.push(DeltaMode::FirstOrder);
                residuals_per_row.push(encode_row_zero(row));
            } else {
                let encoding = select_row_encoding(row, &rows[i - 1]);
                predictors.push(encoding.predictor);
                modes.push(encoding.mode);
                residuals_per_row.push(encoding.residuals);
            }
        }

        buffer.extend(predictors.iter().map(|p| *p as u8));
        buffer.extend(modes.iter().map(|m| *m as u8));

        for block_rows in residuals_per_row.chunks(BLOCK_ROWS) {
            let mut block_buf = Vec::new();
            for residuals in block_rows {
                for &value in residuals {
                    write_zigzag_varint(&mut block_buf, value);
                }
            }
            let compressed = compress_block(&block_buf)?;
            write_varint(&mut buffer, compressed.len() as u64);
            buffer.extend(compressed);
        }

        Ok(buffer)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
