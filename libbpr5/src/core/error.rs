//! codec-level error kinds

use thiserror::Error;

/// every way the bpr5 codec can fail, named per stage so callers can tell a
/// corrupt container from a bad text grid from an I/O failure.
#[derive(Debug, Error)]
pub enum CodecError {
    /// the container's structure doesn't match the BPR5 layout: bad magic,
    /// a truncated header, a truncated varint, a missing length/predictor/mode
    /// byte, or a block length prefix that claims more bytes than remain.
    #[error("malformed container: {0}")]
    Malformed(String),

    /// a block's decompressed residual stream ran out before every row in
    /// the block was consumed, or left bytes over after the last row.
    #[error("residual stream underflow in block {block}: {detail}")]
    ResidualUnderflow { block: usize, detail: String },

    /// a predictor byte outside {0,1,2,3}.
    #[error("unknown predictor id {0}")]
    UnknownPredictor(u8),

    /// a delta mode byte outside {0,1}.
    #[error("unknown delta mode {0}")]
    UnknownDeltaMode(u8),

    /// a token in the text grid is not a valid decimal integer.
    #[error("text parse error at line {line}, token {token}: {source}")]
    TextParse {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// the LZMA stream backing a block could not be compressed or decompressed.
    #[error("lzma error: {0}")]
    Lzma(#[source] std::io::Error),

    /// underlying read/write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CodecResult<T> = Result<T, CodecError>;
