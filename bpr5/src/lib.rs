//! bpr5 - command-line encoder/decoder for the BPR5 sea-level grid codec.
//!
//! Thin wrapper around [`libbpr5`] providing the `anyhow`-flavored helpers
//! the binary target uses; kept as a library too so the CLI's core behavior
//! can be exercised from integration tests without spawning a process.

use std::time::Instant;

use anyhow::{Context, Result};
use libbpr5::{CodecError, Decoder, Encoder, Grid, MAGIC};

/// outcome of a single encode or decode pass, used to print throughput.
pub struct Report {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub elapsed_secs: f64,
}

impl Report {
    pub fn throughput_kb_per_sec(&self) -> f64 {
        if self.elapsed_secs <= 0.0 {
            return f64::INFINITY;
        }
        (self.input_bytes as f64 / 1024.0) / self.elapsed_secs
    }

    pub fn ratio(&self) -> f64 {
        if self.output_bytes == 0 {
            return 0.0;
        }
        self.input_bytes as f64 / self.output_bytes as f64
    }
}

/// does `data` look like a BPR5 container, i.e. should it be decoded rather
/// than encoded?
pub fn looks_like_container(data: &[u8]) -> bool {
    data.len() >= 4 && data[0..4] == MAGIC
}

/// parse a text grid and encode it to BPR5 bytes, reporting elapsed time.
pub fn encode_text(text: &str) -> Result<(Vec<u8>, Report)> {
    let grid = Grid::parse(text).context("parsing input grid")?;
    let start = Instant::now();
    let bytes = Encoder::new()
        .encode(&grid)
        .map_err(report_codec_error)
        .context("encoding grid")?;
    let elapsed_secs = start.elapsed().as_secs_f64();
    let report = Report {
        input_bytes: text.len(),
        output_bytes: bytes.len(),
        elapsed_secs,
    };
    Ok((bytes, report))
}

/// decode BPR5 bytes back to its text grid representation, reporting elapsed
/// time.
pub fn decode_bytes(data: &[u8]) -> Result<(String, Report)> {
    let start = Instant::now();
    let grid = Decoder::new()
        .decode(data)
        .map_err(report_codec_error)
        .context("decoding container")?;
    let elapsed_secs = start.elapsed().as_secs_f64();
    let text = grid.to_text();
    let report = Report {
        input_bytes: data.len(),
        output_bytes: text.len(),
        elapsed_secs,
    };
    Ok((text, report))
}

/// map a [`CodecError`] to an `anyhow::Error`, preserving the source chain
/// that `thiserror` built for it.
fn report_codec_error(err: CodecError) -> anyhow::Error {
    anyhow::Error::new(err)
}

/// process exit codes per the CLI's documented contract: 0 success, 1 I/O
/// error, 2 malformed container, 3 verify mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Io = 1,
    Malformed = 2,
    VerifyMismatch = 3,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}
