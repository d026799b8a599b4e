//! block-wise LZMA wrapping (§4.5): rows are grouped into blocks of
//! [`crate::core::BLOCK_ROWS`], each block's concatenated residual varints
//! compressed as one complete, independent LZMA stream.

use std::io::{self, Read, Write};

use xz2::read::XzDecoder;
use xz2::stream::{LzmaOptions, Stream};
use xz2::write::XzEncoder;

use crate::core::error::{CodecError, CodecResult};

/// "level 9, extreme" per spec §6 — the preset this codec always uses.
/// liblzma encodes "extreme" as a flag ORed into the numeric preset rather
/// than a separate knob.
const LZMA_PRESET_EXTREME_FLAG: u32 = 1 << 31;
const LZMA_PRESET: u32 = 9 | LZMA_PRESET_EXTREME_FLAG;

fn lzma_io_error(context: &str, err: impl std::error::Error) -> CodecError {
    CodecError::Lzma(io::Error::new(
        io::ErrorKind::Other,
        format!("{context}: {err}"),
    ))
}

/// compress `data` as one independent LZMA stream.
pub fn compress_block(data: &[u8]) -> CodecResult<Vec<u8>> {
    let options = LzmaOptions::new_preset(LZMA_PRESET)
        .map_err(|e| lzma_io_error("building LZMA options", e))?;
    let stream = Stream::new_lzma_encoder(&options)
        .map_err(|e| lzma_io_error("initializing LZMA encoder", e))?;

    let mut encoder = XzEncoder::new_stream(Vec::new(), stream);
    encoder.write_all(data)?;
    encoder.finish().map_err(CodecError::Io)
}

/// decompress one independent LZMA stream back to its residual byte buffer.
/// a body that fails to decompress (truncated, corrupted, or not an LZMA
/// stream at all) is a structural problem with the container, not an I/O
/// failure, so it is reported as [`CodecError::Malformed`] rather than
/// letting the underlying `io::Error` fall through as [`CodecError::Io`].
pub fn decompress_block(data: &[u8]) -> CodecResult<Vec<u8>> {
    let stream = Stream::new_lzma_decoder(u64::MAX)
        .map_err(|e| lzma_io_error("initializing LZMA decoder", e))?;

    let mut decoder = XzDecoder::new_stream(data, stream);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(|e| {
        CodecError::Malformed(format!("invalid LZMA block body: {e}"))
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_arbitrary_bytes() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
        let compressed = compress_block(&data).unwrap();
        let decompressed = decompress_block(&compressed).unwrap();
        assert_eq!(decompressed, data);
    }

    #[test]
    fn roundtrips_empty_block() {
        let compressed = compress_block(&[]).unwrap();
        let decompressed = decompress_block(&compressed).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn corrupt_body_is_malformed_not_io() {
        let err = decompress_block(&[0xff; 16]).unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }
}
