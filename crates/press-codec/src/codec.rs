use std::io::{Read, Write};

use brotli::enc::BrotliEncoderParams;
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;

use crate::algorithm::Algorithm;
use crate::error::{CodecError, CodecResult};
use crate::stats::{CompressStats, DecompressStats};

// Quality pinned to the encoder's maximum (0-11 scale).
const BROTLI_QUALITY: i32 = 11;

/// Compress `input` with the given algorithm at its maximum-effort
/// setting, returning the output bytes and the stats for the transform.
pub fn compress(algorithm: Algorithm, input: &[u8]) -> CodecResult<(Vec<u8>, CompressStats)> {
    let output = match algorithm {
        Algorithm::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
            encoder
                .write_all(input)
                .and_then(|_| encoder.finish())
                .map_err(|source| encode_failed(algorithm, source))?
        }
        Algorithm::Deflate => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
            encoder
                .write_all(input)
                .and_then(|_| encoder.finish())
                .map_err(|source| encode_failed(algorithm, source))?
        }
        Algorithm::Brotli => {
            let params = BrotliEncoderParams {
                quality: BROTLI_QUALITY,
                size_hint: input.len(),
                ..BrotliEncoderParams::default()
            };
            let mut output = Vec::new();
            brotli::BrotliCompress(&mut &input[..], &mut output, &params)
                .map_err(|source| encode_failed(algorithm, source))?;
            output
        }
    };
    let stats = CompressStats::new(algorithm, input.len() as u64, output.len() as u64);
    Ok((output, stats))
}

/// Decompress `input`, which must be valid output of the given algorithm.
///
/// Malformed or mismatched input fails with [`CodecError::Malformed`];
/// the underlying decoder message is propagated verbatim.
pub fn decompress(algorithm: Algorithm, input: &[u8]) -> CodecResult<(Vec<u8>, DecompressStats)> {
    let mut output = Vec::new();
    match algorithm {
        Algorithm::Gzip => {
            GzDecoder::new(input)
                .read_to_end(&mut output)
                .map_err(|source| malformed(algorithm, source))?;
        }
        Algorithm::Deflate => {
            ZlibDecoder::new(input)
                .read_to_end(&mut output)
                .map_err(|source| malformed(algorithm, source))?;
        }
        Algorithm::Brotli => {
            brotli::BrotliDecompress(&mut &input[..], &mut output)
                .map_err(|source| malformed(algorithm, source))?;
        }
    }
    let stats = DecompressStats::new(algorithm, input.len() as u64, output.len() as u64);
    Ok((output, stats))
}

fn encode_failed(algorithm: Algorithm, source: std::io::Error) -> CodecError {
    CodecError::EncodeFailed {
        algorithm: algorithm.as_str(),
        source,
    }
}

fn malformed(algorithm: Algorithm, source: std::io::Error) -> CodecError {
    CodecError::Malformed {
        algorithm: algorithm.as_str(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_output_has_magic_bytes() {
        let (compressed, _) = compress(Algorithm::Gzip, b"hello").unwrap();
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn decompress_stats_track_both_sides() {
        let input = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
        let (compressed, _) = compress(Algorithm::Deflate, input).unwrap();
        let (restored, stats) = decompress(Algorithm::Deflate, &compressed).unwrap();
        assert_eq!(restored, input);
        assert_eq!(stats.compressed_size as usize, compressed.len());
        assert_eq!(stats.decompressed_size as usize, input.len());
    }

    #[test]
    fn wrong_algorithm_is_malformed() {
        let (compressed, _) = compress(Algorithm::Gzip, b"payload").unwrap();
        let err = decompress(Algorithm::Deflate, &compressed).unwrap_err();
        assert!(matches!(err, CodecError::Malformed { .. }));
    }
}
