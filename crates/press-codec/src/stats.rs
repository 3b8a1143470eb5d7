use serde::Serialize;

use crate::algorithm::Algorithm;

/// Stats reported for one compression transform.
///
/// `ratio` and `savings` are pre-formatted strings (4 and 1 decimal
/// places) so the wire representation is stable regardless of float
/// printing quirks. Zero-length input reports the `0.0000`/`0.0%`
/// sentinel instead of dividing by zero.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressStats {
    pub algorithm: &'static str,
    pub original_size: u64,
    pub compressed_size: u64,
    pub ratio: String,
    pub savings: String,
}

impl CompressStats {
    pub fn new(algorithm: Algorithm, original_size: u64, compressed_size: u64) -> Self {
        let (ratio, savings) = if original_size == 0 {
            ("0.0000".to_string(), "0.0%".to_string())
        } else {
            let ratio = compressed_size as f64 / original_size as f64;
            (
                format!("{ratio:.4}"),
                format!("{:.1}%", (1.0 - ratio) * 100.0),
            )
        };
        Self {
            algorithm: algorithm.label(),
            original_size,
            compressed_size,
            ratio,
            savings,
        }
    }
}

/// Stats reported for one decompression transform.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompressStats {
    pub algorithm: &'static str,
    pub compressed_size: u64,
    pub decompressed_size: u64,
}

impl DecompressStats {
    pub fn new(algorithm: Algorithm, compressed_size: u64, decompressed_size: u64) -> Self {
        Self {
            algorithm: algorithm.label(),
            compressed_size,
            decompressed_size,
        }
    }
}
