//! Codec registry for the Press compression portal.
//!
//! Maps an [`Algorithm`] to a compress/decompress function pair and the
//! stats computed around each transform. The registry is pure and
//! stateless: every call takes the full input buffer and returns the full
//! output buffer plus a stats value object.
//!
//! # Algorithms
//!
//! - [`Algorithm::Gzip`] — flate2 gzip wrapper, level 9
//! - [`Algorithm::Deflate`] — flate2 zlib wrapper, level 9
//! - [`Algorithm::Brotli`] — brotli quality 11 with a size hint
//!
//! Compression always uses the codec's maximum-effort settings. This is a
//! deliberate quality-over-speed policy; none of these calls sit on a
//! latency-sensitive path.

pub mod algorithm;
pub mod codec;
pub mod error;
pub mod stats;

pub use algorithm::Algorithm;
pub use codec::{compress, decompress};
pub use error::{CodecError, CodecResult};
pub use stats::{CompressStats, DecompressStats};
