use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A compression algorithm known to the portal.
///
/// The wire name (lowercase) is what clients send in requests; the label
/// (uppercase) is what stats report back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Gzip,
    Deflate,
    Brotli,
}

impl Algorithm {
    /// All supported algorithms, in the order they are advertised.
    pub const ALL: [Algorithm; 3] = [Algorithm::Gzip, Algorithm::Deflate, Algorithm::Brotli];

    /// Lowercase wire name, as accepted in requests and used as the
    /// staged artifact's extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Gzip => "gzip",
            Algorithm::Deflate => "deflate",
            Algorithm::Brotli => "brotli",
        }
    }

    /// Uppercase label reported in transform stats.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Gzip => "GZIP",
            Algorithm::Deflate => "DEFLATE",
            Algorithm::Brotli => "BROTLI",
        }
    }

    /// Filename marker used to infer the algorithm on decompression.
    pub fn marker(&self) -> &'static str {
        match self {
            Algorithm::Gzip => ".gzip",
            Algorithm::Deflate => ".deflate",
            Algorithm::Brotli => ".brotli",
        }
    }

    /// Infer the algorithm from an uploaded file's declared name by
    /// matching one of the recognized markers as a substring.
    pub fn infer_from_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| name.contains(algorithm.marker()))
    }

    /// Comma-separated list of valid wire names, for error messages.
    pub fn names() -> String {
        Algorithm::ALL
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gzip" => Ok(Algorithm::Gzip),
            "deflate" => Ok(Algorithm::Deflate),
            "brotli" => Ok(Algorithm::Brotli),
            other => Err(CodecError::UnknownAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wire_names() {
        assert_eq!("gzip".parse::<Algorithm>().unwrap(), Algorithm::Gzip);
        assert_eq!("deflate".parse::<Algorithm>().unwrap(), Algorithm::Deflate);
        assert_eq!("brotli".parse::<Algorithm>().unwrap(), Algorithm::Brotli);
        assert!("zstd".parse::<Algorithm>().is_err());
        assert!("GZIP".parse::<Algorithm>().is_err());
    }

    #[test]
    fn infer_from_marker_substring() {
        assert_eq!(
            Algorithm::infer_from_name("report_compressed.gzip"),
            Some(Algorithm::Gzip)
        );
        assert_eq!(
            Algorithm::infer_from_name("data.brotli.bak"),
            Some(Algorithm::Brotli)
        );
        assert_eq!(Algorithm::infer_from_name("notes.txt"), None);
    }

    #[test]
    fn labels_and_names() {
        assert_eq!(Algorithm::Brotli.label(), "BROTLI");
        assert_eq!(Algorithm::names(), "gzip, deflate, brotli");
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Algorithm::Deflate).unwrap();
        assert_eq!(json, "\"deflate\"");
    }
}
