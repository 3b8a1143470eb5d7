use serde::Serialize;

use press_codec::{Algorithm, CompressStats, DecompressStats};

/// Which direction a transform ran in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    Compress,
    Decompress,
}

/// Per-mode stats, flattened into the response envelope.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum TransformStats {
    Compress(CompressStats),
    Decompress(DecompressStats),
}

/// Success envelope for both transform endpoints.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResponse {
    pub success: bool,
    pub download_file_name: String,
    pub mode: TransformMode,
    #[serde(flatten)]
    pub stats: TransformStats,
}

/// Health check response.
#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub algorithms: Vec<&'static str>,
    pub time: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "OK".into(),
            algorithms: Algorithm::ALL.iter().map(|a| a.as_str()).collect(),
            time: chrono::Utc::now().to_rfc3339(),
        }
    }
}
