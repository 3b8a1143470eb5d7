use tokio::task;
use tracing::{debug, info, warn};

use press_codec::Algorithm;
use press_staging::{StagingStore, Zone};

use crate::error::{ServerError, ServerResult};
use crate::response::{TransformMode, TransformResponse, TransformStats};

/// Longest slice of the uploaded base name embedded in a download name.
const MAX_BASE_NAME: usize = 20;

/// Result of one transform: the staged output's key plus its stats.
#[derive(Clone, Debug)]
pub struct TransformOutcome {
    pub mode: TransformMode,
    pub download_key: String,
    pub stats: TransformStats,
}

impl TransformOutcome {
    pub fn into_response(self) -> TransformResponse {
        TransformResponse {
            success: true,
            download_file_name: self.download_key,
            mode: self.mode,
            stats: self.stats,
        }
    }
}

/// Executes one compress-or-decompress request end to end.
///
/// Lifecycle per request: stage the upload into the incoming zone,
/// validate, run the codec on a blocking worker, stage the output into
/// the outgoing zone, and only then delete the incoming artifact. A
/// validation or codec failure leaves the incoming artifact in place so
/// the cause stays inspectable.
#[derive(Clone, Debug)]
pub struct TransformService {
    staging: StagingStore,
}

impl TransformService {
    pub fn new(staging: StagingStore) -> Self {
        Self { staging }
    }

    pub fn staging(&self) -> &StagingStore {
        &self.staging
    }

    /// Compress an upload with the named algorithm (default gzip).
    pub async fn compress(
        &self,
        file_name: &str,
        algorithm: Option<&str>,
        bytes: Vec<u8>,
    ) -> ServerResult<TransformOutcome> {
        let incoming_key = self.staging.put(Zone::Incoming, file_name, &bytes)?;
        drop(bytes);

        let name = algorithm.unwrap_or("gzip");
        let algorithm = name
            .parse::<Algorithm>()
            .map_err(|_| ServerError::UnknownAlgorithm {
                got: name.to_string(),
                available: Algorithm::names(),
            })?;

        let input = self.staging.get(Zone::Incoming, &incoming_key)?;
        let original_size = input.len();
        let (output, stats) =
            task::spawn_blocking(move || press_codec::compress(algorithm, &input))
                .await
                .map_err(|e| ServerError::Internal(e.to_string()))??;

        let hint = compress_output_hint(file_name, algorithm);
        let download_key = self.staging.put(Zone::Outgoing, &hint, &output)?;
        self.cleanup_incoming(&incoming_key);

        info!(
            %algorithm,
            original_size,
            compressed_size = output.len(),
            %download_key,
            "compressed upload"
        );
        Ok(TransformOutcome {
            mode: TransformMode::Compress,
            download_key,
            stats: TransformStats::Compress(stats),
        })
    }

    /// Decompress an upload; the algorithm is inferred from the declared
    /// file name, never supplied by the caller.
    pub async fn decompress(&self, file_name: &str, bytes: Vec<u8>) -> ServerResult<TransformOutcome> {
        let incoming_key = self.staging.put(Zone::Incoming, file_name, &bytes)?;
        drop(bytes);

        let algorithm =
            Algorithm::infer_from_name(file_name).ok_or(ServerError::UndeterminedAlgorithm)?;

        let input = self.staging.get(Zone::Incoming, &incoming_key)?;
        let compressed_size = input.len();
        let (output, stats) =
            task::spawn_blocking(move || press_codec::decompress(algorithm, &input))
                .await
                .map_err(|e| ServerError::Internal(e.to_string()))??;

        let hint = decompress_output_hint(file_name);
        let download_key = self.staging.put(Zone::Outgoing, &hint, &output)?;
        self.cleanup_incoming(&incoming_key);

        info!(
            %algorithm,
            compressed_size,
            decompressed_size = output.len(),
            %download_key,
            "decompressed upload"
        );
        Ok(TransformOutcome {
            mode: TransformMode::Decompress,
            download_key,
            stats: TransformStats::Decompress(stats),
        })
    }

    /// Read a staged outgoing artifact for delivery.
    pub fn deliver(&self, key: &str) -> ServerResult<Vec<u8>> {
        let artifact = match self.staging.stat(Zone::Outgoing, key) {
            Ok(artifact) => artifact,
            Err(press_staging::StagingError::NotFound { .. }) => {
                return Err(ServerError::NotFound(key.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        debug!(
            %key,
            len = artifact.len,
            created = %artifact.created,
            "delivering staged artifact"
        );
        Ok(self.staging.get(Zone::Outgoing, key)?)
    }

    /// Remove a delivered artifact from the outgoing zone.
    pub fn discard(&self, key: &str) -> ServerResult<bool> {
        Ok(self.staging.delete(Zone::Outgoing, key)?)
    }

    // Cleanup runs only after the output is staged; a failure here leaves
    // an orphan behind rather than failing the whole request.
    fn cleanup_incoming(&self, key: &str) {
        if let Err(e) = self.staging.delete(Zone::Incoming, key) {
            warn!(%key, error = %e, "failed to delete incoming artifact");
        }
    }
}

fn compress_output_hint(file_name: &str, algorithm: Algorithm) -> String {
    let base: String = std::path::Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("upload")
        .chars()
        .take(MAX_BASE_NAME)
        .collect();
    format!("{base}_compressed.{algorithm}")
}

fn decompress_output_hint(file_name: &str) -> String {
    let base = Algorithm::ALL
        .iter()
        .find_map(|a| file_name.strip_suffix(a.marker()))
        .unwrap_or(file_name);
    format!("{base}_decompressed.txt")
}
