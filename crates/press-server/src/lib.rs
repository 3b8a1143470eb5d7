//! HTTP server for the Press compression portal.
//!
//! Exposes the stateless file-transform protocol: a multipart upload is
//! compressed or decompressed, the result is staged for a single
//! download, and the upload is cleaned up once the output is safely
//! staged.
//!
//! # Endpoints
//!
//! - `POST /api/compress` — multipart `file` + optional `algorithm`
//! - `POST /api/decompress` — multipart `file`, algorithm inferred from
//!   the declared file name
//! - `GET /api/download?file=<key>` — one-shot delivery of a staged
//!   artifact
//! - `GET /api/health` — status, algorithms, server time

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod router;
pub mod server;
pub mod transform;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use response::{HealthResponse, TransformMode, TransformResponse, TransformStats};
pub use server::PressServer;
pub use transform::{TransformOutcome, TransformService};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::util::ServiceExt;

    fn test_app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            staging_root: dir.path().to_path_buf(),
            delete_grace_ms: 0,
            ..ServerConfig::default()
        };
        let app = PressServer::new(config).router().unwrap();
        (dir, app)
    }

    const BOUNDARY: &str = "press-test-boundary";

    fn multipart_body(file_name: &str, content: &[u8], algorithm: Option<&str>) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
        if let Some(algorithm) = algorithm {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                     name=\"algorithm\"\r\n\r\n{algorithm}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "OK");
        assert_eq!(json["algorithms"][0], "gzip");
        assert!(json["time"].is_string());
    }

    #[tokio::test]
    async fn index_endpoint() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn compress_then_single_delivery() {
        let (_dir, app) = test_app();
        let content = "some fairly compressible text. ".repeat(40);
        let content = &content.as_bytes()[..1000];

        let response = app
            .clone()
            .oneshot(multipart_request(
                "/api/compress",
                multipart_body("report.txt", content, Some("gzip")),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["mode"], "compress");
        assert_eq!(json["algorithm"], "GZIP");
        assert_eq!(json["originalSize"], 1000);
        assert!(json["compressedSize"].as_u64().unwrap() < 1000);
        let name = json["downloadFileName"].as_str().unwrap().to_string();
        assert!(name.ends_with("_compressed.gzip"));

        let uri = format!("/api/download?file={name}");
        let response = app
            .clone()
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains(&name));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!bytes.is_empty());

        // Single delivery: the artifact is gone after one download.
        let response = app
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn unknown_algorithm_is_an_error_envelope() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(multipart_request(
                "/api/compress",
                multipart_body("report.txt", b"data", Some("zstd")),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("zstd"));
        assert!(message.contains("gzip, deflate, brotli"));
    }

    #[tokio::test]
    async fn decompress_requires_a_marker() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(multipart_request(
                "/api/decompress",
                multipart_body("mystery.bin", b"data", None),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn missing_file_field() {
        let (_dir, app) = test_app();
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"algorithm\"\r\n\r\ngzip\r\n--{BOUNDARY}--\r\n"
            )
            .as_bytes(),
        );
        let response = app
            .oneshot(multipart_request("/api/compress", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"], "No file uploaded");
    }

    #[tokio::test]
    async fn empty_file_reports_sentinel_ratio() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(multipart_request(
                "/api/compress",
                multipart_body("empty.txt", b"", Some("brotli")),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["originalSize"], 0);
        assert_eq!(json["ratio"], "0.0000");
        assert_eq!(json["savings"], "0.0%");
    }

    #[tokio::test]
    async fn download_without_filename_keeps_the_envelope() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Filename required");
    }

    #[tokio::test]
    async fn download_of_never_staged_key() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/download?file=123-0_ghost_compressed.gzip")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
