use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Root directory for the staging store; the incoming and outgoing
    /// zones are created beneath it.
    pub staging_root: PathBuf,
    /// Upper bound on an uploaded request body.
    pub max_upload_bytes: usize,
    /// Grace period between a completed download and deletion of the
    /// delivered artifact. Zero deletes inline before responding.
    pub delete_grace_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".parse().unwrap(),
            staging_root: PathBuf::from("data"),
            max_upload_bytes: 50 * 1024 * 1024,
            delete_grace_ms: 2000,
        }
    }
}
