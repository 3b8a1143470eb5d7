//! Filesystem-backed staging store for the Press compression portal.
//!
//! Artifacts move through two disjoint zones under a single root:
//!
//! - [`Zone::Incoming`] — raw uploads, deleted once a transform succeeds
//! - [`Zone::Outgoing`] — transformed artifacts awaiting a single download
//!
//! # Design Rules
//!
//! 1. Keys are generated, never caller-supplied. Any caller-influenced
//!    component is sanitized and truncated before it reaches a path.
//! 2. Every generated key carries a timestamp plus a process-wide atomic
//!    counter, so concurrent puts never collide.
//! 3. The two zones never share a namespace: a download key can never
//!    resolve an upload path.
//! 4. Operations are independent filesystem calls. There is no
//!    cross-operation transaction and none is needed.

pub mod error;
pub mod key;
pub mod store;
pub mod zone;

pub use error::{StagingError, StagingResult};
pub use store::{StagedArtifact, StagingStore};
pub use zone::Zone;
