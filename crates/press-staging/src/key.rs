use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{StagingError, StagingResult};

/// Longest sanitized hint embedded in a generated key.
const MAX_HINT_LEN: usize = 64;

// Wall-clock time alone is not collision-resistant under concurrency, so
// every key also carries a process-wide monotonic counter.
static KEY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique storage key embedding a sanitized caller hint.
///
/// Shape: `{unix_millis}-{counter}_{sanitized_hint}`.
pub fn generate_key(hint: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = KEY_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}_{}", sanitize(hint))
}

/// Reduce a caller-influenced name to a conservative allow-list:
/// ASCII alphanumerics plus `.`, `_`, `-`. Everything else becomes `_`
/// and the result is truncated to [`MAX_HINT_LEN`].
pub fn sanitize(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_HINT_LEN)
        .collect();
    if out.is_empty() {
        out.push_str("artifact");
    }
    out
}

/// Reject keys that could escape a zone directory.
///
/// Keys are store-generated, so anything with a path separator or a
/// leading dot is a caller forgery, not a store product. Without
/// separators a `..` substring inside a name cannot traverse.
pub fn validate(key: &str) -> StagingResult<()> {
    if key.is_empty() || key.contains('/') || key.contains('\\') || key.starts_with('.') {
        return Err(StagingError::InvalidKey(key.to_string()));
    }
    Ok(())
}
