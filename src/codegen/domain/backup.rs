//! Naming of backups taken before an artifact is overwritten.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};

/// Returns the sibling backup path for `location` taken at `taken_at`.
///
/// `adapter_registry.py` becomes
/// `adapter_registry.20260314T092653.000000Z.py.bak`; a non-zero `attempt`
/// is appended to the timestamp as `-<attempt>` so repeated backups within
/// the same microsecond never overwrite each other.
#[must_use]
pub fn backup_location(
    location: &Utf8Path,
    taken_at: DateTime<Utc>,
    attempt: usize,
) -> Utf8PathBuf {
    let stamp = taken_at.format("%Y%m%dT%H%M%S%.6fZ");
    let suffix = if attempt == 0 {
        String::new()
    } else {
        format!("-{attempt}")
    };
    let stem = location.file_stem().unwrap_or("artifact");
    let file_name = location.extension().map_or_else(
        || format!("{stem}.{stamp}{suffix}.bak"),
        |extension| format!("{stem}.{stamp}{suffix}.{extension}.bak"),
    );
    location.with_file_name(file_name)
}
