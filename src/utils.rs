//! Utility functions for artifact naming and file system checks.

use crate::errors::Result;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Deterministic file stem for a card's picture artifact.
///
/// Built from the lower-cased, space-to-underscore title joined with the
/// normalized date, so re-running the same search overwrites rather than
/// accumulates.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(picture_stem("Housing Market Cools", "03-05"), "housing_market_cools_03-05");
/// ```
pub fn picture_stem(title: &str, date: &str) -> String {
    format!("{}_{}", title.to_lowercase().replace(' ', "_"), date)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path).await?;
    // Small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_stem_lowercases_and_underscores() {
        assert_eq!(
            picture_stem("Housing Market Cools", "03-05"),
            "housing_market_cools_03-05"
        );
    }

    #[test]
    fn test_picture_stem_keeps_sentinel_date() {
        assert_eq!(
            picture_stem("Untitled Story", "No date found"),
            "untitled_story_No date found"
        );
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let nested = nested.to_str().unwrap();
        ensure_writable_dir(nested).await.unwrap();
        assert!(std::path::Path::new(nested).is_dir());
    }
}
