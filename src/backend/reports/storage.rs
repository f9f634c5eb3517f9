/**
 * Report File Storage
 *
 * Uploaded files land on local disk under the configured upload directory.
 * Stored names are `<millis>-<sanitized original name>`: the timestamp
 * prefix keeps repeat uploads of the same file distinct, the sanitizer
 * strips anything that could escape the directory or confuse a filesystem.
 */

use std::path::{Path, PathBuf};

/// Replace whitespace with underscores and drop every character outside
/// `[A-Za-z0-9_\-.]`.
pub fn sanitize_filename(original: &str) -> String {
    original
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Build the on-disk name for an upload.
pub fn stored_filename(timestamp_millis: i64, original: &str) -> String {
    format!("{}-{}", timestamp_millis, sanitize_filename(original))
}

/// Write the upload to disk, creating the directory if needed. Returns the
/// full storage path.
pub async fn save_upload(
    upload_dir: &Path,
    stored_name: &str,
    bytes: &[u8],
) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(upload_dir).await?;
    let path = upload_dir.join(stored_name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_whitespace() {
        assert_eq!(sanitize_filename("my blood report.pdf"), "my_blood_report.pdf");
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize_filename("a/b\\c.pdf"), "abc.pdf");
    }

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_filename("CBC_2026-03.pdf"), "CBC_2026-03.pdf");
    }

    #[test]
    fn test_stored_filename_has_timestamp_prefix() {
        assert_eq!(
            stored_filename(1700000000000, "x ray.png"),
            "1700000000000-x_ray.png"
        );
    }

    #[tokio::test]
    async fn test_save_upload_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads");

        let path = save_upload(&nested, "1-scan.pdf", b"%PDF-1.4 test")
            .await
            .unwrap();

        assert_eq!(path, nested.join("1-scan.pdf"));
        let contents = tokio::fs::read(&path).await.unwrap();
        assert_eq!(contents, b"%PDF-1.4 test");
    }
}
