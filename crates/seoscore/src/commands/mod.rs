//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod readability;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Fail early when a file exceeds the configured input limit.
///
/// Uses file metadata so oversized inputs are never read into memory.
pub fn check_input_size(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<()> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }
    Ok(())
}

/// Read a file after validating its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    check_input_size(path, max_bytes)?;
    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_file(body: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("page.html")).unwrap();
        std::fs::write(&path, body).unwrap();
        (tmp, path)
    }

    #[test]
    fn reads_within_limit() {
        let (_tmp, path) = temp_file("<p>hello</p>");
        assert_eq!(read_input_file(&path, Some(1024)).unwrap(), "<p>hello</p>");
        assert_eq!(read_input_file(&path, None).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn rejects_oversized_input() {
        let (_tmp, path) = temp_file("0123456789");
        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = check_input_size(Utf8Path::new("/nonexistent/page.html"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/page.html"));
    }
}
