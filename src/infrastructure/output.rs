// Output writer - persists rendered documents, creating parent directories
use anyhow::{Context, Result};
use std::path::Path;

pub async fn write_document(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("index.html");

        write_document(&path, "<html></html>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn test_overwrites_existing_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.html");

        write_document(&path, "first").await.unwrap();
        write_document(&path, "second").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
