//! Keyword list input.
//!
//! Keywords arrive as a JSON file of the shape `{"keywords": ["a", "b"]}`.
//! The core pipeline only ever sees the resulting `Vec<String>`.

use crate::errors::Result;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct KeywordsFile {
    keywords: Vec<String>,
}

/// Load the keyword list from a JSON file.
///
/// An empty list is valid and results in a no-op run.
pub async fn load_keywords(path: &str) -> Result<Vec<String>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let file: KeywordsFile = serde_json::from_str(&raw)?;
    info!(count = file.keywords.len(), path, "Loaded keywords");
    Ok(file.keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[tokio::test]
    async fn test_load_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.json");
        std::fs::write(&path, r#"{"keywords": ["climate", "housing market"]}"#).unwrap();

        let keywords = load_keywords(path.to_str().unwrap()).await.unwrap();
        assert_eq!(keywords, vec!["climate", "housing market"]);
    }

    #[tokio::test]
    async fn test_load_keywords_empty_list_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.json");
        std::fs::write(&path, r#"{"keywords": []}"#).unwrap();

        let keywords = load_keywords(path.to_str().unwrap()).await.unwrap();
        assert!(keywords.is_empty());
    }

    #[tokio::test]
    async fn test_load_keywords_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.json");
        std::fs::write(&path, r#"{"keywords": ["unterminated"#).unwrap();

        let err = load_keywords(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
