use digest_core::fetch::{decode_json, decode_response};
use digest_core::FetchError;
use serde_json::Value;

/// Fetches one candidate location: `http(s)://` over the network, anything
/// else from the filesystem.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    client: reqwest::Client,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fetch(&self, location: String) -> Result<Value, FetchError> {
        if is_remote(&location) {
            self.fetch_http(location).await
        } else {
            fetch_file(location).await
        }
    }

    async fn fetch_http(&self, location: String) -> Result<Value, FetchError> {
        tracing::debug!(%location, "requesting");
        let response = self
            .client
            .get(&location)
            .send()
            .await
            .map_err(|error| transport_error(&location, &error))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|error| transport_error(&location, &error))?;

        decode_response(&location, status, &body)
    }
}

async fn fetch_file(location: String) -> Result<Value, FetchError> {
    tracing::debug!(%location, "reading");
    let body = tokio::fs::read_to_string(&location)
        .await
        .map_err(|error| transport_error(&location, &error))?;
    decode_json(&location, &body)
}

pub fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn transport_error(location: &str, error: &dyn std::error::Error) -> FetchError {
    FetchError::Transport {
        location: location.to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest_core::{fetch_first_ok, load_dashboard, Sources};
    use serde_json::json;
    use std::fs;

    #[test]
    fn only_http_schemes_are_remote() {
        assert!(is_remote("http://localhost:5500/build/macro_themes.json"));
        assert!(is_remote("HTTPS://example.com/a.json"));
        assert!(!is_remote("/build/macro_themes.json"));
        assert!(!is_remote("../build/macro_themes.json"));
        assert!(!is_remote("file:///tmp/a.json"));
    }

    #[tokio::test]
    async fn missing_file_is_a_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let location = dir.path().join("absent.json").display().to_string();

        let error = Transport::new().fetch(location).await.unwrap_err();
        assert!(matches!(error, FetchError::Transport { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"companies\": [").unwrap();

        let error = Transport::new()
            .fetch(path.display().to_string())
            .await
            .unwrap_err();
        assert!(matches!(error, FetchError::Parse { .. }));
    }

    #[tokio::test]
    async fn falls_back_to_the_next_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("cards.json");
        fs::write(&present, r#"{"companies": [{"company_name": "Acme"}]}"#).unwrap();
        let candidates = vec![
            dir.path().join("missing.json").display().to_string(),
            present.display().to_string(),
        ];

        let transport = Transport::new();
        let value = fetch_first_ok(&candidates, |location| transport.fetch(location.clone()))
            .await
            .unwrap();
        assert_eq!(value, json!({"companies": [{"company_name": "Acme"}]}));
    }

    #[tokio::test]
    async fn loads_a_dashboard_from_a_build_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("active_company_cards.json"),
            r#"{"companies": [{"company_name": "Acme", "ticker": "ACM", "recommendation": "Sell"}]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("macro_themes.json"),
            r#"{"macro_themes": []}"#,
        )
        .unwrap();

        let sources = Sources::from_roots(&[
            dir.path().join("nowhere").display().to_string(),
            dir.path().display().to_string(),
        ]);
        let transport = Transport::new();
        let dashboard = load_dashboard(&sources, |location| transport.fetch(location.clone()))
            .await
            .unwrap();

        assert_eq!(dashboard.companies.len(), 1);
        assert_eq!(dashboard.companies[0].ticker, "ACM");
        assert!(dashboard.themes.is_empty());
    }
}
