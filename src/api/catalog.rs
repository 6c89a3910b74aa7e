// Catalog loading (local file or HTTP)
use crate::config::CatalogSource;
use crate::models::Service;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch and parse the whole catalog in one go (no retry)
pub async fn load_catalog(source: &CatalogSource) -> Result<Vec<Service>, LoadError> {
    log::debug!("[Catalog] Loading from {}", source.describe());

    let bytes = match source {
        CatalogSource::Url(url) => {
            let response = reqwest::get(url).await?;
            if !response.status().is_success() {
                return Err(LoadError::Status(response.status()));
            }
            response.bytes().await?.to_vec()
        }
        CatalogSource::File(path) => tokio::fs::read(path).await?,
    };

    let services = parse_catalog(&bytes)?;
    log::info!(
        "[Catalog] Loaded {} services from {}",
        services.len(),
        source.describe()
    );
    Ok(services)
}

pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Service>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_SERVICES: &str = r#"[
        {"id":1,"name":"A","description":"","phone":"1","category":"food","ratings":[],"totalRatings":0},
        {"id":2,"name":"B","description":"","phone":"2","category":"auto","ratings":[4],"totalRatings":1}
    ]"#;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_SERVICES.as_bytes()).unwrap();

        let source = CatalogSource::File(file.path().to_path_buf());
        let services = load_catalog(&source).await.unwrap();

        assert_eq!(services.len(), 2);
        assert_eq!(services[1].ratings, vec![4]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogSource::File(dir.path().join("nope.json"));

        let err = load_catalog(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();

        let source = CatalogSource::File(file.path().to_path_buf());
        let err = load_catalog(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_url_is_network_error() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let source = CatalogSource::Url("http://127.0.0.1:9/services.json".to_string());
        let err = load_catalog(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
    }

    /// Serve one canned HTTP response on an ephemeral port and return its URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/services.json", addr)
    }

    #[tokio::test]
    async fn test_http_error_status_is_status_error() {
        let url = serve_once("404 Not Found", "").await;

        let err = load_catalog(&CatalogSource::Url(url)).await.unwrap_err();
        match err {
            LoadError::Status(status) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_success_parses_catalog() {
        let url = serve_once("200 OK", TWO_SERVICES).await;

        let services = load_catalog(&CatalogSource::Url(url)).await.unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].id, 1);
    }
}
