use std::time::Duration;

use crate::api_key::ApiKey;
use crate::error::FetchError;
use crate::types::MovieMetadata;

const BASE_URL: &str = "http://www.omdbapi.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can turn a free-text title into movie metadata.
pub trait MetadataSource {
    fn lookup(&self, title: &str) -> Result<MovieMetadata, FetchError>;
}

/// Blocking HTTP client for the OMDb API.
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    api_key: ApiKey,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: ApiKey) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (mirrors, local fakes).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Look up a movie by free-text title.
    pub fn fetch(&self, title: &str) -> Result<MovieMetadata, FetchError> {
        log::debug!("OMDb lookup for '{title}'");

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.value()), ("t", title)])
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(FetchError::Api("API key rejected".to_string()));
        }
        if !status.is_success() && text.is_empty() {
            return Err(FetchError::Api(format!("HTTP {status}")));
        }

        MovieMetadata::from_json(title, &text).inspect_err(|_| {
            let snippet: String = text.chars().take(200).collect();
            log::debug!("OMDb response for '{title}': {snippet}");
        })
    }
}

impl MetadataSource for OmdbClient {
    fn lookup(&self, title: &str) -> Result<MovieMetadata, FetchError> {
        self.fetch(title)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    use super::*;

    /// Serve one canned HTTP response on a local port; returns the base URL.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).unwrap();
        });
        format!("http://{addr}/")
    }

    fn client_for(base_url: String) -> OmdbClient {
        OmdbClient::new(ApiKey::new("test"))
            .unwrap()
            .with_base_url(base_url)
    }

    #[test]
    fn test_fetch_found() {
        let url = serve_once(
            "200 OK",
            r#"{"Title":"Inception","Year":"2010","imdbRating":"8.8","Response":"True"}"#,
        );
        let meta = client_for(url).fetch("inception").unwrap();
        assert_eq!(meta.title, "Inception");
        assert_eq!(meta.year, 2010);
        assert_eq!(meta.rating, 8.8);
    }

    #[test]
    fn test_fetch_not_found() {
        let url = serve_once(
            "200 OK",
            r#"{"Response":"False","Error":"Movie not found!"}"#,
        );
        let err = client_for(url).fetch("zzzz").unwrap_err();
        assert!(matches!(err, FetchError::NotFound(ref t) if t == "zzzz"));
    }

    #[test]
    fn test_fetch_unauthorized() {
        let url = serve_once(
            "401 Unauthorized",
            r#"{"Response":"False","Error":"Invalid API key!"}"#,
        );
        let err = client_for(url).fetch("Heat").unwrap_err();
        assert!(matches!(err, FetchError::Api(_)));
    }
}
