//! Metadata API clients that turn a title into a cover URL.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::covers::query::{search_terms, upgrade_thumbnail_zoom};
use crate::http::{FetchError, HttpFetch};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Unexpected status {0}")]
    Status(StatusCode),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A title search that may yield a cover image URL.
#[async_trait]
pub trait CoverSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Searches one title. `Ok(None)` means the API answered without a usable
    /// image for this query.
    async fn lookup(&self, title: &str) -> Result<Option<String>, SourceError>;
}

async fn fetch_json<T: for<'de> Deserialize<'de>>(
    fetcher: &dyn HttpFetch,
    url: &str,
) -> Result<T, SourceError> {
    let response = fetcher.get(url).await?;
    if !response.is_ok() {
        return Err(SourceError::Status(response.status));
    }
    Ok(serde_json::from_slice(&response.body)?)
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

/// Primary source: volume search, first result's thumbnail at a higher zoom.
pub struct GoogleBooksSource {
    fetcher: Arc<dyn HttpFetch>,
    endpoint: String,
}

impl GoogleBooksSource {
    pub fn new(fetcher: Arc<dyn HttpFetch>, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
        }
    }

    fn query_url(&self, title: &str) -> String {
        format!(
            "{}?q=intitle:{}&maxResults=1",
            self.endpoint,
            search_terms(title)
        )
    }
}

#[async_trait]
impl CoverSource for GoogleBooksSource {
    fn name(&self) -> &'static str {
        "google-books"
    }

    async fn lookup(&self, title: &str) -> Result<Option<String>, SourceError> {
        let url = self.query_url(title);
        debug!("Google Books query: {url}");

        let response: VolumesResponse = fetch_json(self.fetcher.as_ref(), &url).await?;
        let thumbnail = response
            .items
            .into_iter()
            .next()
            .and_then(|v| v.volume_info.image_links)
            .and_then(|links| links.thumbnail);

        Ok(thumbnail.map(|t| upgrade_thumbnail_zoom(&t)))
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    cover_i: Option<i64>,
}

/// Fallback source: title search, first result's cover id as a large image.
pub struct OpenLibrarySource {
    fetcher: Arc<dyn HttpFetch>,
    endpoint: String,
    covers_base: String,
}

impl OpenLibrarySource {
    pub fn new(
        fetcher: Arc<dyn HttpFetch>,
        endpoint: impl Into<String>,
        covers_base: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
            covers_base: covers_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn query_url(&self, title: &str) -> String {
        format!("{}?title={}&limit=1", self.endpoint, search_terms(title))
    }

    fn cover_url(&self, cover_id: i64) -> String {
        format!("{}/b/id/{cover_id}-L.jpg", self.covers_base)
    }
}

#[async_trait]
impl CoverSource for OpenLibrarySource {
    fn name(&self) -> &'static str {
        "open-library"
    }

    async fn lookup(&self, title: &str) -> Result<Option<String>, SourceError> {
        let url = self.query_url(title);
        debug!("Open Library query: {url}");

        let response: SearchResponse = fetch_json(self.fetcher.as_ref(), &url).await?;
        let cover_id = response.docs.into_iter().next().and_then(|d| d.cover_i);

        Ok(cover_id.map(|id| self.cover_url(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FetchedResponse;
    use bytes::Bytes;
    use std::sync::Mutex;

    /// Answers every GET with the same canned response and records the URLs.
    struct Canned {
        status: StatusCode,
        body: &'static str,
        urls: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(status: StatusCode, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                urls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpFetch for Canned {
        async fn get(&self, url: &str) -> Result<FetchedResponse, FetchError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(FetchedResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    #[tokio::test]
    async fn test_google_books_extracts_upgraded_thumbnail() {
        let fetcher = Canned::new(
            StatusCode::OK,
            r#"{"items":[{"volumeInfo":{"title":"Crime and Punishment","imageLinks":{"smallThumbnail":"http://books.google.com/books/content?id=x&zoom=5","thumbnail":"http://books.google.com/books/content?id=x&zoom=1"}}}]}"#,
        );
        let source = GoogleBooksSource::new(fetcher.clone(), "https://books.test/volumes");

        let url = source.lookup("Crime and Punishment").await.unwrap();

        assert_eq!(
            url.as_deref(),
            Some("http://books.google.com/books/content?id=x&zoom=2")
        );
        assert_eq!(
            fetcher.urls.lock().unwrap()[0],
            "https://books.test/volumes?q=intitle:Crime+and+Punishment&maxResults=1"
        );
    }

    #[tokio::test]
    async fn test_google_books_without_image_links() {
        let fetcher = Canned::new(StatusCode::OK, r#"{"items":[{"volumeInfo":{}}]}"#);
        let source = GoogleBooksSource::new(fetcher, "https://books.test/volumes");
        assert_eq!(source.lookup("Anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_google_books_no_items() {
        let fetcher = Canned::new(StatusCode::OK, r#"{"kind":"books#volumes","totalItems":0}"#);
        let source = GoogleBooksSource::new(fetcher, "https://books.test/volumes");
        assert_eq!(source.lookup("Anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_google_books_error_status() {
        let fetcher = Canned::new(StatusCode::TOO_MANY_REQUESTS, r#"{"error":{}}"#);
        let source = GoogleBooksSource::new(fetcher, "https://books.test/volumes");
        let result = source.lookup("Anything").await;
        assert!(matches!(
            result,
            Err(SourceError::Status(StatusCode::TOO_MANY_REQUESTS))
        ));
    }

    #[tokio::test]
    async fn test_open_library_builds_large_cover_url() {
        let fetcher = Canned::new(
            StatusCode::OK,
            r#"{"numFound":1,"docs":[{"title":"Wuthering Heights","cover_i":12345}]}"#,
        );
        let source = OpenLibrarySource::new(
            fetcher.clone(),
            "https://ol.test/search.json",
            "https://covers.test/",
        );

        let url = source.lookup("Wuthering Heights").await.unwrap();

        assert_eq!(url.as_deref(), Some("https://covers.test/b/id/12345-L.jpg"));
        assert_eq!(
            fetcher.urls.lock().unwrap()[0],
            "https://ol.test/search.json?title=Wuthering+Heights&limit=1"
        );
    }

    #[tokio::test]
    async fn test_open_library_doc_without_cover() {
        let fetcher = Canned::new(StatusCode::OK, r#"{"docs":[{"title":"Obscure"}]}"#);
        let source = OpenLibrarySource::new(
            fetcher,
            "https://ol.test/search.json",
            "https://covers.test",
        );
        assert_eq!(source.lookup("Obscure").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let fetcher = Canned::new(StatusCode::OK, "<html>oops</html>");
        let source = OpenLibrarySource::new(
            fetcher,
            "https://ol.test/search.json",
            "https://covers.test",
        );
        assert!(matches!(
            source.lookup("Anything").await,
            Err(SourceError::Json(_))
        ));
    }
}
