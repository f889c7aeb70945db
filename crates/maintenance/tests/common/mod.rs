//! Shared fixtures for the procedure integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use catalog::{
    CatalogRepository,
    memory::MemoryCatalog,
    models::{Book, NewBook},
};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use maintenance::http::{FetchError, FetchedResponse, HttpFetch};
use reqwest::StatusCode;
use time::macros::date;

/// Answers GETs from a fixed URL table (404 for anything else) and records
/// every requested URL in order. URLs marked as timing out fail at the
/// transport level.
#[derive(Default)]
pub struct StubWeb {
    routes: HashMap<String, (StatusCode, Bytes)>,
    timeouts: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl StubWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, status: StatusCode, body: impl Into<Bytes>) -> Self {
        self.routes.insert(url.to_string(), (status, body.into()));
        self
    }

    pub fn timeout(mut self, url: &str) -> Self {
        self.timeouts.insert(url.to_string());
        self
    }

    pub fn json(self, url: &str, body: &'static str) -> Self {
        self.route(url, StatusCode::OK, body)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn was_requested(&self, url: &str) -> bool {
        self.requests().iter().any(|u| u == url)
    }
}

#[async_trait]
impl HttpFetch for StubWeb {
    async fn get(&self, url: &str) -> Result<FetchedResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        if self.timeouts.contains(url) {
            return Err(FetchError::Timeout(url.to_string()));
        }
        let (status, body) = self
            .routes
            .get(url)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, Bytes::new()));
        Ok(FetchedResponse { status, body })
    }
}

/// A small semi-transparent PNG, so normalization has to convert it.
pub fn png_cover() -> Bytes {
    let image = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(12, 18, Rgba([30, 90, 160, 200])));
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png).unwrap();
    Bytes::from(cursor.into_inner())
}

pub async fn add_book(repo: &MemoryCatalog, title: &str, isbn: &str) -> Book {
    repo.create_book(NewBook {
        title: title.to_string(),
        isbn: isbn.to_string(),
        publication_date: date!(1900 - 01 - 01),
        description: String::new(),
        page_count: 100,
        language: "English".to_string(),
        publisher: "Test Press".to_string(),
        category_id: None,
        total_copies: 1,
        available_copies: 1,
    })
    .await
    .unwrap()
}
