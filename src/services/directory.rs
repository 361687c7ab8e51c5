// src/services/directory.rs
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::errors::DirectoryError;
use crate::models::view::Classroom;

/// Supplies the viewer's class list, used by the mapper to resolve class
/// names for class-scoped events. Fetched once at startup; a failure
/// degrades to an empty list rather than blocking the feed.
#[async_trait]
pub trait ClassDirectory: Send + Sync {
    async fn list_classes(&self) -> Result<Vec<Classroom>, DirectoryError>;
}

#[derive(Debug, Deserialize)]
struct ClassListing {
    data: Vec<Classroom>,
}

/// Fetches `GET {base}/forum/write/lessons/`, which answers
/// `{"data": [{"id": .., "name": ..}]}`.
pub struct HttpClassDirectory {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpClassDirectory {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ClassDirectory for HttpClassDirectory {
    async fn list_classes(&self) -> Result<Vec<Classroom>, DirectoryError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        if !response.status().is_success() {
            return Err(DirectoryError::Status(response.status()));
        }
        let listing: ClassListing = response.json().await?;
        Ok(listing.data)
    }
}

/// Fixed class list for offline use and tests.
pub struct StaticClassDirectory {
    classes: Vec<Classroom>,
}

impl StaticClassDirectory {
    pub fn new(classes: Vec<Classroom>) -> Self {
        Self { classes }
    }
}

#[async_trait]
impl ClassDirectory for StaticClassDirectory {
    async fn list_classes(&self) -> Result<Vec<Classroom>, DirectoryError> {
        Ok(self.classes.clone())
    }
}
