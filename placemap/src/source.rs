//! Asynchronous loading of feature collections.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use geojson::GeoJson;

use crate::error::Error;
use crate::feature::FeatureCollection;

/// A source a feature collection can be loaded from.
#[async_trait]
pub trait FeatureSource {
    /// Loads the collection.
    ///
    /// Loading happens once per map lifetime. Any failure is returned to the
    /// caller; a collection that cannot be fetched or decoded must not be
    /// silently replaced with an empty one.
    async fn load(&self) -> Result<FeatureCollection, Error>;
}

/// Loads a feature collection over HTTP from a static JSON resource.
pub struct HttpFeatureSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFeatureSource {
    /// Creates a new source fetching from the given URL.
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("placemap/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn load_bytes(&self) -> Result<Bytes, Error> {
        log::debug!("Loading features from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl FeatureSource for HttpFeatureSource {
    async fn load(&self) -> Result<FeatureCollection, Error> {
        let bytes = self.load_bytes().await?;
        let geojson: GeoJson = serde_json::from_slice(&bytes)?;
        FeatureCollection::from_geojson(geojson)
    }
}

/// Loads a feature collection from a local file. Used by tests and
/// command-line tooling that works with a pregenerated data file directly.
pub struct FileFeatureSource {
    path: PathBuf,
}

impl FileFeatureSource {
    /// Creates a new source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeatureSource for FileFeatureSource {
    async fn load(&self) -> Result<FeatureCollection, Error> {
        log::debug!("Loading features from {}", self.path.display());
        let bytes = std::fs::read(&self.path)?;
        let geojson: GeoJson = serde_json::from_slice(&bytes)?;
        FeatureCollection::from_geojson(geojson)
    }
}
