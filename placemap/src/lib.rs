//! Placemap is a map model for browsing geotagged places. It keeps track of a
//! map viewport, a set of selectable base tile layers, and a collection of
//! markers with HTML popups built from a GeoJSON feature collection.
//!
//! # Quick start
//!
//! ```no_run
//! use placemap::layer::TileLayer;
//! use placemap::source::{FeatureSource, FileFeatureSource};
//! use placemap::{latlon, MapBuilder};
//!
//! # tokio_test::block_on(async {
//! let mut map = MapBuilder::new()
//!     .with_center(latlon!(50.683889, 10.919444))
//!     .with_zoom(4)
//!     .with_base_layer("OpenStreetMap", TileLayer::osm())
//!     .with_base_layer("Imagery", TileLayer::esri_imagery())
//!     .build()
//!     .expect("invalid map configuration");
//!
//! let features = FileFeatureSource::new("data.json").load().await.expect("failed to load");
//! map.set_features(&features, true);
//! # });
//! ```
//!
//! The crate does not render anything by itself. [`Map`] and its
//! [`layers`](layer) are a model in the sense the map hanging on your wall is:
//! they hold the viewport, the tile URLs of the active base layer and the
//! markers with their popup content, and an embedding UI (or a test) reads
//! that state and draws it.
//!
//! The main pieces are:
//!
//! * [`Map`] and [`MapView`] - the viewport and the layer stack;
//! * [`control::BaseLayerSwitcher`] - the selectable base layer registry;
//! * [`source`] - asynchronous loading of GeoJSON feature collections;
//! * [`popup`] - pure construction of per-feature popup content trees;
//! * [`layer`] - tile, marker and cluster layers.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod control;
pub mod error;
pub mod feature;
pub mod layer;
pub mod popup;
pub mod source;

mod map;
mod view;

pub use error::Error;
pub use map::{LayerCollection, Map, MapBuilder};
pub use view::MapView;

// Reexport placemap_types so that users do not need to depend on it directly.
pub use placemap_types::{self, latlon, GeoPoint2d};
