//! Marker layer built from a feature collection.

use std::any::Any;

use placemap_types::geo::GeoPoint2d;

use crate::feature::FeatureCollection;
use crate::layer::attribution::Attribution;
use crate::layer::Layer;
use crate::popup::{render_popup, HtmlNode, PopupOptions};
use crate::view::MapView;

/// One marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    key: String,
    position: GeoPoint2d,
    title: String,
    popup: HtmlNode,
}

impl Marker {
    /// Creates a new marker.
    pub fn new(
        key: impl Into<String>,
        position: GeoPoint2d,
        title: impl Into<String>,
        popup: HtmlNode,
    ) -> Self {
        Self {
            key: key.into(),
            position,
            title: title.into(),
            popup,
        }
    }

    /// Key of the feature the marker was built from.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Position of the marker.
    pub fn position(&self) -> GeoPoint2d {
        self.position
    }

    /// Title shown when hovering the marker.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Content of the popup bound to the marker.
    pub fn popup(&self) -> &HtmlNode {
        &self.popup
    }
}

/// Layer of markers, one per feature of the source collection, each with its
/// popup content bound.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    /// Builds a layer from a feature collection.
    pub fn from_features(collection: &FeatureCollection, options: &PopupOptions) -> Self {
        let markers = collection
            .iter()
            .map(|feature| {
                Marker::new(
                    &feature.key,
                    feature.properties.coordinates,
                    &feature.properties.name,
                    render_popup(feature, options),
                )
            })
            .collect();

        Self { markers }
    }

    /// Creates a layer from prebuilt markers.
    pub fn from_markers(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    /// Markers of the layer.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Number of markers in the layer.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if the layer has no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns the markers within `tolerance` pixels of the given screen
    /// position, for popup hit testing.
    pub fn markers_at(&self, view: &MapView, screen: placemap_types::Point2, tolerance: f64) -> Vec<&Marker> {
        self.markers
            .iter()
            .filter(|marker| {
                view.geo_to_screen(&marker.position)
                    .map(|position| {
                        (position.x - screen.x).hypot(position.y - screen.y) <= tolerance
                    })
                    .unwrap_or(false)
            })
            .collect()
    }
}

impl Layer for MarkerLayer {
    fn prepare(&self, _view: &MapView) {
        // markers do not depend on the view
    }

    fn attribution(&self) -> Option<Attribution> {
        None
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
