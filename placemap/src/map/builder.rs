//! [`MapBuilder`] constructs a [`Map`] with the given configuration.

use placemap_types::cartesian::Size;
use placemap_types::geo::GeoPoint2d;

use super::Map;
use crate::control::BaseLayerSwitcher;
use crate::error::Error;
use crate::layer::TileLayer;
use crate::popup::PopupOptions;
use crate::view::MapView;

/// Default zoom level of the map.
const DEFAULT_ZOOM: u32 = 4;

/// Builder of a [`Map`].
///
/// A valid map needs at least two registered base layers (a single fixed
/// background needs no switcher, and this map always shows one). The first
/// registered layer is active unless
/// [`MapBuilder::with_active_base_layer`] names another one.
#[derive(Default)]
pub struct MapBuilder {
    center: GeoPoint2d,
    zoom: Option<u32>,
    size: Size,
    base_layers: Vec<(String, TileLayer)>,
    active_base_layer: Option<String>,
    popup_options: PopupOptions,
}

impl std::fmt::Debug for MapBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapBuilder")
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .field("base_layers", &self.base_layers.len())
            .finish()
    }
}

impl MapBuilder {
    /// Creates a new builder with no layers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial center of the map.
    pub fn with_center(mut self, center: GeoPoint2d) -> Self {
        self.center = center;
        self
    }

    /// Sets the initial zoom level of the map.
    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Sets the size of the viewport in pixels.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Registers a selectable base layer under the given name.
    pub fn with_base_layer(mut self, name: impl Into<String>, layer: TileLayer) -> Self {
        self.base_layers.push((name.into(), layer));
        self
    }

    /// Makes the layer with the given name the initially active base layer.
    pub fn with_active_base_layer(mut self, name: impl Into<String>) -> Self {
        self.active_base_layer = Some(name.into());
        self
    }

    /// Sets the popup rendering options of the map.
    pub fn with_popup_options(mut self, options: PopupOptions) -> Self {
        self.popup_options = options;
        self
    }

    /// Builds the map.
    ///
    /// Returns an error if fewer than two base layers are registered or if the
    /// active base layer name does not match any of them.
    pub fn build(self) -> Result<Map, Error> {
        if self.base_layers.len() < 2 {
            return Err(Error::Configuration(
                "a map requires at least two base layers".to_string(),
            ));
        }

        let active = match &self.active_base_layer {
            Some(name) => self
                .base_layers
                .iter()
                .position(|(entry, _)| entry == name)
                .ok_or_else(|| {
                    Error::Configuration(format!("unknown active base layer: {name}"))
                })?,
            None => 0,
        };

        let base_layers = BaseLayerSwitcher::new(self.base_layers, active)?;
        let view = MapView::new(self.center, self.zoom.unwrap_or(DEFAULT_ZOOM))
            .with_size(self.size);

        Ok(Map::new(view, base_layers, self.popup_options))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use placemap_types::latlon;

    use super::*;

    fn two_layers(builder: MapBuilder) -> MapBuilder {
        builder
            .with_base_layer("OpenStreetMap", TileLayer::osm())
            .with_base_layer("Imagery", TileLayer::esri_imagery())
    }

    #[test]
    fn builds_map_with_default_parameters() {
        let map = two_layers(MapBuilder::new()).build().unwrap();

        assert_eq!(map.view().center(), latlon!(0.0, 0.0));
        assert_eq!(map.view().zoom(), DEFAULT_ZOOM);
        assert_eq!(map.base_layers().active_name(), "OpenStreetMap");
        assert!(map.layers().is_empty());
    }

    #[test]
    fn with_center_and_zoom_set_the_view() {
        let map = two_layers(MapBuilder::new())
            .with_center(latlon!(50.683889, 10.919444))
            .with_zoom(6)
            .build()
            .unwrap();

        assert_eq!(map.view().center(), latlon!(50.683889, 10.919444));
        assert_eq!(map.view().zoom(), 6);
    }

    #[test]
    fn active_base_layer_can_be_chosen() {
        let map = two_layers(MapBuilder::new())
            .with_active_base_layer("Imagery")
            .build()
            .unwrap();

        assert_eq!(map.base_layers().active_name(), "Imagery");
    }

    #[test]
    fn fewer_than_two_base_layers_is_an_error() {
        assert_matches!(MapBuilder::new().build(), Err(Error::Configuration(_)));

        let one_layer = MapBuilder::new().with_base_layer("OpenStreetMap", TileLayer::osm());
        assert_matches!(one_layer.build(), Err(Error::Configuration(_)));
    }

    #[test]
    fn unknown_active_base_layer_is_an_error() {
        let result = two_layers(MapBuilder::new())
            .with_active_base_layer("Google")
            .build();
        assert_matches!(result, Err(Error::Configuration(_)));
    }
}
