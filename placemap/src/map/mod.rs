//! The [`Map`] itself: viewport, base layers and overlay layers.

use crate::control::BaseLayerSwitcher;
use crate::feature::FeatureCollection;
use crate::layer::{ClusterLayer, MarkerLayer};
use crate::popup::PopupOptions;
use crate::view::MapView;

mod builder;
mod layer_collection;

pub use builder::MapBuilder;
pub use layer_collection::LayerCollection;

/// Map specifies the viewport, the set of selectable base layers and the
/// overlay layers to be shown.
///
/// Use [`MapBuilder`] to construct a map.
pub struct Map {
    view: MapView,
    base_layers: BaseLayerSwitcher,
    layers: LayerCollection,
    popup_options: PopupOptions,
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("view", &self.view)
            .field("base_layers", &self.base_layers)
            .field("layers", &self.layers.len())
            .field("popup_options", &self.popup_options)
            .finish()
    }
}

impl Map {
    pub(crate) fn new(
        view: MapView,
        base_layers: BaseLayerSwitcher,
        popup_options: PopupOptions,
    ) -> Self {
        Self {
            view,
            base_layers,
            layers: LayerCollection::default(),
            popup_options,
        }
    }

    /// Current view of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Changes the view of the map to the given one.
    ///
    /// The overlay layers are prepared for the new view, so for example the
    /// marker clusters are regrouped for the new zoom level.
    pub fn set_view(&mut self, view: MapView) {
        self.view = view;
        for layer in self.layers.iter() {
            layer.prepare(&self.view);
        }
    }

    /// The base layer registry of the map.
    pub fn base_layers(&self) -> &BaseLayerSwitcher {
        &self.base_layers
    }

    /// Returns a mutable reference to the base layer registry, for switching
    /// the active layer.
    pub fn base_layers_mut(&mut self) -> &mut BaseLayerSwitcher {
        &mut self.base_layers
    }

    /// Returns the list of the map's overlay layers.
    pub fn layers(&self) -> &LayerCollection {
        &self.layers
    }

    /// Returns a mutable reference to the list of the map's overlay layers.
    pub fn layers_mut(&mut self) -> &mut LayerCollection {
        &mut self.layers
    }

    /// Popup rendering options of the map.
    pub fn popup_options(&self) -> &PopupOptions {
        &self.popup_options
    }

    /// Shows the given feature collection on the map.
    ///
    /// One marker is created per feature at its coordinates with the popup
    /// content bound. With `clustering` the markers are grouped into a
    /// [`ClusterLayer`]; without it the [`MarkerLayer`] is added as is.
    /// Either way the features contribute exactly one layer, replacing the
    /// overlay layers shown before.
    pub fn set_features(&mut self, collection: &FeatureCollection, clustering: bool) {
        let markers = MarkerLayer::from_features(collection, &self.popup_options);
        log::debug!(
            "Composing {} markers, clustering: {clustering}",
            markers.len()
        );

        self.layers.clear();
        if clustering {
            self.layers.push(ClusterLayer::new(markers));
        } else {
            self.layers.push(markers);
        }

        for layer in self.layers.iter() {
            layer.prepare(&self.view);
        }
    }
}

#[cfg(test)]
mod tests {
    use placemap_types::latlon;

    use super::*;
    use crate::layer::TileLayer;

    fn test_collection() -> FeatureCollection {
        FeatureCollection::from_geojson_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "key": "a",
                        "geometry": null,
                        "properties": { "name": "X", "coordinates": [50.0, 10.0] }
                    },
                    {
                        "type": "Feature",
                        "key": "b",
                        "geometry": null,
                        "properties": { "name": "Y", "coordinates": [50.001, 10.001] }
                    },
                    {
                        "type": "Feature",
                        "key": "c",
                        "geometry": null,
                        "properties": { "name": "Z", "coordinates": [-30.0, 140.0] }
                    }
                ]
            }"#,
        )
        .expect("invalid test data")
    }

    fn test_map() -> Map {
        MapBuilder::new()
            .with_center(latlon!(50.683889, 10.919444))
            .with_zoom(4)
            .with_base_layer("OpenStreetMap", TileLayer::osm())
            .with_base_layer("Imagery", TileLayer::esri_imagery())
            .build()
            .expect("invalid test configuration")
    }

    #[test]
    fn plain_mode_adds_marker_layer_directly() {
        let mut map = test_map();
        map.set_features(&test_collection(), false);

        assert_eq!(map.layers().len(), 1);
        let layer = map.layers()[0]
            .as_any()
            .downcast_ref::<MarkerLayer>()
            .expect("expected a marker layer");
        assert_eq!(layer.len(), 3);
    }

    #[test]
    fn clustering_mode_adds_single_cluster_layer() {
        let mut map = test_map();
        map.set_features(&test_collection(), true);

        assert_eq!(map.layers().len(), 1);
        let layer = map.layers()[0]
            .as_any()
            .downcast_ref::<ClusterLayer>()
            .expect("expected a cluster layer");

        // prepared for the map view on insertion
        assert_eq!(layer.clusters().len(), 2);
        assert_eq!(layer.markers().len(), 3);
    }

    #[test]
    fn set_features_replaces_previous_overlays() {
        let mut map = test_map();
        map.set_features(&test_collection(), false);
        map.set_features(&test_collection(), true);

        assert_eq!(map.layers().len(), 1);
        assert!(map.layers()[0].as_any().is::<ClusterLayer>());
    }

    #[test]
    fn changing_view_regroups_clusters() {
        let mut map = test_map();
        map.set_features(&test_collection(), true);

        let view = map.view().with_zoom(18);
        map.set_view(view);

        let layer = map.layers()[0]
            .as_any()
            .downcast_ref::<ClusterLayer>()
            .expect("expected a cluster layer");
        assert_eq!(layer.clusters().len(), 3);
    }
}
