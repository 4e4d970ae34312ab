//! Loads a feature collection from a file, composes a clustered map and
//! prints what an embedding UI would render.

use placemap::layer::{ClusterLayer, TileLayer};
use placemap::source::{FeatureSource, FileFeatureSource};
use placemap::{latlon, MapBuilder};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut map = MapBuilder::new()
        .with_center(latlon!(50.683889, 10.919444))
        .with_zoom(4)
        .with_base_layer("OpenStreetMap", TileLayer::osm())
        .with_base_layer("Imagery", TileLayer::esri_imagery())
        .build()
        .expect("invalid map configuration");

    let features = FileFeatureSource::new("placemap/examples/data/places.json")
        .load()
        .await
        .expect("failed to load features");

    map.set_features(&features, true);

    println!(
        "Base layers: {:?} (active: {})",
        map.base_layers().available(),
        map.base_layers().active_name()
    );

    let layer = map.layers()[0]
        .as_any()
        .downcast_ref::<ClusterLayer>()
        .expect("expected a cluster layer");

    for cluster in layer.clusters() {
        let center = cluster.center();
        println!(
            "Cluster of {} at ({:.4}, {:.4}):",
            cluster.len(),
            center.lat(),
            center.lon()
        );
        for marker in layer.cluster_markers(&cluster) {
            println!("  {} -> {}", marker.title(), marker.popup().to_html());
        }
    }
}
