//! Marker clustering.

use std::any::Any;
use std::collections::BTreeMap;

use parking_lot::RwLock;
use placemap_types::geo::GeoPoint2d;
use placemap_types::mercator;

use crate::layer::attribution::Attribution;
use crate::layer::marker_layer::{Marker, MarkerLayer};
use crate::layer::Layer;
use crate::view::MapView;

/// Default size of a clustering grid cell, in pixels.
const DEFAULT_CELL_SIZE: f64 = 80.0;

/// A group of markers close to each other on the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    center: GeoPoint2d,
    markers: Vec<usize>,
}

impl Cluster {
    /// Position of the cluster: the arithmetic mean of its member positions.
    pub fn center(&self) -> GeoPoint2d {
        self.center
    }

    /// Indices of the member markers in the wrapped marker layer.
    pub fn markers(&self) -> &[usize] {
        &self.markers
    }

    /// Number of markers in the cluster.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if the cluster contains no markers. Clusters produced by
    /// [`ClusterLayer`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// A layer that groups markers of the wrapped [`MarkerLayer`] at low zoom
/// levels.
///
/// Markers are bucketed by a screen-space grid: two markers end up in the same
/// cluster when their projected positions fall into the same grid cell at the
/// current zoom level. Zooming in makes the grid finer in geographic terms, so
/// clusters break apart until every marker with a distinct position stands
/// alone.
///
/// The clusters are recalculated by [`Layer::prepare`], so the layer shows
/// groups for the view it was last prepared with.
pub struct ClusterLayer {
    markers: MarkerLayer,
    cell_size: f64,
    clusters: RwLock<Vec<Cluster>>,
    clustered_for_zoom: RwLock<Option<u32>>,
}

impl std::fmt::Debug for ClusterLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterLayer")
            .field("markers", &self.markers.len())
            .field("cell_size", &self.cell_size)
            .finish()
    }
}

impl ClusterLayer {
    /// Creates a new layer wrapping the given markers.
    pub fn new(markers: MarkerLayer) -> Self {
        Self {
            markers,
            cell_size: DEFAULT_CELL_SIZE,
            clusters: RwLock::new(Vec::new()),
            clustered_for_zoom: RwLock::new(None),
        }
    }

    /// Sets the size of the clustering grid cell in pixels.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// The wrapped marker layer.
    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    /// Clusters calculated for the last prepared view.
    pub fn clusters(&self) -> Vec<Cluster> {
        self.clusters.read().clone()
    }

    /// Resolves the member markers of a cluster.
    pub fn cluster_markers(&self, cluster: &Cluster) -> Vec<&Marker> {
        cluster
            .markers
            .iter()
            .filter_map(|index| self.markers.markers().get(*index))
            .collect()
    }

    fn recalculate(&self, zoom: u32) {
        let resolution = mercator::resolution(zoom);
        let half_world = mercator::EQUATOR_LENGTH / 2.0;

        let mut cells: BTreeMap<(i64, i64), Vec<usize>> = BTreeMap::new();
        // Markers that cannot be projected (near the poles) are kept as
        // stand-alone clusters so that no marker disappears from the map.
        let mut unprojected = Vec::new();

        for (index, marker) in self.markers.markers().iter().enumerate() {
            match mercator::project(&marker.position()) {
                Some(projected) => {
                    let x = (projected.x + half_world) / resolution;
                    let y = (half_world - projected.y) / resolution;
                    let cell = (
                        (x / self.cell_size).floor() as i64,
                        (y / self.cell_size).floor() as i64,
                    );
                    cells.entry(cell).or_default().push(index);
                }
                None => unprojected.push(index),
            }
        }

        let mut clusters: Vec<Cluster> = cells
            .into_values()
            .map(|markers| self.cluster_from_indices(markers))
            .collect();
        clusters.extend(
            unprojected
                .into_iter()
                .map(|index| self.cluster_from_indices(vec![index])),
        );

        log::debug!(
            "Clustered {} markers into {} groups at zoom {zoom}",
            self.markers.len(),
            clusters.len()
        );

        *self.clusters.write() = clusters;
        *self.clustered_for_zoom.write() = Some(zoom);
    }

    fn cluster_from_indices(&self, markers: Vec<usize>) -> Cluster {
        let all_markers = self.markers.markers();
        let count = markers.len() as f64;
        let (lat, lon) = markers
            .iter()
            .filter_map(|index| all_markers.get(*index))
            .fold((0.0, 0.0), |(lat, lon), marker| {
                (
                    lat + marker.position().lat(),
                    lon + marker.position().lon(),
                )
            });

        Cluster {
            center: GeoPoint2d::latlon(lat / count, lon / count),
            markers,
        }
    }
}

impl Layer for ClusterLayer {
    fn prepare(&self, view: &MapView) {
        if *self.clustered_for_zoom.read() == Some(view.zoom()) {
            return;
        }

        self.recalculate(view.zoom());
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
