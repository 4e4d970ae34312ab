//! [Layers](Layer) specify the data shown on the map and the way it is
//! grouped.

use std::any::Any;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::view::MapView;

pub mod attribution;
pub mod cluster_layer;
pub mod marker_layer;
pub mod tile_layer;

pub use attribution::Attribution;
pub use cluster_layer::{Cluster, ClusterLayer};
pub use marker_layer::{Marker, MarkerLayer};
pub use tile_layer::{TileIndex, TileLayer};

/// A source of data displayed on the map.
///
/// There are currently 3 types of layers:
/// * [`TileLayer`] - a base layer of prerendered raster tiles from an
///   Internet source;
/// * [`MarkerLayer`] - a set of markers with popups built from a feature
///   collection;
/// * [`ClusterLayer`] - a marker layer wrapper that groups nearby markers
///   together at low zoom levels.
pub trait Layer: Send + Sync {
    /// Prepares the layer for the given view. For example, a cluster layer
    /// recalculates its groups when the zoom level changes.
    fn prepare(&self, view: &MapView);

    /// Returns the attribution of the layer, if available.
    fn attribution(&self) -> Option<Attribution>;

    /// A map stores layers as trait objects. This method can be used to convert
    /// the trait object into the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// A map stores layers as trait objects. This method can be used to convert
    /// the trait object into the concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Layer + 'static> Layer for Arc<RwLock<T>> {
    fn prepare(&self, view: &MapView) {
        self.read().prepare(view)
    }

    fn attribution(&self) -> Option<Attribution> {
        self.read().attribution()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
