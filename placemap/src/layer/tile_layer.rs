//! Base layer of prerendered raster tiles.

use std::any::Any;

use crate::layer::attribution::Attribution;
use crate::layer::Layer;
use crate::view::MapView;

/// Index of a tile in the standard Web Mercator tile pyramid.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct TileIndex {
    /// X index.
    pub x: i32,
    /// Y index.
    pub y: i32,
    /// Z index.
    pub z: u32,
}

impl TileIndex {
    /// Create a new index instance.
    pub fn new(x: i32, y: i32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// Function that gives the URL of a tile by its index.
pub trait UrlSource: (Fn(&TileIndex) -> String) + Send + Sync {}
impl<T: Fn(&TileIndex) -> String + Send + Sync> UrlSource for T {}

/// Descriptor of a raster tile source used as a map base layer.
///
/// The layer does not download anything. It knows how to turn a tile index
/// into a URL, and the embedding renderer requests the tiles it needs for the
/// current view.
pub struct TileLayer {
    url_source: Box<dyn UrlSource>,
    attribution: Option<Attribution>,
    max_zoom: u32,
}

impl std::fmt::Debug for TileLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileLayer")
            .field("attribution", &self.attribution)
            .field("max_zoom", &self.max_zoom)
            .finish()
    }
}

impl TileLayer {
    /// Default maximum zoom level of tile sources.
    pub const DEFAULT_MAX_ZOOM: u32 = 19;

    /// Creates a new layer with the given tile URL source.
    pub fn new(url_source: impl UrlSource + 'static) -> Self {
        Self {
            url_source: Box::new(url_source),
            attribution: None,
            max_zoom: Self::DEFAULT_MAX_ZOOM,
        }
    }

    /// Sets the attribution of the layer.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Sets the maximum zoom level the source has tiles for.
    pub fn with_max_zoom(mut self, max_zoom: u32) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// The OpenStreetMap standard tile source.
    pub fn osm() -> Self {
        Self::new(|index: &TileIndex| {
            format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                index.z, index.x, index.y
            )
        })
        .with_attribution(Attribution::new(
            "© OpenStreetMap contributors",
            Some("https://www.openstreetmap.org/copyright"),
        ))
    }

    /// Esri world imagery tiles. Takes the place the proprietary hybrid
    /// satellite source had in the original site.
    pub fn esri_imagery() -> Self {
        Self::new(|index: &TileIndex| {
            format!(
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{}/{}/{}",
                index.z, index.y, index.x
            )
        })
        .with_attribution(Attribution::new("© Esri", Some("https://www.esri.com")))
        .with_max_zoom(18)
    }

    /// URL of the tile with the given index.
    pub fn tile_url(&self, index: &TileIndex) -> String {
        (self.url_source)(index)
    }

    /// Maximum zoom level the source has tiles for.
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }
}

impl Layer for TileLayer {
    fn prepare(&self, _view: &MapView) {
        // tile layers are static descriptors
    }

    fn attribution(&self) -> Option<Attribution> {
        self.attribution.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
