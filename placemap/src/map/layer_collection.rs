//! Collection of the overlay layers of a map.

use std::ops::{Index, IndexMut};

use crate::layer::Layer;

/// Collection of overlay layers.
///
/// Layers are kept in the order they were added, which is the order an
/// embedding renderer should draw them in. Since a map should be able to hold
/// anything implementing the [`Layer`] trait, the collection stores layers as
/// trait objects; use downcasting through `Any` to get a concrete layer type
/// back.
#[derive(Default)]
pub struct LayerCollection(Vec<Box<dyn Layer>>);

impl LayerCollection {
    /// Adds a layer to the end of the collection.
    pub fn push(&mut self, layer: impl Layer + 'static) {
        self.0.push(Box::new(layer));
    }

    /// Removes all layers from the collection.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Removes a layer at `index`, shifting all layers after it to the left
    /// and returning the removed layer.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Box<dyn Layer> {
        self.0.remove(index)
    }

    /// Number of layers in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no layers in the collection.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the layer at `index`, or `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&dyn Layer> {
        self.0.get(index).map(|layer| &**layer)
    }

    /// Iterates over the layers.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Layer> {
        self.0.iter().map(|layer| &**layer)
    }
}

impl Index<usize> for LayerCollection {
    type Output = dyn Layer;

    fn index(&self, index: usize) -> &Self::Output {
        &*self.0[index]
    }
}

impl IndexMut<usize> for LayerCollection {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut *self.0[index]
    }
}

impl From<Vec<Box<dyn Layer>>> for LayerCollection {
    fn from(layers: Vec<Box<dyn Layer>>) -> Self {
        Self(layers)
    }
}
