//! Controls change the state of the map based on user input.
//!
//! The only control at the moment is the [`BaseLayerSwitcher`], the model
//! behind the layer-selection widget of the UI.

use crate::error::Error;
use crate::layer::TileLayer;

/// Registry of the selectable base layers of a map.
///
/// Exactly one layer is active at any time. The UI lists the available names
/// with [`BaseLayerSwitcher::available`] and switches between them with
/// [`BaseLayerSwitcher::select`].
#[derive(Debug)]
pub struct BaseLayerSwitcher {
    entries: Vec<(String, TileLayer)>,
    active: usize,
}

impl BaseLayerSwitcher {
    /// Creates a new switcher.
    ///
    /// Returns an error if `entries` is empty, if `active` is out of bounds,
    /// or if two entries share a name.
    pub fn new(entries: Vec<(String, TileLayer)>, active: usize) -> Result<Self, Error> {
        if entries.is_empty() {
            return Err(Error::Configuration(
                "at least one base layer is required".to_string(),
            ));
        }
        if active >= entries.len() {
            return Err(Error::Configuration(format!(
                "active layer index {active} is out of bounds"
            )));
        }
        for (index, (name, _)) in entries.iter().enumerate() {
            if entries[..index].iter().any(|(other, _)| other == name) {
                return Err(Error::Configuration(format!(
                    "duplicate base layer name: {name}"
                )));
            }
        }

        Ok(Self { entries, active })
    }

    /// Names of the available base layers, in registration order.
    pub fn available(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Name of the active base layer.
    pub fn active_name(&self) -> &str {
        &self.entries[self.active].0
    }

    /// The active base layer.
    pub fn active(&self) -> &TileLayer {
        &self.entries[self.active].1
    }

    /// Makes the layer with the given name active.
    pub fn select(&mut self, name: &str) -> Result<(), Error> {
        match self.entries.iter().position(|(entry, _)| entry == name) {
            Some(index) => {
                self.active = index;
                log::debug!("Switched base layer to {name}");
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    }
}
