//! Typed model of the GeoJSON features displayed on the map.

use geojson::GeoJson;
use placemap_types::geo::GeoPoint2d;

use crate::error::Error;

/// Display properties of a single feature.
///
/// `thumbnail_filename` and `commons_link` are optional and normally co-occur:
/// a feature either has an image hosted on Wikimedia Commons or no image at
/// all. The model does not enforce the co-occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureProperties {
    /// Display name of the place.
    pub name: String,
    /// Position of the place.
    pub coordinates: GeoPoint2d,
    /// File name of the thumbnail image, relative to the static output folder.
    pub thumbnail_filename: Option<String>,
    /// URL of the Wikimedia Commons page the thumbnail belongs to.
    pub commons_link: Option<String>,
}

/// One place to be shown on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Stable identifier of the feature (a MusicBrainz id in the original
    /// dataset).
    pub key: String,
    /// Display properties of the feature.
    pub properties: FeatureProperties,
}

/// Read-only set of features, parsed from a GeoJSON document once and kept in
/// memory for the lifetime of the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection(Vec<Feature>);

impl FeatureCollection {
    /// Parses a collection from a GeoJSON string.
    ///
    /// Features that cannot be displayed (no identifier or no usable
    /// coordinates) are skipped with a warning instead of failing the whole
    /// collection. A document that is not a GeoJSON `FeatureCollection` is an
    /// error.
    pub fn from_geojson_str(json: &str) -> Result<Self, Error> {
        Self::from_geojson(json.parse::<GeoJson>()?)
    }

    /// Converts a parsed GeoJSON document into a collection.
    pub fn from_geojson(geojson: GeoJson) -> Result<Self, Error> {
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(Error::Decoding(
                "expected a GeoJSON FeatureCollection".to_string(),
            ));
        };

        let features = collection
            .features
            .into_iter()
            .filter_map(convert_feature)
            .collect();

        Ok(Self(features))
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection contains no features.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the features.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.0.iter()
    }

    /// Returns the feature with the given key, if present.
    pub fn get(&self, key: &str) -> Option<&Feature> {
        self.0.iter().find(|f| f.key == key)
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn convert_feature(feature: geojson::Feature) -> Option<Feature> {
    let Some(key) = feature_key(&feature) else {
        log::warn!("Skipping a feature without a key");
        return None;
    };

    let properties = feature.properties.unwrap_or_default();

    let Some(coordinates) = coordinates(&properties, feature.geometry.as_ref()) else {
        log::warn!("Skipping feature {key}: no usable coordinates");
        return None;
    };

    let name = properties
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    Some(Feature {
        key,
        properties: FeatureProperties {
            name,
            coordinates,
            thumbnail_filename: string_property(&properties, "thumbnail_filename"),
            commons_link: string_property(&properties, "commons_link"),
        },
    })
}

/// The data generator writes the identifier into a top-level `key` member;
/// the standard GeoJSON `id` member is accepted as a fallback.
fn feature_key(feature: &geojson::Feature) -> Option<String> {
    if let Some(key) = feature
        .foreign_members
        .as_ref()
        .and_then(|members| members.get("key"))
        .and_then(|v| v.as_str())
    {
        return Some(key.to_string());
    }

    match &feature.id {
        Some(geojson::feature::Id::String(id)) => Some(id.clone()),
        Some(geojson::feature::Id::Number(id)) => Some(id.to_string()),
        None => None,
    }
}

/// The `coordinates` property is a `[lat, lon]` pair. The point geometry of
/// the feature (GeoJSON order, `[lon, lat]`) is used when the property is
/// missing.
fn coordinates(
    properties: &geojson::JsonObject,
    geometry: Option<&geojson::Geometry>,
) -> Option<GeoPoint2d> {
    if let Some(value) = properties.get("coordinates") {
        let pair = value.as_array()?;
        let lat = pair.first()?.as_f64()?;
        let lon = pair.get(1)?.as_f64()?;
        return Some(GeoPoint2d::latlon(lat, lon));
    }

    match geometry.map(|geometry| &geometry.value) {
        Some(geojson::Value::Point(point)) => {
            let lon = *point.first()?;
            let lat = *point.get(1)?;
            Some(GeoPoint2d::latlon(lat, lon))
        }
        _ => None,
    }
}

fn string_property(properties: &geojson::JsonObject, name: &str) -> Option<String> {
    properties
        .get(name)
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use placemap_types::latlon;

    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "key": "8d610e51-64b4-4654-b8df-064b0fb7a9d9",
                "geometry": { "type": "Point", "coordinates": [10.919444, 50.683889] },
                "properties": {
                    "name": "Drei Gleichen",
                    "coordinates": [50.683889, 10.919444],
                    "thumbnail_filename": "drei_gleichen.jpg",
                    "commons_link": "https://commons.wikimedia.org/wiki/Category:Drei_Gleichen"
                }
            },
            {
                "type": "Feature",
                "key": "no-thumbnail",
                "geometry": { "type": "Point", "coordinates": [2.0, 1.0] },
                "properties": { "name": "X", "coordinates": [1.0, 2.0] }
            }
        ]
    }"#;

    #[test]
    fn parses_feature_collection() {
        let collection = FeatureCollection::from_geojson_str(COLLECTION).unwrap();
        assert_eq!(collection.len(), 2);

        let feature = collection.get("8d610e51-64b4-4654-b8df-064b0fb7a9d9").unwrap();
        assert_eq!(feature.properties.name, "Drei Gleichen");
        assert_eq!(feature.properties.coordinates, latlon!(50.683889, 10.919444));
        assert_eq!(
            feature.properties.thumbnail_filename.as_deref(),
            Some("drei_gleichen.jpg")
        );

        let feature = collection.get("no-thumbnail").unwrap();
        assert_eq!(feature.properties.thumbnail_filename, None);
        assert_eq!(feature.properties.commons_link, None);
    }

    #[test]
    fn coordinates_property_takes_precedence_over_geometry() {
        let collection = FeatureCollection::from_geojson_str(COLLECTION).unwrap();
        let feature = collection.get("no-thumbnail").unwrap();

        // The property is [lat, lon] while the geometry is [lon, lat]. Both
        // describe the same point here, so precedence only shows if the
        // property value was used as is.
        assert_eq!(feature.properties.coordinates, latlon!(1.0, 2.0));
    }

    #[test]
    fn geometry_is_used_when_coordinates_property_is_missing() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "key": "a",
                "geometry": { "type": "Point", "coordinates": [30.5, 50.45] },
                "properties": { "name": "Kyiv" }
            }]
        }"#;

        let collection = FeatureCollection::from_geojson_str(json).unwrap();
        let feature = collection.get("a").unwrap();
        assert_eq!(feature.properties.coordinates, latlon!(50.45, 30.5));
    }

    #[test]
    fn features_without_coordinates_are_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "key": "no-coordinates",
                    "geometry": null,
                    "properties": { "name": "Nowhere" }
                },
                {
                    "type": "Feature",
                    "key": "b",
                    "geometry": null,
                    "properties": { "name": "Somewhere", "coordinates": [1.0, 2.0] }
                }
            ]
        }"#;

        let collection = FeatureCollection::from_geojson_str(json).unwrap();
        assert_eq!(collection.len(), 1);
        assert!(collection.get("no-coordinates").is_none());
        assert!(collection.get("b").is_some());
    }

    #[test]
    fn features_without_key_are_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": null,
                "properties": { "name": "Anonymous", "coordinates": [1.0, 2.0] }
            }]
        }"#;

        let collection = FeatureCollection::from_geojson_str(json).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn standard_id_member_is_accepted_as_key() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": 7,
                "geometry": null,
                "properties": { "name": "Numbered", "coordinates": [1.0, 2.0] }
            }]
        }"#;

        let collection = FeatureCollection::from_geojson_str(json).unwrap();
        assert!(collection.get("7").is_some());
    }

    #[test]
    fn non_collection_document_is_an_error() {
        let json = r#"{ "type": "Point", "coordinates": [1.0, 2.0] }"#;
        assert_matches!(
            FeatureCollection::from_geojson_str(json),
            Err(Error::Decoding(_))
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert_matches!(
            FeatureCollection::from_geojson_str("not json"),
            Err(Error::Decoding(_))
        );
    }
}
