//! The site-list document
//!
//! A feature-collection-like JSON structure produced by the world export:
//! one point feature per site, with the icon reference, the popup markup
//! and (for sites with a rendered detail map) the overlay bounding box in
//! its properties. The collection is fetched once at startup and stays
//! immutable for the session.

use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Deserializer, Serialize};

/// Point geometry of a site feature, `[lon, lat]` coordinate order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SiteGeometry {
    Point { coordinates: [f64; 2] },
}

impl SiteGeometry {
    pub fn to_lat_lng(&self) -> LatLng {
        match self {
            SiteGeometry::Point { coordinates } => LatLng::new(coordinates[1], coordinates[0]),
        }
    }
}

/// Site ids arrive as JSON numbers or as numeric strings depending on the
/// exporter version; accept both.
fn de_site_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(id) => Ok(id),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteProperties {
    #[serde(deserialize_with = "de_site_id")]
    pub id: i64,
    /// Icon reference, an image path keyed by site kind
    pub img: String,
    pub name: Option<String>,
    /// Site kind as exported ("town", "fortress", ...)
    pub amenity: Option<String>,
    #[serde(rename = "popupContent")]
    pub popup_content: Option<String>,
    /// Detail overlay anchor, `[[south, west], [north, east]]`
    pub map_bounds: Option<[[f64; 2]; 2]>,
}

impl SiteProperties {
    pub fn detail_bounds(&self) -> Option<LatLngBounds> {
        self.map_bounds.map(LatLngBounds::from_corner_pairs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteFeature {
    pub geometry: SiteGeometry,
    pub properties: SiteProperties,
}

impl SiteFeature {
    pub fn position(&self) -> LatLng {
        self.geometry.to_lat_lng()
    }

    pub fn id(&self) -> i64 {
        self.properties.id
    }
}

/// The full fetched site list, in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteCollection {
    pub features: Vec<SiteFeature>,
}

impl SiteCollection {
    /// Parses a site collection from raw JSON text
    pub fn from_str(text: &str) -> crate::Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| crate::Error::ParseError(format!("Invalid site document: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Looks a site up by id. Linear scan in document order; ids are
    /// expected unique, the first match wins if they are not.
    pub fn find_by_id(&self, site_id: i64) -> Option<&SiteFeature> {
        self.features.iter().find(|f| f.properties.id == site_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteFeature> {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "id": "3",
                    "img": "/assets/icons/town.png",
                    "name": "Oakhold",
                    "amenity": "town",
                    "popupContent": "<b>Oakhold</b><br>Town",
                    "map_bounds": [[10.0, 20.0], [10.5, 20.5]]
                },
                "geometry": { "type": "Point", "coordinates": [20.25, 10.25] }
            },
            {
                "type": "Feature",
                "properties": {
                    "id": 7,
                    "img": "/assets/icons/cave.png"
                },
                "geometry": { "type": "Point", "coordinates": [-4.0, 61.0] }
            }
        ]
    }
    "#;

    #[test]
    fn test_parse_site_document() {
        let sites = SiteCollection::from_str(DOC).unwrap();
        assert_eq!(sites.len(), 2);

        let town = &sites.features[0];
        assert_eq!(town.id(), 3);
        assert_eq!(town.position(), LatLng::new(10.25, 20.25));
        assert_eq!(town.properties.name.as_deref(), Some("Oakhold"));
        assert!(town.properties.popup_content.is_some());
        assert_eq!(
            town.properties.detail_bounds(),
            Some(LatLngBounds::from_coords(10.0, 20.0, 10.5, 20.5))
        );

        let cave = &sites.features[1];
        assert_eq!(cave.id(), 7);
        assert!(cave.properties.popup_content.is_none());
        assert!(cave.properties.detail_bounds().is_none());
    }

    #[test]
    fn test_find_by_id_first_match_wins() {
        let mut sites = SiteCollection::from_str(DOC).unwrap();
        let mut dup = sites.features[1].clone();
        dup.properties.id = 3;
        dup.properties.img = "/assets/icons/shrine.png".to_string();
        sites.features.push(dup);

        let found = sites.find_by_id(3).unwrap();
        assert_eq!(found.properties.img, "/assets/icons/town.png");
    }

    #[test]
    fn test_find_missing_id() {
        let sites = SiteCollection::from_str(DOC).unwrap();
        assert!(sites.find_by_id(999).is_none());
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let result = SiteCollection::from_str("{\"features\": 12}");
        assert!(matches!(result, Err(crate::Error::ParseError(_))));
    }
}
