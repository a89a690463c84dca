//! GeoJSON point features
//!
//! The subset of GeoJSON the heatmap source needs: a collection of point
//! features carrying `intensity` and `name` properties.

use serde::{Deserialize, Serialize};

use crate::data::Hotspot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: HotspotProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// `[longitude, latitude]`
    Point { coordinates: [f64; 2] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotProperties {
    pub intensity: f64,
    pub name: String,
}

impl From<&Hotspot> for Feature {
    fn from(spot: &Hotspot) -> Self {
        Self {
            geometry: Geometry::Point {
                coordinates: spot.coordinates.to_array(),
            },
            properties: HotspotProperties {
                intensity: spot.intensity,
                name: spot.name.clone(),
            },
        }
    }
}

impl FeatureCollection {
    /// One point feature per hotspot, in input order
    pub fn from_hotspots(hotspots: &[Hotspot]) -> Self {
        Self {
            features: hotspots.iter().map(Feature::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
