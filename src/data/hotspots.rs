//! Crime hotspot records
//!
//! Fixed point-intensity records fed to the heatmap. Each record is
//! independent and immutable for the lifetime of the program.

use serde::{Deserialize, Serialize};

/// Longitude/latitude pair in WGS84 degrees, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// GeoJSON position order: `[longitude, latitude]`
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// A single weighted point on the heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub coordinates: LngLat,
    /// Relative crime intensity in `[0, 1]`
    pub intensity: f64,
    pub name: String,
}

impl Hotspot {
    pub fn new(name: impl Into<String>, lng: f64, lat: f64, intensity: f64) -> Self {
        Self {
            coordinates: LngLat::new(lng, lat),
            intensity,
            name: name.into(),
        }
    }

    /// Intensity as a whole percentage, rounded half away from zero
    pub fn intensity_percent(&self) -> u32 {
        (self.intensity * 100.0).round().clamp(0.0, 100.0) as u32
    }

    /// Text shown in the marker popup
    pub fn popup_text(&self) -> String {
        format!("{}: {}% crime intensity", self.name, self.intensity_percent())
    }
}

/// City, longitude, latitude, intensity
const INDIA_HOTSPOTS: [(&str, f64, f64, f64); 10] = [
    ("Delhi", 77.2090, 28.6139, 0.9),
    ("Mumbai", 72.8777, 19.0760, 0.85),
    ("Kolkata", 88.3639, 22.5726, 0.75),
    ("Bengaluru", 77.5946, 12.9716, 0.7),
    ("Hyderabad", 78.4867, 17.3850, 0.65),
    ("Chennai", 80.2707, 13.0827, 0.6),
    ("Ahmedabad", 72.5714, 23.0225, 0.55),
    ("Pune", 73.8567, 18.5204, 0.5),
    ("Jaipur", 75.7873, 26.9124, 0.45),
    ("Lucknow", 80.9462, 26.8467, 0.4),
];

/// The hotspot list shipped with the dashboard: ten major Indian cities
pub fn india_hotspots() -> Vec<Hotspot> {
    INDIA_HOTSPOTS
        .iter()
        .map(|&(name, lng, lat, intensity)| Hotspot::new(name, lng, lat, intensity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_india_hotspots_shape() {
        let hotspots = india_hotspots();
        assert_eq!(hotspots.len(), 10);

        for spot in &hotspots {
            assert!((0.0..=1.0).contains(&spot.intensity), "{} out of range", spot.name);
            // Everything should sit inside India's bounding box
            assert!((68.0..=98.0).contains(&spot.coordinates.lng));
            assert!((6.0..=36.0).contains(&spot.coordinates.lat));
        }
    }

    #[test]
    fn test_intensity_percent_rounds() {
        assert_eq!(Hotspot::new("a", 0.0, 0.0, 0.856).intensity_percent(), 86);
        assert_eq!(Hotspot::new("b", 0.0, 0.0, 0.004).intensity_percent(), 0);
        assert_eq!(Hotspot::new("c", 0.0, 0.0, 1.0).intensity_percent(), 100);
    }

    #[test]
    fn test_popup_text() {
        let spot = Hotspot::new("Delhi", 77.2090, 28.6139, 0.9);
        assert_eq!(spot.popup_text(), "Delhi: 90% crime intensity");
    }

    #[test]
    fn test_lng_lat_order() {
        assert_eq!(LngLat::new(77.2, 28.6).to_array(), [77.2, 28.6]);
    }
}
