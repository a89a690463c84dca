//! Map Styling
//!
//! Camera defaults, the density layer definition and the legend swatches.
//! Expressions are emitted in the Mapbox GL style-spec JSON form so any
//! engine speaking that dialect can consume them unchanged.

use serde::Serialize;
use serde_json::{json, Value};

use crate::data::LngLat;

/// Dark base style
pub const DEFAULT_STYLE: &str = "mapbox://styles/mapbox/dark-v11";

/// Geographic center of India
pub const DEFAULT_CENTER: LngLat = LngLat::new(78.9629, 20.5937);

pub const DEFAULT_ZOOM: f64 = 4.0;

/// Source id the hotspot features are registered under
pub const HOTSPOT_SOURCE_ID: &str = "crime-hotspots";

/// Id of the density layer
pub const HEATMAP_LAYER_ID: &str = "crime-heat";

/// Session construction options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOptions {
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// A stop on the density color ramp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    /// Heatmap density in `[0, 1]`
    pub density: f64,
    pub color: String,
}

impl ColorStop {
    pub fn new(density: f64, color: impl Into<String>) -> Self {
        Self {
            density,
            color: color.into(),
        }
    }
}

/// Density layer drawn over the hotspot source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayer {
    pub id: String,
    pub source: String,
    /// Feature property driving each point's weight
    pub weight_property: String,
    /// Sorted by density
    pub color_ramp: Vec<ColorStop>,
    /// Influence radius in pixels
    pub radius: f64,
    pub opacity: f64,
}

impl Default for HeatmapLayer {
    fn default() -> Self {
        Self {
            id: HEATMAP_LAYER_ID.to_string(),
            source: HOTSPOT_SOURCE_ID.to_string(),
            weight_property: "intensity".to_string(),
            // transparent blue -> white -> red
            color_ramp: vec![
                ColorStop::new(0.0, "rgba(33,102,172,0)"),
                ColorStop::new(0.2, "rgb(103,169,207)"),
                ColorStop::new(0.4, "rgb(209,229,240)"),
                ColorStop::new(0.6, "rgb(255,255,255)"),
                ColorStop::new(0.8, "rgb(239,138,98)"),
                ColorStop::new(1.0, "rgb(178,24,43)"),
            ],
            radius: 30.0,
            opacity: 0.8,
        }
    }
}

impl HeatmapLayer {
    /// `heatmap-weight`: linear in the weight property, 0 -> 0 and 1 -> 1
    pub fn weight_expression(&self) -> Value {
        json!([
            "interpolate",
            ["linear"],
            ["get", self.weight_property],
            0, 0,
            1, 1
        ])
    }

    /// `heatmap-color`: interpolated over `heatmap-density`
    pub fn color_expression(&self) -> Value {
        let mut expr = vec![json!("interpolate"), json!(["linear"]), json!(["heatmap-density"])];
        for stop in &self.color_ramp {
            expr.push(json!(stop.density));
            expr.push(json!(stop.color));
        }
        Value::Array(expr)
    }

    /// Full layer object as accepted by `map.addLayer`
    pub fn to_style(&self) -> Value {
        json!({
            "id": self.id,
            "type": "heatmap",
            "source": self.source,
            "paint": {
                "heatmap-weight": self.weight_expression(),
                "heatmap-color": self.color_expression(),
                "heatmap-radius": self.radius,
                "heatmap-opacity": self.opacity,
            }
        })
    }
}

/// One legend entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendSwatch {
    pub label: &'static str,
    pub color: &'static str,
}

/// Legend shown next to the map
pub const LEGEND: [LegendSwatch; 3] = [
    LegendSwatch { label: "Low", color: "rgb(103,169,207)" },
    LegendSwatch { label: "Medium", color: "rgb(239,138,98)" },
    LegendSwatch { label: "High", color: "rgb(178,24,43)" },
];
