//! Dashboard data
//!
//! Hotspot records for the heatmap and the static mock datasets used by
//! the chart widgets.

pub mod hotspots;
pub mod mock;

pub use hotspots::{india_hotspots, Hotspot, LngLat};
pub use mock::{
    category_share, latest_observed_prediction, top_category, CategorySlice, Incident,
    IncidentStatus, PredictionPoint, Severity, TrendPoint, CRIME_TREND, CRIME_TYPES,
    PREDICTIONS, RECENT_INCIDENTS,
};
