//! Crime Heatmap
//!
//! Renders the hotspot list as a density layer on an external map engine.
//!
//! - **engine**: capability surface a map renderer must provide
//! - **session**: RAII guard owning one engine instance
//! - **view**: token gate and load-status state machine
//! - **geojson**: point feature encoding for the hotspot source
//! - **style**: camera defaults, heatmap layer expressions, legend
//!
//! # Example
//!
//! ```rust,ignore
//! use crime_foresight::data::india_hotspots;
//! use crime_foresight::map::HeatmapView;
//! use crime_foresight::storage::MemoryStore;
//! use std::rc::Rc;
//!
//! let view = HeatmapView::new(Rc::new(engine), MemoryStore::new(), india_hotspots());
//! view.on_status_change(|status| println!("map is {}", status));
//! view.mount(container);
//! view.submit_token("pk.eyJ1...");
//! ```

pub mod engine;
pub mod error;
pub mod geojson;
pub mod session;
pub mod style;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use engine::{MapEngine, ReadyCallback};
pub use error::{MapError, MapResult, MAP_LOAD_ERROR};
pub use geojson::{Feature, FeatureCollection, Geometry, HotspotProperties};
pub use session::MapSession;
pub use style::{
    ColorStop, HeatmapLayer, LegendSwatch, MapOptions, DEFAULT_CENTER, DEFAULT_STYLE,
    DEFAULT_ZOOM, HEATMAP_LAYER_ID, HOTSPOT_SOURCE_ID, LEGEND,
};
pub use view::{HeatmapView, MapStatus};
