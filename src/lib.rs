//! # Crime Foresight
//!
//! Core of a crime statistics dashboard: a density heatmap over a fixed set
//! of hotspots, the page layout model, and the mock datasets behind the
//! chart widgets.
//!
//! ## Modules
//!
//! - [`data`]: Hotspot records and mock chart datasets
//! - [`map`]: Map engine capability, RAII sessions and the heatmap view
//! - [`storage`]: Key-value capability used to persist the access token
//! - [`layout`]: Dashboard title, navigation and sidebar state
//! - `config` / `server`: Static host for the compiled dashboard (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crime_foresight::{india_hotspots, HeatmapView, MemoryStore};
//! use std::rc::Rc;
//!
//! // `MyEngine` implements `MapEngine` for a concrete renderer
//! let view = HeatmapView::new(Rc::new(MyEngine::default()), MemoryStore::new(), india_hotspots());
//! view.mount(container);
//!
//! if view.needs_token() {
//!     view.submit_token("pk.eyJ1...");
//! }
//! ```

pub mod data;
pub mod layout;
pub mod map;
pub mod storage;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use data::{india_hotspots, Hotspot, LngLat};

pub use map::{
    FeatureCollection, HeatmapLayer, HeatmapView, MapEngine, MapError, MapOptions, MapResult,
    MapSession, MapStatus, LEGEND, MAP_LOAD_ERROR,
};

pub use storage::{KeyValueStore, MemoryStore, StorageError, StorageResult, TOKEN_STORAGE_KEY};

pub use layout::{SidebarState, DASHBOARD_TITLE, NAV_ITEMS};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};

#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};
