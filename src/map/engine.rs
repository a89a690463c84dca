//! Map engine capability
//!
//! Everything the heatmap needs from a map renderer. The browser frontend
//! implements this over Mapbox GL JS; tests use a recording engine.

use super::error::MapResult;
use super::geojson::FeatureCollection;
use super::style::{HeatmapLayer, MapOptions};
use crate::data::LngLat;

/// Invoked once when a session finished loading its style
pub type ReadyCallback = Box<dyn FnOnce()>;

/// Capability surface of an external map renderer.
///
/// Sessions are opaque handles. They are cloned freely by the view, so a
/// handle should be a cheap reference to the underlying instance.
pub trait MapEngine {
    /// Surface a session renders into
    type Container: Clone + 'static;

    /// Handle to a live map instance
    type Session: Clone + 'static;

    /// Configure the provider credentials used by subsequent sessions
    fn set_access_token(&self, token: &str) -> MapResult<()>;

    /// Construct a session in `container`
    fn create_session(
        &self,
        container: &Self::Container,
        options: &MapOptions,
    ) -> MapResult<Self::Session>;

    /// Register `callback` for the session's ready signal.
    ///
    /// May invoke the callback synchronously if the session is already ready.
    fn on_ready(&self, session: &Self::Session, callback: ReadyCallback) -> MapResult<()>;

    fn add_point_source(
        &self,
        session: &Self::Session,
        id: &str,
        collection: &FeatureCollection,
    ) -> MapResult<()>;

    fn add_heatmap_layer(&self, session: &Self::Session, layer: &HeatmapLayer) -> MapResult<()>;

    /// Add a marker with a plain-text popup
    fn add_marker(
        &self,
        session: &Self::Session,
        coordinates: LngLat,
        popup_text: &str,
    ) -> MapResult<()>;

    /// Add zoom/rotate controls
    fn add_navigation_control(&self, session: &Self::Session) -> MapResult<()>;

    /// Dispose the session. Called exactly once per created session.
    fn destroy_session(&self, session: Self::Session);
}
