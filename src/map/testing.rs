//! Recording engine for unit tests

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use super::engine::{MapEngine, ReadyCallback};
use super::error::{MapError, MapResult};
use super::geojson::FeatureCollection;
use super::style::{HeatmapLayer, MapOptions};
use crate::data::LngLat;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMarker {
    pub session: u32,
    pub coordinates: LngLat,
    pub popup_text: String,
}

#[derive(Default)]
struct Log {
    token: Option<String>,
    next_id: u32,
    created: Vec<u32>,
    destroyed: Vec<u32>,
    pending_ready: BTreeMap<u32, ReadyCallback>,
    sources: Vec<(u32, String, FeatureCollection)>,
    layers: Vec<(u32, HeatmapLayer)>,
    markers: Vec<RecordedMarker>,
    controls: Vec<u32>,
}

/// Engine that records every call and holds ready callbacks until fired
#[derive(Default)]
pub struct RecordingEngine {
    log: RefCell<Log>,
    rejected_tokens: HashSet<String>,
    fail_layers: bool,
    ready_immediately: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session construction fails while this token is configured
    pub fn rejecting(mut self, token: &str) -> Self {
        self.rejected_tokens.insert(token.to_string());
        self
    }

    /// `add_heatmap_layer` fails
    pub fn failing_layers(mut self) -> Self {
        self.fail_layers = true;
        self
    }

    /// Ready callbacks run inside `on_ready`
    pub fn ready_immediately(mut self) -> Self {
        self.ready_immediately = true;
        self
    }

    /// Deliver the ready signal for `session`; false if none was pending
    pub fn fire_ready(&self, session: u32) -> bool {
        // Release the borrow before running the callback, it calls back in
        let callback = self.log.borrow_mut().pending_ready.remove(&session);
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn created(&self) -> Vec<u32> {
        self.log.borrow().created.clone()
    }

    pub fn destroyed(&self) -> Vec<u32> {
        self.log.borrow().destroyed.clone()
    }

    pub fn live_sessions(&self) -> Vec<u32> {
        let log = self.log.borrow();
        log.created
            .iter()
            .copied()
            .filter(|id| !log.destroyed.contains(id))
            .collect()
    }

    pub fn token(&self) -> Option<String> {
        self.log.borrow().token.clone()
    }

    pub fn markers(&self) -> Vec<RecordedMarker> {
        self.log.borrow().markers.clone()
    }

    pub fn sources(&self) -> Vec<(u32, String, FeatureCollection)> {
        self.log.borrow().sources.clone()
    }

    pub fn layers(&self) -> Vec<(u32, HeatmapLayer)> {
        self.log.borrow().layers.clone()
    }

    pub fn controls(&self) -> Vec<u32> {
        self.log.borrow().controls.clone()
    }
}

impl MapEngine for RecordingEngine {
    type Container = String;
    type Session = u32;

    fn set_access_token(&self, token: &str) -> MapResult<()> {
        self.log.borrow_mut().token = Some(token.to_string());
        Ok(())
    }

    fn create_session(&self, container: &String, _options: &MapOptions) -> MapResult<u32> {
        let mut log = self.log.borrow_mut();
        if container.is_empty() {
            return Err(MapError::MissingContainer);
        }
        if let Some(token) = log.token.as_ref().filter(|t| self.rejected_tokens.contains(*t)) {
            return Err(MapError::InvalidToken(token.clone()));
        }
        log.next_id += 1;
        let id = log.next_id;
        log.created.push(id);
        Ok(id)
    }

    fn on_ready(&self, session: &u32, callback: ReadyCallback) -> MapResult<()> {
        if self.ready_immediately {
            callback();
        } else {
            self.log.borrow_mut().pending_ready.insert(*session, callback);
        }
        Ok(())
    }

    fn add_point_source(
        &self,
        session: &u32,
        id: &str,
        collection: &FeatureCollection,
    ) -> MapResult<()> {
        self.log
            .borrow_mut()
            .sources
            .push((*session, id.to_string(), collection.clone()));
        Ok(())
    }

    fn add_heatmap_layer(&self, session: &u32, layer: &HeatmapLayer) -> MapResult<()> {
        if self.fail_layers {
            return Err(MapError::Engine("style not loaded".to_string()));
        }
        self.log.borrow_mut().layers.push((*session, layer.clone()));
        Ok(())
    }

    fn add_marker(&self, session: &u32, coordinates: LngLat, popup_text: &str) -> MapResult<()> {
        self.log.borrow_mut().markers.push(RecordedMarker {
            session: *session,
            coordinates,
            popup_text: popup_text.to_string(),
        });
        Ok(())
    }

    fn add_navigation_control(&self, session: &u32) -> MapResult<()> {
        self.log.borrow_mut().controls.push(*session);
        Ok(())
    }

    fn destroy_session(&self, session: u32) {
        // Pending ready callbacks are kept so tests can deliver stale signals
        self.log.borrow_mut().destroyed.push(session);
    }
}
