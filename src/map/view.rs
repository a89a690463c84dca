//! Heatmap View
//!
//! Credential gate and map lifecycle for the crime heatmap panel.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──submit(non-empty)──▶ Initializing ──ready──▶ Loaded
//!   ▲                              │
//!   └──submit("")                  └──error──▶ Failed ──submit──▶ Initializing
//! ```
//!
//! A session is only constructed once both a non-empty token and a mounted
//! container exist. Every transition that leaves a session behind drops its
//! [`MapSession`], which destroys the engine instance. Ready callbacks hold
//! a weak reference plus the generation they were registered for, so a
//! signal arriving after a token change or unmount does nothing.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::engine::{MapEngine, ReadyCallback};
use super::error::{MapResult, MAP_LOAD_ERROR};
use super::geojson::FeatureCollection;
use super::session::MapSession;
use super::style::{HeatmapLayer, MapOptions};
use crate::data::Hotspot;
use crate::storage::{load_token, save_token, KeyValueStore};

/// Load status reported to the surrounding UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapStatus {
    /// No token; the prompt is shown
    Idle,
    /// Session requested, waiting for the engine
    Initializing,
    Loaded,
    /// Carries the user-facing message
    Failed(String),
}

impl MapStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, MapStatus::Loaded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MapStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for MapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapStatus::Idle => write!(f, "idle"),
            MapStatus::Initializing => write!(f, "initializing"),
            MapStatus::Loaded => write!(f, "loaded"),
            MapStatus::Failed(_) => write!(f, "failed"),
        }
    }
}

type StatusListener = Rc<dyn Fn(&MapStatus)>;

struct ViewState<E: MapEngine, S> {
    engine: Rc<E>,
    store: S,
    hotspots: Vec<Hotspot>,
    options: MapOptions,
    layer: HeatmapLayer,
    token: String,
    container: Option<E::Container>,
    session: Option<MapSession<E>>,
    status: MapStatus,
    /// Bumped on every (re)initialization and on unmount
    generation: u64,
    disposed: bool,
    listener: Option<StatusListener>,
}

/// Heatmap panel state: the persisted access token plus at most one live
/// map session.
///
/// Cloning yields another handle to the same view.
pub struct HeatmapView<E: MapEngine, S: KeyValueStore> {
    state: Rc<RefCell<ViewState<E, S>>>,
}

impl<E: MapEngine, S: KeyValueStore> Clone for HeatmapView<E, S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<E, S> HeatmapView<E, S>
where
    E: MapEngine + 'static,
    S: KeyValueStore + 'static,
{
    /// Create the view, reading the persisted token from `store`
    pub fn new(engine: Rc<E>, store: S, hotspots: Vec<Hotspot>) -> Self {
        let token = load_token(&store);
        let status = if token.is_empty() {
            MapStatus::Idle
        } else {
            MapStatus::Initializing
        };

        Self {
            state: Rc::new(RefCell::new(ViewState {
                engine,
                store,
                hotspots,
                options: MapOptions::default(),
                layer: HeatmapLayer::default(),
                token,
                container: None,
                session: None,
                status,
                generation: 0,
                disposed: false,
                listener: None,
            })),
        }
    }

    /// Builder method: override camera and style
    pub fn with_options(self, options: MapOptions) -> Self {
        self.state.borrow_mut().options = options;
        self
    }

    /// Builder method: override the density layer
    pub fn with_layer(self, layer: HeatmapLayer) -> Self {
        self.state.borrow_mut().layer = layer;
        self
    }

    pub fn token(&self) -> String {
        self.state.borrow().token.clone()
    }

    /// True while the token prompt should be shown
    pub fn needs_token(&self) -> bool {
        self.state.borrow().token.is_empty()
    }

    pub fn status(&self) -> MapStatus {
        self.state.borrow().status.clone()
    }

    pub fn is_map_loaded(&self) -> bool {
        self.state.borrow().status.is_loaded()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().status.error().map(str::to_string)
    }

    pub fn has_session(&self) -> bool {
        self.state.borrow().session.is_some()
    }

    pub fn hotspot_count(&self) -> usize {
        self.state.borrow().hotspots.len()
    }

    /// Register the status listener, replacing any previous one.
    /// It is never called while the view is borrowed.
    pub fn on_status_change(&self, listener: impl Fn(&MapStatus) + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Attach the container surface; initializes immediately if a token exists
    pub fn mount(&self, container: E::Container) {
        let has_token = {
            let mut st = self.state.borrow_mut();
            if st.disposed {
                return;
            }
            st.container = Some(container);
            !st.token.is_empty()
        };

        if has_token {
            self.initialize();
        }
    }

    /// Accept `input` verbatim as the new token and re-initialize.
    ///
    /// An empty token releases any session and returns to the prompt.
    pub fn submit_token(&self, input: &str) {
        self.release_session();

        let should_initialize = {
            let mut st = self.state.borrow_mut();
            if st.disposed {
                return;
            }
            st.token = input.to_string();
            if st.token.is_empty() {
                st.generation += 1;
                st.status = MapStatus::Idle;
                false
            } else {
                st.status = MapStatus::Initializing;
                st.container.is_some()
            }
        };

        if should_initialize {
            self.initialize();
        } else {
            self.notify();
        }
    }

    /// Tear down for good: releases the session and ignores all later calls
    /// and ready signals. No status updates are published.
    pub fn unmount(&self) {
        let released = {
            let mut st = self.state.borrow_mut();
            if st.disposed {
                return;
            }
            st.disposed = true;
            st.generation += 1;
            st.container = None;
            st.listener = None;
            st.session.take()
        };

        if released.is_some() {
            tracing::debug!("Heatmap unmounted with a live session");
        }
        drop(released);
    }

    /// Drop the current session outside of the state borrow
    fn release_session(&self) {
        let released = self.state.borrow_mut().session.take();
        drop(released);
    }

    fn initialize(&self) {
        self.release_session();

        let opened = {
            let mut st = self.state.borrow_mut();
            st.generation += 1;
            st.status = MapStatus::Initializing;
            let generation = st.generation;

            let container = match st.container.clone() {
                Some(container) => container,
                None => return,
            };

            match open_session(&st.engine, &st.token, &container, &st.options) {
                Ok(session) => {
                    if let Err(e) = save_token(&st.store, &st.token) {
                        tracing::warn!(error = %e, "Could not persist map token");
                    }
                    let handle = session.handle().clone();
                    st.session = Some(session);
                    tracing::debug!(generation, "Map session created, waiting for ready signal");
                    Some((Rc::clone(&st.engine), handle, generation))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Map session construction failed");
                    st.status = MapStatus::Failed(MAP_LOAD_ERROR.to_string());
                    None
                }
            }
        };

        self.notify();

        let Some((engine, handle, generation)) = opened else {
            return;
        };

        let weak = Rc::downgrade(&self.state);
        let callback: ReadyCallback = Box::new(move || {
            if let Some(state) = weak.upgrade() {
                HeatmapView { state }.handle_ready(generation);
            }
        });

        if let Err(e) = engine.on_ready(&handle, callback) {
            tracing::warn!(error = %e, "Could not subscribe to map ready signal");
            self.fail(generation);
        }
    }

    fn handle_ready(&self, generation: u64) {
        let result = {
            let st = self.state.borrow();
            if st.disposed || st.generation != generation {
                tracing::debug!(generation, "Ignoring ready signal for a released session");
                return;
            }
            let Some(session) = st.session.as_ref() else {
                return;
            };
            attach_layers(&*st.engine, session.handle(), &st.hotspots, &st.layer)
        };

        match result {
            Ok(markers) => {
                self.state.borrow_mut().status = MapStatus::Loaded;
                tracing::info!(markers, "Crime heatmap loaded");
                self.notify();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to attach heatmap layers");
                self.fail(generation);
            }
        }
    }

    fn fail(&self, generation: u64) {
        let released = {
            let mut st = self.state.borrow_mut();
            if st.disposed || st.generation != generation {
                return;
            }
            st.status = MapStatus::Failed(MAP_LOAD_ERROR.to_string());
            st.session.take()
        };
        drop(released);
        self.notify();
    }

    fn notify(&self) {
        let (listener, status) = {
            let st = self.state.borrow();
            (st.listener.clone(), st.status.clone())
        };
        if let Some(listener) = listener {
            listener(&status);
        }
    }
}

impl<E: MapEngine, S: KeyValueStore> fmt::Debug for HeatmapView<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("HeatmapView")
            .field("status", &st.status)
            .field("has_token", &!st.token.is_empty())
            .field("session", &st.session)
            .field("generation", &st.generation)
            .finish()
    }
}

/// Steps 1 and 2: configure credentials and construct the session
fn open_session<E: MapEngine>(
    engine: &Rc<E>,
    token: &str,
    container: &E::Container,
    options: &MapOptions,
) -> MapResult<MapSession<E>> {
    engine.set_access_token(token)?;
    let handle = engine.create_session(container, options)?;
    Ok(MapSession::new(Rc::clone(engine), handle))
}

/// Step 3: source, density layer, one marker per hotspot, navigation.
/// Returns the number of markers added.
fn attach_layers<E: MapEngine>(
    engine: &E,
    session: &E::Session,
    hotspots: &[Hotspot],
    layer: &HeatmapLayer,
) -> MapResult<usize> {
    let collection = FeatureCollection::from_hotspots(hotspots);
    engine.add_point_source(session, &layer.source, &collection)?;
    engine.add_heatmap_layer(session, layer)?;

    for spot in hotspots {
        engine.add_marker(session, spot.coordinates, &spot.popup_text())?;
    }

    engine.add_navigation_control(session)?;
    Ok(hotspots.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::india_hotspots;
    use crate::map::style::{HEATMAP_LAYER_ID, HOTSPOT_SOURCE_ID, LEGEND};
    use crate::map::testing::RecordingEngine;
    use crate::storage::{MemoryStore, TOKEN_STORAGE_KEY};

    type TestView = HeatmapView<RecordingEngine, MemoryStore>;

    fn setup(engine: RecordingEngine) -> (Rc<RecordingEngine>, MemoryStore, TestView) {
        let engine = Rc::new(engine);
        let store = MemoryStore::new();
        let view = HeatmapView::new(Rc::clone(&engine), store.clone(), india_hotspots());
        (engine, store, view)
    }

    fn record_statuses(view: &TestView) -> Rc<RefCell<Vec<MapStatus>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        view.on_status_change(move |status| sink.borrow_mut().push(status.clone()));
        seen
    }

    #[test]
    fn test_starts_idle_without_token() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());

        assert_eq!(view.status(), MapStatus::Idle);
        assert!(view.needs_token());
        assert!(!view.is_map_loaded());
        assert!(engine.created().is_empty());
    }

    #[test]
    fn test_empty_token_never_constructs_session() {
        let (engine, store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());

        view.submit_token("");

        assert_eq!(view.status(), MapStatus::Idle);
        assert!(engine.created().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_valid_token_loads() {
        let (engine, store, view) = setup(RecordingEngine::new());
        let statuses = record_statuses(&view);
        view.mount("map".to_string());

        view.submit_token("pk.valid");
        assert_eq!(view.status(), MapStatus::Initializing);
        assert_eq!(engine.token(), Some("pk.valid".to_string()));

        assert!(engine.fire_ready(1));

        assert_eq!(view.status(), MapStatus::Loaded);
        assert!(view.is_map_loaded());
        assert_eq!(view.error(), None);
        assert_eq!(LEGEND.len(), 3);
        assert_eq!(
            store.get(TOKEN_STORAGE_KEY).unwrap(),
            Some("pk.valid".to_string())
        );
        assert_eq!(
            *statuses.borrow(),
            vec![MapStatus::Initializing, MapStatus::Loaded]
        );
    }

    #[test]
    fn test_submit_before_mount_defers_construction() {
        let (engine, _store, view) = setup(RecordingEngine::new());

        view.submit_token("pk.valid");
        assert_eq!(view.status(), MapStatus::Initializing);
        assert!(engine.created().is_empty());

        view.mount("map".to_string());
        assert_eq!(engine.created(), vec![1]);
        engine.fire_ready(1);
        assert!(view.is_map_loaded());
    }

    #[test]
    fn test_bad_token_fails_with_fixed_message() {
        let (engine, store, view) = setup(RecordingEngine::new().rejecting("pk.bad"));
        view.mount("map".to_string());

        view.submit_token("pk.bad");

        assert_eq!(view.status(), MapStatus::Failed(MAP_LOAD_ERROR.to_string()));
        assert_eq!(view.error().as_deref(), Some(MAP_LOAD_ERROR));
        assert!(!view.is_map_loaded());
        assert!(!view.has_session());
        assert!(engine.live_sessions().is_empty());
        // Only successful initializations persist the token
        assert!(store.is_empty());
    }

    #[test]
    fn test_resubmit_after_failure_retries() {
        let (engine, _store, view) = setup(RecordingEngine::new().rejecting("pk.bad"));
        view.mount("map".to_string());

        view.submit_token("pk.bad");
        assert!(view.error().is_some());

        view.submit_token("pk.good");
        assert_eq!(view.status(), MapStatus::Initializing);
        assert_eq!(view.error(), None);

        engine.fire_ready(1);
        assert_eq!(view.status(), MapStatus::Loaded);
    }

    #[test]
    fn test_token_change_releases_previous_session_once() {
        let (engine, store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());
        view.submit_token("pk.first");
        engine.fire_ready(1);
        assert!(view.is_map_loaded());

        view.submit_token("pk.second");

        assert_eq!(engine.created(), vec![1, 2]);
        assert_eq!(engine.destroyed(), vec![1]);
        assert_eq!(engine.live_sessions(), vec![2]);
        assert!(!view.is_map_loaded());
        assert_eq!(
            store.get(TOKEN_STORAGE_KEY).unwrap(),
            Some("pk.second".to_string())
        );

        engine.fire_ready(2);
        assert!(view.is_map_loaded());
        assert_eq!(engine.destroyed(), vec![1]);
    }

    #[test]
    fn test_same_token_resubmission_reinitializes() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());
        view.submit_token("pk.valid");
        engine.fire_ready(1);

        view.submit_token("pk.valid");

        assert_eq!(view.status(), MapStatus::Initializing);
        assert_eq!(engine.destroyed(), vec![1]);
        assert_eq!(engine.live_sessions(), vec![2]);
    }

    #[test]
    fn test_stale_ready_signal_is_ignored() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());
        view.submit_token("pk.first");
        view.submit_token("pk.second");

        // Ready for the released first session arrives late
        assert!(engine.fire_ready(1));

        assert_eq!(view.status(), MapStatus::Initializing);
        assert!(engine.markers().is_empty());
        assert!(engine.layers().is_empty());
    }

    #[test]
    fn test_unmount_while_initializing() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        let statuses = record_statuses(&view);
        view.mount("map".to_string());
        view.submit_token("pk.valid");

        view.unmount();
        assert_eq!(engine.destroyed(), vec![1]);

        engine.fire_ready(1);
        view.submit_token("pk.other");

        assert_eq!(view.status(), MapStatus::Initializing);
        assert!(engine.markers().is_empty());
        assert_eq!(engine.created(), vec![1]);
        assert_eq!(*statuses.borrow(), vec![MapStatus::Initializing]);
    }

    #[test]
    fn test_unmount_while_loaded() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());
        view.submit_token("pk.valid");
        engine.fire_ready(1);

        view.unmount();
        view.unmount();

        assert_eq!(engine.destroyed(), vec![1]);
        assert!(engine.live_sessions().is_empty());
        assert!(!view.has_session());
    }

    #[test]
    fn test_dropping_last_handle_releases_session() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());
        view.submit_token("pk.valid");

        drop(view);

        assert_eq!(engine.destroyed(), vec![1]);
        // The pending callback only holds a weak reference
        assert!(engine.fire_ready(1));
    }

    #[test]
    fn test_markers_and_layers_registered() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());
        view.submit_token("pk.valid");
        engine.fire_ready(1);

        let hotspots = india_hotspots();
        let markers = engine.markers();
        assert_eq!(markers.len(), hotspots.len());
        assert_eq!(markers.len(), 10);

        for (marker, spot) in markers.iter().zip(&hotspots) {
            let percent = format!("{}%", (spot.intensity * 100.0).round() as u32);
            assert!(marker.popup_text.contains(&spot.name));
            assert!(marker.popup_text.contains(&percent));
            assert_eq!(marker.coordinates, spot.coordinates);
        }

        let layers = engine.layers();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].1.id, HEATMAP_LAYER_ID);

        let sources = engine.sources();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].1, HOTSPOT_SOURCE_ID);
        for (feature, spot) in sources[0].2.features.iter().zip(&hotspots) {
            assert_eq!(feature.properties.intensity, spot.intensity);
        }

        assert_eq!(engine.controls(), vec![1]);
    }

    #[test]
    fn test_custom_hotspot_list() {
        let engine = Rc::new(RecordingEngine::new());
        let hotspots = vec![
            Hotspot::new("North", 10.0, 50.0, 0.25),
            Hotspot::new("South", 10.0, 40.0, 0.5),
        ];
        let view = HeatmapView::new(Rc::clone(&engine), MemoryStore::new(), hotspots);
        view.mount("map".to_string());
        view.submit_token("pk.valid");
        engine.fire_ready(1);

        assert_eq!(view.hotspot_count(), 2);
        let texts: Vec<_> = engine.markers().into_iter().map(|m| m.popup_text).collect();
        assert_eq!(
            texts,
            vec!["North: 25% crime intensity", "South: 50% crime intensity"]
        );
    }

    #[test]
    fn test_layer_failure_releases_session() {
        let (engine, _store, view) = setup(RecordingEngine::new().failing_layers());
        view.mount("map".to_string());
        view.submit_token("pk.valid");

        engine.fire_ready(1);

        assert_eq!(view.error().as_deref(), Some(MAP_LOAD_ERROR));
        assert!(!view.is_map_loaded());
        assert_eq!(engine.destroyed(), vec![1]);
    }

    #[test]
    fn test_synchronous_ready_signal() {
        let (engine, _store, view) = setup(RecordingEngine::new().ready_immediately());
        view.mount("map".to_string());

        view.submit_token("pk.valid");

        assert!(view.is_map_loaded());
        assert_eq!(engine.markers().len(), 10);
    }

    #[test]
    fn test_persisted_token_initializes_on_mount() {
        let engine = Rc::new(RecordingEngine::new());
        let store = MemoryStore::new().with_entry(TOKEN_STORAGE_KEY, "pk.saved");
        let view = HeatmapView::new(Rc::clone(&engine), store, india_hotspots());

        assert!(!view.needs_token());
        assert_eq!(view.token(), "pk.saved");
        assert!(engine.created().is_empty());

        view.mount("map".to_string());
        assert_eq!(engine.token(), Some("pk.saved".to_string()));
        engine.fire_ready(1);
        assert!(view.is_map_loaded());
    }

    #[test]
    fn test_clearing_token_returns_to_prompt() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        view.mount("map".to_string());
        view.submit_token("pk.valid");
        engine.fire_ready(1);

        view.submit_token("");

        assert_eq!(view.status(), MapStatus::Idle);
        assert!(view.needs_token());
        assert!(engine.live_sessions().is_empty());
    }

    #[test]
    fn test_missing_container_fails() {
        let (engine, _store, view) = setup(RecordingEngine::new());
        view.mount(String::new());

        view.submit_token("pk.valid");

        assert_eq!(view.error().as_deref(), Some(MAP_LOAD_ERROR));
        assert!(engine.created().is_empty());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(MapStatus::Loaded.to_string(), "loaded");
        assert_eq!(MapStatus::Failed("x".into()).to_string(), "failed");
        assert_eq!(MapStatus::Failed("x".into()).error(), Some("x"));
    }
}
