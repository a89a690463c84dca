//! Mapbox GL JS bindings
//!
//! Imports the handful of `mapboxgl` classes the heatmap uses and exposes
//! them through the core [`MapEngine`] capability. The library itself is
//! loaded by `index.html`.

use crime_foresight::map::{
    FeatureCollection, HeatmapLayer, MapEngine, MapError, MapOptions, MapResult, ReadyCallback,
};
use crime_foresight::LngLat;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    #[derive(Clone, Debug)]
    pub type MapboxMap;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    pub fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method)]
    pub fn once(this: &MapboxMap, event: &str, listener: &Function);

    #[wasm_bindgen(method, catch, js_name = addSource)]
    pub fn add_source(this: &MapboxMap, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer(this: &MapboxMap, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addControl)]
    pub fn add_control(
        this: &MapboxMap,
        control: &NavigationControl,
        position: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapboxMap);

    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new() -> NavigationControl;

    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
    pub fn new(options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Marker, lng_lat: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = setPopup)]
    pub fn set_popup(this: &Marker, popup: &Popup) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &MapboxMap) -> Marker;

    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Popup;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
    pub fn new(options: &JsValue) -> Result<Popup, JsValue>;

    #[wasm_bindgen(method, js_name = setText)]
    pub fn set_text(this: &Popup, text: &str) -> Popup;
}

const MARKER_COLOR: &str = "#ef4444";

/// [`MapEngine`] backed by the global `mapboxgl` object
#[derive(Debug, Default)]
pub struct MapboxEngine;

impl MapEngine for MapboxEngine {
    type Container = web_sys::HtmlElement;
    type Session = MapboxMap;

    fn set_access_token(&self, token: &str) -> MapResult<()> {
        let namespace = Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))
            .map_err(js_error)?;
        if namespace.is_undefined() {
            return Err(MapError::Engine("mapbox-gl is not loaded".to_string()));
        }
        Reflect::set(&namespace, &JsValue::from_str("accessToken"), &JsValue::from_str(token))
            .map_err(js_error)?;
        Ok(())
    }

    fn create_session(
        &self,
        container: &web_sys::HtmlElement,
        options: &MapOptions,
    ) -> MapResult<MapboxMap> {
        let opts = Object::new();
        set(&opts, "container", container)?;
        set(&opts, "style", &JsValue::from_str(&options.style))?;
        set(&opts, "center", &lng_lat(options.center))?;
        set(&opts, "zoom", &JsValue::from_f64(options.zoom))?;

        MapboxMap::new(&opts).map_err(js_error)
    }

    fn on_ready(&self, session: &MapboxMap, callback: ReadyCallback) -> MapResult<()> {
        let listener = Closure::once_into_js(move || callback());
        session.once("load", listener.unchecked_ref());
        Ok(())
    }

    fn add_point_source(
        &self,
        session: &MapboxMap,
        id: &str,
        collection: &FeatureCollection,
    ) -> MapResult<()> {
        let source = to_js(&serde_json::json!({
            "type": "geojson",
            "data": collection,
        }))?;
        session.add_source(id, &source).map_err(js_error)
    }

    fn add_heatmap_layer(&self, session: &MapboxMap, layer: &HeatmapLayer) -> MapResult<()> {
        session.add_layer(&to_js(&layer.to_style())?).map_err(js_error)
    }

    fn add_marker(&self, session: &MapboxMap, coordinates: LngLat, popup_text: &str) -> MapResult<()> {
        let popup = Popup::new(&to_js(&serde_json::json!({ "offset": 25 }))?)
            .map_err(js_error)?
            .set_text(popup_text);

        Marker::new(&to_js(&serde_json::json!({ "color": MARKER_COLOR }))?)
            .map_err(js_error)?
            .set_lng_lat(&lng_lat(coordinates))
            .set_popup(&popup)
            .add_to(session);
        Ok(())
    }

    fn add_navigation_control(&self, session: &MapboxMap) -> MapResult<()> {
        session
            .add_control(&NavigationControl::new(), "top-right")
            .map_err(js_error)
    }

    fn destroy_session(&self, session: MapboxMap) {
        session.remove();
    }
}

fn lng_lat(coordinates: LngLat) -> Array {
    Array::of2(&coordinates.lng.into(), &coordinates.lat.into())
}

fn set(target: &Object, key: &str, value: &JsValue) -> MapResult<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_error)
}

/// Convert through JSON; style expressions are plain JSON
fn to_js(value: &serde_json::Value) -> MapResult<JsValue> {
    let raw = serde_json::to_string(value)?;
    js_sys::JSON::parse(&raw).map_err(js_error)
}

fn js_error(err: JsValue) -> MapError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    MapError::Engine(message)
}
