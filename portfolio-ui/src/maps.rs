//! Google Maps bindings and the landmark map.
//!
//! The mapping library is loaded by the hosting page. Each landmark gets a
//! marker and an info window; clicks route through one shared `PopupSlot`
//! so only one info window is open at a time.

use portfolio_core::landmark::{LatLng, LANDMARKS, MAP_CENTER, MAP_ZOOM};
use portfolio_core::popup::{Popup, PopupSlot};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(catch, constructor, js_namespace = ["google", "maps"])]
    pub fn new(container: &web_sys::Element, options: &JsValue) -> Result<Map, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(catch, constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: &Map);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Marker, event: &str, handler: &js_sys::Function) -> JsValue;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(catch, constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> Result<InfoWindow, JsValue>;

    #[wasm_bindgen(method)]
    pub fn open(this: &InfoWindow, map: &Map, anchor: &Marker);

    #[wasm_bindgen(method)]
    pub fn close(this: &InfoWindow);
}

#[derive(Error, Debug)]
pub enum MapError {
    #[error("No browser document available")]
    NoDocument,

    #[error("Map container #{0} not found")]
    MissingContainer(String),

    #[error("Failed to convert map options: {0}")]
    Options(String),

    /// Thrown by the mapping library, e.g. when it is not loaded
    #[error("Google Maps call failed: {0}")]
    Js(String),
}

impl From<JsValue> for MapError {
    fn from(value: JsValue) -> Self {
        MapError::Js(format!("{:?}", value))
    }
}

#[derive(Serialize)]
struct MapOptions {
    center: LatLng,
    zoom: u32,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    position: LatLng,
    title: &'a str,
}

#[derive(Serialize)]
struct InfoWindowOptions<'a> {
    content: &'a str,
}

fn to_js<T: Serialize>(options: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(options).map_err(|e| MapError::Options(e.to_string()))
}

/// An info window anchored to its landmark's marker.
#[derive(Debug, Clone)]
pub struct LandmarkWindow {
    index: usize,
    window: InfoWindow,
    map: Map,
    marker: Marker,
}

impl Popup for LandmarkWindow {
    fn popup_id(&self) -> usize {
        self.index
    }

    fn open(&self) {
        self.window.open(&self.map, &self.marker);
    }

    fn close(&self) {
        self.window.close();
    }
}

/// Build the landmark map inside `#container_id`.
///
/// Marker click handlers are leaked so they stay alive for the page session.
pub fn init_map(container_id: &str) -> Result<(), MapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MapError::NoDocument)?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| MapError::MissingContainer(container_id.to_string()))?;

    let map = Map::new(
        &container,
        &to_js(&MapOptions {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
        })?,
    )?;

    let slot: Rc<RefCell<PopupSlot<LandmarkWindow>>> = Rc::new(RefCell::new(PopupSlot::new()));

    for (index, landmark) in LANDMARKS.iter().enumerate() {
        let marker = Marker::new(&to_js(&MarkerOptions {
            position: landmark.position,
            title: landmark.title,
        })?)?;
        marker.set_map(&map);

        let window = InfoWindow::new(&to_js(&InfoWindowOptions {
            content: landmark.description,
        })?)?;

        let popup = LandmarkWindow {
            index,
            window,
            map: map.clone(),
            marker: marker.clone(),
        };
        let slot = slot.clone();
        let on_click = Closure::wrap(Box::new(move || {
            slot.borrow_mut().show(popup.clone());
        }) as Box<dyn FnMut()>);
        marker.add_listener("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    log::info!("Landmark map ready with {} markers", LANDMARKS.len());
    Ok(())
}
