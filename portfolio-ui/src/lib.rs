//! Browser layer for the portfolio site widgets.
//!
//! This crate provides:
//! - `js_bridge`: Google Charts pie chart rendering via `js_sys::eval()`
//! - `maps`: typed Google Maps bindings and the landmark map
//! - `http`: `gloo-net` wrappers for the backend endpoints
//! - `state`: reactive AppState with Dioxus Signals
//! - `actions`: the fetch-then-render operations behind each widget
//! - `components`: RSX components rendering the widget markup

pub mod actions;
pub mod components;
pub mod config;
pub mod http;
pub mod ids;
pub mod js_bridge;
pub mod maps;
pub mod state;
