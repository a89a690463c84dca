//! Crime Foresight Dashboard
//!
//! Crime statistics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Crime density heatmap over Mapbox GL JS, gated on a user-supplied token
//! - Trend and prediction charts drawn on canvas
//! - Category breakdown and recent incidents
//! - Collapsible sidebar for small screens
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! The heatmap state machine lives in the `crime-foresight` core crate; this
//! crate supplies the browser pieces (Mapbox bindings, `localStorage`).

pub mod app;
pub mod components;
pub mod mapbox;
pub mod pages;
pub mod storage;

pub use app::App;
