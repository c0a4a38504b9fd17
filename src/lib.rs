//! Table and chart viewer for temperature / humidity sensor readings.
//!
//! The data pipeline (`data`) is UI-free; `state::AppState` drives it and
//! `ui` renders the result with egui.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod i18n;
pub mod state;
pub mod ui;
