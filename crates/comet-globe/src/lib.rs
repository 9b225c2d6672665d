// src/lib.rs
//! Near-Earth comet globe viewer library.
//!
//! Renders Earth with one marker per fetched comet record, lets the user
//! inspect a marker by clicking it and rebuild the markers from an altitude
//! filter. Everything except the wgpu/egui front end runs without a GPU.

pub mod app;
pub mod camera;
pub mod config;
pub mod data;
pub mod filter;
pub mod globe;
pub mod markers;
pub mod math;
pub mod net;
pub mod picking;
pub mod presenter;
pub mod renderer;
pub mod scene;
pub mod ui;
