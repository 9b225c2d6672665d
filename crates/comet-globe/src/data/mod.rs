// src/data/mod.rs
//! GPU data for the globe viewer.
//!
//! This module provides:
//! - UV sphere generation for Earth and the marker glyphs.
//! - The vertex, instance and uniform layouts shared with the shaders.

pub mod mesh;
pub mod types;

// Re-export commonly used types for convenience.
pub use self::mesh::{uv_sphere, SphereMesh};
pub use self::types::{EarthUniform, MarkerInstance, MarkerUniform, MeshVertex};
