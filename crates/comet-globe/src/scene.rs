//! The scene graph: camera, Earth, lights and the marker container.

use crate::{
    camera::Camera,
    markers::{build_marker, Marker},
};
use glam::{Mat4, Vec3};
use neo_catalog::{Record, RecordId};
use rand::Rng;

/// Earth spin per rendered frame (radians).
pub const EARTH_SPIN_PER_FRAME: f32 = 0.001;
/// Marker container spin per rendered frame (radians).
pub const MARKER_SPIN_PER_FRAME: f32 = 0.0005;

/// The reference sphere.
#[derive(Debug, Clone)]
pub struct Earth {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub rotation_y: f32,
}

impl Default for Earth {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 32,
            rotation_y: 0.0,
        }
    }
}

impl Earth {
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub point: PointLight,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: [1.0, 1.0, 1.0],
                intensity: 0.5,
            },
            point: PointLight {
                color: [1.0, 1.0, 1.0],
                intensity: 1.0,
                position: Vec3::new(5.0, 3.0, 5.0),
            },
        }
    }
}

/// Container for all markers. Children are replaced wholesale on rebuild.
#[derive(Debug, Default)]
pub struct MarkerGroup {
    pub rotation_y: f32,
    children: Vec<Marker>,
}

impl MarkerGroup {
    pub fn children(&self) -> &[Marker] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }

    #[cfg(test)]
    pub(crate) fn set_children(&mut self, children: Vec<Marker>) {
        self.children = children;
    }

    /// Marker centre after the container rotation.
    pub fn world_position(&self, marker: &Marker) -> Vec3 {
        self.transform().transform_point3(marker.position)
    }
}

pub struct Scene {
    pub camera: Camera,
    pub earth: Earth,
    pub lights: Lights,
    pub markers: MarkerGroup,
    generation: u64,
}

impl Scene {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::new(aspect),
            earth: Earth::default(),
            lights: Lights::default(),
            markers: MarkerGroup::default(),
            generation: 0,
        }
    }

    /// Replaces every marker with one freshly built marker per id, in order.
    /// Ids index into `records`; ids out of range are skipped.
    pub fn rebuild_markers<R, I>(&mut self, records: &[Record], ids: I, rng: &mut R)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = RecordId>,
    {
        self.markers.children.clear();

        for id in ids {
            match records.get(id) {
                Some(record) => self.markers.children.push(build_marker(record, id, rng)),
                None => log::warn!("Record {} is not in the record set; skipped", id),
            }
        }

        self.generation = self.generation.wrapping_add(1);
        log::debug!("Created {} markers", self.markers.len());
    }

    /// Bumped on every rebuild so GPU buffers know when to re-upload.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the continuous rotations by one frame.
    pub fn advance(&mut self) {
        self.earth.rotation_y += EARTH_SPIN_PER_FRAME;
        self.markers.rotation_y += MARKER_SPIN_PER_FRAME;
    }
}
