//! Pointer picking against the marker container.

use crate::scene::Scene;
use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// A press and release further apart than this is a drag, not a click.
pub const CLICK_SLOP_PX: f64 = 4.0;

/// Nearest marker under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the marker container's children.
    pub marker: usize,
    /// Ray parameter of the hit.
    pub distance: f32,
}

/// Client pixel coordinates (origin top-left) to NDC (origin centre, +Y up).
pub fn client_to_ndc(x: f64, y: f64, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (x as f32 / width.max(1.0)) * 2.0 - 1.0,
        -(y as f32 / height.max(1.0)) * 2.0 + 1.0,
    )
}

/// Casts a ray through `ndc` and returns the closest marker it crosses.
/// Earth and lights are not pickable.
pub fn pick_marker(scene: &Scene, ndc: Vec2) -> Option<Hit> {
    let ray = scene.camera.ray_through_ndc(ndc);
    let group = &scene.markers;

    group
        .children()
        .iter()
        .enumerate()
        .filter_map(|(i, m)| {
            ray.intersect_sphere(group.world_position(m), m.radius)
                .map(|distance| Hit { marker: i, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Turns raw left-button press/release pairs into clicks.
#[derive(Debug, Default)]
pub struct ClickTracker {
    cursor: Option<(f64, f64)>,
    pressed_at: Option<(f64, f64)>,
}

impl ClickTracker {
    /// Returns the click position when `event` completes a click.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<(f64, f64)> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x, position.y));
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.pressed_at = None;
                None
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.pressed_at = self.cursor;
                    None
                }
                ElementState::Released => {
                    let start = self.pressed_at.take()?;
                    let end = self.cursor?;
                    let moved = ((end.0 - start.0).powi(2) + (end.1 - start.1).powi(2)).sqrt();
                    (moved <= CLICK_SLOP_PX).then_some(end)
                }
            },
            _ => None,
        }
    }
}
