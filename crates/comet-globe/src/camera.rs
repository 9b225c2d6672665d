use crate::math::{cartesian_to_spherical, spherical_to_cartesian};
use glam::{Mat4, Vec2, Vec3};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Keeps the orbit off the poles, where the look-at basis degenerates.
const POLAR_EPS: f32 = 1e-4;

/// A ray in world space. `dir` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Distance along the ray to the first surface point of a sphere, if any.
    /// Hits behind the origin are ignored.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }

        let s = disc.sqrt();
        let (near, far) = (-b - s, -b + s);
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Perspective camera orbiting a target point.
#[derive(Debug, Clone)]
pub struct Camera {
    // --- Orbital Parameters (Primary State) ---
    /// The point the camera looks at and orbits around.
    pub target: Vec3,
    /// Distance from the camera to the target.
    pub distance: f32,
    /// Angle from the +Y axis (radians).
    pub polar_rad: f32,
    /// Angle around +Y, zero on +Z (radians).
    pub azimuth_rad: f32,

    // --- Projection ---
    pub fov_y_rad: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    /// Derived from the orbital parameters by `update()`.
    position: Vec3,
}

impl Camera {
    pub const FOV_Y_DEG: f32 = 75.0;
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 1000.0;
    pub const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

    /// A camera at `(0, 0, 5)` looking at the origin.
    pub fn new(aspect: f32) -> Self {
        Self::looking_at(Self::START_POSITION, Vec3::ZERO, aspect)
    }

    pub fn looking_at(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        let (distance, polar_rad, azimuth_rad) = cartesian_to_spherical(eye - target);

        let mut camera = Self {
            target,
            distance,
            polar_rad,
            azimuth_rad,
            fov_y_rad: Self::FOV_Y_DEG.to_radians(),
            aspect,
            near: Self::NEAR,
            far: Self::FAR,
            position: eye,
        };

        camera.update();
        camera
    }

    /// Recomputes the eye position from the orbital parameters. Must be called
    /// after any of them change.
    pub fn update(&mut self) {
        self.polar_rad = self
            .polar_rad
            .clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);
        self.position =
            self.target + spherical_to_cartesian(self.distance, self.polar_rad, self.azimuth_rad);
    }

    /// Updates the aspect ratio after a resize. Zero-sized windows are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Right-handed projection with depth in `[0, 1]`, as wgpu expects.
    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_rad, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.proj() * self.view()
    }

    /// Normalized device coordinates of a world point (`z` is depth).
    pub fn world_to_ndc(&self, p: Vec3) -> Vec3 {
        self.view_proj().project_point3(p)
    }

    /// Ray from the eye through a point in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let through = inv.project_point3(ndc.extend(0.5));
        Ray {
            origin: self.position,
            dir: (through - self.position).normalize(),
        }
    }
}

/// Orbit controls with damping: left-drag rotates, the wheel zooms.
///
/// Input only accumulates pending deltas; `update()` applies a fraction of them
/// to the camera every frame so motion eases out.
pub struct CameraController {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,

    mouse_down: bool,
    last_mouse: Option<(f64, f64)>,
    pending_azimuth: f32,
    pending_polar: f32,
    pending_scale: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.25,
            min_distance: 1.5,
            max_distance: 10.0,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            mouse_down: false,
            last_mouse: None,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Handles window input. `viewport_height` is in physical pixels and
    /// scales drag distance to rotation angle.
    pub fn handle_event(&mut self, event: &WindowEvent, viewport_height: f32) {
        match event {
            WindowEvent::MouseInput { button, state, .. } => {
                if *button == MouseButton::Left {
                    self.mouse_down = *state == ElementState::Pressed;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_orbit((position.x, position.y), viewport_height);
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_down = false;
                self.last_mouse = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
                };

                self.handle_scroll(scroll);
            }
            _ => {}
        }
    }

    /// Positive delta = scroll up = zoom in.
    pub fn handle_scroll(&mut self, delta: f32) {
        let step = 0.95_f32.powf(self.zoom_speed);
        self.pending_scale *= step.powf(delta);
    }

    /// Queues a rotation for a drag of `(dx, dy)` pixels.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let full_turn = std::f32::consts::TAU * self.rotate_speed;
        self.pending_azimuth -= full_turn * dx / h;
        self.pending_polar -= full_turn * dy / h;
    }

    fn handle_cursor_orbit(&mut self, xy: (f64, f64), viewport_height: f32) {
        if let Some(last) = self.last_mouse {
            if self.mouse_down {
                let dx = (xy.0 - last.0) as f32;
                let dy = (xy.1 - last.1) as f32;
                self.rotate_by_pixels(dx, dy, viewport_height);
            }
        }
        self.last_mouse = Some(xy);
    }

    /// Applies pending motion to the camera. Called once per frame.
    pub fn update(&mut self, camera: &mut Camera) {
        if self.enable_damping {
            camera.azimuth_rad += self.pending_azimuth * self.damping_factor;
            camera.polar_rad += self.pending_polar * self.damping_factor;
        } else {
            camera.azimuth_rad += self.pending_azimuth;
            camera.polar_rad += self.pending_polar;
        }

        camera.distance =
            (camera.distance * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.pending_scale = 1.0;

        camera.update();

        if self.enable_damping {
            self.pending_azimuth *= 1.0 - self.damping_factor;
            self.pending_polar *= 1.0 - self.damping_factor;
        } else {
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_positive_z() {
        let cam = Camera::new(16.0 / 9.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
        assert!((cam.distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera::new(1.5);
        let ray = cam.ray_through_ndc(Vec2::ZERO);
        assert!(ray.dir.abs_diff_eq(-Vec3::Z, 1e-5));
        assert!(ray.origin.abs_diff_eq(cam.position(), 1e-6));
    }

    #[test]
    fn projection_round_trip() {
        let cam = Camera::new(4.0 / 3.0);
        let p = Vec3::new(0.4, -0.3, 1.2);
        let ndc = cam.world_to_ndc(p);
        assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));

        let ray = cam.ray_through_ndc(ndc.truncate());
        let t = (p - ray.origin).length();
        assert!(ray.at(t).abs_diff_eq(p, 1e-4));
    }

    #[test]
    fn sphere_intersection() {
        let ray = Ray { origin: Vec3::new(0.0, 0.0, 5.0), dir: -Vec3::Z };
        assert_eq!(ray.intersect_sphere(Vec3::ZERO, 1.0), Some(4.0));
        assert_eq!(ray.intersect_sphere(Vec3::new(0.0, 2.0, 0.0), 1.0), None);
        assert_eq!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 8.0), 1.0), None);
        // Origin inside the sphere reports the exit point.
        assert_eq!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0), Some(1.0));
    }

    #[test]
    fn damping_eases_rotation() {
        let mut cam = Camera::new(1.0);
        let mut ctl = CameraController::new();
        let start = cam.azimuth_rad;

        ctl.rotate_by_pixels(-100.0, 0.0, 800.0);
        let total = std::f32::consts::TAU * 100.0 / 800.0;

        ctl.update(&mut cam);
        let first = cam.azimuth_rad - start;
        assert!((first - total * 0.25).abs() < 1e-5);

        for _ in 0..200 {
            ctl.update(&mut cam);
        }
        assert!((cam.azimuth_rad - start - total).abs() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::new(1.0);
        let mut ctl = CameraController::new();

        ctl.handle_scroll(200.0);
        ctl.update(&mut cam);
        assert_eq!(cam.distance, 1.5);

        ctl.handle_scroll(-500.0);
        ctl.update(&mut cam);
        assert_eq!(cam.distance, 10.0);
    }

    #[test]
    fn aspect_tracks_viewport() {
        let mut cam = Camera::new(1.0);
        cam.set_viewport(1920, 1080);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        cam.set_viewport(0, 1080);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
