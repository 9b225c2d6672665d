//! GPU-side data layouts for the globe and marker pipelines.

use crate::markers::Marker;

/// One vertex of a UV sphere. Shared by the Earth mesh and the marker mesh.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Per-marker instance data. Must match `InstanceIn` in the marker shader.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct MarkerInstance {
    /// Centre in the marker container's frame.
    pub center: [f32; 3],
    /// Linear RGB.
    pub color: [f32; 3],
}

impl MarkerInstance {
    pub fn from_marker(marker: &Marker) -> Self {
        Self {
            center: marker.position.to_array(),
            color: marker.color.map(srgb_to_linear),
        }
    }
}

/// Uniforms of the Earth pass, std140.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EarthUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Earth's spin.
    pub model: [[f32; 4]; 4],
    pub light_pos: [f32; 3],
    pub ambient: f32,
    pub camera_pos: [f32; 3],
    pub light_intensity: f32,
}

/// Uniforms of the marker pass, std140.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerUniform {
    pub view_proj: [[f32; 4]; 4],
    /// The marker container's spin.
    pub model: [[f32; 4]; 4],
}

// Compile-time checks against the WGSL struct sizes.
const _: [(); 160] = [(); core::mem::size_of::<EarthUniform>()];
const _: [(); 128] = [(); core::mem::size_of::<MarkerUniform>()];
const _: [(); 32] = [(); core::mem::size_of::<MeshVertex>()];

/// sRGB-encoded channel to linear. The swapchain is sRGB, so shaders output
/// linear values.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((srgb_to_linear(0.5) - 0.214).abs() < 1e-3);
    }
}
