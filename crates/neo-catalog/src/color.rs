//! Marker colours keyed on the record's `object_name`.

/// Colour for records without a usable name.
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Sum of the UTF-16 code units of `name`.
#[inline]
pub fn name_hash(name: &str) -> u64 {
    name.encode_utf16().map(u64::from).sum()
}

/// Hue in whole degrees, `[0, 360)`.
#[inline]
pub fn hue_for_name(name: &str) -> u32 {
    (name_hash(name) % 360) as u32
}

/// Fully saturated, medium-lightness sRGB colour for a name, or white.
pub fn color_for_name(name: Option<&str>) -> [f32; 3] {
    match name {
        Some(n) if !n.is_empty() => hsl_to_rgb(hue_for_name(n) as f32, 1.0, 0.5),
        _ => DEFAULT_COLOR,
    }
}

/// HSL (hue in degrees, saturation and lightness in `[0, 1]`) to RGB in `[0, 1]`.
pub fn hsl_to_rgb(hue_deg: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}
