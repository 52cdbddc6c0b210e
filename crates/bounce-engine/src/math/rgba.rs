use bytemuck::{Pod, Zeroable};

/// Straight-alpha linear color without alpha, as stored in color ramp stops.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Attaches an alpha channel.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

/// Straight-alpha RGBA color.
///
/// `repr(C)` so it can be written directly into a uniform buffer as `vec4<f32>`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<Rgb> for Rgba {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.with_alpha(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_maps_extremes_exactly() {
        assert_eq!(Rgb::from_u8(0, 0, 255), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(Rgb::from_u8(255, 255, 0), Rgb::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn rgb_into_rgba_is_opaque() {
        let c: Rgba = Rgb::new(0.2, 0.4, 0.6).into();
        assert_eq!(c.a, 1.0);
        assert_eq!((c.r, c.g, c.b), (0.2, 0.4, 0.6));
    }

    #[test]
    fn rgba_is_four_packed_floats() {
        assert_eq!(std::mem::size_of::<Rgba>(), 16);
        let c = Rgba::new(0.1, 0.2, 0.3, 0.4);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&c));
        assert_eq!(floats, &[0.1, 0.2, 0.3, 0.4]);
    }
}
