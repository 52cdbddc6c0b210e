use crate::math::Vec3;

use super::{Bounds, Edge};

/// Constant parameters of the simulated body.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BodyParams {
    /// Constant acceleration, NDC units per second squared.
    pub gravity: Vec3,

    /// Fraction of the axis velocity kept on a bounce.
    ///
    /// `1.0` is perfectly elastic, `0.0` stops the body on contact. Values above
    /// `1.0` are not clamped and add energy on every bounce.
    pub restitution: f32,

    /// Half the quad size in physical pixels.
    pub half_extent_px: f32,

    /// Walls the body collides with.
    pub bounds: Bounds,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -2.71, 0.0),
            restitution: 0.85,
            half_extent_px: 6.0,
            bounds: Bounds::all(),
        }
    }
}

/// Half extent of the body in NDC, per axis.
///
/// NDC spans 2 units across the framebuffer, so a pixel size converts as
/// `2 * px / framebuffer_px`. Must be rebuilt whenever the framebuffer resizes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Extents {
    pub x: f32,
    pub y: f32,
}

impl Extents {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts a pixel half extent for a `width` x `height` framebuffer.
    ///
    /// Zero dimensions are treated as one pixel. Each axis is capped at `1.0`
    /// so the permissible range never inverts.
    pub fn from_viewport(width: u32, height: u32, half_extent_px: f32) -> Self {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        Self {
            x: (2.0 * half_extent_px / w).min(1.0),
            y: (2.0 * half_extent_px / h).min(1.0),
        }
    }

    /// Lowest permitted y (floor contact).
    #[inline]
    pub fn floor(self) -> f32 {
        -1.0 + self.y
    }

    /// Highest permitted y (ceiling contact).
    #[inline]
    pub fn ceiling(self) -> f32 {
        1.0 - self.y
    }

    #[inline]
    pub fn left(self) -> f32 {
        -1.0 + self.x
    }

    #[inline]
    pub fn right(self) -> f32 {
        1.0 - self.x
    }

    /// Scale vector for the unit quad (`[-1, 1]^2`) so it covers the body.
    #[inline]
    pub fn scale(self) -> Vec3 {
        Vec3::new(self.x, self.y, 1.0)
    }
}

/// Point mass integrated with explicit Euler and bounced off the viewport walls.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Body {
    #[inline]
    pub const fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Advances the body by `dt` seconds and resolves wall contacts.
    ///
    /// Order: `velocity += gravity * dt`, `position += velocity * dt`, then each
    /// active edge of `params.bounds` in [`Edge::ALL`] order.
    ///
    /// A body at or past an edge is clamped exactly onto it. Its axis velocity
    /// is reflected as `v * -1 * restitution` only while it still points
    /// outward, so a clamped body moving back inside is left alone.
    ///
    /// `dt` is not validated; callers clamp it (see `time::FrameClock`).
    ///
    /// Returns the edges that reflected the body during this step.
    pub fn advance(&mut self, params: &BodyParams, extents: Extents, dt: f32) -> Bounds {
        self.velocity += params.gravity * dt;
        self.position += self.velocity * dt;

        let mut hit = Bounds::none();
        for edge in params.bounds.iter() {
            if self.resolve(edge, extents, params.restitution) {
                hit = hit.with(edge);
            }
        }
        hit
    }

    /// Value-returning form of [`advance`](Self::advance).
    pub fn advanced(mut self, params: &BodyParams, extents: Extents, dt: f32) -> Self {
        self.advance(params, extents, dt);
        self
    }

    fn resolve(&mut self, edge: Edge, extents: Extents, restitution: f32) -> bool {
        let (pos, vel, limit, outward_sign) = match edge {
            Edge::Floor => (&mut self.position.y, &mut self.velocity.y, extents.floor(), -1.0),
            Edge::Ceiling => (&mut self.position.y, &mut self.velocity.y, extents.ceiling(), 1.0),
            Edge::Left => (&mut self.position.x, &mut self.velocity.x, extents.left(), -1.0),
            Edge::Right => (&mut self.position.x, &mut self.velocity.x, extents.right(), 1.0),
        };

        // outward_sign * (pos - limit) >= 0 means at or past the edge.
        if outward_sign * (*pos - limit) < 0.0 {
            return false;
        }

        *pos = limit;
        if outward_sign * *vel > 0.0 {
            *vel = *vel * -1.0 * restitution;
            true
        } else {
            false
        }
    }
}
