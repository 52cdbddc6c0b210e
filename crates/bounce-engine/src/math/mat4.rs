use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::Vec3;

/// 4x4 matrix, 16 scalars in column-major order.
///
/// Element `(row, col)` lives at `m[col * 4 + row]`, so the translation column
/// occupies indices 12, 13, 14. This is the layout WGSL expects for
/// `mat4x4<f32>`, and the struct is uploaded to uniform buffers unchanged.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    #[cfg(test)]
    const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn identity() -> Self {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        Self { m }
    }

    /// Identity with the translation column set to `v`.
    pub fn translation(v: Vec3) -> Self {
        let mut out = Self::identity();
        out.m[12] = v.x;
        out.m[13] = v.y;
        out.m[14] = v.z;
        out
    }

    /// Identity with the diagonal set to `v`.
    pub fn scaling(v: Vec3) -> Self {
        let mut out = Self::identity();
        out.m[0] = v.x;
        out.m[5] = v.y;
        out.m[10] = v.z;
        out
    }

    /// Column-major product `a * b`.
    ///
    /// Applied to a column vector, `b` acts first: `translation * scaling`
    /// scales the geometry and then moves it.
    pub fn multiply(a: &Mat4, b: &Mat4) -> Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = a.m[row] * b.m[col * 4]
                    + a.m[4 + row] * b.m[col * 4 + 1]
                    + a.m[8 + row] * b.m[col * 4 + 2]
                    + a.m[12 + row] * b.m[col * 4 + 3];
            }
        }
        Self { m: out }
    }

    #[cfg(test)]
    fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::multiply(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mat4 {
        let mut m = [0.0; 16];
        for (i, v) in m.iter_mut().enumerate() {
            *v = i as f32 + 1.0;
        }
        Mat4::from_cols_array(m)
    }

    /// Transforms a point with `w = 1`.
    fn apply(m: &Mat4, p: Vec3) -> Vec3 {
        let m = m.as_array();
        Vec3::new(
            m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
        )
    }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn identity_layout() {
        let m = Mat4::identity();
        for (i, v) in m.as_array().iter().enumerate() {
            let expected = if matches!(i, 0 | 5 | 10 | 15) { 1.0 } else { 0.0 };
            assert_eq!(*v, expected, "index {i}");
        }
    }

    #[test]
    fn translation_sets_column_three() {
        let m = Mat4::translation(Vec3::new(0.5, -0.25, 2.0));
        let a = m.as_array();
        assert_eq!(a[12], 0.5);
        assert_eq!(a[13], -0.25);
        assert_eq!(a[14], 2.0);
        assert_eq!(a[15], 1.0);
        assert_eq!(m.get(1, 3), -0.25);
    }

    #[test]
    fn scaling_sets_diagonal() {
        let m = Mat4::scaling(Vec3::new(2.0, 3.0, 4.0));
        let a = m.as_array();
        assert_eq!((a[0], a[5], a[10], a[15]), (2.0, 3.0, 4.0, 1.0));
        assert_eq!(a[12], 0.0);
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_neutral() {
        let v = Vec3::new(0.3, -0.7, 1.0);
        assert_eq!(Mat4::translation(v) * Mat4::identity(), Mat4::translation(v));
        assert_eq!(Mat4::identity() * Mat4::scaling(v), Mat4::scaling(v));
        assert_eq!(Mat4::identity() * sample(), sample());
        assert_eq!(sample() * Mat4::identity(), sample());
    }

    #[test]
    fn multiply_matches_row_times_column() {
        // sample() has (row, col) = col * 4 + row + 1.
        let p = sample() * sample();
        for row in 0..4 {
            for col in 0..4 {
                let mut expected = 0.0;
                for k in 0..4 {
                    expected += sample().get(row, k) * sample().get(k, col);
                }
                assert_eq!(p.get(row, col), expected, "({row}, {col})");
            }
        }
        assert_eq!(p.get(0, 0), 90.0);
    }

    #[test]
    fn multiply_is_not_commutative() {
        let t = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
        let s = Mat4::scaling(Vec3::new(2.0, 2.0, 2.0));

        let scale_then_move = apply(&(t * s), Vec3::new(1.0, 0.0, 0.0));
        let move_then_scale = apply(&(s * t), Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(scale_then_move, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(move_then_scale, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn mat4_is_sixteen_packed_floats() {
        assert_eq!(std::mem::size_of::<Mat4>(), 64);
        let m = sample();
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&m));
        assert_eq!(floats[12], 13.0);
    }
}
