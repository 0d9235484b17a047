use super::Vec2;

/// 2D affine transform.
///
/// Stored as the first two rows of a 3x3 matrix acting on column vectors
/// `(x, y, 1)`:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
///
/// Composition is `parent_from_child = parent * child`: `rhs` applies first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    #[inline]
    pub const fn translate(offset: Vec2) -> Self {
        Self { tx: offset.x, ty: offset.y, ..Self::IDENTITY }
    }

    #[inline]
    pub const fn scale(factor: Vec2) -> Self {
        Self { a: factor.x, d: factor.y, ..Self::IDENTITY }
    }

    /// Rotation by `degrees`, clockwise on screen (+Y down).
    #[inline]
    pub fn rotate(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self { a: c, b: s, c: -s, d: c, tx: 0.0, ty: 0.0 }
    }

    /// Local transform of a node: scale first, then rotate, then translate.
    #[inline]
    pub fn from_parts(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self::translate(position).mul(Self::rotate(rotation)).mul(Self::scale(scale))
    }

    /// Compose transforms: `self * rhs`.
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        Self {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            tx: self.a * rhs.tx + self.c * rhs.ty + self.tx,
            ty: self.b * rhs.tx + self.d * rhs.ty + self.ty,
        }
    }

    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        Vec2::new(self.a * p.x + self.c * p.y + self.tx, self.b * p.x + self.d * p.y + self.ty)
    }

    /// Applies the linear part only (no translation). Used for handles/offsets.
    #[inline]
    pub fn transform_vector(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }
}
