//! Planar geometry: vectors, bounding boxes, circle colliders, and segments.
//!
//! Everything is `f64`.  The arena is small (hundreds to thousands of units
//! across) but collision resolution nudges agents by fractions of a
//! thousandth, and reproducible trajectories depend on that arithmetic being
//! as stable as the platform allows.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::{SwarmError, SwarmResult};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D point or displacement in arena coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians, counter-clockwise from +x).
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2-D cross product (z component of the 3-D cross product).
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).norm()
    }

    /// `self / |self|`.  Non-finite for the zero vector; callers that can
    /// see coincident points must check [`is_finite`](Self::is_finite).
    #[inline]
    pub fn normalized(self) -> Vec2 {
        self * (1.0 / self.norm())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.  Used as the cheap broad-phase rejection test
/// before any distance is computed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The square that bounds a circle of `radius` around `center`.
    #[inline]
    pub fn around(center: Vec2, radius: f64) -> Self {
        Self {
            min: Vec2::new(center.x - radius, center.y - radius),
            max: Vec2::new(center.x + radius, center.y + radius),
        }
    }

    /// Overlap test on closed intervals: boxes that merely touch intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// `true` if the vertical extents of the two boxes overlap, regardless
    /// of their horizontal positions.
    #[inline]
    pub fn in_y_range(&self, other: &Aabb) -> bool {
        self.min.y <= other.max.y && other.min.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

// ── CircleCollider ────────────────────────────────────────────────────────────

/// A solid disc used for agent bodies and cylinder goals.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleCollider {
    pub center: Vec2,
    pub radius: f64,
}

impl CircleCollider {
    #[inline]
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::around(self.center, self.radius)
    }

    #[inline]
    pub fn intersects(&self, other: &CircleCollider) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    /// Displacement that moves `self` out of `other`, or `None` when the two
    /// discs do not overlap.
    ///
    /// The push runs along the line from `other`'s center to `self`'s.  When
    /// the centers coincide there is no such line and the push goes along
    /// `+x`, which keeps the result deterministic.
    pub fn correction_against(&self, other: &CircleCollider) -> Option<Vec2> {
        let offset = self.center - other.center;
        let dist = offset.norm();
        let overlap = self.radius + other.radius - dist;
        if overlap <= 0.0 {
            return None;
        }
        let dir = if dist > 0.0 { offset * (1.0 / dist) } else { Vec2::new(1.0, 0.0) };
        Some(dir * overlap)
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// A line segment of non-zero length.
///
/// The length check happens here, once, so the projection in
/// [`closest_point`](Self::closest_point) can divide by the squared length
/// without a guard.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SegmentEnds"))]
pub struct Segment {
    a: Vec2,
    b: Vec2,
}

/// Unvalidated endpoints as they appear in a config file.  Deserializing a
/// [`Segment`] goes through [`Segment::new`] via this type.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SegmentEnds {
    a: Vec2,
    b: Vec2,
}

#[cfg(feature = "serde")]
impl TryFrom<SegmentEnds> for Segment {
    type Error = SwarmError;

    fn try_from(ends: SegmentEnds) -> SwarmResult<Self> {
        Segment::new(ends.a, ends.b)
    }
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> SwarmResult<Self> {
        if (b - a).norm_squared() == 0.0 {
            return Err(SwarmError::DegenerateSegment(a, b));
        }
        Ok(Self { a, b })
    }

    #[inline]
    pub fn a(&self) -> Vec2 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Vec2 {
        self.b
    }

    /// Point on the segment nearest to `p`.
    ///
    /// Parametrises the segment as `a + u·(b − a)`, projects `p` onto the
    /// infinite line, and clamps `u` to `[0, 1]`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let d = self.b - self.a;
        let u = ((p - self.a).dot(d) / d.norm_squared()).clamp(0.0, 1.0);
        self.a + d * u
    }

    #[inline]
    pub fn distance_to(&self, p: Vec2) -> f64 {
        self.closest_point(p).distance(p)
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.a.x.min(self.b.x), self.a.y.min(self.b.y)),
            Vec2::new(self.a.x.max(self.b.x), self.a.y.max(self.b.y)),
        )
    }
}
