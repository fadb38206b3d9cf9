//! Rays and triangles for surface queries

use crate::Vec3;

/// Parallel-ray rejection threshold for the triangle test
const PARALLEL_EPSILON: f32 = 1e-7;

/// A half-line starting at `origin`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray3 {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray3 {
    /// Create a ray; the direction is normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// A ray pointing straight down (-Y)
    pub fn down(origin: Vec3) -> Self {
        Self {
            origin,
            direction: Vec3::DOWN,
        }
    }

    /// Point at distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A world-space triangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Component-wise (min, max) of the vertices
    pub fn bounds(&self) -> (Vec3, Vec3) {
        (
            self.a.min_components(self.b).min_components(self.c),
            self.a.max_components(self.b).max_components(self.c),
        )
    }

    /// Möller–Trumbore intersection, double-sided
    ///
    /// Returns the distance along the ray to the hit, if any.
    pub fn intersect(&self, ray: &Ray3) -> Option<f32> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;
        let p = ray.direction.cross(edge2);
        let det = edge1.dot(p);

        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin - self.a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = ray.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        if t >= 0.0 {
            Some(t)
        } else {
            None
        }
    }
}
