//! Analytic solids described by their indicator function.

use glam::Vec3;

/// A solid in 3D space.
///
/// Any `Fn(Vec3) -> bool` closure is a shape, so ad-hoc solids need no type.
pub trait Shape {
    /// Returns true if `p` belongs to the solid.
    fn contains(&self, p: Vec3) -> bool;
}

impl<F> Shape for F
where
    F: Fn(Vec3) -> bool,
{
    fn contains(&self, p: Vec3) -> bool {
        self(p)
    }
}

/// A ball of `radius` around `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Creates a sphere centered on the origin.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            radius,
        }
    }
}

impl Shape for Sphere {
    fn contains(&self, p: Vec3) -> bool {
        (p - self.center).length_squared() <= self.radius * self.radius
    }
}

/// A double cone along Z with apex at `center`.
///
/// The cross-section radius grows linearly with `|z|` and reaches `radius`
/// at `z = ±height`; the solid is clipped to `|z| <= height / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
}

impl Cone {
    /// Creates a cone centered on the origin.
    #[must_use]
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            radius,
            height,
        }
    }
}

impl Shape for Cone {
    fn contains(&self, p: Vec3) -> bool {
        let d = p - self.center;
        let zr = d.z * self.radius / self.height;
        let half = self.height / 2.0;
        d.x * d.x + d.y * d.y <= zr * zr && d.z <= half && d.z >= -half
    }
}

/// A solid cylinder along Z centered at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
}

impl Cylinder {
    /// Creates a cylinder centered on the origin.
    #[must_use]
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            radius,
            height,
        }
    }
}

impl Shape for Cylinder {
    fn contains(&self, p: Vec3) -> bool {
        let d = p - self.center;
        d.x * d.x + d.y * d.y <= self.radius * self.radius && d.z.abs() <= self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere() {
        let s = Sphere::new(2.0);
        assert!(s.contains(Vec3::ZERO));
        assert!(s.contains(Vec3::new(2.0, 0.0, 0.0)));
        assert!(!s.contains(Vec3::new(1.5, 1.5, 0.0)));

        let shifted = Sphere {
            center: Vec3::new(5.0, 0.0, 0.0),
            radius: 1.0,
        };
        assert!(shifted.contains(Vec3::new(5.5, 0.0, 0.0)));
        assert!(!shifted.contains(Vec3::ZERO));
    }

    #[test]
    fn test_cone_is_double() {
        let c = Cone::new(2.0, 4.0);
        // Radius at |z| = 2 is 1.
        assert!(c.contains(Vec3::new(1.0, 0.0, 2.0)));
        assert!(c.contains(Vec3::new(1.0, 0.0, -2.0)));
        assert!(!c.contains(Vec3::new(1.1, 0.0, 2.0)));
        assert!(!c.contains(Vec3::new(0.0, 0.0, 2.1)));
        // Only the apex is inside the z = 0 plane.
        assert!(c.contains(Vec3::ZERO));
        assert!(!c.contains(Vec3::new(0.1, 0.0, 0.0)));
    }

    #[test]
    fn test_cylinder() {
        let c = Cylinder::new(1.0, 2.0);
        assert!(c.contains(Vec3::new(0.0, 1.0, 1.0)));
        assert!(c.contains(Vec3::new(0.7, 0.7, -1.0)));
        assert!(!c.contains(Vec3::new(0.8, 0.8, 0.0)));
        assert!(!c.contains(Vec3::new(0.0, 0.0, 1.01)));
    }

    #[test]
    fn test_closure_shape() {
        let half_space = |p: Vec3| p.x >= 0.0;
        assert!(half_space.contains(Vec3::X));
        assert!(!half_space.contains(-Vec3::X));
    }
}
