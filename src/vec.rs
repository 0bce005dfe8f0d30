#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2([f64; 2]);

impl Vec2 {
    pub const ZERO: Self = Vec2([0.0, 0.0]);

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2([x, y])
    }
    pub fn x(self) -> f64 {
        self.0[0]
    }
    pub fn y(self) -> f64 {
        self.0[1]
    }
    pub fn dot(self, rhs: Self) -> f64 {
        self.x() * rhs.x() + self.y() * rhs.y()
    }
    /// z component of the 3d cross product, positive when `rhs` is
    /// counter-clockwise of `self` in a y-up frame
    pub fn cross(self, rhs: Self) -> f64 {
        self.x() * rhs.y() - self.y() * rhs.x()
    }
    pub fn mag_sq(self) -> f64 {
        self.dot(self)
    }
    pub fn mag(self) -> f64 {
        self.mag_sq().sqrt()
    }
    // a zero vector has no direction so it stays zero
    pub fn normalised(self) -> Self {
        let mag = self.mag();
        if mag == 0.0 {
            return Self::ZERO;
        }
        self / mag
    }
    pub fn is_zero(self) -> bool {
        self.mag_sq() == 0.0
    }
    /// unsigned angle between two vectors in degrees, `None` if either is zero
    pub fn angle_deg(self, rhs: Self) -> Option<f64> {
        let denom = self.mag() * rhs.mag();
        if denom == 0.0 {
            return None;
        }
        // rounding can push the ratio just outside [-1, 1]
        let cos = (self.dot(rhs) / denom).clamp(-1.0, 1.0);
        Some(cos.acos().to_degrees())
    }
}

use std::ops::*;

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec2([self.x() + rhs.x(), self.y() + rhs.y()])
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2([self.x() - rhs.x(), self.y() - rhs.y()])
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Vec2([-self.x(), -self.y()])
    }
}
impl<T: Into<f64>> Mul<T> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: T) -> Self::Output {
        let rhs = rhs.into();
        Vec2([self.x() * rhs, self.y() * rhs])
    }
}
impl<T: Into<f64>> Div<T> for Vec2 {
    type Output = Self;
    fn div(self, rhs: T) -> Self::Output {
        let rhs = rhs.into();
        Vec2([self.x() / rhs, self.y() / rhs])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_is_componentwise_difference() {
        let d = Vec2::new(5.0, 3.0) - Vec2::new(2.0, 1.0);
        assert_eq!(d, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn normalised_has_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalised();
        assert!((v.mag() - 1.0).abs() < 1e-12);
        assert!((v.x() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn normalised_zero_stays_zero() {
        let v = Vec2::ZERO.normalised();
        assert_eq!(v, Vec2::ZERO);
        assert!(!v.x().is_nan());
    }

    #[test]
    fn angle_between_perpendicular_vectors() {
        let a = Vec2::new(1.0, 0.0).angle_deg(Vec2::new(0.0, 2.0)).unwrap();
        assert!((a - 90.0).abs() < 1e-9);
    }

    #[test]
    fn angle_with_zero_vector_is_none() {
        assert_eq!(Vec2::new(1.0, 0.0).angle_deg(Vec2::ZERO), None);
    }

    #[test]
    fn angle_of_parallel_vectors_is_zero_not_nan() {
        let v = Vec2::new(0.1, 0.7);
        let a = v.angle_deg(v * 3.0).unwrap();
        assert!(a.abs() < 1e-6);
    }
}
