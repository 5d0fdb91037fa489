use crate::rtweekend::random;
use embed_doc_image::embed_doc_image;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

/// A three-component vector of 64-bit floats. Used for points, directions and (through the
/// `Color`/`Point` aliases) for linear-RGB radiance, so arithmetic is deliberately componentwise
/// and un-opinionated about what the three numbers mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub e: [f64; 3],
}

/// A point in 3D space. Distinct in name only from `Vec3` - same representation, same ops.
pub type Point = Vec3;

/// Linear RGB radiance. Unbounded and possibly >1 while integrating; only clamped to `[0,1]`
/// when quantised to 8-bit output in the renderer.
pub type Color = Vec3;

impl Vec3 {
    pub fn new(e0: f64, e1: f64, e2: f64) -> Vec3 {
        Vec3 { e: [e0, e1, e2] }
    }

    pub fn length(&self) -> f64 {
        f64::sqrt(self.length_squared())
    }

    pub fn length_squared(&self) -> f64 {
        self.e[0] * self.e[0] + self.e[1] * self.e[1] + self.e[2] * self.e[2]
    }

    pub fn x(&self) -> f64 {
        self.e[0]
    }

    pub fn y(&self) -> f64 {
        self.e[1]
    }

    pub fn z(&self) -> f64 {
        self.e[2]
    }

    pub fn dot(&self, rhs: &Vec3) -> f64 {
        self.x() * rhs.x() + self.y() * rhs.y() + self.z() * rhs.z()
    }

    pub fn cross(&self, rhs: &Vec3) -> Vec3 {
        Vec3::new(
            self.e[1] * rhs.e[2] - self.e[2] * rhs.e[1],
            self.e[2] * rhs.e[0] - self.e[0] * rhs.e[2],
            self.e[0] * rhs.e[1] - self.e[1] * rhs.e[0],
        )
    }

    pub fn unit_vector(&self) -> Vec3 {
        *self / self.length()
    }

    /// If a randomly sampled scatter direction is exactly opposite the surface normal, the two
    /// sum to zero and later code divides by a zero-length vector, producing NaNs. Materials
    /// check this before using a sampled direction.
    pub fn near_zero(&self) -> bool {
        const S: f64 = 1e-8;
        f64::abs(self.e[0]) < S && f64::abs(self.e[1]) < S && f64::abs(self.e[2]) < S
    }

    pub fn random_vector(min: f64, max: f64) -> Vec3 {
        Vec3 {
            e: [random(min, max), random(min, max), random(min, max)],
        }
    }

    /// # Random points in the unit ball
    /// Rejection sampling: pick a random point in the cube `[-1,1]^3` and reject it if it falls
    /// outside the unit sphere. Used both for Lambertian scatter and for phase-function scatter
    /// in `Isotropic`.
    #[embed_doc_image("raybounces", "doc_images/light_ray_bounces.jpg")]
    pub fn random_in_unit_sphere() -> Vec3 {
        loop {
            let p = Self::random_vector(-1.0, 1.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// A point on the unit sphere itself (true Lambertian distribution), obtained by
    /// normalizing a point sampled in the unit ball.
    pub fn random_unit_vector() -> Vec3 {
        Self::random_in_unit_sphere().unit_vector()
    }

    pub fn random_in_hemisphere(normal: &Vec3) -> Vec3 {
        let in_unit_sphere = Self::random_in_unit_sphere();
        if in_unit_sphere.dot(normal) > 0.0 {
            in_unit_sphere
        } else {
            -in_unit_sphere
        }
    }

    /// Rejection sampling for a point on the unit disk (`z = 0`), used by the camera to jitter
    /// ray origins across the aperture for defocus blur.
    pub fn random_in_unit_disk() -> Vec3 {
        loop {
            let p = Vec3::new(random(-1.0, 1.0), random(-1.0, 1.0), 0.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// `v - 2(v.n)n`: mirror reflection of `v` about the plane with normal `n`.
    pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
        *v - 2.0 * v.dot(n) * n
    }

    /// Snell's-law refraction of unit vector `uv` across normal `n` with ratio `etai_over_etat`.
    /// Callers are responsible for checking total internal reflection first (see
    /// `materials::Dielectric`); this always returns a vector.
    pub fn refract(uv: &Vec3, n: &Vec3, etai_over_etat: f64) -> Vec3 {
        let cos_theta = f64::min(-uv.dot(n), 1.0);
        let r_out_perpendicular = etai_over_etat * (*uv + cos_theta * n);
        let r_out_parallel = -f64::sqrt(f64::abs(1.0 - r_out_perpendicular.length_squared())) * n;

        r_out_perpendicular + r_out_parallel
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.e[0] += rhs.e[0];
        self.e[1] += rhs.e[1];
        self.e[2] += rhs.e[2];
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.e[0] *= rhs;
        self.e[1] *= rhs;
        self.e[2] *= rhs;
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        self.e[0] /= rhs;
        self.e[1] /= rhs;
        self.e[2] /= rhs;
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;
    fn index(&self, index: usize) -> &Self::Output {
        &self.e[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.e[index]
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Vec3::new(-self.e[0], -self.e[1], -self.e[2])
    }
}

impl Neg for &Vec3 {
    type Output = Vec3;
    fn neg(self) -> Self::Output {
        Vec3::new(-self.e[0], -self.e[1], -self.e[2])
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z())
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Vec3::new(self.x() * rhs, self.y() * rhs, self.z() * rhs)
    }
}

impl Mul<&Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: &Vec3) -> Self::Output {
        *rhs * self
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::new(0.0, 0.0, 0.0)
    }
}

/// Clamp `v` to `[0, 1]`, gamma-correct by square root (gamma = 2.0) and quantise to a byte via
/// `floor(255.99 * c)`.
/// Shared by the renderer's per-pixel write and by the `(r,g,b)` conversion used in tests.
#[inline]
pub fn to_byte(linear: f64) -> u8 {
    let gamma_corrected = linear.max(0.0).sqrt();
    (255.99 * crate::rtweekend::clamp(gamma_corrected, 0.0, 1.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 5.5, 0.25);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn dot_distributes_over_addition() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        let c = Vec3::new(0.5, 1.5, -2.0);
        assert!(((a + b).dot(&c) - (a.dot(&c) + b.dot(&c))).abs() < 1e-10);
    }

    #[test]
    fn cross_is_anticommutative() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let cross = a.cross(&b);
        let reverse = b.cross(&a);
        assert_eq!(cross, -reverse);
    }

    #[test]
    fn unit_vector_has_unit_length() {
        let a = Vec3::new(3.0, -4.0, 12.0);
        assert!((a.unit_vector().length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn cross_product_is_perpendicular_to_operands() {
        let a = Vec3::new(2.0, 1.0, -1.0);
        let b = Vec3::new(-3.0, 4.0, 2.0);
        let cross = a.cross(&b);
        assert!(cross.dot(&a).abs() < 1e-10);
        assert!(cross.dot(&b).abs() < 1e-10);
    }

    #[test]
    fn gamma_round_trip_mid_gray() {
        assert_eq!(to_byte(0.25), 127);
    }
}
