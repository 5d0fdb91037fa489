use crate::rtweekend::random_int;
use crate::{Point, Vec3};

/// # Perlin Noise
/// Gradient noise: unlike value noise, each of the 256 lattice points carries a random unit
/// vector rather than a random scalar, and the noise value at a point is the Hermite-smoothed
/// interpolation of the dot products between each corner's vector and the offset to that corner.
/// This avoids the blocky artifacts a naive value-noise lattice produces.
pub struct Perlin {
    ranvec: Vec<Vec3>,
    perm_x: Vec<i32>,
    perm_y: Vec<i32>,
    perm_z: Vec<i32>,
}

impl Perlin {
    const POINT_COUNT: i32 = 256;

    pub fn new() -> Perlin {
        let ranvec = (0..Self::POINT_COUNT)
            .map(|_| Vec3::random_vector(-1.0, 1.0).unit_vector())
            .collect();

        Perlin {
            ranvec,
            perm_x: Self::generate_perm(),
            perm_y: Self::generate_perm(),
            perm_z: Self::generate_perm(),
        }
    }

    /// The output of `noise` can be negative; callers that need `[0,1]` (the non-turbulent
    /// texture branch) remap it themselves rather than clamping here.
    pub fn noise(&self, p: &Point) -> f64 {
        let u = p.x() - p.x().floor();
        let v = p.y() - p.y().floor();
        let w = p.z() - p.z().floor();
        let i = p.x().floor() as i32;
        let j = p.y().floor() as i32;
        let k = p.z().floor() as i32;

        let mut c = [[[Vec3::default(); 2]; 2]; 2];

        for di in 0..2i32 {
            for dj in 0..2i32 {
                for dk in 0..2i32 {
                    let index = self.perm_x[((i + di) & 255) as usize]
                        ^ self.perm_y[((j + dj) & 255) as usize]
                        ^ self.perm_z[((k + dk) & 255) as usize];
                    c[di as usize][dj as usize][dk as usize] = self.ranvec[index as usize];
                }
            }
        }

        Self::perlin_interp(c, u, v, w)
    }

    /// Seven-octave sum of progressively scaled/shrunk noise; this is what gives the marble
    /// texture its veined look instead of plain banding.
    pub fn turbulence(&self, p: &Point, depth: u32) -> f64 {
        let mut accum = 0.0;
        let mut temp_p = *p;
        let mut weight = 1.0;

        for _ in 0..depth {
            accum += weight * self.noise(&temp_p);
            weight *= 0.5;
            temp_p *= 2.0;
        }

        accum.abs()
    }

    fn perlin_interp(c: [[[Vec3; 2]; 2]; 2], u: f64, v: f64, w: f64) -> f64 {
        let uu = u * u * (3.0 - 2.0 * u);
        let vv = v * v * (3.0 - 2.0 * v);
        let ww = w * w * (3.0 - 2.0 * w);
        let mut accum = 0.0;

        for (i, ci) in c.iter().enumerate() {
            for (j, cij) in ci.iter().enumerate() {
                for (k, cijk) in cij.iter().enumerate() {
                    let ii = i as f64;
                    let jj = j as f64;
                    let kk = k as f64;

                    let weight_v = Vec3::new(u - ii, v - jj, w - kk);

                    accum += (ii * uu + (1.0 - ii) * (1.0 - uu))
                        * (jj * vv + (1.0 - jj) * (1.0 - vv))
                        * (kk * ww + (1.0 - kk) * (1.0 - ww))
                        * cijk.dot(&weight_v);
                }
            }
        }

        accum
    }

    fn generate_perm() -> Vec<i32> {
        let mut p: Vec<i32> = (0..Self::POINT_COUNT).collect();
        Self::permute(&mut p);
        p
    }

    fn permute(p: &mut [i32]) {
        for i in (1..p.len()).rev() {
            let target = random_int(0, i as i32) as usize;
            p.swap(i, target);
        }
    }
}

impl Default for Perlin {
    fn default() -> Self {
        Perlin::new()
    }
}
