use crate::foundation::math::{Rng64, seed_from_str};

/// Deterministic, continuous 2-D noise in `[-1, 1]`.
pub trait NoiseField {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Noise that is zero everywhere. Useful for disabling breathing in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatNoise;

impl NoiseField for FlatNoise {
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        0.0
    }
}

const F2: f64 = 0.366_025_403_784_438_6; // (sqrt(3) - 1) / 2
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6

const GRAD2: [(f64, f64); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Seeded 2-D simplex noise.
#[derive(Clone)]
pub struct Simplex2 {
    perm: [u8; 512],
}

impl std::fmt::Debug for Simplex2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simplex2").finish_non_exhaustive()
    }
}

impl Simplex2 {
    pub fn new(seed: u64) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = Rng64::new(seed);
        for i in (1..table.len()).rev() {
            let j = rng.next_below(i as u64 + 1) as usize;
            table.swap(i, j);
        }
        let perm = std::array::from_fn(|i| table[i & 255]);
        Self { perm }
    }

    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(seed_from_str(seed))
    }

    fn grad_index(&self, i: i64, j: i64) -> usize {
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        usize::from(self.perm[ii + usize::from(self.perm[jj])]) % GRAD2.len()
    }
}

fn corner(gi: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let (gx, gy) = GRAD2[gi];
    let t2 = t * t;
    t2 * t2 * (gx * x + gy * y)
}

impl NoiseField for Simplex2 {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1): (i32, i32) = if x0 > y0 { (1, 0) } else { (0, 1) };
        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let i = i as i64;
        let j = j as i64;
        let n0 = corner(self.grad_index(i, j), x0, y0);
        let n1 = corner(self.grad_index(i + i64::from(i1), j + i64::from(j1)), x1, y1);
        let n2 = corner(self.grad_index(i + 1, j + 1), x2, y2);

        (70.0 * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/simplex.rs"]
mod tests;
