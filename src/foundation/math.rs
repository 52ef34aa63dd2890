#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Hash a textual seed into a 64-bit RNG seed.
pub(crate) fn seed_from_str(seed: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(seed.as_bytes());
    h.finish()
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform integer in `0..bound` (`bound > 0`).
    pub(crate) fn next_below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Convert a per-frame blend constant calibrated at 60 Hz into the blend factor for `dt_s`.
///
/// `1 - (1 - k60)^(dt * 60)`. Result is in `[0, 1]` for `k60` in `[0, 1]` and `dt_s >= 0`.
pub fn frame_rate_blend(k60: f64, dt_s: f64) -> f64 {
    let k = k60.clamp(0.0, 1.0);
    let dt = dt_s.max(0.0);
    (1.0 - (1.0 - k).powf(dt * 60.0)).clamp(0.0, 1.0)
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
