use crate::foundation::core::Vec2;

const KERNEL: [f64; 3] = [0.25, 0.5, 0.25];

/// Run `passes` of a 3-tap kernel around a closed ring, in place.
///
/// Neighbours wrap, so index 0 blends with index `n - 1`.
pub fn smooth_circular(values: &mut [Vec2], passes: u32, scratch: &mut Vec<Vec2>) {
    let n = values.len();
    if passes == 0 || n < 3 {
        return;
    }
    scratch.clear();
    scratch.resize(n, Vec2::ZERO);
    for _ in 0..passes {
        for i in 0..n {
            let prev = values[(i + n - 1) % n];
            let next = values[(i + 1) % n];
            scratch[i] = prev * KERNEL[0] + values[i] * KERNEL[1] + next * KERNEL[2];
        }
        values.copy_from_slice(scratch);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/smooth.rs"]
mod tests;
