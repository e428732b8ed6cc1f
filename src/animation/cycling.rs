//! Shape cycling - time-driven shape substitution
//!
//! Each cell picks a shape from the enabled pool with a function of the
//! clock and its coordinate alone, so the choice is reproducible and needs
//! no per-cell random state.

use crate::shapes::ShapeId;

/// Pick the shape a cell shows at `time`
///
/// ```text
/// seed  = x * 1000 + y * 100
/// phase = time * speed + seed * 0.1
/// index = floor(|sin(phase)| * N) mod N
/// ```
///
/// Returns `None` when the pool is empty.
pub fn choose_shape(time: f32, speed: f32, x: usize, y: usize, pool: &[ShapeId]) -> Option<ShapeId> {
    if pool.is_empty() {
        return None;
    }
    let n = pool.len();
    let seed = (x * 1000 + y * 100) as f32;
    let phase = time * speed + seed * 0.1;
    // |sin| == 1 lands exactly on N, hence the wrap
    let index = (phase.sin().abs() * n as f32).floor() as usize % n;
    Some(pool[index])
}
