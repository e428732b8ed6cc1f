//! Motion effects - Movement, Rotation, Pulse
//!
//! Each effect is a sine wave over the animation clock, phase-shifted by
//! the cell's grid coordinate so neighbouring cells move slightly out of
//! step and the grid ripples instead of moving as one block.

use serde::{Deserialize, Serialize};

use super::traits::{CellEffect, CellOffset, EffectChain};
use crate::params::GridParams;

/// Which size animation runs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AnimationType {
    Movement,
    Rotation,
    Scale,
    Combined,
}

impl AnimationType {
    pub fn all() -> &'static [AnimationType] {
        &[
            AnimationType::Movement,
            AnimationType::Rotation,
            AnimationType::Scale,
            AnimationType::Combined,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationType::Movement => "Movement",
            AnimationType::Rotation => "Rotation",
            AnimationType::Scale => "Scale",
            AnimationType::Combined => "Combined",
        }
    }
}

/// Positional wobble
///
/// ```text
/// dx = sin(t * frequency + x * 0.5) * amplitude
/// dy = cos(t * frequency + y * 0.5) * amplitude
/// ```
pub struct Movement {
    /// Displacement in cell units
    pub amplitude: f32,
    pub frequency: f32,
}

impl Movement {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self { amplitude, frequency }
    }
}

impl CellEffect for Movement {
    fn apply(&self, x: usize, y: usize, time: f32, offset: CellOffset) -> CellOffset {
        let base = time * self.frequency;
        CellOffset {
            dx: offset.dx + (base + x as f32 * 0.5).sin() * self.amplitude,
            dy: offset.dy + (base + y as f32 * 0.5).cos() * self.amplitude,
            ..offset
        }
    }

    fn name(&self) -> &str {
        "Movement"
    }
}

/// Rocking rotation
///
/// ```text
/// angle = sin(t * frequency + x * 0.3 + y * 0.3) * amplitude
/// ```
pub struct Rotation {
    /// Peak angle in radians
    pub amplitude: f32,
    pub frequency: f32,
}

impl Rotation {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self { amplitude, frequency }
    }
}

impl CellEffect for Rotation {
    fn apply(&self, x: usize, y: usize, time: f32, offset: CellOffset) -> CellOffset {
        let phase = time * self.frequency + x as f32 * 0.3 + y as f32 * 0.3;
        CellOffset {
            rotation: offset.rotation + phase.sin() * self.amplitude,
            ..offset
        }
    }

    fn name(&self) -> &str {
        "Rotation"
    }
}

/// Breathing scale
///
/// ```text
/// factor = 1 + sin(t * frequency + x * 0.5 + y * 0.5) * amplitude
/// ```
pub struct Pulse {
    pub amplitude: f32,
    pub frequency: f32,
}

impl Pulse {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self { amplitude, frequency }
    }
}

impl CellEffect for Pulse {
    fn apply(&self, x: usize, y: usize, time: f32, offset: CellOffset) -> CellOffset {
        let phase = time * self.frequency + x as f32 * 0.5 + y as f32 * 0.5;
        CellOffset {
            scale: offset.scale * (1.0 + phase.sin() * self.amplitude),
            ..offset
        }
    }

    fn name(&self) -> &str {
        "Pulse"
    }
}

/// Build the effect chain for the selected animation type
pub fn build_chain(params: &GridParams) -> EffectChain {
    let mut chain = EffectChain::new();
    let movement = || Movement::new(params.movement_amplitude, params.movement_frequency);
    let rotation = || Rotation::new(params.rotation_amplitude, params.rotation_frequency);
    let pulse = || Pulse::new(params.scale_amplitude, params.scale_frequency);

    match params.animation_type {
        AnimationType::Movement => {
            chain.add(movement());
        }
        AnimationType::Rotation => {
            chain.add(rotation());
        }
        AnimationType::Scale => {
            chain.add(pulse());
        }
        AnimationType::Combined => {
            chain.add(movement()).add(rotation()).add(pulse());
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_movement_phase_by_coordinate() {
        let movement = Movement::new(0.5, 1.0);
        let offset = movement.apply(0, 0, FRAC_PI_2, CellOffset::IDENTITY);
        assert!((offset.dx - 0.5).abs() < 1e-5);
        assert!(offset.dy.abs() < 1e-5);

        // x = 2 shifts the X phase by one radian
        let offset = movement.apply(2, 0, 0.0, CellOffset::IDENTITY);
        assert!((offset.dx - 1.0f32.sin() * 0.5).abs() < 1e-5);
        assert!((offset.dy - 0.5).abs() < 1e-5);
        assert_eq!(offset.rotation, 0.0);
        assert_eq!(offset.scale, 1.0);
    }

    #[test]
    fn test_rotation() {
        let rotation = Rotation::new(0.8, 2.0);
        let offset = rotation.apply(1, 2, 0.5, CellOffset::IDENTITY);
        let expected = (0.5f32 * 2.0 + 0.3 + 0.6).sin() * 0.8;
        assert!((offset.rotation - expected).abs() < 1e-5);
        assert_eq!((offset.dx, offset.dy), (0.0, 0.0));
    }

    #[test]
    fn test_pulse_centered_on_one() {
        let pulse = Pulse::new(0.3, 1.0);
        let offset = pulse.apply(0, 0, 0.0, CellOffset::IDENTITY);
        assert!((offset.scale - 1.0).abs() < 1e-6);

        let offset = pulse.apply(0, 0, FRAC_PI_2, CellOffset::IDENTITY);
        assert!((offset.scale - 1.3).abs() < 1e-5);
    }

    #[test]
    fn test_combined_applies_all_three() {
        let params = GridParams {
            animation_type: AnimationType::Combined,
            ..GridParams::default()
        };
        let chain = build_chain(&params);
        assert_eq!(chain.names(), vec!["Movement", "Rotation", "Pulse"]);

        let (x, y, t) = (3, 5, 1.25);
        let combined = chain.apply(x, y, t);
        let movement = Movement::new(params.movement_amplitude, params.movement_frequency)
            .apply(x, y, t, CellOffset::IDENTITY);
        let rotation = Rotation::new(params.rotation_amplitude, params.rotation_frequency)
            .apply(x, y, t, CellOffset::IDENTITY);
        let pulse = Pulse::new(params.scale_amplitude, params.scale_frequency)
            .apply(x, y, t, CellOffset::IDENTITY);

        assert!((combined.dx - movement.dx).abs() < 1e-6);
        assert!((combined.dy - movement.dy).abs() < 1e-6);
        assert!((combined.rotation - rotation.rotation).abs() < 1e-6);
        assert!((combined.scale - pulse.scale).abs() < 1e-6);
    }

    #[test]
    fn test_single_types_touch_one_channel() {
        for &kind in AnimationType::all() {
            let params = GridParams {
                animation_type: kind,
                ..GridParams::default()
            };
            let offset = build_chain(&params).apply(1, 1, 0.7);
            let moved = offset.dx != 0.0 || offset.dy != 0.0;
            let rotated = offset.rotation != 0.0;
            let scaled = offset.scale != 1.0;
            match kind {
                AnimationType::Movement => assert!(moved && !rotated && !scaled),
                AnimationType::Rotation => assert!(!moved && rotated && !scaled),
                AnimationType::Scale => assert!(!moved && !rotated && scaled),
                AnimationType::Combined => assert!(moved && rotated && scaled),
            }
        }
    }

    #[test]
    fn test_chain_per_type() {
        let expected: [(AnimationType, &[&str]); 4] = [
            (AnimationType::Movement, &["Movement"]),
            (AnimationType::Rotation, &["Rotation"]),
            (AnimationType::Scale, &["Pulse"]),
            (AnimationType::Combined, &["Movement", "Rotation", "Pulse"]),
        ];
        for (kind, names) in expected {
            let params = GridParams {
                animation_type: kind,
                ..GridParams::default()
            };
            let chain = build_chain(&params);
            assert_eq!(chain.len(), names.len(), "{}", kind.name());
            assert_eq!(chain.names(), names.to_vec());
        }
    }

    #[test]
    fn test_every_effect_in_chain_contributes() {
        // Zero amplitude on one effect must not mute the others
        let params = GridParams {
            animation_type: AnimationType::Combined,
            movement_amplitude: 0.0,
            ..GridParams::default()
        };
        let offset = build_chain(&params).apply(2, 3, 0.9);
        assert_eq!((offset.dx, offset.dy), (0.0, 0.0));
        assert!(offset.rotation != 0.0);
        assert!(offset.scale != 1.0);
    }
}
