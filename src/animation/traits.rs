//! CellEffect trait - per-cell animation offsets
//!
//! Effects turn a cell's grid coordinate and the animation clock into an
//! offset from the cell's resting placement. They can be chained, so the
//! combined animation is just all three effects applied in sequence.

/// Offset of a cell from its resting placement
///
/// Translation is in cell units; the engine multiplies by the cell size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CellOffset {
    pub dx: f32,
    pub dy: f32,
    /// Rotation about Z in radians
    pub rotation: f32,
    /// Multiplier on the cell size
    pub scale: f32,
}

impl CellOffset {
    /// No offset at all
    pub const IDENTITY: CellOffset = CellOffset {
        dx: 0.0,
        dy: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };
}

impl Default for CellOffset {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An effect that animates grid cells
pub trait CellEffect {
    /// Apply the effect to a cell
    ///
    /// # Arguments
    /// * `x`, `y` - Display grid coordinate of the cell
    /// * `time` - Animation clock
    /// * `offset` - Offset accumulated by earlier effects
    fn apply(&self, x: usize, y: usize, time: f32, offset: CellOffset) -> CellOffset;

    /// Get the name of this effect (for logging)
    fn name(&self) -> &str;
}

/// A boxed effect for dynamic dispatch
pub type BoxedEffect = Box<dyn CellEffect>;

/// A chain of effects applied in sequence
#[derive(Default)]
pub struct EffectChain {
    effects: Vec<BoxedEffect>,
}

impl EffectChain {
    /// Create an empty effect chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect to the chain
    pub fn add<E: CellEffect + 'static>(&mut self, effect: E) -> &mut Self {
        self.effects.push(Box::new(effect));
        self
    }

    /// Get the number of effects
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the chain is empty
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Names of the effects, in order
    pub fn names(&self) -> Vec<&str> {
        self.effects.iter().map(|e| e.name()).collect()
    }

    /// Apply every effect to one cell, in order
    pub fn apply(&self, x: usize, y: usize, time: f32) -> CellOffset {
        self.effects
            .iter()
            .fold(CellOffset::IDENTITY, |offset, effect| {
                effect.apply(x, y, time, offset)
            })
    }
}
