//! Anchor points - symbolic coordinates inside the unit cell
//!
//! Every catalog shape is declared as a list of anchors rather than raw
//! numbers. The unit cell spans [-0.5, 0.5] on both axes.
//!
//! ## Naming
//!
//! ```text
//!  pt4 ── pt3_75 ─ pt3_66 ─ pt3_50 ─ pt3_33 ─ pt3_25 ── pt3
//!   │                                                    │
//!  pt4_25                                              pt2_75
//!   ⋮                      center                        ⋮
//!  pt4_75                                              pt2_25
//!   │                                                    │
//!  pt1 ── pt1_25 ─ pt1_33 ─ pt1_50 ─ pt1_66 ─ pt1_75 ── pt2
//! ```
//!
//! `ptN_P` sits P percent of the way from corner N to corner N+1.

use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing anchor names
#[derive(Error, Debug, PartialEq)]
pub enum AnchorError {
    #[error("Unknown anchor point: {0}")]
    Unknown(String),
}

/// Fractions along an edge that carry a named anchor
const EDGE_STOPS: [(u8, f32); 5] = [
    (25, 0.25),
    (33, 1.0 / 3.0),
    (50, 0.5),
    (66, 2.0 / 3.0),
    (75, 0.75),
];

/// A named point in the unit cell
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Anchor {
    /// Corner 1..=4 (bottom-left, bottom-right, top-right, top-left)
    Corner(u8),
    /// Point on edge `edge` (1..=4), `percent` of the way to the next corner
    Edge { edge: u8, percent: u8 },
    /// Cell center (0, 0)
    Center,
}

impl Anchor {
    /// Number of named anchors (4 corners, 20 edge points, center)
    #[cfg(test)]
    pub const COUNT: usize = 25;

    /// Every anchor, corners first, then edges in order, then center
    #[cfg(test)]
    pub fn all() -> Vec<Anchor> {
        let corners = (1..=4).map(Anchor::Corner);
        let edges = (1..=4).flat_map(|edge| {
            EDGE_STOPS
                .iter()
                .map(move |&(percent, _)| Anchor::Edge { edge, percent })
        });
        corners.chain(edges).chain([Anchor::Center]).collect()
    }

    /// Coordinates of this anchor
    ///
    /// # Panics
    /// Panics for corners or edges outside 1..=4 and for percentages
    /// without a named stop. Anchors come from the static catalog, so
    /// this only fires on a bad declaration.
    pub fn point(self) -> (f32, f32) {
        match self {
            Anchor::Corner(n) => corner(n),
            Anchor::Center => (0.0, 0.0),
            Anchor::Edge { edge, percent } => {
                let fraction = EDGE_STOPS
                    .iter()
                    .find(|&&(p, _)| p == percent)
                    .map(|&(_, f)| f)
                    .unwrap_or_else(|| panic!("no anchor at {}% of edge {}", percent, edge));
                let (x1, y1) = corner(edge);
                let (x2, y2) = corner(edge % 4 + 1);
                (x1 + fraction * (x2 - x1), y1 + fraction * (y2 - y1))
            }
        }
    }

    /// Symbolic name, e.g. `pt2`, `pt3_50`, `center`
    #[cfg(test)]
    pub fn name(self) -> String {
        match self {
            Anchor::Corner(n) => format!("pt{}", n),
            Anchor::Edge { edge, percent } => format!("pt{}_{}", edge, percent),
            Anchor::Center => "center".to_string(),
        }
    }
}

fn corner(n: u8) -> (f32, f32) {
    match n {
        1 => (-0.5, -0.5),
        2 => (0.5, -0.5),
        3 => (0.5, 0.5),
        4 => (-0.5, 0.5),
        _ => panic!("no corner {}", n),
    }
}

impl FromStr for Anchor {
    type Err = AnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "center" {
            return Ok(Anchor::Center);
        }
        let unknown = || AnchorError::Unknown(s.to_string());

        let rest = s.strip_prefix("pt").ok_or_else(unknown)?;
        let (edge, percent) = match rest.split_once('_') {
            Some((edge, percent)) => (edge, Some(percent)),
            None => (rest, None),
        };
        let edge: u8 = edge.parse().map_err(|_| unknown())?;
        if !(1..=4).contains(&edge) {
            return Err(unknown());
        }

        match percent {
            None => Ok(Anchor::Corner(edge)),
            Some(percent) => {
                let percent: u8 = percent.parse().map_err(|_| unknown())?;
                if EDGE_STOPS.iter().any(|&(p, _)| p == percent) {
                    Ok(Anchor::Edge { edge, percent })
                } else {
                    Err(unknown())
                }
            }
        }
    }
}

/// Shorthand constructors used by the catalog table
pub mod pt {
    use super::Anchor;

    pub const P1: Anchor = Anchor::Corner(1);
    pub const P2: Anchor = Anchor::Corner(2);
    pub const P3: Anchor = Anchor::Corner(3);
    pub const P4: Anchor = Anchor::Corner(4);
    pub const CENTER: Anchor = Anchor::Center;

    /// Edge point `percent` of the way along edge `edge`
    pub const fn e(edge: u8, percent: u8) -> Anchor {
        Anchor::Edge { edge, percent }
    }
}
