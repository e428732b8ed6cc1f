//! Shape catalog - the fixed table of named shapes
//!
//! Every shape the grid can show is declared exactly once in [`CATALOG`].
//! Table order is the canonical order: it decides which shape is the
//! default for a given set of enabled categories (the first match wins).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::anchor::pt::{e, CENTER, P1, P2, P3, P4};
use super::anchor::Anchor;
use super::outline::Outline;

/// Errors from resolving shape names
#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("Unknown shape: {0}")]
    Unknown(String),
}

/// Shape families, used for enable/disable filtering
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShapeCategory {
    Basic,
    Triangle,
    Rectangle,
    Ellipse,
}

impl ShapeCategory {
    /// All categories, in panel order
    pub fn all() -> &'static [ShapeCategory] {
        &[
            ShapeCategory::Basic,
            ShapeCategory::Triangle,
            ShapeCategory::Rectangle,
            ShapeCategory::Ellipse,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ShapeCategory::Basic => "Basic",
            ShapeCategory::Triangle => "Triangle",
            ShapeCategory::Rectangle => "Rectangle",
            ShapeCategory::Ellipse => "Ellipse",
        }
    }

    /// Category of a shape, derived from its name alone
    pub fn of(name: &str) -> Self {
        if name.starts_with("triangle_") {
            ShapeCategory::Triangle
        } else if name.starts_with("rect_") || matches!(name, "Rect" | "longRect_V" | "longRect_H") {
            ShapeCategory::Rectangle
        } else if name.starts_with("ellipse_") {
            ShapeCategory::Ellipse
        } else {
            ShapeCategory::Basic
        }
    }
}

/// Per-category enable flags
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledShapes {
    pub basic: bool,
    pub triangle: bool,
    pub rectangle: bool,
    pub ellipse: bool,
}

impl Default for EnabledShapes {
    fn default() -> Self {
        Self {
            basic: true,
            triangle: true,
            rectangle: true,
            ellipse: true,
        }
    }
}

impl EnabledShapes {
    /// Nothing enabled
    #[cfg(test)]
    pub fn none() -> Self {
        Self {
            basic: false,
            triangle: false,
            rectangle: false,
            ellipse: false,
        }
    }

    /// Whether a category is enabled
    pub fn contains(&self, category: ShapeCategory) -> bool {
        match category {
            ShapeCategory::Basic => self.basic,
            ShapeCategory::Triangle => self.triangle,
            ShapeCategory::Rectangle => self.rectangle,
            ShapeCategory::Ellipse => self.ellipse,
        }
    }

    /// Mutable flag for a category (for panel checkboxes)
    pub fn flag_mut(&mut self, category: ShapeCategory) -> &mut bool {
        match category {
            ShapeCategory::Basic => &mut self.basic,
            ShapeCategory::Triangle => &mut self.triangle,
            ShapeCategory::Rectangle => &mut self.rectangle,
            ShapeCategory::Ellipse => &mut self.ellipse,
        }
    }

    /// Enabled shapes in canonical order
    pub fn pool(&self) -> Vec<ShapeId> {
        ShapeId::all()
            .filter(|id| self.contains(id.category()))
            .collect()
    }
}

/// How a catalog entry builds its outline
#[derive(Clone, Copy, Debug)]
enum Recipe {
    /// Straight segments through anchors
    Polygon(&'static [Anchor]),
    /// Centered disc
    Disc,
    /// Full cell with a centered circular hole
    SquareWithHole,
    /// Pie wedge, optionally hollowed into a ring segment
    Wedge {
        apex: Anchor,
        start_quarter: u8,
        quarters: u8,
        hollow: bool,
    },
}

/// One named shape
#[derive(Debug)]
pub struct ShapeDefinition {
    pub name: &'static str,
    recipe: Recipe,
}

impl ShapeDefinition {
    /// Build this shape's outline
    pub fn outline(&self) -> Outline {
        match self.recipe {
            Recipe::Polygon(anchors) => Outline::polygon(anchors),
            Recipe::Disc => Outline::disc(),
            Recipe::SquareWithHole => Outline::square_with_hole(),
            Recipe::Wedge {
                apex,
                start_quarter,
                quarters,
                hollow,
            } => Outline::wedge(apex, start_quarter, quarters, hollow),
        }
    }

    pub fn category(&self) -> ShapeCategory {
        ShapeCategory::of(self.name)
    }
}

const fn poly(name: &'static str, anchors: &'static [Anchor]) -> ShapeDefinition {
    ShapeDefinition {
        name,
        recipe: Recipe::Polygon(anchors),
    }
}

/// Quarter wedge on corner `n`
const fn quarter(name: &'static str, n: u8, hollow: bool) -> ShapeDefinition {
    ShapeDefinition {
        name,
        recipe: Recipe::Wedge {
            apex: Anchor::Corner(n),
            start_quarter: n - 1,
            quarters: 1,
            hollow,
        },
    }
}

/// Semicircle on the midpoint of edge `n`, bulging into the cell
const fn half(name: &'static str, n: u8, hollow: bool) -> ShapeDefinition {
    ShapeDefinition {
        name,
        recipe: Recipe::Wedge {
            apex: e(n, 50),
            start_quarter: n - 1,
            quarters: 2,
            hollow,
        },
    }
}

/// Number of catalog entries
pub const CATALOG_LEN: usize = 54;

/// Every shape, in canonical order
pub static CATALOG: [ShapeDefinition; CATALOG_LEN] = [
    // Rectangles
    poly("Rect", &[P1, P2, P3, P4]),
    poly("longRect_V", &[e(1, 25), e(1, 75), e(3, 25), e(3, 75)]),
    poly("longRect_H", &[e(4, 75), e(2, 25), e(2, 75), e(4, 25)]),
    poly("rect_half_1", &[P1, P2, e(2, 50), e(4, 50)]),
    poly("rect_half_2", &[e(1, 50), P2, P3, e(3, 50)]),
    poly("rect_half_3", &[e(4, 50), e(2, 50), P3, P4]),
    poly("rect_half_4", &[P1, e(1, 50), e(3, 50), P4]),
    poly("rect_L_1", &[P1, P2, e(2, 50), CENTER, e(3, 50), P4]),
    poly("rect_L_2", &[P1, P2, P3, e(3, 50), CENTER, e(4, 50)]),
    poly("rect_L_3", &[e(1, 50), P2, P3, P4, e(4, 50), CENTER]),
    poly("rect_L_4", &[P1, e(1, 50), CENTER, e(2, 50), P3, P4]),
    poly("rect_angled_1", &[P1, P2, e(3, 25), e(3, 75)]),
    poly("rect_angled_2", &[P2, P3, e(4, 25), e(4, 75)]),
    poly("rect_angled_3", &[P3, P4, e(1, 25), e(1, 75)]),
    poly("rect_angled_4", &[P4, P1, e(2, 25), e(2, 75)]),
    // Triangles
    poly("triangle_half_1", &[P1, P2, P4]),
    poly("triangle_half_2", &[P2, P3, P1]),
    poly("triangle_half_3", &[P3, P4, P2]),
    poly("triangle_half_4", &[P4, P1, P3]),
    poly("triangle_corner_1", &[P1, e(1, 50), e(4, 50)]),
    poly("triangle_corner_2", &[P2, e(2, 50), e(1, 50)]),
    poly("triangle_corner_3", &[P3, e(3, 50), e(2, 50)]),
    poly("triangle_corner_4", &[P4, e(4, 50), e(3, 50)]),
    poly("triangle_bottom_1", &[P1, P2, CENTER]),
    poly("triangle_bottom_2", &[P2, P3, CENTER]),
    poly("triangle_bottom_3", &[P3, P4, CENTER]),
    poly("triangle_bottom_4", &[P4, P1, CENTER]),
    poly("triangle_split_1", &[P1, P2, e(3, 50)]),
    poly("triangle_split_2", &[P2, P3, e(4, 50)]),
    poly("triangle_double_H", &[P1, P2, e(3, 25), CENTER, e(3, 75)]),
    poly("triangle_double_V", &[P1, e(2, 25), CENTER, e(2, 75), P4]),
    poly("triangle_notch_in", &[P1, e(1, 33), CENTER, e(1, 66), P2, e(3, 50)]),
    poly("triangle_notch_out", &[e(1, 33), e(1, 66), e(2, 50), e(3, 50), e(4, 50)]),
    poly("triangle_sliver_1", &[P1, P2, e(4, 75)]),
    poly("triangle_sliver_2", &[P4, P1, e(1, 25)]),
    // Basic
    poly("diamond", &[e(1, 50), e(2, 50), e(3, 50), e(4, 50)]),
    // Ellipses
    ShapeDefinition {
        name: "ellipse_full",
        recipe: Recipe::Disc,
    },
    ShapeDefinition {
        name: "ellipse_negative",
        recipe: Recipe::SquareWithHole,
    },
    quarter("ellipse_quarter_1", 1, false),
    quarter("ellipse_quarter_2", 2, false),
    quarter("ellipse_quarter_3", 3, false),
    quarter("ellipse_quarter_4", 4, false),
    half("ellipse_half_1", 1, false),
    half("ellipse_half_2", 2, false),
    half("ellipse_half_3", 3, false),
    half("ellipse_half_4", 4, false),
    quarter("ellipse_quarter_neg_1", 1, true),
    quarter("ellipse_quarter_neg_2", 2, true),
    quarter("ellipse_quarter_neg_3", 3, true),
    quarter("ellipse_quarter_neg_4", 4, true),
    half("ellipse_half_neg_1", 1, true),
    half("ellipse_half_neg_2", 2, true),
    half("ellipse_half_neg_3", 3, true),
    half("ellipse_half_neg_4", 4, true),
];

/// Handle to a catalog entry
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ShapeId(usize);

impl ShapeId {
    /// The plain unit rectangle, the fallback for every unresolved lookup
    pub const RECT: ShapeId = ShapeId(0);

    /// All shapes in canonical order
    pub fn all() -> impl Iterator<Item = ShapeId> {
        (0..CATALOG_LEN).map(ShapeId)
    }

    /// Look up a shape by name
    pub fn from_name(name: &str) -> Option<ShapeId> {
        CATALOG.iter().position(|def| def.name == name).map(ShapeId)
    }

    pub fn definition(self) -> &'static ShapeDefinition {
        &CATALOG[self.0]
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn category(self) -> ShapeCategory {
        self.definition().category()
    }

    pub fn outline(self) -> Outline {
        self.definition().outline()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeId::from_name(s).ok_or_else(|| ShapeError::Unknown(s.to_string()))
    }
}

/// Build the outline for a named shape, `None` if the name is unknown
pub fn generate(name: &str) -> Option<Outline> {
    ShapeId::from_name(name).map(ShapeId::outline)
}

/// Build the outline for a named shape, falling back to the unit rectangle
pub fn outline_or_default(name: &str) -> Outline {
    generate(name).unwrap_or_else(Outline::unit_rect)
}
