//! Outline - the geometry of one catalog shape
//!
//! An Outline is a closed outer path in unit-cell coordinates plus at most
//! one hole. Arcs are flattened to points at a fixed resolution so every
//! consumer only ever deals with polygons.
//!
//! Hole-bearing outlines keep the outer path and the hole the same length,
//! with point `i` of the hole facing point `i` of the outer path. The canvas
//! relies on that correspondence to fill the ring between them.

use std::f32::consts::{FRAC_PI_2, TAU};

use super::anchor::Anchor;

/// Arc segments per quarter turn
pub const ARC_SEGMENTS_PER_QUARTER: usize = 16;

/// Radius of every solid arc
pub const OUTER_RADIUS: f32 = 0.5;

/// Radius of every arc hole
pub const HOLE_RADIUS: f32 = 0.35;

/// A closed 2D outline with an optional hole
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    /// Outer boundary, implicitly closed
    outer: Vec<(f32, f32)>,
    /// Inner cutout, same length as `outer` when present
    hole: Option<Vec<(f32, f32)>>,
}

impl Outline {
    /// Create an outline from raw points
    pub fn new(outer: Vec<(f32, f32)>) -> Self {
        Self { outer, hole: None }
    }

    /// Create an outline with a hole
    ///
    /// # Panics
    /// Panics if the two paths differ in length.
    pub fn with_hole(outer: Vec<(f32, f32)>, hole: Vec<(f32, f32)>) -> Self {
        assert_eq!(
            outer.len(),
            hole.len(),
            "outer path and hole must correspond point for point"
        );
        Self {
            outer,
            hole: Some(hole),
        }
    }

    /// Straight-edged polygon through the given anchors
    pub fn polygon(anchors: &[Anchor]) -> Self {
        Self::new(anchors.iter().map(|a| a.point()).collect())
    }

    /// The full unit cell, used whenever a shape can't be resolved
    pub fn unit_rect() -> Self {
        Self::new(vec![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)])
    }

    /// Disc of radius 0.5 centered in the cell
    pub fn disc() -> Self {
        Self::new(ring_points(OUTER_RADIUS, 4 * ARC_SEGMENTS_PER_QUARTER))
    }

    /// Full cell with a centered circular hole of radius 0.35
    ///
    /// The square is sampled along the same rays as the hole, so corners
    /// land exactly on ray multiples of π/4.
    pub fn square_with_hole() -> Self {
        let segments = 4 * ARC_SEGMENTS_PER_QUARTER;
        let outer = (0..segments)
            .map(|i| {
                let angle = i as f32 / segments as f32 * TAU;
                let (sin, cos) = angle.sin_cos();
                let reach = OUTER_RADIUS / cos.abs().max(sin.abs());
                (reach * cos, reach * sin)
            })
            .collect();
        Self::with_hole(outer, ring_points(HOLE_RADIUS, segments))
    }

    /// Pie wedge centered on `apex`
    ///
    /// # Arguments
    /// * `apex` - Center of the arc
    /// * `start_quarter` - Start angle in quarter turns (0 = +X axis)
    /// * `quarters` - Span in quarter turns
    /// * `hollow` - Cut a wedge of radius 0.35 over the same span
    pub fn wedge(apex: Anchor, start_quarter: u8, quarters: u8, hollow: bool) -> Self {
        let center = apex.point();
        let outer = wedge_points(center, OUTER_RADIUS, start_quarter, quarters);
        if hollow {
            let hole = wedge_points(center, HOLE_RADIUS, start_quarter, quarters);
            Self::with_hole(outer, hole)
        } else {
            Self::new(outer)
        }
    }

    /// Outer boundary points
    pub fn points(&self) -> &[(f32, f32)] {
        &self.outer
    }

    /// Hole points, if any
    pub fn hole(&self) -> Option<&[(f32, f32)]> {
        self.hole.as_deref()
    }

    /// Whether this outline has a cutout
    #[cfg(test)]
    pub fn has_hole(&self) -> bool {
        self.hole.is_some()
    }

    /// Filled area (outer area minus hole area)
    #[cfg(test)]
    pub fn area(&self) -> f32 {
        let outer = signed_area(&self.outer).abs();
        let hole = self.hole.as_deref().map_or(0.0, |h| signed_area(h).abs());
        outer - hole
    }

    /// Axis-aligned bounds as (min_x, min_y, max_x, max_y)
    #[cfg(test)]
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        self.outer.iter().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(x0, y0, x1, y1), &(x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        )
    }
}

/// Shoelace area, positive for counter-clockwise paths
pub fn signed_area(points: &[(f32, f32)]) -> f32 {
    let n = points.len();
    let twice: f32 = (0..n)
        .map(|i| {
            let (x1, y1) = points[i];
            let (x2, y2) = points[(i + 1) % n];
            x1 * y2 - x2 * y1
        })
        .sum();
    twice / 2.0
}

fn ring_points(radius: f32, segments: usize) -> Vec<(f32, f32)> {
    (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Apex followed by the arc from start to end, inclusive
fn wedge_points(center: (f32, f32), radius: f32, start_quarter: u8, quarters: u8) -> Vec<(f32, f32)> {
    let segments = quarters as usize * ARC_SEGMENTS_PER_QUARTER;
    let start = start_quarter as f32 * FRAC_PI_2;
    let span = quarters as f32 * FRAC_PI_2;

    let mut points = Vec::with_capacity(segments + 2);
    points.push(center);
    for i in 0..=segments {
        let angle = start + span * i as f32 / segments as f32;
        points.push((
            center.0 + radius * angle.cos(),
            center.1 + radius * angle.sin(),
        ));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::anchor::pt;
    use std::f32::consts::PI;

    #[test]
    fn test_unit_rect_area() {
        let rect = Outline::unit_rect();
        assert!((rect.area() - 1.0).abs() < 1e-6);
        assert_eq!(rect.bounds(), (-0.5, -0.5, 0.5, 0.5));
    }

    #[test]
    fn test_polygon_from_anchors() {
        let diamond = Outline::polygon(&[pt::e(1, 50), pt::e(2, 50), pt::e(3, 50), pt::e(4, 50)]);
        assert_eq!(diamond.points().len(), 4);
        assert!((diamond.area() - 0.5).abs() < 1e-6);
        assert!(signed_area(diamond.points()) > 0.0);
    }

    #[test]
    fn test_disc_approximates_circle() {
        let disc = Outline::disc();
        assert!((disc.area() - PI * 0.25).abs() < 0.01);
        assert!(!disc.has_hole());
    }

    #[test]
    fn test_square_with_hole() {
        let outline = Outline::square_with_hole();
        let hole = outline.hole().unwrap();
        assert_eq!(hole.len(), outline.points().len());
        assert!((outline.area() - (1.0 - PI * HOLE_RADIUS * HOLE_RADIUS)).abs() < 0.01);

        // Square corners are hit exactly
        let corners = outline
            .points()
            .iter()
            .filter(|(x, y)| (x.abs() - 0.5).abs() < 1e-5 && (y.abs() - 0.5).abs() < 1e-5)
            .count();
        assert_eq!(corners, 4);
    }

    #[test]
    fn test_quarter_wedge_stays_in_cell() {
        let wedge = Outline::wedge(pt::P1, 0, 1, false);
        let (x0, y0, x1, y1) = wedge.bounds();
        assert!(x0 >= -0.5 - 1e-6 && y0 >= -0.5 - 1e-6);
        assert!(x1 <= 1e-6 && y1 <= 1e-6);
        assert!((wedge.area() - PI * 0.25 / 4.0).abs() < 0.01);
    }

    #[test]
    fn test_hollow_wedge_is_ring_segment() {
        let wedge = Outline::wedge(pt::e(1, 50), 0, 2, true);
        let expected = PI / 2.0 * (OUTER_RADIUS.powi(2) - HOLE_RADIUS.powi(2));
        assert!((wedge.area() - expected).abs() < 0.01);
        assert_eq!(wedge.hole().unwrap().len(), wedge.points().len());
    }
}
