//! Fill tessellation for outlines
//!
//! egui only fills convex shapes, so every outline is cut into triangles
//! once when its geometry is set and reused every frame after that.
//!
//! - Simple outlines are ear-clipped.
//! - Hole-bearing outlines are filled as a strip between the outer path
//!   and the hole, pairing points by index.

use crate::shapes::Outline;

/// A triangle in unit-cell coordinates
pub type Triangle = [(f32, f32); 3];

const EPSILON: f32 = 1e-7;

/// Cut an outline into triangles covering exactly its filled area
pub fn fill_triangles(outline: &Outline) -> Vec<Triangle> {
    match outline.hole() {
        Some(hole) => ring_strip(outline.points(), hole),
        None => ear_clip(outline.points()),
    }
}

/// Twice the signed area of triangle (a, b, c)
fn cross(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

/// Inside or on the boundary of a counter-clockwise triangle
///
/// A reflex vertex sitting on a candidate diagonal must block the ear.
fn touches(p: (f32, f32), a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> bool {
    cross(a, b, p) >= -EPSILON && cross(b, c, p) >= -EPSILON && cross(c, a, p) >= -EPSILON
}

/// Ear clipping for a simple polygon of either winding
///
/// Collinear vertices are dropped without emitting a triangle. If no ear
/// can be found (a self-intersecting path) the remainder is left unfilled.
pub fn ear_clip(points: &[(f32, f32)]) -> Vec<Triangle> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut ring: Vec<usize> = (0..n).collect();
    if crate::shapes::signed_area(points) < 0.0 {
        ring.reverse();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    while ring.len() > 3 {
        let len = ring.len();
        let mut clipped = false;

        for i in 0..len {
            let a = points[ring[(i + len - 1) % len]];
            let b = points[ring[i]];
            let c = points[ring[(i + 1) % len]];
            let turn = cross(a, b, c);

            if turn.abs() <= EPSILON {
                ring.remove(i);
                clipped = true;
                break;
            }
            if turn < 0.0 {
                continue;
            }

            let blocked = ring.iter().any(|&k| {
                let p = points[k];
                p != a && p != b && p != c && touches(p, a, b, c)
            });
            if !blocked {
                triangles.push([a, b, c]);
                ring.remove(i);
                clipped = true;
                break;
            }
        }

        if !clipped {
            log::warn!("Outline is not simple, {} vertices left unfilled", ring.len());
            return triangles;
        }
    }

    let last = [points[ring[0]], points[ring[1]], points[ring[2]]];
    if cross(last[0], last[1], last[2]).abs() > EPSILON {
        triangles.push(last);
    }
    triangles
}

/// Fill the band between an outer path and an index-matched hole
fn ring_strip(outer: &[(f32, f32)], hole: &[(f32, f32)]) -> Vec<Triangle> {
    let n = outer.len().min(hole.len());
    let mut triangles = Vec::with_capacity(2 * n);
    for i in 0..n {
        let j = (i + 1) % n;
        for tri in [[outer[i], outer[j], hole[j]], [outer[i], hole[j], hole[i]]] {
            if cross(tri[0], tri[1], tri[2]).abs() > EPSILON {
                triangles.push(tri);
            }
        }
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeId;

    fn covered(triangles: &[Triangle]) -> f32 {
        triangles
            .iter()
            .map(|t| cross(t[0], t[1], t[2]).abs() / 2.0)
            .sum()
    }

    #[test]
    fn test_square_is_two_triangles() {
        let triangles = fill_triangles(&Outline::unit_rect());
        assert_eq!(triangles.len(), 2);
        assert!((covered(&triangles) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_concave_l_shape() {
        // L with the reflex corner at (0, 0)
        let l = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.0), (0.0, 0.0), (0.0, 0.5), (-0.5, 0.5)];
        let triangles = ear_clip(&l);
        assert_eq!(triangles.len(), 4);
        assert!((covered(&triangles) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_clockwise_input() {
        let mut square = Outline::unit_rect().points().to_vec();
        square.reverse();
        assert!((covered(&ear_clip(&square)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_collinear_point_dropped() {
        let square = [(-0.5, -0.5), (0.0, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
        let triangles = ear_clip(&square);
        assert!((covered(&triangles) - 1.0).abs() < 1e-6);
        assert!(triangles.iter().all(|t| cross(t[0], t[1], t[2]).abs() > EPSILON));
    }

    #[test]
    fn test_degenerate_input() {
        assert!(ear_clip(&[]).is_empty());
        assert!(ear_clip(&[(0.0, 0.0), (1.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_every_catalog_shape_fills_its_area() {
        for id in ShapeId::all() {
            let outline = id.outline();
            let triangles = fill_triangles(&outline);
            assert!(!triangles.is_empty(), "{}", id);
            let expected = outline.area();
            assert!(
                (covered(&triangles) - expected).abs() < 1e-3,
                "{}: covered {} expected {}",
                id,
                covered(&triangles),
                expected
            );
        }
    }

    #[test]
    fn test_triangles_stay_in_cell() {
        for id in ShapeId::all() {
            for tri in fill_triangles(&id.outline()) {
                for (x, y) in tri {
                    assert!(x.abs() <= 0.5 + 1e-5 && y.abs() <= 0.5 + 1e-5, "{}", id);
                }
            }
        }
    }
}
