//! Swept ball-versus-edge test.
//!
//! A ball can travel further than a paddle is wide in one tick, so hits are
//! found by intersecting the segment the ball covered this tick with the
//! detector's leading edge rather than by testing the end point alone.

use glam::Vec2;

use crate::geometry::approx_eq;

/// Vertical segment `x`, `top..=bottom` the ball centre must cross
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Edge {
    pub fn new(x: f32, top: f32, bottom: f32) -> Self {
        Self { x, top, bottom }
    }

    pub fn length(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Where the ball met an edge and how much of the tick was left afterwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub point: Vec2,
    /// Fraction of this tick's travel that lies past the edge, in `[0, 1]`
    pub ratio: f32,
}

/// Intersect the travel `previous -> current` with `edge`.
///
/// The caller has already established that the x-range of the travel spans
/// `edge.x`. Travel colinear with the edge always reports a crossing at the
/// edge end the ball approached from.
pub fn sweep(previous: Vec2, current: Vec2, edge: &Edge) -> Option<Crossing> {
    let travel = current - previous;

    if !approx_eq(0.0, travel.x) {
        // y = slope * x + b, evaluated at the edge
        let slope = travel.y / travel.x;
        let y = slope * (edge.x - current.x) + current.y;
        if y < edge.top || y > edge.bottom {
            return None;
        }
        let ratio = ((current.x - edge.x) / travel.x).clamp(0.0, 1.0);
        return Some(Crossing {
            point: Vec2::new(edge.x, y),
            ratio,
        });
    }

    let end_y = if previous.y > edge.top {
        edge.bottom
    } else {
        edge.top
    };
    let ratio = if approx_eq(0.0, travel.y) {
        0.0
    } else {
        ((current.y - end_y) / travel.y).clamp(0.0, 1.0)
    };
    Some(Crossing {
        point: Vec2::new(edge.x, end_y),
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_travel_crosses_edge() {
        let edge = Edge::new(115.0, 80.0, 140.0);
        let hit = sweep(Vec2::new(100.0, 100.0), Vec2::new(120.0, 100.0), &edge)
            .expect("Travel through the edge span should cross");
        assert_eq!(hit.point, Vec2::new(115.0, 100.0));
        assert!((hit.ratio - 0.25).abs() < 1e-6, "5 of 20 units remain");
    }

    #[test]
    fn test_leftward_diagonal_crossing() {
        let edge = Edge::new(168.0, 400.0, 482.0);
        let hit = sweep(Vec2::new(178.0, 420.0), Vec2::new(158.0, 430.0), &edge)
            .expect("Should cross");
        assert!((hit.point.x - 168.0).abs() < 1e-4);
        assert!((hit.point.y - 425.0).abs() < 1e-4);
        assert!((hit.ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_crossing_outside_span_misses() {
        let edge = Edge::new(115.0, 80.0, 140.0);
        assert!(sweep(Vec2::new(100.0, 150.0), Vec2::new(120.0, 160.0), &edge).is_none());
        assert!(sweep(Vec2::new(100.0, 60.0), Vec2::new(120.0, 70.0), &edge).is_none());
    }

    #[test]
    fn test_span_bounds_are_inclusive() {
        let edge = Edge::new(115.0, 80.0, 140.0);
        let hit = sweep(Vec2::new(100.0, 140.0), Vec2::new(120.0, 140.0), &edge);
        assert_eq!(hit.map(|h| h.point.y), Some(140.0));
    }

    #[test]
    fn test_colinear_travel_from_above_uses_top() {
        let edge = Edge::new(115.0, 80.0, 140.0);
        let hit = sweep(Vec2::new(115.0, 70.0), Vec2::new(115.0, 90.0), &edge)
            .expect("Colinear travel always reports a crossing");
        assert_eq!(hit.point, Vec2::new(115.0, 80.0));
        assert!((hit.ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_colinear_travel_from_below_uses_bottom() {
        let edge = Edge::new(115.0, 80.0, 140.0);
        let hit = sweep(Vec2::new(115.0, 150.0), Vec2::new(115.0, 130.0), &edge)
            .expect("Colinear travel always reports a crossing");
        assert_eq!(hit.point, Vec2::new(115.0, 140.0));
        assert!((hit.ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_stationary_ball_has_zero_ratio() {
        let edge = Edge::new(115.0, 80.0, 140.0);
        let p = Vec2::new(115.0, 100.0);
        let hit = sweep(p, p, &edge).expect("Colinear");
        assert_eq!(hit.ratio, 0.0);
    }
}
