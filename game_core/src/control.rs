//! Target-position policies that steer a paddle.
//!
//! A paddle asks its policy where its centre should be this tick and then runs
//! the same collision routine whatever the answer.

use glam::Vec2;

use crate::ball::Ball;
use crate::geometry::{make_odd_down, make_odd_up};
use crate::paddle::PaddleGeometry;
use crate::params::Params;
use crate::resources::EntityRng;

/// Read-only view of the paddle being steered
#[derive(Debug, Clone, Copy)]
pub struct PaddleView<'a> {
    pub geometry: &'a PaddleGeometry,
    pub center: Vec2,
}

/// Picks a paddle's target centre y for one tick
pub trait TargetPolicy {
    /// `rng` is the paddle's own generator
    fn target_y(&mut self, paddle: PaddleView<'_>, ball: &Ball, rng: &mut EntityRng) -> f32;
}

/// Policy backed by a closure, see [`policy_fn`]
#[derive(Debug, Clone, Copy)]
pub struct FnPolicy<F>(F);

/// Wrap a closure as a [`TargetPolicy`]
pub fn policy_fn<F>(f: F) -> FnPolicy<F>
where
    F: FnMut(PaddleView<'_>, &Ball, &mut EntityRng) -> f32,
{
    FnPolicy(f)
}

impl<F> TargetPolicy for FnPolicy<F>
where
    F: FnMut(PaddleView<'_>, &Ball, &mut EntityRng) -> f32,
{
    fn target_y(&mut self, paddle: PaddleView<'_>, ball: &Ball, rng: &mut EntityRng) -> f32 {
        (self.0)(paddle, ball, rng)
    }
}

/// Maps the mouse's screen y linearly onto the paddle travel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseTracking {
    pub mouse_y: f32,
}

impl MouseTracking {
    pub fn new(mouse_y: f32) -> Self {
        Self { mouse_y }
    }
}

impl TargetPolicy for MouseTracking {
    fn target_y(&mut self, paddle: PaddleView<'_>, _ball: &Ball, _rng: &mut EntityRng) -> f32 {
        paddle.geometry.map_mouse(self.mouse_y)
    }
}

/// Deliberately imperfect opponent with a bounded speed.
///
/// Holds still while the ball is level with the paddle's central band.
/// Otherwise steps about [`Params::COMPUTER_STEP`] units towards the ball when
/// it approaches, or towards the middle of the travel when it recedes. A step
/// that would leave the travel or pass the ball is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactiveHeuristic;

impl TargetPolicy for ReactiveHeuristic {
    fn target_y(&mut self, paddle: PaddleView<'_>, ball: &Ball, rng: &mut EntityRng) -> f32 {
        let geometry = paddle.geometry;
        let current = paddle.center.y;
        let ball_y = ball.position().y;

        if geometry.holds(current, ball_y) {
            return current;
        }

        let aim = if geometry.side.is_approached_by(ball.direction()) {
            ball_y
        } else {
            geometry.mid_y()
        };
        let jitter = Params::COMPUTER_STEP * rng.uniform(-Params::COMPUTER_JITTER, Params::COMPUTER_JITTER);

        if aim < current {
            let next = make_odd_down(current - Params::COMPUTER_STEP + jitter);
            if next > geometry.min_y && ball_y < next {
                return next;
            }
        } else {
            let next = make_odd_up(current + Params::COMPUTER_STEP + jitter);
            if next < geometry.max_y && ball_y > next {
                return next;
            }
        }
        current
    }
}
