use glam::Vec2;
use serde::Deserialize;
use std::f32::consts::{FRAC_PI_2, PI};
use tracing::debug;

use crate::ball::{Ball, Direction};
use crate::collision::{sweep, Crossing, Edge};
use crate::config::Config;
use crate::control::{MouseTracking, PaddleView, ReactiveHeuristic, TargetPolicy};
use crate::geometry::{make_odd, make_odd_down, make_odd_up};
use crate::params::Params;
use crate::playfield::Playfield;
use crate::resources::{EntityRng, PauseTimer};

/// Which end of the table a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Whether a ball travelling in `direction` is coming towards this side
    pub fn is_approached_by(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Side::Left, Direction::MovesToLeft) | (Side::Right, Direction::MovesToRight)
        )
    }
}

/// Screen-space band of mouse y that drives the full paddle travel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseRange {
    pub min: f32,
    pub max: f32,
}

impl MouseRange {
    pub fn new(min: f32, max: f32) -> Self {
        assert!(max > min, "mouse range must not be empty: {min} .. {max}");
        Self { min, max }
    }

    /// Central band of the screen, so a small hand movement covers the table
    pub fn from_screen_height(height: f32) -> Self {
        Self::new(
            Params::PADDLE_MOUSE_RATIO * height,
            (1.0 - Params::PADDLE_MOUSE_RATIO) * height,
        )
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// Fixed dimensions and travel of one paddle
#[derive(Debug, Clone, PartialEq)]
pub struct PaddleGeometry {
    pub side: Side,
    pub width: f32,
    pub length: f32,
    /// Paddle length plus one ball, so the ball centre is caught over the
    /// whole face including the tips
    pub detector_length: f32,
    /// From paddle centre to the detector's top-left corner
    pub detector_offset: Vec2,
    pub sectors: u32,
    pub min_y: f32,
    pub max_y: f32,
    pub mouse: MouseRange,
    pub mouse_ratio: f32,
}

impl PaddleGeometry {
    pub fn new(playfield: &Playfield, side: Side, config: &Config) -> Self {
        let sectors = config.paddle_sectors;
        assert!(sectors % 2 == 1, "paddle sector count must be odd, got {sectors}");

        let ball_size = make_odd(config.ball_size);
        let width = make_odd(config.paddle_width);
        let length = make_odd(Params::PADDLE_LENGTH_FACTOR * width);
        let mut detector_offset = Vec2::new(0.5 * (ball_size + width), -0.5 * (length + ball_size));
        if side == Side::Right {
            detector_offset.x = -detector_offset.x;
        }

        let height = playfield.height();
        let mouse = config.mouse_range();
        Self {
            side,
            width,
            length,
            detector_length: length + ball_size,
            detector_offset,
            sectors,
            min_y: playfield.top() + Params::PADDLE_TRAVEL_MARGIN * height,
            max_y: playfield.bottom() - Params::PADDLE_TRAVEL_MARGIN * height,
            mouse,
            mouse_ratio: (1.0 - 2.0 * Params::PADDLE_TRAVEL_MARGIN) * height / mouse.span(),
        }
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(self.min_y, self.max_y)
    }

    pub fn mid_y(&self) -> f32 {
        0.5 * (self.min_y + self.max_y)
    }

    /// Paddle centre y for a screen-space mouse y
    pub fn map_mouse(&self, mouse_y: f32) -> f32 {
        self.min_y + self.mouse_ratio * (mouse_y.clamp(self.mouse.min, self.mouse.max) - self.mouse.min)
    }

    /// Mouse y that puts the paddle centre at `y`
    pub fn mouse_for(&self, y: f32) -> f32 {
        self.mouse.min + (self.clamp_y(y) - self.min_y) / self.mouse_ratio
    }

    /// Does `y` fall inside the central band of a paddle centred on `center_y`?
    pub fn holds(&self, center_y: f32, y: f32) -> bool {
        let band = Params::COMPUTER_HOLD_BAND * self.length;
        y > center_y - band && y < center_y + band
    }
}

/// A paddle and its collision detector
#[derive(Debug, Clone)]
pub struct Paddle {
    geometry: PaddleGeometry,
    center: Vec2,
    frame_us: f32,
    pause: PauseTimer,
    rng: EntityRng,
}

impl Paddle {
    pub fn create(playfield: &Playfield, side: Side, config: &Config, rng: EntityRng) -> Self {
        let geometry = PaddleGeometry::new(playfield, side, config);
        let x = match side {
            Side::Left => make_odd_down(playfield.left() + Params::PADDLE_RIM_OFFSET),
            Side::Right => make_odd_up(playfield.right() - Params::PADDLE_RIM_OFFSET),
        };
        Self {
            center: Vec2::new(x, playfield.center().y),
            geometry,
            frame_us: config.frame_duration_us(),
            pause: PauseTimer::new(),
            rng,
        }
    }

    pub fn side(&self) -> Side {
        self.geometry.side
    }

    pub fn geometry(&self) -> &PaddleGeometry {
        &self.geometry
    }

    /// Centre of the visible paddle
    pub fn position(&self) -> Vec2 {
        self.center
    }

    /// Width and length of the visible paddle
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.geometry.width, self.geometry.length)
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_active()
    }

    pub fn pause(&mut self, microseconds: f32) {
        self.pause.start(microseconds);
    }

    /// The detector edge facing the table
    pub fn leading_edge(&self) -> Edge {
        let corner = self.center + self.geometry.detector_offset;
        Edge::new(corner.x, corner.y, corner.y + self.geometry.detector_length)
    }

    /// Follow the mouse. Returns true iff the paddle hit the ball.
    pub fn update_player(&mut self, ball: &mut Ball, mouse_y: f32) -> bool {
        self.react(ball, &mut MouseTracking::new(mouse_y))
    }

    /// Chase the ball. Returns true iff the paddle hit the ball.
    pub fn update_computer(&mut self, ball: &mut Ball) -> bool {
        self.react(ball, &mut ReactiveHeuristic)
    }

    /// Move to the target `policy` picks, then try to return the ball
    pub fn react<P: TargetPolicy + ?Sized>(&mut self, ball: &mut Ball, policy: &mut P) -> bool {
        if self.pause.tick(self.frame_us) {
            return false;
        }
        let view = PaddleView {
            geometry: &self.geometry,
            center: self.center,
        };
        let target_y = self.geometry.clamp_y(policy.target_y(view, ball, &mut self.rng));
        self.update(ball, Vec2::new(self.center.x, target_y))
    }

    fn update(&mut self, ball: &mut Ball, paddle_position: Vec2) -> bool {
        self.center = paddle_position;

        if !self.geometry.side.is_approached_by(ball.direction()) {
            return false;
        }

        let edge = self.leading_edge();
        let previous = ball.previous_position();
        let current = ball.position();
        let crossed = match self.geometry.side {
            Side::Left => previous.x >= edge.x && current.x <= edge.x,
            Side::Right => previous.x <= edge.x && current.x >= edge.x,
        };
        if !crossed {
            return false;
        }

        match sweep(previous, current, &edge) {
            Some(crossing) => {
                self.return_ball(ball, crossing);
                true
            }
            None => false,
        }
    }

    fn return_ball(&self, ball: &mut Ball, crossing: Crossing) {
        // Outgoing half-plane: [0, π) heads right, [π, 2π) heads left
        let base = match ball.direction() {
            Direction::MovesToRight => PI,
            Direction::MovesToLeft => 0.0,
        };
        let sector = self.sector_hit(ball) as f32;
        let bias = match self.geometry.side {
            Side::Right => Params::PADDLE_SECTOR_BIAS * sector,
            Side::Left => -Params::PADDLE_SECTOR_BIAS * sector,
        };
        let angle = FRAC_PI_2 + base + bias + ball.noise(Params::PADDLE_RETURN_NOISE);
        let angle = angle.clamp(
            base + Params::PADDLE_RETURN_MARGIN,
            base + PI - Params::PADDLE_RETURN_MARGIN,
        );

        debug!(
            side = ?self.geometry.side,
            sector,
            x = crossing.point.x,
            y = crossing.point.y,
            ratio = crossing.ratio,
            angle,
            "paddle returned ball"
        );
        ball.rebound(angle, crossing.point, crossing.ratio);
    }

    /// Signed sector of the paddle the ball is level with; 0 is the centre
    /// sector, tips give `±sectors / 2`
    pub fn sector_hit(&self, ball: &Ball) -> i32 {
        let top = self.center.y - 0.5 * self.geometry.length;
        let along = ((ball.position().y - top) / self.geometry.length).clamp(0.0, 1.0 - f32::EPSILON);
        let sectors = self.geometry.sectors as i32;
        (along * sectors as f32).floor() as i32 - sectors / 2
    }

    #[cfg(test)]
    fn set_position(&mut self, center: Vec2) {
        self.center = center;
    }
}
