use glam::Vec2;
use std::f32::consts::PI;
use tracing::debug;

use crate::config::Config;
use crate::geometry::{heading, make_odd, normalize_angle};
use crate::paddle::Side;
use crate::params::Params;
use crate::playfield::Playfield;
use crate::resources::{EntityRng, PauseTimer};
use crate::score::Score;

/// Horizontal sense of travel, a pure function of the ball's angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MovesToRight,
    MovesToLeft,
}

impl Direction {
    /// `floor(angle / π)` on the normalized angle: 0 is rightward, 1 leftward
    pub fn from_angle(angle: f32) -> Self {
        if normalize_angle(angle) < PI {
            Direction::MovesToRight
        } else {
            Direction::MovesToLeft
        }
    }
}

/// What happened to the ball during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BallEvent {
    #[default]
    None,
    HitWall,
    Missed,
}

/// The pong ball
#[derive(Debug, Clone)]
pub struct Ball {
    position: Vec2,
    previous_position: Vec2,
    angle: f32,
    speed: f32,
    speed_increment: f32,
    serve_speed: f32,
    size: f32,
    bounds: Playfield, // table shrunk by half the ball size
    frame_us: f32,
    pause: PauseTimer,
    rng: EntityRng,
}

impl Ball {
    /// Place the ball at a random spot heading right
    pub fn create(playfield: &Playfield, config: &Config, mut rng: EntityRng) -> Self {
        let size = make_odd(config.ball_size);
        let bounds = playfield.shrink(0.5 * size);
        let speed_increment = config.speed_increment();

        let angle = rng.uniform(0.333 * PI, 0.666 * PI);
        let position = Vec2::new(
            rng.uniform(bounds.min.x, bounds.max.x),
            rng.uniform(bounds.min.y, bounds.max.y),
        );

        Self {
            position,
            previous_position: position,
            angle,
            speed: Params::BALL_INITIAL_SPEED_STEPS * speed_increment,
            speed_increment,
            serve_speed: config.serve_speed,
            size,
            bounds,
            frame_us: config.frame_duration_us(),
            pause: PauseTimer::new(),
            rng,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position at the start of the last tick the ball moved in
    pub fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn direction(&self) -> Direction {
        Direction::from_angle(self.angle)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn speed_increment(&self) -> f32 {
        self.speed_increment
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Legal range of the ball centre
    pub fn bounds(&self) -> &Playfield {
        &self.bounds
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_active()
    }

    /// Freeze the ball for the given time
    pub fn pause(&mut self, microseconds: f32) {
        self.pause.start(microseconds);
    }

    /// Put the ball somewhere with a given flight, with no travel behind it
    pub fn place(&mut self, position: Vec2, angle: f32, speed: f32) {
        self.position = position;
        self.previous_position = position;
        self.angle = normalize_angle(angle);
        self.speed = speed;
    }

    /// Advance one tick
    pub fn update(&mut self, score: &mut Score) -> BallEvent {
        if self.pause.tick(self.frame_us) {
            return BallEvent::None;
        }

        let mut event = BallEvent::None;
        self.previous_position = self.position;
        let mut new_position = self.position + self.speed * heading(self.angle);

        if new_position.x < self.bounds.min.x || new_position.x > self.bounds.max.x {
            // The side the ball left through concedes the point
            let scorer = if new_position.x < self.bounds.min.x {
                Side::Right
            } else {
                Side::Left
            };
            score.award(scorer);
            event = BallEvent::Missed;
            new_position = self.new_ball();
            self.previous_position = new_position;
        }

        if new_position.y < self.bounds.min.y || new_position.y > self.bounds.max.y {
            let noise = self.rng.gaussian(Params::BALL_WALL_NOISE);
            self.angle = normalize_angle(PI - self.angle + noise);
            new_position.y = if new_position.y < self.bounds.min.y {
                self.bounds.min.y
            } else {
                self.bounds.max.y
            };
            debug!(x = new_position.x, y = new_position.y, angle = self.angle, "ball hit wall");
            if event == BallEvent::None {
                event = BallEvent::HitWall;
            }
        }

        self.position = new_position;
        event
    }

    /// Re-serve after a point; keeps the horizontal direction and returns the
    /// serve position
    fn new_ball(&mut self) -> Vec2 {
        let coin_toss = self.rng.coin_toss();
        self.angle = match (self.direction(), coin_toss) {
            (Direction::MovesToLeft, true) => self.rng.uniform(1.22 * PI, 1.33 * PI),
            (Direction::MovesToLeft, false) => self.rng.uniform(1.66 * PI, 1.78 * PI),
            (Direction::MovesToRight, true) => self.rng.uniform(0.66 * PI, 0.78 * PI),
            (Direction::MovesToRight, false) => self.rng.uniform(0.22 * PI, 0.33 * PI),
        };
        self.speed = self.serve_speed;

        let span = self.bounds.size();
        let height_fraction = if coin_toss { 0.9 } else { 0.1 };
        Vec2::new(
            self.bounds.min.x + 0.5 * span.x,
            self.bounds.min.y + height_fraction * span.y,
        )
    }

    pub(crate) fn noise(&mut self, std_dev: f32) -> f32 {
        self.rng.gaussian(std_dev)
    }

    /// Send the ball back from `origin` at `angle`, one increment faster,
    /// advanced by the share of the tick left after the contact
    pub(crate) fn rebound(&mut self, angle: f32, origin: Vec2, ratio: f32) {
        self.angle = angle;
        self.speed += self.speed_increment;
        let position = origin + self.speed * ratio * heading(angle);
        self.position = self.bounds.clamp(position);
    }
}
