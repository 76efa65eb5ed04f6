//! The per-tick orchestrator.
//!
//! Ball first, then the player paddle, then the computer paddle, then the
//! score display. A point or a paddle hit freezes other entities for a while
//! through their pause timers; there is no global game state flag.

use tracing::{debug, info};

use crate::ball::{Ball, BallEvent};
use crate::config::Config;
use crate::paddle::{Paddle, Side};
use crate::playfield::Playfield;
use crate::resources::EntityRng;
use crate::score::Score;

/// Sound the presentation layer should play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    HitWall,
    HitPaddle,
    MissBall,
}

/// Input sampled by the host once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Mouse y in screen coordinates
    pub mouse_y: f32,
}

impl TickInput {
    pub fn new(mouse_y: f32) -> Self {
        Self { mouse_y }
    }
}

/// Everything that happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub ball: BallEvent,
    pub player_hit: bool,
    pub computer_hit: bool,
    /// Set on every tick while the score shows a winner
    pub winner: Option<Side>,
}

impl TickReport {
    pub fn cues(&self) -> Vec<Cue> {
        let mut cues = Vec::new();
        match self.ball {
            BallEvent::HitWall => cues.push(Cue::HitWall),
            BallEvent::Missed => cues.push(Cue::MissBall),
            BallEvent::None => {}
        }
        if self.player_hit {
            cues.push(Cue::HitPaddle);
        }
        if self.computer_hit {
            cues.push(Cue::HitPaddle);
        }
        cues
    }
}

/// Ball, both paddles and the score on one table
#[derive(Debug, Clone)]
pub struct Table {
    config: Config,
    playfield: Playfield,
    ball: Ball,
    player: Paddle,
    computer: Paddle,
    score: Score,
    tick: u64,
}

impl Table {
    /// Table whose entities draw from operating system entropy
    pub fn new(config: Config) -> Self {
        Self::build(
            config,
            EntityRng::from_entropy(),
            EntityRng::from_entropy(),
            EntityRng::from_entropy(),
        )
    }

    /// Reproducible table: each entity gets its own stream of `seed`
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::build(
            config,
            EntityRng::stream(seed, 0),
            EntityRng::stream(seed, 1),
            EntityRng::stream(seed, 2),
        )
    }

    fn build(
        config: Config,
        ball_rng: EntityRng,
        player_rng: EntityRng,
        computer_rng: EntityRng,
    ) -> Self {
        let playfield = config.playfield();
        let ball = Ball::create(&playfield, &config, ball_rng);
        let player = Paddle::create(&playfield, config.player_side, &config, player_rng);
        let computer = Paddle::create(&playfield, config.computer_side(), &config, computer_rng);
        let score = Score::create(&playfield);

        debug!(
            left = playfield.left(),
            top = playfield.top(),
            right = playfield.right(),
            bottom = playfield.bottom(),
            player = ?config.player_side,
            "table created"
        );

        Self {
            config,
            playfield,
            ball,
            player,
            computer,
            score,
            tick: 0,
        }
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        self.tick += 1;
        let mut report = TickReport {
            tick: self.tick,
            ..Default::default()
        };

        report.ball = self.ball.update(&mut self.score);
        match report.ball {
            BallEvent::Missed => {
                info!(
                    tick = self.tick,
                    left = self.score.left(),
                    right = self.score.right(),
                    "point scored"
                );
                self.ball.pause(self.config.miss_pause_us);
                // Give the player a head start when the serve goes to the computer
                if self.computer.side().is_approached_by(self.ball.direction()) {
                    self.computer
                        .pause(self.config.miss_pause_us + 0.5 * self.config.hit_cooldown_us);
                }
            }
            BallEvent::HitWall => {
                debug!(tick = self.tick, "wall hit");
            }
            BallEvent::None => {}
        }

        if self.player.update_player(&mut self.ball, input.mouse_y) {
            report.player_hit = true;
            self.computer.pause(self.config.hit_cooldown_us);
            debug!(tick = self.tick, speed = self.ball.speed(), "player hit");
        }

        if self.computer.update_computer(&mut self.ball) {
            report.computer_hit = true;
            self.player.pause(self.config.hit_cooldown_us);
            debug!(tick = self.tick, speed = self.ball.speed(), "computer hit");
        }

        self.score.update();
        report.winner = self.score.winner();
        report
    }

    /// Start a new round after a win; the rally carries on from where it is
    pub fn new_round(&mut self) {
        info!(
            left = self.score.left(),
            right = self.score.right(),
            "new round"
        );
        self.score.reset();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn computer(&self) -> &Paddle {
        &self.computer
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }
}
