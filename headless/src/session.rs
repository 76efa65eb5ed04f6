use anyhow::Result;
use game_core::{BallEvent, Side, Table};
use proto::Record;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::hand::Hand;
use crate::recorder::{frame_record, session_record, side_tag, Recorder};

/// When a session stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Stop after this many ticks
    pub ticks: Option<u64>,
    /// Stop after this many finished rounds
    pub rounds: u32,
}

/// What happened over a whole session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    pub winners: Vec<Side>,
    pub points: u32,
    pub paddle_hits: u32,
    pub wall_hits: u32,
}

/// Drives one table at a fixed tick
pub struct Session<W: Write> {
    table: Table,
    hand: Hand,
    recorder: Option<Recorder<W>>,
    limits: Limits,
    summary: Summary,
}

impl<W: Write> Session<W> {
    pub fn new(
        table: Table,
        hand: Hand,
        mut recorder: Option<Recorder<W>>,
        limits: Limits,
        seed: Option<u64>,
    ) -> Result<Self> {
        if let Some(recorder) = recorder.as_mut() {
            recorder.write(&session_record(&table, seed))?;
        }
        Ok(Self {
            table,
            hand,
            recorder,
            limits,
            summary: Summary::default(),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn is_finished(&self) -> bool {
        let rounds_done = self.summary.winners.len() as u32 >= self.limits.rounds;
        let ticks_done = self
            .limits
            .ticks
            .is_some_and(|limit| self.summary.ticks >= limit);
        rounds_done || ticks_done
    }

    /// Run one tick
    pub fn step(&mut self) -> Result<()> {
        let input = self.hand.input(&self.table);
        let report = self.table.tick(&input);
        self.summary.ticks = report.tick;

        match report.ball {
            BallEvent::Missed => self.summary.points += 1,
            BallEvent::HitWall => self.summary.wall_hits += 1,
            BallEvent::None => {}
        }
        self.summary.paddle_hits += report.player_hit as u32 + report.computer_hit as u32;

        if let Some(recorder) = self.recorder.as_mut() {
            recorder.write(&frame_record(&self.table, &report))?;
        }

        if let Some(winner) = report.winner {
            let round = self.summary.winners.len() as u32 + 1;
            info!(
                round,
                ?winner,
                left = self.table.score().left(),
                right = self.table.score().right(),
                tick = report.tick,
                "round over"
            );
            if let Some(recorder) = self.recorder.as_mut() {
                recorder.write(&Record::RoundOver {
                    tick: report.tick,
                    round,
                    winner: side_tag(winner),
                })?;
            }
            self.summary.winners.push(winner);
            if round < self.limits.rounds {
                self.table.new_round();
            }
        }
        Ok(())
    }

    /// Run until a limit is reached, optionally paced to the refresh rate
    pub fn run(&mut self, realtime: bool) -> Result<Summary> {
        let frame = Duration::from_secs_f64(1.0 / self.table.config().refresh_rate as f64);
        let mut deadline = Instant::now();

        while !self.is_finished() {
            self.step()?;
            if realtime {
                deadline += frame;
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                } else {
                    debug!(behind_us = (now - deadline).as_micros() as u64, "tick overran");
                }
            }
        }
        Ok(self.summary.clone())
    }

    /// Flush the recording, if any
    pub fn finish(self) -> Result<Option<W>> {
        self.recorder.map(Recorder::finish).transpose()
    }
}
