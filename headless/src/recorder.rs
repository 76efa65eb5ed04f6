use anyhow::{Context, Result};
use game_core::{Cue, Side, Table, TickReport};
use proto::{Frame, Record};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends COBS framed records to a writer
pub struct Recorder<W: Write> {
    writer: W,
    records: u64,
}

impl Recorder<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("create recording {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Recorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, records: 0 }
    }

    pub fn write(&mut self, record: &Record) -> Result<()> {
        let bytes = record.to_frame().context("encode record")?;
        self.writer.write_all(&bytes).context("write record")?;
        self.records += 1;
        Ok(())
    }

    /// Records written so far
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().context("flush recording")?;
        Ok(self.writer)
    }
}

pub fn side_tag(side: Side) -> proto::Side {
    match side {
        Side::Left => proto::Side::Left,
        Side::Right => proto::Side::Right,
    }
}

fn cue_tag(cue: Cue) -> proto::Cue {
    match cue {
        Cue::HitWall => proto::Cue::HitWall,
        Cue::HitPaddle => proto::Cue::HitPaddle,
        Cue::MissBall => proto::Cue::MissBall,
    }
}

/// Header record describing the table
pub fn session_record(table: &Table, seed: Option<u64>) -> Record {
    let playfield = table.playfield();
    Record::Session {
        refresh_rate: table.config().refresh_rate,
        seed,
        table: [
            playfield.left(),
            playfield.top(),
            playfield.right(),
            playfield.bottom(),
        ],
        player: side_tag(table.player().side()),
    }
}

/// Snapshot of the table after `report`'s tick
pub fn frame_record(table: &Table, report: &TickReport) -> Record {
    let (left, right) = match table.player().side() {
        Side::Left => (table.player(), table.computer()),
        Side::Right => (table.computer(), table.player()),
    };
    let ball = table.ball().position();
    let paddle_size = left.size();
    Record::Frame(Frame {
        tick: report.tick,
        ball_x: ball.x,
        ball_y: ball.y,
        ball_size: table.ball().size(),
        left_paddle_y: left.position().y,
        right_paddle_y: right.position().y,
        paddle_size: [paddle_size.x, paddle_size.y],
        score_left: table.score().left(),
        score_right: table.score().right(),
        cues: report.cues().into_iter().map(cue_tag).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, TickInput};

    #[test]
    fn test_recorder_writes_decodable_stream() {
        let mut table = Table::with_seed(Config::new(), 1);
        let mut recorder = Recorder::new(Vec::new());
        recorder.write(&session_record(&table, Some(1))).unwrap();
        for _ in 0..3 {
            let report = table.tick(&TickInput::new(540.0));
            recorder.write(&frame_record(&table, &report)).unwrap();
        }
        assert_eq!(recorder.records(), 4);

        let bytes = recorder.finish().unwrap();
        let records = proto::decode_stream(&bytes).unwrap();
        assert_eq!(records.len(), 4);
        assert!(matches!(
            records[0],
            Record::Session {
                refresh_rate: 60,
                seed: Some(1),
                player: proto::Side::Right,
                ..
            }
        ));
        match &records[3] {
            Record::Frame(frame) => {
                assert_eq!(frame.tick, 3);
                assert_eq!(frame.paddle_size, [11.0, 67.0]);
            }
            other => panic!("expected a frame, got {other:?}"),
        }
    }

    #[test]
    fn test_frame_orders_paddles_by_side() {
        let config = Config {
            player_side: Side::Left,
            ..Config::new()
        };
        let mut table = Table::with_seed(config, 4);
        let report = table.tick(&TickInput::new(0.0));
        let Record::Frame(frame) = frame_record(&table, &report) else {
            panic!("expected a frame");
        };
        assert_eq!(frame.left_paddle_y, table.player().position().y);
        assert_eq!(frame.right_paddle_y, table.computer().position().y);
        assert_eq!(frame.left_paddle_y, table.player().geometry().min_y);
    }
}
