//! Session recording format for the Pong table
//!
//! Uses postcard for compact binary serialization. Streams are COBS framed so
//! each record ends in a zero byte and a reader can resync after a torn write.

use postcard::{from_bytes, from_bytes_cobs, to_allocvec, to_allocvec_cobs};
use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Sound cue raised during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    HitWall,
    HitPaddle,
    MissBall,
}

/// Everything a renderer needs for one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_size: f32,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    /// Width and length, shared by both paddles
    pub paddle_size: [f32; 2],
    pub score_left: u32,
    pub score_right: u32,
    pub cues: Vec<Cue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Record {
    /// First record of every recording
    Session {
        refresh_rate: u32,
        seed: Option<u64>,
        /// Table box as left, top, right, bottom
        table: [f32; 4],
        player: Side,
    },

    Frame(Frame),

    /// A side passed the winning score
    RoundOver { tick: u64, round: u32, winner: Side },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Record {
    /// Serialize a record to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize a record from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }

    /// Serialize as one COBS frame, terminated by a zero byte
    pub fn to_frame(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec_cobs(self)
    }

    /// Deserialize one COBS frame; decodes in place
    pub fn from_frame(frame: &mut [u8]) -> Result<Self, postcard::Error> {
        from_bytes_cobs(frame)
    }
}

/// Decode every complete frame in a recorded stream.
///
/// A trailing partial frame (no terminating zero) is ignored.
pub fn decode_stream(bytes: &[u8]) -> Result<Vec<Record>, postcard::Error> {
    let mut records = Vec::new();
    let mut rest = bytes;
    while let Some(end) = rest.iter().position(|&b| b == 0) {
        let mut frame = rest[..=end].to_vec();
        rest = &rest[end + 1..];
        if frame.len() > 1 {
            records.push(Record::from_frame(&mut frame)?);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tick: u64) -> Frame {
        Frame {
            tick,
            ball_x: 595.0,
            ball_y: 172.5,
            ball_size: 15.0,
            left_paddle_y: 445.0,
            right_paddle_y: 301.0,
            paddle_size: [11.0, 67.0],
            score_left: 5,
            score_right: 3,
            cues: vec![Cue::HitWall, Cue::HitPaddle],
        }
    }

    #[test]
    fn test_record_serialization() {
        let msg = Record::Frame(frame(100));
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = Record::from_bytes(&bytes).expect("Deserialization should succeed");
        match decoded {
            Record::Frame(f) => {
                assert_eq!(f.tick, 100);
                assert_eq!(f.ball_x, 595.0);
                assert_eq!(f.cues, vec![Cue::HitWall, Cue::HitPaddle]);
            }
            _ => panic!("Record type mismatch"),
        }
    }

    #[test]
    fn test_frame_has_single_terminator() {
        let msg = Record::Session {
            refresh_rate: 60,
            seed: Some(0),
            table: [95.0, 95.0, 1095.0, 795.0],
            player: Side::Right,
        };
        let bytes = msg.to_frame().expect("Serialization should succeed");
        assert_eq!(bytes.last(), Some(&0));
        assert_eq!(bytes.iter().filter(|&&b| b == 0).count(), 1);
    }

    #[test]
    fn test_decode_stream() {
        let records = vec![
            Record::Session {
                refresh_rate: 60,
                seed: None,
                table: [95.0, 95.0, 1095.0, 795.0],
                player: Side::Right,
            },
            Record::Frame(frame(1)),
            Record::RoundOver {
                tick: 2,
                round: 1,
                winner: Side::Left,
            },
        ];
        let mut stream = Vec::new();
        for record in &records {
            stream.extend(record.to_frame().expect("Serialization should succeed"));
        }
        // Torn final write
        let torn = Record::Frame(frame(3)).to_frame().expect("Serialization should succeed");
        stream.extend(&torn[..torn.len() / 2]);

        let decoded = decode_stream(&stream).expect("Stream should decode");
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_corrupt_frame_is_an_error() {
        let mut garbage = vec![0x01, 0x05, 0x00];
        assert!(Record::from_frame(&mut garbage).is_err());
    }
}
