use glam::Vec2;

use crate::paddle::Side;
use crate::params::Params;
use crate::playfield::Playfield;

/// Where the presentation layer draws the two counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreLayout {
    pub left_anchor: Vec2,
    pub right_anchor: Vec2,
    pub glyph_size: f32,
}

/// Text currently shown for each counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreText {
    pub left: String,
    pub right: String,
}

/// Game score tracking
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    left: u32,
    right: u32,
    layout: ScoreLayout,
    text: ScoreText,
}

impl Score {
    pub fn create(playfield: &Playfield) -> Self {
        let size = playfield.size();
        let y = (playfield.top() + 0.05 * size.y).round();
        let layout = ScoreLayout {
            left_anchor: Vec2::new(
                (playfield.left() + 0.4 * size.x + Params::SHADOW_OFFSET).round(),
                y,
            ),
            right_anchor: Vec2::new(
                (playfield.left() + 0.6 * size.x + Params::SHADOW_OFFSET).round(),
                y,
            ),
            glyph_size: 0.15 * size.y,
        };
        let mut score = Self {
            left: 0,
            right: 0,
            layout,
            text: ScoreText::default(),
        };
        score.update();
        score
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn layout(&self) -> &ScoreLayout {
        &self.layout
    }

    pub fn text(&self) -> &ScoreText {
        &self.text
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Copy the counters into the display text
    pub fn update(&mut self) {
        self.text.left = self.left.to_string();
        self.text.right = self.right.to_string();
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
        self.update();
    }

    /// Either side has scored more than [`Params::WIN_THRESHOLD`] points
    pub fn has_won(&self) -> bool {
        self.left > Params::WIN_THRESHOLD || self.right > Params::WIN_THRESHOLD
    }

    /// The side that has won, if any
    pub fn winner(&self) -> Option<Side> {
        if !self.has_won() {
            None
        } else if self.left >= self.right {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }
}
