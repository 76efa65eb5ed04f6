use game_core::{Table, TickInput};

/// Synthetic mouse for the player paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hand {
    /// Mouse parked at one screen y
    Still { mouse_y: f32 },
    /// Chases the ball while it approaches, drifts back to the middle
    /// otherwise; moves at most `max_step` screen pixels per tick
    Follow { mouse_y: f32, max_step: f32 },
}

impl Hand {
    pub fn still(mouse_y: f32) -> Self {
        Hand::Still { mouse_y }
    }

    /// Start with the mouse centred on the player's travel
    pub fn follow(table: &Table, max_step: f32) -> Self {
        let geometry = table.player().geometry();
        Hand::Follow {
            mouse_y: geometry.mouse_for(geometry.mid_y()),
            max_step,
        }
    }

    /// Move the hand for this tick and sample it
    pub fn input(&mut self, table: &Table) -> TickInput {
        match self {
            Hand::Still { mouse_y } => TickInput::new(*mouse_y),
            Hand::Follow { mouse_y, max_step } => {
                let player = table.player();
                let geometry = player.geometry();
                let ball = table.ball();
                let aim = if player.side().is_approached_by(ball.direction()) {
                    ball.position().y
                } else {
                    geometry.mid_y()
                };
                let target = geometry.mouse_for(aim);
                *mouse_y += (target - *mouse_y).clamp(-*max_step, *max_step);
                TickInput::new(*mouse_y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Config;

    #[test]
    fn test_still_hand_never_moves() {
        let table = Table::with_seed(Config::new(), 1);
        let mut hand = Hand::still(321.0);
        assert_eq!(hand.input(&table).mouse_y, 321.0);
        assert_eq!(hand.input(&table).mouse_y, 321.0);
    }

    #[test]
    fn test_follow_hand_is_speed_limited() {
        let mut table = Table::with_seed(Config::new(), 1);
        let mut hand = Hand::follow(&table, 2.0);
        let mut last = hand.input(&table).mouse_y;
        for _ in 0..200 {
            let input = hand.input(&table);
            assert!((input.mouse_y - last).abs() <= 2.0 + 1e-3);
            last = input.mouse_y;
            table.tick(&input);
        }
    }

    #[test]
    fn test_follow_hand_stays_in_mouse_range() {
        let mut table = Table::with_seed(Config::new(), 2);
        let range = table.player().geometry().mouse;
        let mut hand = Hand::follow(&table, 50.0);
        for _ in 0..2_000 {
            let input = hand.input(&table);
            assert!(input.mouse_y >= range.min - 1e-3 && input.mouse_y <= range.max + 1e-3);
            table.tick(&input);
        }
    }
}
