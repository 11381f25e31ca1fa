use crate::game::Player;

/// Cumulative win tallies, one per player. Owned by the front-end and kept
/// across game resets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    player_one: u32,
    player_two: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        ScoreBoard::default()
    }

    /// Add one to the winning player's tally
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scoreboard_is_zero() {
        let scores = ScoreBoard::new();
        assert_eq!(scores.wins(Player::One), 0);
        assert_eq!(scores.wins(Player::Two), 0);
    }

    #[test]
    fn test_record_win_increments_only_winner() {
        let mut scores = ScoreBoard::new();
        scores.record_win(Player::One);
        scores.record_win(Player::One);
        scores.record_win(Player::Two);
        assert_eq!(scores.wins(Player::One), 2);
        assert_eq!(scores.wins(Player::Two), 1);
    }
}
