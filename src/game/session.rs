use super::{Board, Player};

/// The tagged result of a single drop attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The piece landed and play passes to the other player.
    Continue,
    /// The piece completed four-in-a-row for this player.
    Win(Player),
    /// The piece filled the last cell without completing a line.
    Tie,
    /// The move was ignored: the game is already over, or the column is
    /// full or out of range. Nothing changed.
    Rejected,
}

/// Turn-taking state machine for one game, wrapping a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    finished: bool,
}

impl GameSession {
    /// Create a session at the start of a game: empty board, player One to
    /// move.
    pub fn new(width: usize, height: usize) -> Self {
        GameSession {
            board: Board::new(width, height),
            current_player: Player::One,
            finished: false,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check if game is over
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full or out-of-range column, or a finished game, rejects the move
    /// without touching any state. Win is checked before tie, so a move that
    /// both fills the board and completes a line is a win. The turn only
    /// passes on [`Outcome::Continue`].
    pub fn drop_piece(&mut self, column: usize) -> Outcome {
        if self.finished {
            return Outcome::Rejected;
        }

        let row = match self.board.landing_row(column) {
            Some(row) => row,
            None => return Outcome::Rejected,
        };

        self.board.place(row, column, self.current_player.to_cell());

        if self.board.check_win(row, column) {
            self.finished = true;
            return Outcome::Win(self.current_player);
        }

        if self.board.is_full() {
            self.finished = true;
            return Outcome::Tie;
        }

        self.current_player = self.current_player.other();
        Outcome::Continue
    }

    /// Start a fresh game: new empty board, player One to move.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.board = Board::new(width, height);
        self.current_player = Player::One;
        self.finished = false;
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = GameSession::new(7, 6);
        assert_eq!(session.current_player(), Player::One);
        assert!(!session.is_finished());
        assert!(!session.board().is_full());
    }

    #[test]
    fn test_drop_alternates_turns() {
        let mut session = GameSession::new(7, 6);

        assert_eq!(session.drop_piece(3), Outcome::Continue);
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.board().get(5, 3), Cell::One);

        assert_eq!(session.drop_piece(3), Outcome::Continue);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.board().get(4, 3), Cell::Two);
    }

    #[test]
    fn test_column_stacks_alternating_pieces() {
        let mut session = GameSession::new(7, 6);

        // Three drops into column 0 stack One, Two, One from the bottom up
        for _ in 0..3 {
            assert_eq!(session.drop_piece(0), Outcome::Continue);
        }
        assert_eq!(session.board().get(5, 0), Cell::One);
        assert_eq!(session.board().get(4, 0), Cell::Two);
        assert_eq!(session.board().get(3, 0), Cell::One);
    }

    #[test]
    fn test_full_column_rejected_without_mutation() {
        let mut session = GameSession::new(7, 6);

        // Fill column 0; alternating pieces in one column can't win
        for _ in 0..6 {
            assert_eq!(session.drop_piece(0), Outcome::Continue);
        }

        let snapshot = session.clone();
        for _ in 0..3 {
            assert_eq!(session.drop_piece(0), Outcome::Rejected);
        }
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        let mut session = GameSession::new(7, 6);
        let snapshot = session.clone();
        assert_eq!(session.drop_piece(7), Outcome::Rejected);
        assert_eq!(session.drop_piece(99), Outcome::Rejected);
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_horizontal_win_on_fourth_placement() {
        let mut session = GameSession::new(7, 6);

        // One plays columns 0..=3 along the bottom row; Two stacks on top
        // of One's pieces in between, staying off the bottom row.
        assert_eq!(session.drop_piece(0), Outcome::Continue); // One
        assert_eq!(session.drop_piece(0), Outcome::Continue); // Two
        assert_eq!(session.drop_piece(1), Outcome::Continue); // One
        assert_eq!(session.drop_piece(1), Outcome::Continue); // Two
        assert_eq!(session.drop_piece(2), Outcome::Continue); // One
        assert_eq!(session.drop_piece(2), Outcome::Continue); // Two

        assert_eq!(session.drop_piece(3), Outcome::Win(Player::One));
        assert!(session.is_finished());
        // The winner stays the current player after a terminal move
        assert_eq!(session.current_player(), Player::One);
    }

    #[test]
    fn test_vertical_win() {
        let mut session = GameSession::new(7, 6);

        for _ in 0..3 {
            assert_eq!(session.drop_piece(0), Outcome::Continue); // One
            assert_eq!(session.drop_piece(1), Outcome::Continue); // Two
        }
        assert_eq!(session.drop_piece(0), Outcome::Win(Player::One));
    }

    #[test]
    fn test_rejected_after_finish() {
        let mut session = GameSession::new(7, 6);

        for _ in 0..3 {
            session.drop_piece(0);
            session.drop_piece(1);
        }
        assert_eq!(session.drop_piece(0), Outcome::Win(Player::One));

        let snapshot = session.clone();
        assert_eq!(session.drop_piece(2), Outcome::Rejected);
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_win_takes_precedence_over_tie() {
        // Single-row board: the last drop both fills the board and
        // completes One's line in columns 0..=3.
        let mut session = GameSession::new(7, 1);

        assert_eq!(session.drop_piece(0), Outcome::Continue); // One
        assert_eq!(session.drop_piece(4), Outcome::Continue); // Two
        assert_eq!(session.drop_piece(1), Outcome::Continue); // One
        assert_eq!(session.drop_piece(5), Outcome::Continue); // Two
        assert_eq!(session.drop_piece(2), Outcome::Continue); // One
        assert_eq!(session.drop_piece(6), Outcome::Continue); // Two

        assert_eq!(session.drop_piece(3), Outcome::Win(Player::One));
        assert!(session.is_finished());
        assert!(session.board().is_full());
    }

    #[test]
    fn test_tie_on_full_board() {
        // Single-row board filled One, Two, One, ... holds no line of four
        let mut session = GameSession::new(7, 1);

        for col in 0..6 {
            assert_eq!(session.drop_piece(col), Outcome::Continue);
        }
        assert_eq!(session.drop_piece(6), Outcome::Tie);
        assert!(session.is_finished());
        // No turn switch on a terminal move
        assert_eq!(session.current_player(), Player::One);
    }

    #[test]
    fn test_reset_restores_playable_state() {
        let mut session = GameSession::new(7, 6);

        for _ in 0..3 {
            session.drop_piece(0);
            session.drop_piece(1);
        }
        assert_eq!(session.drop_piece(0), Outcome::Win(Player::One));

        session.reset(7, 6);
        assert!(!session.is_finished());
        assert_eq!(session.current_player(), Player::One);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(session.board().get(row, col), Cell::Empty);
            }
        }
        assert_eq!(session.drop_piece(3), Outcome::Continue);
    }
}
