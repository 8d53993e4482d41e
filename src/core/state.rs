use super::board::Board;
use super::types::PlayerId;
use std::fmt;

/// 局面 (盤面 + 手番)
///
/// A value type: rules in [`crate::logic`] never modify a state, they build a
/// new one, so a search can branch from the same ancestor many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: PlayerId,
}

impl GameState {
    pub(crate) fn from_parts(board: Board, current_player: PlayerId) -> Self {
        GameState {
            board,
            current_player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn side_length(&self) -> usize {
        self.board.side()
    }

    pub fn ley_lines_owned(&self, player: PlayerId) -> usize {
        self.board.ley_lines_owned(player)
    }

    pub fn ley_lines_remaining(&self) -> usize {
        self.board.ley_line_total()
            - self.ley_lines_owned(PlayerId::Player1)
            - self.ley_lines_owned(PlayerId::Player2)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "P1's Turn: {} - P1's Leylines {} - P2's Leylines {} - LeyLines Left: {}",
            self.current_player == PlayerId::Player1,
            self.ley_lines_owned(PlayerId::Player1),
            self.ley_lines_owned(PlayerId::Player2),
            self.ley_lines_remaining()
        )
    }
}
