use crate::core::{Board, GameState, Label, PlayerId};
use crate::error::{ConfigurationError, InvalidMoveError};
use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// 初期局面の生成
pub fn new_state(side: usize, starting_player: PlayerId) -> Result<GameState, ConfigurationError> {
    let board = Board::new(side)?;
    Ok(GameState::from_parts(board, starting_player))
}

/// 勝利に必要なレイライン数 ceil((3N+3)/2)
pub fn winning_threshold(state: &GameState) -> usize {
    (state.board().ley_line_total() + 1) / 2
}

/// 終局判定
pub fn is_terminal(state: &GameState) -> bool {
    let needed = winning_threshold(state);
    state.ley_lines_owned(PlayerId::Player1) >= needed
        || state.ley_lines_owned(PlayerId::Player2) >= needed
}

/// `player` wins iff the game is over and it is the other player's turn,
/// i.e. `player` made the move that ended it.
pub fn is_winner(state: &GameState, player: PlayerId) -> bool {
    state.current_player() != player && is_terminal(state)
}

/// 終局していればその勝者
pub fn winner(state: &GameState) -> Option<PlayerId> {
    is_terminal(state).then(|| state.current_player().opponent())
}

/// 合法手生成 (昇順・重複なし、終局後は空)
pub fn legal_moves(state: &GameState) -> Vec<Label> {
    if is_terminal(state) {
        return Vec::new();
    }
    state.board().unclaimed_labels()
}

/// 移動適用
pub fn apply_move(state: &GameState, label: Label) -> Result<GameState, InvalidMoveError> {
    if is_terminal(state) {
        return Err(InvalidMoveError::GameOver);
    }
    let cell = state
        .board()
        .cell_index(label)
        .ok_or(InvalidMoveError::UnknownCell(label))?;
    if state.board().cell_owner(label).is_some() {
        return Err(InvalidMoveError::AlreadyClaimed(label));
    }

    let mover = state.current_player();
    let mut next = state.board().clone();
    let captured = next.claim(cell, mover);
    tracing::trace!(%label, %mover, captured = captured.len(), "applied move");

    Ok(GameState::from_parts(next, mover.opponent()))
}

/// 粗い評価値 (手番側から見た WIN / DRAW / LOSE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    pub fn value(self) -> i32 {
        match self {
            Outcome::Lose => -1,
            Outcome::Draw => 0,
            Outcome::Win => 1,
        }
    }
}

impl Neg for Outcome {
    type Output = Outcome;

    fn neg(self) -> Outcome {
        match self {
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
            Outcome::Win => Outcome::Lose,
        }
    }
}

/// Two-ply estimate of the best outcome the player to move can guarantee.
///
/// - terminal state: `Lose` (the opponent just won)
/// - some move ends the game: `Win`
/// - every move allows an immediate winning reply: `Lose`
/// - otherwise `Draw`
pub fn rough_outcome(state: &GameState) -> Outcome {
    if is_terminal(state) {
        return Outcome::Lose;
    }

    let children: Vec<GameState> = legal_moves(state)
        .into_iter()
        .filter_map(|mv| apply_move(state, mv).ok())
        .collect();

    if children.iter().any(is_terminal) {
        return Outcome::Win;
    }

    let every_reply_loses = !children.is_empty()
        && children.iter().all(|child| {
            legal_moves(child)
                .into_iter()
                .filter_map(|reply| apply_move(child, reply).ok())
                .any(|grandchild| is_terminal(&grandchild))
        });

    if every_reply_loses {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Axis;

    fn label(s: &str) -> Label {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_legal_moves_side_one() {
        let state = new_state(1, PlayerId::Player1).unwrap();
        assert_eq!(legal_moves(&state), vec![label("A"), label("B"), label("C")]);
    }

    #[test]
    fn test_apply_move_flips_turn_and_keeps_parent() {
        let state = new_state(2, PlayerId::Player1).unwrap();
        let next = apply_move(&state, label("D")).unwrap();
        assert_eq!(next.current_player(), PlayerId::Player2);
        assert_eq!(next.board().cell_owner(label("D")), Some(PlayerId::Player1));
        assert_eq!(state.board().cell_owner(label("D")), None);
        assert_eq!(state.current_player(), PlayerId::Player1);
    }

    #[test]
    fn test_starting_player_two() {
        let state = new_state(2, PlayerId::Player2).unwrap();
        let next = apply_move(&state, label("A")).unwrap();
        assert_eq!(next.board().cell_owner(label("A")), Some(PlayerId::Player2));
        assert_eq!(
            next.board().ley_line_owner(Axis::Flat, 0),
            Some(PlayerId::Player2)
        );
    }

    #[test]
    fn test_rejects_claimed_and_unknown_cells() {
        let state = new_state(1, PlayerId::Player1).unwrap();
        assert_eq!(
            apply_move(&state, label("Z")),
            Err(InvalidMoveError::UnknownCell(label("Z")))
        );
        let mut state = new_state(2, PlayerId::Player1).unwrap();
        state = apply_move(&state, label("D")).unwrap();
        assert_eq!(
            apply_move(&state, label("D")),
            Err(InvalidMoveError::AlreadyClaimed(label("D")))
        );
    }

    #[test]
    fn test_terminal_state_is_absorbing() {
        let state = new_state(1, PlayerId::Player1).unwrap();
        let done = apply_move(&state, label("A")).unwrap();
        assert!(is_terminal(&done));
        assert!(legal_moves(&done).is_empty());
        assert_eq!(
            apply_move(&done, label("B")),
            Err(InvalidMoveError::GameOver)
        );
        assert!(is_winner(&done, PlayerId::Player1));
        assert!(!is_winner(&done, PlayerId::Player2));
        assert_eq!(winner(&done), Some(PlayerId::Player1));
    }

    #[test]
    fn test_rough_outcome_side_one_is_win() {
        let state = new_state(1, PlayerId::Player1).unwrap();
        assert_eq!(rough_outcome(&state), Outcome::Win);
    }

    #[test]
    fn test_rough_outcome_terminal_is_lose() {
        let state = new_state(1, PlayerId::Player1).unwrap();
        let done = apply_move(&state, label("C")).unwrap();
        assert_eq!(rough_outcome(&done), Outcome::Lose);
    }

    #[test]
    fn test_outcome_negation() {
        assert_eq!(-Outcome::Win, Outcome::Lose);
        assert_eq!(-Outcome::Lose, Outcome::Win);
        assert_eq!(-Outcome::Draw, Outcome::Draw);
        assert!(Outcome::Win > Outcome::Draw && Outcome::Draw > Outcome::Lose);
    }

    #[test]
    fn test_summary_format() {
        let state = new_state(1, PlayerId::Player1).unwrap();
        assert_eq!(
            state.to_string(),
            "P1's Turn: true - P1's Leylines 0 - P2's Leylines 0 - LeyLines Left: 6"
        );
    }
}
