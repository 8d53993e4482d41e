//! Exhaustive negamax over the full game tree.
//!
//! Scores are always from the point of view of the player to move:
//! `1` win, `0` draw, `-1` loss. A parent's score for a move is the negated
//! score of the child state. Among equal scores the earliest move in
//! `legal_moves` order wins.
//!
//! Two forms are provided, one recursive and one driven by an explicit work
//! stack. They visit moves in the same order and return the same move.

use crate::core::{GameState, Label};
use crate::error::NoLegalMoveError;
use crate::logic::{apply_move, is_terminal, is_winner, legal_moves};
use crate::player::PlayerController;

const WIN: i32 = 1;
const DRAW: i32 = 0;
const LOSS: i32 = -1;

/// 終局局面の評価 (手番側視点)
fn terminal_value(state: &GameState) -> i32 {
    let me = state.current_player();
    if is_winner(state, me) {
        WIN
    } else if is_winner(state, me.opponent()) {
        LOSS
    } else {
        DRAW
    }
}

/// Keeps `best` as the first strict maximum seen.
fn improves(best: Option<i32>, score: i32) -> bool {
    best.map_or(true, |b| score > b)
}

/// 再帰版 negamax
pub fn negamax(state: &GameState) -> i32 {
    if is_terminal(state) {
        return terminal_value(state);
    }

    let mut best = None;
    for mv in legal_moves(state) {
        let Ok(child) = apply_move(state, mv) else {
            continue;
        };
        let score = -negamax(&child);
        if improves(best, score) {
            best = Some(score);
        }
        // 勝ち以上の値はないので残りの兄弟は見ない
        if score == WIN {
            break;
        }
    }
    best.unwrap_or(DRAW)
}

/// Recursive minimax move choice.
pub fn best_move_minimax(state: &GameState) -> Result<Label, NoLegalMoveError> {
    let mut best: Option<(i32, Label)> = None;
    for mv in legal_moves(state) {
        let Ok(child) = apply_move(state, mv) else {
            continue;
        };
        let score = -negamax(&child);
        if improves(best.map(|(s, _)| s), score) {
            best = Some((score, mv));
        }
        if score == WIN {
            break;
        }
    }

    let (score, mv) = best.ok_or(NoLegalMoveError)?;
    tracing::debug!(%mv, score, "recursive minimax chose move");
    Ok(mv)
}

/// 探索スタックの1フレーム
struct Frame {
    state: GameState,
    moves: Vec<Label>,
    next: usize,
    best: Option<(i32, Label)>,
}

impl Frame {
    fn new(state: GameState) -> Self {
        let moves = legal_moves(&state);
        Frame {
            state,
            moves,
            next: 0,
            best: None,
        }
    }

    /// Next child move to expand, or `None` when this frame is finished.
    fn advance(&mut self) -> Option<Label> {
        if matches!(self.best, Some((WIN, _))) {
            return None;
        }
        let mv = self.moves.get(self.next).copied()?;
        self.next += 1;
        Some(mv)
    }

    /// Records the (already negated) score of the child expanded last.
    fn record(&mut self, score: i32) {
        let mv = self.moves[self.next - 1];
        if improves(self.best.map(|(s, _)| s), score) {
            self.best = Some((score, mv));
        }
    }

    fn value(&self) -> i32 {
        if is_terminal(&self.state) {
            return terminal_value(&self.state);
        }
        self.best.map_or(DRAW, |(score, _)| score)
    }
}

/// Iterative negamax. Returns the root value and the chosen root move.
fn search_iterative(root: &GameState) -> (i32, Option<Label>) {
    let mut stack = vec![Frame::new(root.clone())];
    let mut result = (DRAW, None);

    while let Some(frame) = stack.last_mut() {
        if let Some(mv) = frame.advance() {
            match apply_move(&frame.state, mv) {
                Ok(child) => stack.push(Frame::new(child)),
                Err(err) => tracing::warn!(%mv, %err, "legal move rejected during search"),
            }
            continue;
        }

        let value = frame.value();
        let best = frame.best.map(|(_, mv)| mv);
        stack.pop();
        match stack.last_mut() {
            Some(parent) => parent.record(-value),
            None => result = (value, best),
        }
    }

    result
}

/// 反復版 negamax の評価値
pub fn negamax_iterative(state: &GameState) -> i32 {
    search_iterative(state).0
}

/// Iterative minimax move choice; agrees with [`best_move_minimax`].
pub fn best_move_minimax_iterative(state: &GameState) -> Result<Label, NoLegalMoveError> {
    if legal_moves(state).is_empty() {
        return Err(NoLegalMoveError);
    }
    let (score, mv) = search_iterative(state);
    let mv = mv.ok_or(NoLegalMoveError)?;
    tracing::debug!(%mv, score, "iterative minimax chose move");
    Ok(mv)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Recursive,
    Iterative,
}

pub struct MinimaxAI {
    pub name: String,
    pub mode: SearchMode,
}

impl MinimaxAI {
    pub fn new(name: &str, mode: SearchMode) -> Self {
        Self {
            name: name.to_string(),
            mode,
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, state: &GameState) -> Option<Label> {
        let chosen = match self.mode {
            SearchMode::Recursive => best_move_minimax(state),
            SearchMode::Iterative => best_move_minimax_iterative(state),
        };
        chosen.ok()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
