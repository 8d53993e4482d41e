use crate::core::{GameState, Label};
use crate::error::NoLegalMoveError;
use crate::logic::{apply_move, legal_moves, rough_outcome, Outcome};
use crate::player::PlayerController;

/// Picks the move whose resulting state looks worst for the opponent,
/// judged by the two-ply [`rough_outcome`] estimate.
pub fn best_move_heuristic(state: &GameState) -> Result<Label, NoLegalMoveError> {
    let mut best: Option<(Outcome, Label)> = None;

    for mv in legal_moves(state) {
        let Ok(next) = apply_move(state, mv) else {
            continue;
        };
        // 相手にとって悪い局面は自分にとって良い
        let guessed = -rough_outcome(&next);
        if best.map_or(true, |(score, _)| guessed > score) {
            best = Some((guessed, mv));
        }
    }

    let (score, mv) = best.ok_or(NoLegalMoveError)?;
    tracing::debug!(%mv, ?score, "rough outcome chose move");
    Ok(mv)
}

pub struct RoughOutcomeAI {
    pub name: String,
}

impl RoughOutcomeAI {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RoughOutcomeAI {
    fn choose_move(&self, state: &GameState) -> Option<Label> {
        best_move_heuristic(state).ok()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
