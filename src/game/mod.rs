use crate::core::{GameState, Label, PlayerId};
use crate::display::{print_board, DisplayState};
use crate::logic::{apply_move, is_terminal, legal_moves, winner};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

pub const INSTRUCTIONS: &str = "Players take turns claiming cells (the capital letters \
in the diagram). A player who holds at least half of the cells on a ley-line \
(the @ markers and the lines leading from them) captures that ley-line. \
A captured ley-line can never be taken by the other player. \
The first player to capture at least half of all ley-lines wins.";

/// 1局の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<PlayerId>,
    pub moves: usize,
    /// The loser stopped answering (resigned, end of input) instead of being outplayed.
    pub resigned: bool,
}

pub struct Game {
    pub state: GameState,
    pub show_board: bool,
}

impl Game {
    pub fn new(state: GameState) -> Self {
        Game {
            state,
            show_board: true,
        }
    }

    /// Runs the turn loop until the game ends. `on_move` sees each move and
    /// the state it produced.
    pub fn play<F>(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
        mut on_move: F,
    ) -> GameResult
    where
        F: FnMut(PlayerId, Label, &GameState),
    {
        let mut moves = 0;
        let mut display = DisplayState::new();

        loop {
            let mover = self.state.current_player();
            let controller = match mover {
                PlayerId::Player1 => p1,
                PlayerId::Player2 => p2,
            };

            if self.show_board {
                display.status_msg = Some(format!("{}'s turn ({mover})", controller.name()));
                print_board(&self.state, &display);
            }

            if is_terminal(&self.state) || legal_moves(&self.state).is_empty() {
                let result = GameResult {
                    winner: winner(&self.state),
                    moves,
                    resigned: false,
                };
                tracing::debug!(winner = ?result.winner, moves, "game finished");
                return result;
            }

            let Some(mv) = controller.choose_move(&self.state) else {
                tracing::info!(player = %mover, "player resigned");
                return GameResult {
                    winner: Some(mover.opponent()),
                    moves,
                    resigned: true,
                };
            };

            match apply_move(&self.state, mv) {
                Ok(next) => {
                    self.state = next;
                    moves += 1;
                    display.last_move = Some(mv);
                    on_move(mover, mv, &self.state);
                }
                // 不正な手を返したコントローラは投了扱い
                Err(err) => {
                    tracing::warn!(player = %mover, %mv, %err, "controller returned an illegal move");
                    return GameResult {
                        winner: Some(mover.opponent()),
                        moves,
                        resigned: true,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::new_state;
    use crate::player::{MinimaxAI, RandomAI, RoughOutcomeAI, SearchMode};

    struct Resigner;

    impl PlayerController for Resigner {
        fn choose_move(&self, _state: &GameState) -> Option<Label> {
            None
        }

        fn name(&self) -> &str {
            "Resigner"
        }
    }

    fn quiet_game(side: usize, first: PlayerId) -> Game {
        let mut game = Game::new(new_state(side, first).unwrap());
        game.show_board = false;
        game
    }

    #[test]
    fn test_side_one_first_move_wins() {
        let p1 = MinimaxAI::new("P1 AI", SearchMode::Recursive);
        let p2 = MinimaxAI::new("P2 AI", SearchMode::Iterative);
        let mut game = quiet_game(1, PlayerId::Player1);

        let mut seen = Vec::new();
        let result = game.play(&p1, &p2, |player, mv, _| seen.push((player, mv)));

        assert_eq!(result.winner, Some(PlayerId::Player1));
        assert_eq!(result.moves, 1);
        assert!(!result.resigned);
        assert_eq!(seen, vec![(PlayerId::Player1, "A".parse().unwrap())]);
    }

    #[test]
    fn test_random_game_reaches_terminal() {
        let p1 = RandomAI::with_seed("r1", 11);
        let p2 = RoughOutcomeAI::new("rough");
        let mut game = quiet_game(3, PlayerId::Player2);

        let mut last_state = None;
        let result = game.play(&p1, &p2, |_, _, state| last_state = Some(state.clone()));

        assert!(is_terminal(&game.state));
        assert_eq!(last_state.as_ref(), Some(&game.state));
        assert_eq!(result.winner, winner(&game.state));
        assert!(result.moves >= 1);
    }

    #[test]
    fn test_resignation_gives_opponent_the_win() {
        let p2 = RandomAI::with_seed("r", 1);
        let mut game = quiet_game(2, PlayerId::Player1);
        let result = game.play(&Resigner, &p2, |_, _, _| {});
        assert_eq!(
            result,
            GameResult {
                winner: Some(PlayerId::Player2),
                moves: 0,
                resigned: true,
            }
        );
    }

    #[test]
    fn test_instructions_mention_ley_lines() {
        assert!(INSTRUCTIONS.contains("ley-line"));
    }
}
