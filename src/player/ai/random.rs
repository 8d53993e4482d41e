use crate::core::{GameState, Label};
use crate::logic::legal_moves;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// Uniformly random legal moves. Seeded instances are reproducible.
pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(name: &str, seed: u64) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, state: &GameState) -> Option<Label> {
        let moves = legal_moves(state);
        moves.choose(&mut *self.rng.borrow_mut()).copied()
    }
}
