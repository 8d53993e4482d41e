//! Stonehenge: a two-player ley-line capture game on a hexagonal board,
//! with exhaustive minimax and two-ply heuristic players.
//!
//! The rules live in [`logic`] over the value types of [`core`]; move
//! selection lives in [`player::ai`]. Everything else is driver code.

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;
