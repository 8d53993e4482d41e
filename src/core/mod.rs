pub mod board;
pub mod layout;
pub mod state;
pub mod types;

pub use board::Board;
pub use layout::{CellSpec, Layout, LeyLineSpec, MAX_SIDE, MIN_SIDE};
pub use state::GameState;
pub use types::{Axis, Label, PlayerId};
