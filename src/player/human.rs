use crate::core::{GameState, Label};
use crate::logic::apply_move;
use crate::player::PlayerController;
use std::io::{self, BufRead, Write};

/// 標準入力から指し手を読むプレイヤー
///
/// Bad input is reported and re-prompted. End of input counts as resigning.
pub struct HumanController {
    name: String,
}

impl HumanController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn read_move<R: BufRead, W: Write>(
        &self,
        state: &GameState,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Option<Label>> {
        loop {
            write!(out, "{} ({}), enter a move: ", self.name, state.current_player())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let checked = line
                .parse::<Label>()
                .and_then(|label| apply_move(state, label).map(|_| label));
            match checked {
                Ok(label) => return Ok(Some(label)),
                Err(err) => writeln!(out, "Invalid move: {err}")?,
            }
        }
    }
}

impl PlayerController for HumanController {
    fn choose_move(&self, state: &GameState) -> Option<Label> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        match self.read_move(state, &mut stdin.lock(), &mut stdout) {
            Ok(mv) => mv,
            Err(err) => {
                tracing::warn!(%err, "failed to read move from stdin");
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
