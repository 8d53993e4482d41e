//! Text rendering of the hexagonal board.
//!
//! Row `r` is drawn on text line `2 + 2r`, cell `(r, c)` at column
//! `2 * (side + 1 - r) + 4 * c`. Neighbouring cells of a ley-line are joined
//! by `-`, `/` or `\`, and each ley-line has a marker (`@`, or the owner's
//! digit) one step past its end: left of a `-` line, above-right of a `/`
//! line, below-right of a `\` line.

use crate::core::{Axis, GameState, Label, PlayerId};
use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tint {
    Plain,
    Owner(PlayerId),
    LastMove,
}

struct Canvas {
    lines: Vec<Vec<(char, Tint)>>,
}

impl Canvas {
    fn new(height: usize, width: usize) -> Self {
        Canvas {
            lines: vec![vec![(' ', Tint::Plain); width]; height],
        }
    }

    fn put(&mut self, y: Option<usize>, x: Option<usize>, ch: char, tint: Tint) {
        if let (Some(y), Some(x)) = (y, x) {
            if let Some(slot) = self.lines.get_mut(y).and_then(|line| line.get_mut(x)) {
                *slot = (ch, tint);
            }
        }
    }

    fn into_lines(self) -> Vec<Vec<(char, Tint)>> {
        self.lines
            .into_iter()
            .map(|mut line| {
                while line.last().is_some_and(|(c, _)| *c == ' ') {
                    line.pop();
                }
                line
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct DisplayState {
    pub status_msg: Option<String>,
    pub last_move: Option<Label>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn draw(state: &GameState, last_move: Option<Label>) -> Canvas {
    let board = state.board();
    let layout = board.layout();
    let side = layout.side;
    let mut canvas = Canvas::new(2 * side + 5, 4 * side + 7);

    let pos = |cell: usize| {
        let spec = &layout.cells[cell];
        (2 + 2 * spec.row, 2 * (side + 1 - spec.row) + 4 * spec.col)
    };
    let owner_tint = |owner: Option<PlayerId>| owner.map_or(Tint::Plain, Tint::Owner);

    for (i, line) in layout.ley_lines.iter().enumerate() {
        // 隣接セル間の線
        for pair in line.members.windows(2) {
            let (y, x) = pos(pair[0]);
            match line.axis {
                Axis::Flat => canvas.put(Some(y), Some(x + 2), '-', Tint::Plain),
                Axis::LeftDiagonal => canvas.put(Some(y + 1), x.checked_sub(1), '/', Tint::Plain),
                Axis::RightDiagonal => canvas.put(Some(y + 1), Some(x + 1), '\\', Tint::Plain),
            }
        }

        // レイラインのマーカー
        let owner = board.ley_owner(i);
        let marker = owner.map_or('@', PlayerId::digit);
        let tint = owner_tint(owner);
        let (Some(&first), Some(&last)) = (line.members.first(), line.members.last()) else {
            continue;
        };
        match line.axis {
            Axis::Flat => {
                let (y, x) = pos(first);
                canvas.put(Some(y), x.checked_sub(2), '-', Tint::Plain);
                canvas.put(Some(y), x.checked_sub(4), marker, tint);
            }
            Axis::LeftDiagonal => {
                let (y, x) = pos(first);
                canvas.put(y.checked_sub(1), Some(x + 1), '/', Tint::Plain);
                canvas.put(y.checked_sub(2), Some(x + 2), marker, tint);
            }
            Axis::RightDiagonal => {
                let (y, x) = pos(last);
                canvas.put(Some(y + 1), Some(x + 1), '\\', Tint::Plain);
                canvas.put(Some(y + 2), Some(x + 2), marker, tint);
            }
        }
    }

    for (i, cell) in layout.cells.iter().enumerate() {
        let (y, x) = pos(i);
        let owner = board.cell_owner(cell.label);
        let ch = owner.map_or(cell.label.as_char(), PlayerId::digit);
        let tint = if last_move == Some(cell.label) {
            Tint::LastMove
        } else {
            owner_tint(owner)
        };
        canvas.put(Some(y), Some(x), ch, tint);
    }

    canvas
}

/// Plain text board, one line per text row, with a trailing newline.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    for line in draw(state, None).into_lines() {
        out.extend(line.into_iter().map(|(c, _)| c));
        out.push('\n');
    }
    out
}

/// 色付きで盤面を表示
pub fn print_board(state: &GameState, display: &DisplayState) {
    if let Some(msg) = &display.status_msg {
        println!("{}", msg.clone().bold().yellow());
    }
    for line in draw(state, display.last_move).into_lines() {
        let mut text = String::new();
        for (c, tint) in line {
            let styled = match tint {
                Tint::Plain => c.to_string(),
                Tint::Owner(PlayerId::Player1) => c.cyan().to_string(),
                Tint::Owner(PlayerId::Player2) => c.magenta().to_string(),
                Tint::LastMove => c.red().bold().to_string(),
            };
            text.push_str(&styled);
        }
        println!("{text}");
    }
    println!("{state}");
}
