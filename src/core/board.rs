use super::layout::{self, Layout};
use super::types::{Axis, Label, PlayerId};
use crate::error::ConfigurationError;

/// 盤面
///
/// The geometry is shared; only the owner arrays are per-board, so cloning a
/// board copies two short vectors.
#[derive(Debug, Clone)]
pub struct Board {
    layout: &'static Layout,
    /// セルの所有者 (row-major)
    cells: Vec<Option<PlayerId>>,
    /// レイラインの所有者 (axis-major, `Layout::ley_lines` と同じ順)
    ley_lines: Vec<Option<PlayerId>>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.layout.side == other.layout.side
            && self.cells == other.cells
            && self.ley_lines == other.ley_lines
    }
}

impl Eq for Board {}

impl Board {
    pub fn new(side: usize) -> Result<Self, ConfigurationError> {
        let layout = layout::layout(side)?;
        Ok(Board {
            layout,
            cells: vec![None; layout.cells.len()],
            ley_lines: vec![None; layout.ley_lines.len()],
        })
    }

    pub fn side(&self) -> usize {
        self.layout.side
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Row-major index of `label`, if the cell exists on this board.
    pub fn cell_index(&self, label: Label) -> Option<usize> {
        label.index().filter(|&idx| idx < self.cells.len())
    }

    pub fn contains(&self, label: Label) -> bool {
        self.cell_index(label).is_some()
    }

    pub fn cell_owner(&self, label: Label) -> Option<PlayerId> {
        self.cell_index(label).and_then(|i| self.cells[i])
    }

    pub fn ley_owner(&self, line: usize) -> Option<PlayerId> {
        self.ley_lines.get(line).copied().flatten()
    }

    pub fn ley_line_owner(&self, axis: Axis, index: usize) -> Option<PlayerId> {
        self.layout
            .ley_line_position(axis, index)
            .and_then(|pos| self.ley_owner(pos))
    }

    pub fn ley_lines_owned(&self, player: PlayerId) -> usize {
        self.ley_lines
            .iter()
            .filter(|owner| **owner == Some(player))
            .count()
    }

    pub fn ley_line_total(&self) -> usize {
        self.ley_lines.len()
    }

    /// 未取得セルのラベル (昇順)
    pub fn unclaimed_labels(&self) -> Vec<Label> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(i, _)| self.layout.cells[i].label)
            .collect()
    }

    /// セルを取得し、過半数に達した未取得レイラインを確保する。
    /// 新しく確保したレイラインの位置を返す。
    pub(crate) fn claim(&mut self, cell: usize, player: PlayerId) -> Vec<usize> {
        self.cells[cell] = Some(player);

        let mut captured = Vec::new();
        for &line in self.layout.lines_through(cell) {
            if self.ley_lines[line].is_some() {
                continue; // 先取りしたプレイヤーのまま
            }
            let spec = &self.layout.ley_lines[line];
            let count = spec
                .members
                .iter()
                .filter(|&&m| self.cells[m] == Some(player))
                .count();
            if count >= spec.threshold() {
                self.ley_lines[line] = Some(player);
                captured.push(line);
            }
        }
        captured
    }

    #[cfg(test)]
    pub(crate) fn set_ley_owner(&mut self, line: usize, owner: Option<PlayerId>) {
        self.ley_lines[line] = owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(2).unwrap();
        assert_eq!(board.unclaimed_labels().len(), 7);
        assert_eq!(board.ley_lines_owned(PlayerId::Player1), 0);
        assert_eq!(board.ley_lines_owned(PlayerId::Player2), 0);
        assert_eq!(board.ley_line_total(), 9);
    }

    #[test]
    fn test_claim_captures_short_lines() {
        let mut board = Board::new(1).unwrap();
        let captured = board.claim(0, PlayerId::Player1);
        // A は '-'[A,B], '/'[A], '\'[A,C] のすべてで過半数
        assert_eq!(captured.len(), 3);
        assert_eq!(board.ley_lines_owned(PlayerId::Player1), 3);
    }

    #[test]
    fn test_claimed_line_is_not_stolen() {
        let mut board = Board::new(2).unwrap();
        let a: Label = "A".parse().unwrap();
        let b: Label = "B".parse().unwrap();
        board.claim(board.cell_index(a).unwrap(), PlayerId::Player1);
        assert_eq!(board.ley_line_owner(Axis::Flat, 0), Some(PlayerId::Player1));
        board.claim(board.cell_index(b).unwrap(), PlayerId::Player2);
        assert_eq!(board.ley_line_owner(Axis::Flat, 0), Some(PlayerId::Player1));
    }

    #[test]
    fn test_unknown_cell() {
        let board = Board::new(1).unwrap();
        let z: Label = "Z".parse().unwrap();
        assert!(!board.contains(z));
        assert_eq!(board.cell_owner(z), None);
    }
}
