//! Fixed cell and ley-line geometry for each supported side length.
//!
//! Rows run top to bottom. Row `r < side` holds `r + 2` cells; the last row
//! holds `side` cells and sits one column to the right of the row above it.
//! With that shift every cell gets a column `c`, and its three ley-lines are
//!
//! - `-` : `r`
//! - `/` : `c`
//! - `\` : `c + side - 1 - r`
//!
//! Each axis therefore has `side + 1` lines, members listed in row-major order.

use super::types::{Axis, Label};
use crate::error::ConfigurationError;
use once_cell::sync::Lazy;

pub const MIN_SIDE: usize = 1;
pub const MAX_SIDE: usize = 5;

/// 盤上のセル位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpec {
    pub label: Label,
    pub row: usize,
    /// Shifted column (the last row starts at 1).
    pub col: usize,
}

/// レイラインの定義 (所有者は持たない)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeyLineSpec {
    pub axis: Axis,
    pub index: usize,
    /// Row-major cell indices.
    pub members: Vec<usize>,
}

impl LeyLineSpec {
    /// 過半数の閾値 ceil(n / 2)
    pub fn threshold(&self) -> usize {
        (self.members.len() + 1) / 2
    }
}

#[derive(Debug)]
pub struct Layout {
    pub side: usize,
    pub cells: Vec<CellSpec>,
    pub ley_lines: Vec<LeyLineSpec>,
    lines_of_cell: Vec<Vec<usize>>,
}

static LAYOUTS: Lazy<Vec<Result<Layout, ConfigurationError>>> = Lazy::new(|| {
    (MIN_SIDE..=MAX_SIDE)
        .map(|side| {
            let layout = Layout::generate(side);
            layout.validate()?;
            tracing::trace!(
                side,
                cells = layout.cells.len(),
                ley_lines = layout.ley_lines.len(),
                "built board layout"
            );
            Ok(layout)
        })
        .collect()
});

/// Shared layout for `side`, built on first use.
pub fn layout(side: usize) -> Result<&'static Layout, ConfigurationError> {
    if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
        return Err(ConfigurationError::SideLength {
            got: side,
            min: MIN_SIDE,
            max: MAX_SIDE,
        });
    }
    LAYOUTS[side - MIN_SIDE].as_ref().map_err(Clone::clone)
}

/// セル数 N(N+5)/2
pub fn cell_count(side: usize) -> usize {
    side * (side + 5) / 2
}

/// レイライン数 3N+3
pub fn ley_line_count(side: usize) -> usize {
    3 * side + 3
}

fn line_index(axis: Axis, cell: &CellSpec, side: usize) -> usize {
    match axis {
        Axis::Flat => cell.row,
        Axis::LeftDiagonal => cell.col,
        Axis::RightDiagonal => cell.col + side - 1 - cell.row,
    }
}

impl Layout {
    fn generate(side: usize) -> Layout {
        let mut cells = Vec::with_capacity(cell_count(side));
        for row in 0..=side {
            let (len, shift) = if row < side { (row + 2, 0) } else { (side, 1) };
            for c in 0..len {
                cells.push(CellSpec {
                    label: Label::from_index(cells.len()),
                    row,
                    col: c + shift,
                });
            }
        }

        let mut ley_lines = Vec::with_capacity(ley_line_count(side));
        let mut lines_of_cell = vec![Vec::with_capacity(3); cells.len()];
        for axis in Axis::ALL {
            for index in 0..=side {
                let members: Vec<usize> = cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| line_index(axis, cell, side) == index)
                    .map(|(i, _)| i)
                    .collect();
                for &m in &members {
                    lines_of_cell[m].push(ley_lines.len());
                }
                ley_lines.push(LeyLineSpec {
                    axis,
                    index,
                    members,
                });
            }
        }

        Layout {
            side,
            cells,
            ley_lines,
            lines_of_cell,
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.cells.len() != cell_count(self.side) || self.cells.len() > 26 {
            return Err(ConfigurationError::Invalid(format!(
                "side {} produced {} cells",
                self.side,
                self.cells.len()
            )));
        }
        if self.ley_lines.len() != ley_line_count(self.side) {
            return Err(ConfigurationError::Invalid(format!(
                "side {} produced {} ley-lines",
                self.side,
                self.ley_lines.len()
            )));
        }
        if let Some(line) = self.ley_lines.iter().find(|l| l.members.is_empty()) {
            return Err(ConfigurationError::Invalid(format!(
                "ley-line {}{} has no cells",
                line.axis, line.index
            )));
        }
        if self.lines_of_cell.iter().any(|lines| lines.len() != 3) {
            return Err(ConfigurationError::Invalid(
                "every cell must sit on one ley-line per axis".into(),
            ));
        }
        Ok(())
    }

    /// Position of the ley-line `(axis, index)` in `ley_lines`.
    pub fn ley_line_position(&self, axis: Axis, index: usize) -> Option<usize> {
        if index > self.side {
            return None;
        }
        let axis_pos = Axis::ALL.iter().position(|&a| a == axis)?;
        Some(axis_pos * (self.side + 1) + index)
    }

    /// Ley-lines (positions in `ley_lines`) that pass through cell `cell`.
    pub fn lines_through(&self, cell: usize) -> &[usize] {
        &self.lines_of_cell[cell]
    }

    pub fn line_labels(&self, line: usize) -> Vec<Label> {
        self.ley_lines[line]
            .members
            .iter()
            .map(|&m| self.cells[m].label)
            .collect()
    }

    /// ley-lines that sit on `axis`, in index order
    pub fn axis_lines(&self, axis: Axis) -> impl Iterator<Item = &LeyLineSpec> {
        self.ley_lines.iter().filter(move |l| l.axis == axis)
    }

    /// Cells of `row`, in column order.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = &CellSpec> {
        self.cells.iter().filter(move |c| c.row == row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(s: &str) -> Vec<Label> {
        s.chars().map(|c| c.to_string().parse().unwrap()).collect()
    }

    fn axis_labels(layout: &Layout, axis: Axis) -> Vec<Vec<Label>> {
        Axis::ALL
            .iter()
            .position(|&a| a == axis)
            .map(|p| {
                (0..=layout.side)
                    .map(|i| layout.line_labels(p * (layout.side + 1) + i))
                    .collect()
            })
            .unwrap()
    }

    #[test]
    fn test_side_one_matches_reference_table() {
        let l = layout(1).unwrap();
        assert_eq!(axis_labels(l, Axis::Flat), vec![labels("AB"), labels("C")]);
        assert_eq!(
            axis_labels(l, Axis::LeftDiagonal),
            vec![labels("A"), labels("BC")]
        );
        assert_eq!(
            axis_labels(l, Axis::RightDiagonal),
            vec![labels("AC"), labels("B")]
        );
    }

    #[test]
    fn test_side_three_matches_reference_table() {
        let l = layout(3).unwrap();
        assert_eq!(
            axis_labels(l, Axis::Flat),
            vec![labels("AB"), labels("CDE"), labels("FGHI"), labels("JKL")]
        );
        assert_eq!(
            axis_labels(l, Axis::LeftDiagonal),
            vec![labels("ACF"), labels("BDGJ"), labels("EHK"), labels("IL")]
        );
        assert_eq!(
            axis_labels(l, Axis::RightDiagonal),
            vec![labels("FJ"), labels("CGK"), labels("ADHL"), labels("BEI")]
        );
    }

    #[test]
    fn test_side_five_matches_reference_table() {
        let l = layout(5).unwrap();
        assert_eq!(
            axis_labels(l, Axis::LeftDiagonal),
            vec![
                labels("ACFJO"),
                labels("BDGKPU"),
                labels("EHLQV"),
                labels("IMRW"),
                labels("NSX"),
                labels("TY"),
            ]
        );
        assert_eq!(
            axis_labels(l, Axis::RightDiagonal),
            vec![
                labels("OU"),
                labels("JPV"),
                labels("FKQW"),
                labels("CGLRX"),
                labels("ADHMSY"),
                labels("BEINT"),
            ]
        );
    }

    #[test]
    fn test_counts_for_all_sides() {
        for side in MIN_SIDE..=MAX_SIDE {
            let l = layout(side).unwrap();
            assert_eq!(l.cells.len(), cell_count(side));
            assert_eq!(l.ley_lines.len(), 3 * side + 3);
        }
    }

    #[test]
    fn test_out_of_range_side_is_rejected() {
        assert!(matches!(
            layout(0),
            Err(ConfigurationError::SideLength { got: 0, .. })
        ));
        assert!(layout(6).is_err());
    }

    #[test]
    fn test_thresholds() {
        let l = layout(2).unwrap();
        let pos = l.ley_line_position(Axis::Flat, 1).unwrap();
        assert_eq!(l.ley_lines[pos].members.len(), 3);
        assert_eq!(l.ley_lines[pos].threshold(), 2);
        let pos = l.ley_line_position(Axis::Flat, 0).unwrap();
        assert_eq!(l.ley_lines[pos].threshold(), 1);
    }
}
