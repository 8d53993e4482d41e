use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidMoveError;

/// プレイヤーID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Player1, // 先手 (通常)
    Player2, // 後手 (通常)
}

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId::Player1
    }
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// 盤面表示用の所有者記号
    pub fn digit(self) -> char {
        match self {
            PlayerId::Player1 => '1',
            PlayerId::Player2 => '2',
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            PlayerId::Player1 => "P1",
            PlayerId::Player2 => "P2",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// セルのラベル (大文字アルファベット一文字)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Label(char);

impl Label {
    /// Label for the cell at `index` in row-major order. Only `0..26` is valid.
    pub(crate) fn from_index(index: usize) -> Label {
        debug_assert!(index < 26);
        Label((b'A' + index as u8) as char)
    }

    /// Row-major index of the cell this label names.
    pub fn index(self) -> Option<usize> {
        if !self.0.is_ascii_uppercase() {
            return None;
        }
        (self.0 as usize).checked_sub('A' as usize)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Label {
    type Error = InvalidMoveError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Label(c.to_ascii_uppercase()))
        } else {
            Err(InvalidMoveError::Unparseable(c.to_string()))
        }
    }
}

impl From<Label> for char {
    fn from(label: Label) -> char {
        label.0
    }
}

impl FromStr for Label {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Label::try_from(c),
            _ => Err(InvalidMoveError::Unparseable(trimmed.to_string())),
        }
    }
}

/// レイラインの軸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Flat,          // '-'
    LeftDiagonal,  // '/'
    RightDiagonal, // '\'
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Flat, Axis::LeftDiagonal, Axis::RightDiagonal];

    pub fn symbol(self) -> char {
        match self {
            Axis::Flat => '-',
            Axis::LeftDiagonal => '/',
            Axis::RightDiagonal => '\\',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
