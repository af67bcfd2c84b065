use std::{
    fmt::{self, Display, Write},
    str::FromStr,
};

use smallvec::SmallVec;

/// The symbol identifying a player in a cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    #[default]
    X = 0,
    O = 1,
}

impl Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl Mark {
    #[inline]
    pub fn opposite(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    #[inline]
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl FromStr for Mark {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Mark::from_char), chars.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err("expected X or O"),
        }
    }
}

/// Index of a cell on the board, 0..=8 in row-major order.
///
/// Constructors validate the range, so a `Move` always refers to a cell
/// that exists. Whether the cell is empty is checked by [`Board::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move(u8);

impl Move {
    #[inline]
    pub fn new(index: u8) -> Option<Move> {
        ((index as usize) < Board::SIZE).then_some(Move(index))
    }

    /// Converts the 1-indexed cell number used by human input.
    #[inline]
    pub fn from_cell_number(number: u8) -> Option<Move> {
        (1..=Board::SIZE as u8)
            .contains(&number)
            .then(|| Move(number - 1))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-indexed cell number shown to humans.
    #[inline]
    pub fn cell_number(self) -> u8 {
        self.0 + 1
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cell_number())
    }
}

pub type MoveList = SmallVec<[Move; Board::SIZE]>;

/// Indicates that a board operation failed due to input validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    #[error("cell {0} is already occupied")]
    CellOccupied(u8),
    #[error("board literal must be 9 cells of 'X', 'O', ' ' or '.'")]
    MalformedLiteral,
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 Tic-Tac-Toe position in row-major order.
///
/// The board is a value type: [`Board::apply`] returns a new board instead
/// of mutating, so distinct search branches never observe each other's
/// writes. Turn alternation is not enforced here; callers that build
/// positions by hand are expected to keep the mark counts legal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Option<Mark>; Board::SIZE],
}

impl Board {
    pub const SIZE: usize = 9;

    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [None; Board::SIZE],
        }
    }

    #[inline]
    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.cells[mv.index()]
    }

    #[inline]
    pub fn cells(&self) -> &[Option<Mark>; Board::SIZE] {
        &self.cells
    }

    /// True iff any winning line is filled with `mark`.
    pub fn is_win_for(&self, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O].into_iter().find(|&m| self.is_win_for(m))
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Indices of empty cells, in ascending order.
    ///
    /// The ordering is load-bearing: it determines move tie-breaks during
    /// search, so the AI's choices stay deterministic.
    pub fn available_moves(&self) -> MoveList {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Move(i as u8))
            .collect()
    }

    /// Returns a new board with `mark` placed at `mv`.
    pub fn apply(&self, mv: Move, mark: Mark) -> Result<Board, BoardError> {
        if self.get(mv).is_some() {
            return Err(BoardError::CellOccupied(mv.0));
        }
        let mut next = *self;
        next.cells[mv.index()] = Some(mark);
        Ok(next)
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Compact 9-character form, the inverse of [`FromStr`].
    pub fn to_literal(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map(Mark::to_char).unwrap_or('.'))
            .collect()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cell = |col: usize| {
                self.cells[row * 3 + col]
                    .map(Mark::to_char)
                    .unwrap_or(' ')
            };
            writeln!(f, " {} | {} | {} ", cell(0), cell(1), cell(2))?;
            if row < 2 {
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; Board::SIZE];
        let mut count = 0;
        for (i, c) in s.chars().enumerate() {
            if i >= Board::SIZE {
                return Err(BoardError::MalformedLiteral);
            }
            cells[i] = match c {
                ' ' | '.' => None,
                _ => Some(Mark::from_char(c).ok_or(BoardError::MalformedLiteral)?),
            };
            count += 1;
        }
        if count != Board::SIZE {
            return Err(BoardError::MalformedLiteral);
        }
        Ok(Board { cells })
    }
}
