// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};

// TableIndex is a trait for all types that can serve as an index into a table.
// Files and ranks double as grid indices, so anything implementing To and
// FromPrimitive can be used to index the board.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'1' + self.as_index() as u8) as char)
    }
}

impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '1'..='8' => Ok(Rank::from_index(value as usize - '1' as usize)),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + self.as_index() as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'a'..='h' => Ok(File::from_index(value as usize - 'a' as usize)),
            _ => Err(()),
        }
    }
}

/// A square on the board. Squares are addressed either by rank and file or by
/// grid coordinates, where row 0 is the eighth rank and column 0 is the a-file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    rank: Rank,
    file: File,
}

impl Square {
    pub fn of(rank: Rank, file: File) -> Square {
        Square { rank, file }
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    pub fn file(self) -> File {
        self.file
    }

    pub fn row(self) -> usize {
        7 - self.rank.as_index()
    }

    pub fn col(self) -> usize {
        self.file.as_index()
    }

    /// Returns the square at the given grid coordinates, or `None` if the
    /// coordinates fall outside of the board.
    pub fn from_grid(row: i32, col: i32) -> Option<Square> {
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }

        Some(Square::of(
            Rank::from_index(7 - row as usize),
            File::from_index(col as usize),
        ))
    }

    /// Steps `rows` rows and `cols` columns away from this square.
    pub fn offset(self, rows: i32, cols: i32) -> Option<Square> {
        Square::from_grid(self.row() as i32 + rows, self.col() as i32 + cols)
    }

    pub fn towards(self, dir: Direction) -> Option<Square> {
        let (rows, cols) = dir.as_vector();
        self.offset(rows, cols)
    }

    /// Parses algebraic notation such as `e4`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::try_from(chars.next()?).ok()?;
        let rank = Rank::try_from(chars.next()?).ok()?;
        if chars.next().is_some() {
            return None;
        }

        Some(Square::of(rank, file))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The direction this color's pawns advance in.
    pub fn forward(self) -> Direction {
        match self {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }

    pub fn pawn_rank(self) -> Rank {
        match self {
            Color::White => Rank::Two,
            Color::Black => Rank::Seven,
        }
    }

    pub fn back_rank(self) -> Rank {
        match self {
            Color::White => Rank::One,
            Color::Black => Rank::Eight,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Color::White => 'w',
            Color::Black => 'b',
        };
        f.write_char(chr)
    }
}

impl TryFrom<&str> for Color {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Case-insensitive lookup of a piece letter.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(kind)
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn letter(self, color: Color) -> char {
        let chr = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match color {
            Color::White => chr.to_ascii_uppercase(),
            Color::Black => chr,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.letter(Color::Black))
    }
}

/// Board directions, in grid terms. North points towards the eighth rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Row and column deltas for one step in this direction.
    pub fn as_vector(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Rook rays, in scan order.
pub static LINEAR_DIRECTIONS: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

/// Bishop rays, in scan order.
pub static DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wing {
    Kingside,
    Queenside,
}

bitflags! {
    pub struct CastleStatus: u8 {
        const NONE = 0;
        const WHITE_KINGSIDE = 0b0000_0001;
        const WHITE_QUEENSIDE =0b0000_0010;
        const WHITE = Self::WHITE_KINGSIDE.bits | Self::WHITE_QUEENSIDE.bits;
        const BLACK_KINGSIDE = 0b0000_0100;
        const BLACK_QUEENSIDE = 0b0000_1000;
        const BLACK = Self::BLACK_KINGSIDE.bits | Self::BLACK_QUEENSIDE.bits;
    }
}

impl CastleStatus {
    pub fn for_color(color: Color) -> CastleStatus {
        match color {
            Color::White => CastleStatus::WHITE,
            Color::Black => CastleStatus::BLACK,
        }
    }

    pub fn for_wing(color: Color, wing: Wing) -> CastleStatus {
        match (color, wing) {
            (Color::White, Wing::Kingside) => CastleStatus::WHITE_KINGSIDE,
            (Color::White, Wing::Queenside) => CastleStatus::WHITE_QUEENSIDE,
            (Color::Black, Wing::Kingside) => CastleStatus::BLACK_KINGSIDE,
            (Color::Black, Wing::Queenside) => CastleStatus::BLACK_QUEENSIDE,
        }
    }
}

impl Display for CastleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_char('-');
        }

        if self.contains(CastleStatus::WHITE_KINGSIDE) {
            f.write_char('K')?;
        }
        if self.contains(CastleStatus::WHITE_QUEENSIDE) {
            f.write_char('Q')?;
        }
        if self.contains(CastleStatus::BLACK_KINGSIDE) {
            f.write_char('k')?;
        }
        if self.contains(CastleStatus::BLACK_QUEENSIDE) {
            f.write_char('q')?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for CastleStatus {
    type Error = char;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == "-" {
            return Ok(CastleStatus::NONE);
        }

        let mut status = CastleStatus::NONE;
        for c in value.chars() {
            match c {
                'K' => status |= CastleStatus::WHITE_KINGSIDE,
                'Q' => status |= CastleStatus::WHITE_QUEENSIDE,
                'k' => status |= CastleStatus::BLACK_KINGSIDE,
                'q' => status |= CastleStatus::BLACK_QUEENSIDE,
                _ => return Err(c),
            }
        }

        Ok(status)
    }
}
