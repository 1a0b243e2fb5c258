// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pieces and the roster that owns them. The board never owns a piece; it
//! holds `PieceId` handles into the roster, which is the only place a piece
//! lives. Capturing a piece empties its roster slot.
use std::convert::TryFrom;
use std::fmt::{self, Write};

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind, Square};

/// Destination squares computed for a single piece. A queen in the middle of
/// an empty board reaches 27 squares, which is the most any piece can.
pub type SquareVec = ArrayVec<[Square; 32]>;

/// Handle to a piece owned by a `Roster`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

#[derive(Clone, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    started_on_home_rank: bool,
    legal_moves: SquareVec,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Piece {
        let started_on_home_rank = kind == PieceKind::Pawn && square.rank() == color.pawn_rank();
        Piece {
            kind,
            color,
            square,
            started_on_home_rank,
            legal_moves: SquareVec::new(),
        }
    }

    /// Whether this pawn may still make its opening double push: it must have
    /// been placed on its home rank and must not have left it since.
    pub fn can_double_push(&self) -> bool {
        self.started_on_home_rank && self.square.rank() == self.color.pawn_rank()
    }

    /// The destinations computed the last time moves were generated for this
    /// piece's side. Stale once the board has changed since.
    pub fn legal_moves(&self) -> &[Square] {
        &self.legal_moves
    }

    pub fn can_reach(&self, square: Square) -> bool {
        self.legal_moves.contains(&square)
    }

    pub(crate) fn set_legal_moves(&mut self, moves: SquareVec) {
        self.legal_moves = moves;
    }

    /// The glyph used when rendering the board. White pieces use the filled
    /// glyphs, black pieces the outlined ones.
    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '\u{265F}',
            (Color::White, PieceKind::Rook) => '\u{265C}',
            (Color::White, PieceKind::Knight) => '\u{265E}',
            (Color::White, PieceKind::Bishop) => '\u{265D}',
            (Color::White, PieceKind::King) => '\u{265A}',
            (Color::White, PieceKind::Queen) => '\u{265B}',
            (Color::Black, PieceKind::Pawn) => '\u{2659}',
            (Color::Black, PieceKind::Rook) => '\u{2656}',
            (Color::Black, PieceKind::Knight) => '\u{2658}',
            (Color::Black, PieceKind::Bishop) => '\u{2657}',
            (Color::Black, PieceKind::King) => '\u{2654}',
            (Color::Black, PieceKind::Queen) => '\u{2655}',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.kind.letter(self.color))
    }
}

/// A FEN piece letter, uppercase for White and lowercase for Black.
pub struct PieceLetter(pub Color, pub PieceKind);

impl TryFrom<char> for PieceLetter {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let kind = PieceKind::from_letter(c).ok_or(())?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(PieceLetter(color, kind))
    }
}

/// Arena owning every live piece of both sides. Iteration follows insertion
/// order, which for a FEN-constructed game is a8 through h1.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    slots: Vec<Option<Piece>>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster { slots: Vec::new() }
    }

    pub fn add(&mut self, piece: Piece) -> PieceId {
        self.slots.push(Some(piece));
        PieceId(self.slots.len() - 1)
    }

    /// Takes a captured piece off the roster, returning it.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Live pieces of the given color, in roster order.
    pub fn ids(&self, color: Color) -> Vec<PieceId> {
        self.pieces(color).map(|(id, _)| id).collect()
    }

    pub fn pieces<'a>(&'a self, color: Color) -> impl Iterator<Item = (PieceId, &'a Piece)> + 'a {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|piece| (PieceId(idx), piece)))
            .filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}
