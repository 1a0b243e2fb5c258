// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::convert::TryFrom;
use std::fmt::{self, Write};

use crate::board::Board;
use crate::error::FenParseError;
use crate::move_generator::{self, Occupancy};
use crate::moves::{self, Move};
use crate::piece::{Piece, PieceId, PieceLetter, Roster};
use crate::types::{CastleStatus, Color, PieceKind, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const EMPTY_SQUARE: char = '\u{26AC}';

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    roster: Roster,
    side_to_move: Color,
    castle_status: CastleStatus,
    en_passant_square: Option<Square>,
    // Both clocks are carried through from the FEN untouched.
    halfmove_clock: String,
    fullmove_clock: String,
}

//
// Board state getters
//

impl Position {
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castle_status(&self) -> CastleStatus {
        self.castle_status
    }

    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    pub fn halfmove_clock(&self) -> &str {
        &self.halfmove_clock
    }

    pub fn fullmove_clock(&self) -> &str {
        &self.fullmove_clock
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        self.board.get(square)
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.get(square).and_then(|id| self.roster.get(id))
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.roster.get(id)
    }

    /// Live pieces of one side, in roster order.
    pub fn pieces<'a>(&'a self, color: Color) -> impl Iterator<Item = (PieceId, &'a Piece)> + 'a {
        self.roster.pieces(color)
    }
}

impl Occupancy for Position {
    fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }
}

//
// Legal move generation
//

impl Position {
    /// Recomputes the legal-move list of every piece of the given color
    /// against the current board. The lists of the other color are left
    /// exactly as they were.
    pub(crate) fn generate_legal_moves(&mut self, color: Color) {
        for id in self.roster.ids(color) {
            let moves = match self.roster.get(id) {
                Some(piece) => move_generator::destinations(piece, self),
                None => continue,
            };

            if let Some(piece) = self.roster.get_mut(id) {
                trace!("{} {} on {}: {:?}", color, piece.kind, piece.square, moves);
                piece.set_legal_moves(moves);
            }
        }
    }
}

//
// Move application and board manipulation
//

impl Position {
    fn add_piece(&mut self, piece: Piece) -> PieceId {
        let square = piece.square;
        let id = self.roster.add(piece);
        self.board.set(square, Some(id));
        id
    }

    // Relocates a piece. Whatever stood on the destination is overwritten on
    // the board, so callers deal with captures first.
    fn relocate(&mut self, id: PieceId, to: Square) {
        let from = match self.roster.get_mut(id) {
            Some(piece) => {
                let from = piece.square;
                piece.square = to;
                from
            }
            None => return,
        };

        self.board.set(to, Some(id));
        self.board.set(from, None);
    }

    /// Applies an already validated move and passes the turn. Regenerating
    /// legal moves afterwards is up to the caller.
    pub fn apply_move(&mut self, mov: Move) {
        match mov {
            Move::Normal {
                piece,
                from,
                to,
                promotion,
            } => {
                // The destination only holds an enemy piece if it holds
                // anything: legal-move lists never contain friendly squares.
                if let Some(captured) = self.board.get(to) {
                    if let Some(removed) = self.roster.remove(captured) {
                        debug!("{} {} on {} captured", removed.color, removed.kind, to);
                    }
                }

                self.relocate(piece, to);

                let mut is_double_push = false;
                if let Some(moved) = self.roster.get_mut(piece) {
                    is_double_push = moved.kind == PieceKind::Pawn
                        && (from.row() as i32 - to.row() as i32).abs() == 2;
                    if let Some(kind) = promotion {
                        moved.kind = kind;
                    }
                }

                self.en_passant_square = if is_double_push {
                    Square::from_grid((from.row() + to.row()) as i32 / 2, from.col() as i32)
                } else {
                    None
                };
            }
            Move::Castle {
                color,
                wing,
                king,
                rook,
            } => {
                self.relocate(king, moves::king_target(color, wing));
                self.relocate(rook, moves::rook_target(color, wing));

                // Castling on either wing gives up both of the mover's rights.
                self.castle_status.remove(CastleStatus::for_color(color));
                self.en_passant_square = None;
            }
        }

        self.side_to_move = self.side_to_move.toggle();
    }
}

//
// FEN parsing and generation.
//

impl Position {
    pub fn from_start_position() -> Position {
        Position::from_fen(START_FEN).expect("start position FEN is valid")
    }

    /// Constructs a new position from a FEN representation of a board
    /// position. Legal-move lists start out empty.
    pub fn from_fen<S: AsRef<str>>(fen: S) -> Result<Position, FenParseError> {
        let mut fields = fen.as_ref().split_whitespace();
        let placement = fields.next().ok_or(FenParseError::UnexpectedEnd)?;

        let mut pos = Position {
            board: Board::new(),
            roster: Roster::new(),
            side_to_move: Color::White,
            castle_status: CastleStatus::NONE,
            en_passant_square: None,
            halfmove_clock: String::new(),
            fullmove_clock: String::new(),
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() < 8 {
            return Err(FenParseError::UnexpectedEnd);
        }
        if ranks.len() > 8 {
            return Err(FenParseError::TrailingField);
        }

        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run < 1 || run > 8 {
                        return Err(FenParseError::InvalidDigit);
                    }

                    col += run as i32;
                    if col > 8 {
                        return Err(FenParseError::FileDoesNotSumToEight);
                    }

                    continue;
                }

                let PieceLetter(color, kind) =
                    PieceLetter::try_from(c).map_err(|_| FenParseError::UnknownPiece(c))?;
                let square = Square::from_grid(row as i32, col)
                    .ok_or(FenParseError::FileDoesNotSumToEight)?;
                pos.add_piece(Piece::new(kind, color, square));
                col += 1;
            }

            if col != 8 {
                return Err(FenParseError::FileDoesNotSumToEight);
            }
        }

        let side = fields.next().ok_or(FenParseError::UnexpectedEnd)?;
        pos.side_to_move = Color::try_from(side).map_err(|_| FenParseError::InvalidSideToMove)?;

        let castle = fields.next().ok_or(FenParseError::UnexpectedEnd)?;
        pos.castle_status = CastleStatus::try_from(castle).map_err(FenParseError::InvalidCastle)?;

        let en_passant = fields.next().ok_or(FenParseError::UnexpectedEnd)?;
        pos.en_passant_square = match en_passant {
            "-" => None,
            square => Some(Square::from_algebraic(square).ok_or(FenParseError::InvalidEnPassant)?),
        };

        pos.halfmove_clock = fields
            .next()
            .ok_or(FenParseError::EmptyHalfmove)?
            .to_owned();
        pos.fullmove_clock = fields
            .next()
            .ok_or(FenParseError::EmptyFullmove)?
            .to_owned();

        if fields.next().is_some() {
            return Err(FenParseError::TrailingField);
        }

        Ok(pos)
    }

    pub fn as_fen(&self) -> String {
        let mut buf = String::new();
        for row in 0..8 {
            let mut empty_squares = 0;
            for col in 0..8 {
                match self.board.at(row, col).and_then(|id| self.roster.get(id)) {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(&mut buf, "{}", empty_squares).unwrap();
                        }
                        write!(&mut buf, "{}", piece).unwrap();
                        empty_squares = 0;
                    }
                    None => empty_squares += 1,
                }
            }

            if empty_squares != 0 {
                write!(&mut buf, "{}", empty_squares).unwrap();
            }

            if row != 7 {
                buf.push('/');
            }
        }

        write!(
            &mut buf,
            " {} {} ",
            self.side_to_move, self.castle_status
        )
        .unwrap();
        match self.en_passant_square {
            Some(square) => write!(&mut buf, "{}", square).unwrap(),
            None => buf.push('-'),
        }
        write!(
            &mut buf,
            " {} {}",
            self.halfmove_clock, self.fullmove_clock
        )
        .unwrap();
        buf
    }
}

//
// Trait implementations
//

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  \u{250F}{}\u{2513}", "\u{2501}".repeat(17))?;
        for row in 0..8 {
            write!(f, "{} \u{2503} ", 8 - row)?;
            for col in 0..8 {
                match self.board.at(row, col).and_then(|id| self.roster.get(id)) {
                    Some(piece) => write!(f, "{} ", piece.glyph())?,
                    None => write!(f, "{} ", EMPTY_SQUARE)?,
                }
            }

            writeln!(f, "\u{2503}")?;
        }

        writeln!(f, "  \u{2517}{}\u{251B}", "\u{2501}".repeat(17))?;
        write!(f, "    a b c d e f g h")
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::from_start_position()
    }
}
