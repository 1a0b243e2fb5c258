// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Matching parsed notation against the board. Everything here reads the
//! legal-move lists as they stand; nothing regenerates them.
use crate::castle;
use crate::error::MoveError;
use crate::moves::Move;
use crate::notation::{Disambiguator, MoveText, Mover, Notation};
use crate::piece::PieceId;
use crate::position::Position;
use crate::types::{Color, File, PieceKind, Square};

/// Turns parsed notation into a move for the side to move.
pub fn resolve(pos: &Position, notation: Notation) -> Result<Move, MoveError> {
    let color = pos.side_to_move();
    match notation {
        Notation::Castle(wing) => castle::check(pos, color, wing),
        Notation::Capture(text) => {
            if pos.piece_id_at(text.destination).is_none() {
                return Err(MoveError::EmptyCaptureSquare);
            }

            resolve_text(pos, color, text, true)
        }
        Notation::Quiet(text) => resolve_text(pos, color, text, false),
    }
}

fn resolve_text(
    pos: &Position,
    color: Color,
    text: MoveText,
    is_capture: bool,
) -> Result<Move, MoveError> {
    let (piece, promotion) = match text.mover {
        Mover::Pawn {
            from_file,
            promotion,
        } => {
            let id = find_pawn(pos, color, text.destination, from_file, is_capture)?;
            (id, promotion)
        }
        Mover::Piece {
            kind,
            disambiguator,
        } => (
            find_piece(pos, color, kind, text.destination, disambiguator)?,
            None,
        ),
    };

    let mover = pos.piece(piece).ok_or(MoveError::NoMatchingPiece)?;
    if !mover.can_reach(text.destination) {
        return Err(MoveError::IllegalDestination);
    }

    Ok(Move::Normal {
        piece,
        from: mover.square,
        to: text.destination,
        promotion,
    })
}

/// Pawns are found by looking behind the destination rather than by searching
/// the roster. A capture comes from one rank back on the named file; a push
/// comes from directly behind, or two squares behind if that square is empty.
pub fn find_pawn(
    pos: &Position,
    color: Color,
    destination: Square,
    from_file: Option<File>,
    is_capture: bool,
) -> Result<PieceId, MoveError> {
    let back = match color {
        Color::White => 1,
        Color::Black => -1,
    };

    let candidate = if is_capture {
        let file = from_file.ok_or(MoveError::InvalidNotation)?;
        destination
            .offset(back, 0)
            .and_then(|sq| pos.piece_id_at(Square::of(sq.rank(), file)))
    } else {
        let one_back = destination.offset(back, 0);
        match one_back.and_then(|sq| pos.piece_id_at(sq)) {
            Some(id) => Some(id),
            None => destination
                .offset(2 * back, 0)
                .and_then(|sq| pos.piece_id_at(sq)),
        }
    };

    let id = candidate.ok_or(MoveError::NoMatchingPiece)?;
    match pos.piece(id) {
        Some(piece) if piece.color == color && piece.kind == PieceKind::Pawn => Ok(id),
        _ => Err(MoveError::NoMatchingPiece),
    }
}

/// The first piece of the given kind, in roster order, that lists the
/// destination and satisfies the disambiguator. A second match is not
/// reported as an ambiguity.
pub fn find_piece(
    pos: &Position,
    color: Color,
    kind: PieceKind,
    destination: Square,
    disambiguator: Option<Disambiguator>,
) -> Result<PieceId, MoveError> {
    pos.pieces(color)
        .filter(|(_, piece)| piece.kind == kind && piece.can_reach(destination))
        .find(|(_, piece)| disambiguator.map_or(true, |d| d.matches(piece.square)))
        .map(|(id, _)| id)
        .ok_or(MoveError::NoMatchingPiece)
}
