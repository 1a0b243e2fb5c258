// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Castling legality. A castle is allowed when the side still holds the
//! right, the squares between king and rook are empty, and no enemy piece
//! lists any of those squares among its legal moves.
//!
//! The enemy lists consulted here are the ones generated right after the
//! enemy's last move. They are never refreshed from in here, and the king's
//! own square is not examined, so castling out of check is not caught.
use crate::error::MoveError;
use crate::moves::{self, Move};
use crate::piece::PieceId;
use crate::position::Position;
use crate::types::{CastleStatus, Color, PieceKind, Square, Wing};

/// Validates a castle for `color` on `wing`, producing the move to apply.
pub fn check(pos: &Position, color: Color, wing: Wing) -> Result<Move, MoveError> {
    if !pos.castle_status().contains(CastleStatus::for_wing(color, wing)) {
        debug!("{} has no {:?} castling right", color, wing);
        return Err(MoveError::CastlingDenied);
    }

    let king = home_piece(pos, moves::king_home(color), color, PieceKind::King)?;
    let rook = home_piece(pos, moves::rook_home(color, wing), color, PieceKind::Rook)?;

    let path = moves::castle_path(color, wing);
    if let Some(blocked) = path.iter().find(|&&sq| pos.piece_id_at(sq).is_some()) {
        debug!("castle path blocked on {}", blocked);
        return Err(MoveError::CastlingDenied);
    }

    if let Some(attacked) = path.iter().find(|&&sq| is_attacked(pos, color.toggle(), sq)) {
        debug!("castle path attacked on {}", attacked);
        return Err(MoveError::CastlingDenied);
    }

    Ok(Move::Castle {
        color,
        wing,
        king,
        rook,
    })
}

/// Whether any piece of `attacker` currently lists `square` as a destination.
pub fn is_attacked(pos: &Position, attacker: Color, square: Square) -> bool {
    pos.pieces(attacker).any(|(_, piece)| piece.can_reach(square))
}

// The rights say the king and rook have not moved; this makes sure the board
// agrees before anything is relocated.
fn home_piece(
    pos: &Position,
    square: Square,
    color: Color,
    kind: PieceKind,
) -> Result<PieceId, MoveError> {
    let id = pos.piece_id_at(square).ok_or(MoveError::CastlingDenied)?;
    match pos.piece(id) {
        Some(piece) if piece.color == color && piece.kind == kind => Ok(id),
        _ => {
            debug!("expected {} {} on {}", color, kind, square);
            Err(MoveError::CastlingDenied)
        }
    }
}
