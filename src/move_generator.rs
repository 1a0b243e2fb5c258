// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal destination generation. Every rule here looks only at which
//! squares are occupied and by whom; none of them care whether the moving
//! side's king ends up attacked.
use crate::piece::{Piece, SquareVec};
use crate::types::{Color, Direction, PieceKind, Square};
use crate::types::{DIAGONAL_DIRECTIONS, LINEAR_DIRECTIONS};

/// Read-only view of who stands where.
pub trait Occupancy {
    fn color_at(&self, square: Square) -> Option<Color>;
}

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
];

/// Computes every destination the given piece may move to on the given board.
pub fn destinations<O: Occupancy>(piece: &Piece, board: &O) -> SquareVec {
    let mut moves = SquareVec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, board, &mut moves),
        PieceKind::Rook => linear_moves(piece, board, &mut moves),
        PieceKind::Bishop => diagonal_moves(piece, board, &mut moves),
        PieceKind::Queen => {
            linear_moves(piece, board, &mut moves);
            diagonal_moves(piece, board, &mut moves);
        }
        PieceKind::Knight => knight_moves(piece, board, &mut moves),
        PieceKind::King => king_moves(piece, board, &mut moves),
    }

    moves
}

pub fn pawn_moves<O: Occupancy>(piece: &Piece, board: &O, moves: &mut SquareVec) {
    let forward = piece.color.forward();
    if let Some(one) = piece.square.towards(forward) {
        if board.color_at(one).is_none() {
            moves.push(one);
        }

        // The double push only looks at its landing square.
        if piece.can_double_push() {
            if let Some(two) = one.towards(forward) {
                if board.color_at(two).is_none() {
                    moves.push(two);
                }
            }
        }
    }

    let (left, right) = match piece.color {
        Color::White => (Direction::NorthWest, Direction::NorthEast),
        Color::Black => (Direction::SouthWest, Direction::SouthEast),
    };

    for &dir in &[left, right] {
        if let Some(target) = piece.square.towards(dir) {
            if is_enemy(board, target, piece.color) {
                moves.push(target);
            }
        }
    }
}

pub fn linear_moves<O: Occupancy>(piece: &Piece, board: &O, moves: &mut SquareVec) {
    for &dir in &LINEAR_DIRECTIONS {
        slide(piece, board, dir, moves);
    }
}

pub fn diagonal_moves<O: Occupancy>(piece: &Piece, board: &O, moves: &mut SquareVec) {
    for &dir in &DIAGONAL_DIRECTIONS {
        slide(piece, board, dir, moves);
    }
}

pub fn knight_moves<O: Occupancy>(piece: &Piece, board: &O, moves: &mut SquareVec) {
    for &(rows, cols) in &KNIGHT_OFFSETS {
        if let Some(target) = piece.square.offset(rows, cols) {
            if board.color_at(target) != Some(piece.color) {
                moves.push(target);
            }
        }
    }
}

pub fn king_moves<O: Occupancy>(piece: &Piece, board: &O, moves: &mut SquareVec) {
    for rows in -1..=1 {
        for cols in -1..=1 {
            if rows == 0 && cols == 0 {
                continue;
            }

            if let Some(target) = piece.square.offset(rows, cols) {
                if board.color_at(target) != Some(piece.color) {
                    moves.push(target);
                }
            }
        }
    }
}

// Walks a ray until it leaves the board or hits a piece. An enemy piece ends
// the ray as a capture, a friendly one just ends it.
fn slide<O: Occupancy>(piece: &Piece, board: &O, dir: Direction, moves: &mut SquareVec) {
    let mut current = piece.square;
    while let Some(next) = current.towards(dir) {
        match board.color_at(next) {
            None => moves.push(next),
            Some(color) => {
                if color != piece.color {
                    moves.push(next);
                }
                break;
            }
        }

        current = next;
    }
}

fn is_enemy<O: Occupancy>(board: &O, square: Square, color: Color) -> bool {
    match board.color_at(square) {
        Some(other) => other != color,
        None => false,
    }
}
