// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use thiserror::Error;

/// Reasons a move can be rejected. A rejected move never changes the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("move notation could not be understood")]
    InvalidNotation,
    #[error("no piece can make that move")]
    NoMatchingPiece,
    #[error("piece cannot reach the destination square")]
    IllegalDestination,
    #[error("castling is not allowed")]
    CastlingDenied,
    #[error("nothing to capture on the destination square")]
    EmptyCaptureSquare,
}

/// Possible errors that can arise when parsing a FEN string into a `Position`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum FenParseError {
    #[error("unexpected end of FEN string")]
    UnexpectedEnd,
    #[error("unexpected trailing field in FEN string")]
    TrailingField,
    #[error("invalid empty-square count")]
    InvalidDigit,
    #[error("rank does not sum to eight squares")]
    FileDoesNotSumToEight,
    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),
    #[error("invalid side to move")]
    InvalidSideToMove,
    #[error("invalid castling letter '{0}'")]
    InvalidCastle(char),
    #[error("invalid en passant square")]
    InvalidEnPassant,
    #[error("empty halfmove clock")]
    EmptyHalfmove,
    #[error("empty fullmove counter")]
    EmptyFullmove,
}
