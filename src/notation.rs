// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Algebraic notation parsing. Parsing looks at the token alone; working out
//! which piece on the board the token refers to is the resolver's job.
use std::convert::TryFrom;

use regex::Regex;

use crate::error::MoveError;
use crate::types::{File, PieceKind, Rank, Square, Wing};

lazy_static! {
    static ref DESTINATION: Regex = Regex::new("[a-h][1-8]").unwrap();
}

/// What a token asks for, before it is matched against the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Notation {
    Castle(Wing),
    Capture(MoveText),
    Quiet(MoveText),
}

/// A non-castling move: where to go, and enough about the mover to find it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveText {
    pub destination: Square,
    pub mover: Mover,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mover {
    /// A pawn move. Captures name the file the pawn starts on.
    Pawn {
        from_file: Option<File>,
        promotion: Option<PieceKind>,
    },
    /// Any other piece, optionally narrowed down by its starting file or rank.
    Piece {
        kind: PieceKind,
        disambiguator: Option<Disambiguator>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Disambiguator {
    File(File),
    Rank(Rank),
}

impl Disambiguator {
    pub fn matches(self, square: Square) -> bool {
        match self {
            Disambiguator::File(file) => square.file() == file,
            Disambiguator::Rank(rank) => square.rank() == rank,
        }
    }
}

/// Check and checkmate markers. They are recognized and carried along, but
/// nothing acts on them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Suffix {
    Check,
    Checkmate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParsedMove {
    pub notation: Notation,
    pub suffix: Option<Suffix>,
}

/// Parses a single notation token such as `e4`, `Nbd7`, `exd5`, `e8=Q` or
/// `O-O-O`.
pub fn parse(token: &str) -> Result<ParsedMove, MoveError> {
    let token = token.trim();
    let suffix = if token.contains('#') {
        Some(Suffix::Checkmate)
    } else if token.contains('+') {
        Some(Suffix::Check)
    } else {
        None
    };

    let body = token.trim_end_matches(|c: char| c == '+' || c == '#');
    let notation = if body.contains("O-") {
        parse_castle(body)?
    } else if body.contains('x') {
        Notation::Capture(parse_move_text(body, true)?)
    } else {
        Notation::Quiet(parse_move_text(body, false)?)
    };

    Ok(ParsedMove { notation, suffix })
}

fn parse_castle(body: &str) -> Result<Notation, MoveError> {
    match body {
        "O-O" => Ok(Notation::Castle(Wing::Kingside)),
        "O-O-O" => Ok(Notation::Castle(Wing::Queenside)),
        _ => Err(MoveError::InvalidNotation),
    }
}

fn parse_move_text(body: &str, is_capture: bool) -> Result<MoveText, MoveError> {
    let found = DESTINATION
        .find(body)
        .ok_or(MoveError::InvalidNotation)?;
    let destination = Square::from_algebraic(found.as_str()).ok_or(MoveError::InvalidNotation)?;
    let first = body.chars().next().ok_or(MoveError::InvalidNotation)?;

    let mover = if body.chars().count() == 2 || body.contains('=') || first.is_lowercase() {
        parse_pawn(body, first, is_capture)?
    } else {
        parse_piece(body, first, &body[..found.start()])?
    };

    Ok(MoveText { destination, mover })
}

fn parse_pawn(body: &str, first: char, is_capture: bool) -> Result<Mover, MoveError> {
    let from_file = if is_capture {
        Some(File::try_from(first).map_err(|_| MoveError::InvalidNotation)?)
    } else {
        None
    };

    let promotion = match body.find('=') {
        Some(idx) => {
            let letter = body[idx + 1..]
                .chars()
                .next()
                .ok_or(MoveError::InvalidNotation)?;
            match PieceKind::from_letter(letter) {
                Some(PieceKind::Pawn) | Some(PieceKind::King) | None => {
                    return Err(MoveError::InvalidNotation)
                }
                Some(kind) => Some(kind),
            }
        }
        None => None,
    };

    Ok(Mover::Pawn {
        from_file,
        promotion,
    })
}

// `prefix` is everything before the destination: the piece letter, then an
// optional disambiguator and an optional capture mark.
fn parse_piece(body: &str, first: char, prefix: &str) -> Result<Mover, MoveError> {
    let len = body.chars().count();
    if len < 3 || len > 5 {
        return Err(MoveError::InvalidNotation);
    }

    let kind = PieceKind::from_letter(first).ok_or(MoveError::InvalidNotation)?;
    let extra: Vec<char> = prefix.chars().skip(1).filter(|&c| c != 'x').collect();
    let disambiguator = match extra.as_slice() {
        [] => None,
        [c] => {
            if let Ok(rank) = Rank::try_from(*c) {
                Some(Disambiguator::Rank(rank))
            } else if let Ok(file) = File::try_from(*c) {
                Some(Disambiguator::File(file))
            } else {
                return Err(MoveError::InvalidNotation);
            }
        }
        _ => return Err(MoveError::InvalidNotation),
    };

    Ok(Mover::Piece {
        kind,
        disambiguator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn notation(token: &str) -> Notation {
        parse(token).unwrap().notation
    }

    #[test]
    fn castles() {
        assert_eq!(Notation::Castle(Wing::Kingside), notation("O-O"));
        assert_eq!(Notation::Castle(Wing::Queenside), notation("O-O-O"));
        assert_eq!(Notation::Castle(Wing::Kingside), notation("O-O+"));
        assert_eq!(Err(MoveError::InvalidNotation), parse("O-O-O-O"));
    }

    #[test]
    fn castle_wins_over_capture() {
        // "O-" is looked for before "x".
        assert_eq!(Err(MoveError::InvalidNotation), parse("O-Ox"));
    }

    #[test]
    fn pawn_push() {
        assert_eq!(
            Notation::Quiet(MoveText {
                destination: sq("e4"),
                mover: Mover::Pawn {
                    from_file: None,
                    promotion: None,
                },
            }),
            notation("e4")
        );
    }

    #[test]
    fn pawn_capture() {
        assert_eq!(
            Notation::Capture(MoveText {
                destination: sq("d5"),
                mover: Mover::Pawn {
                    from_file: Some(File::E),
                    promotion: None,
                },
            }),
            notation("exd5")
        );
    }

    #[test]
    fn promotion() {
        assert_eq!(
            Notation::Quiet(MoveText {
                destination: sq("e8"),
                mover: Mover::Pawn {
                    from_file: None,
                    promotion: Some(PieceKind::Queen),
                },
            }),
            notation("e8=Q")
        );

        assert_eq!(
            Notation::Capture(MoveText {
                destination: sq("d1"),
                mover: Mover::Pawn {
                    from_file: Some(File::E),
                    promotion: Some(PieceKind::Knight),
                },
            }),
            notation("exd1=N")
        );
    }

    #[test]
    fn bad_promotion() {
        assert_eq!(Err(MoveError::InvalidNotation), parse("e8=K"));
        assert_eq!(Err(MoveError::InvalidNotation), parse("e8=Z"));
        assert_eq!(Err(MoveError::InvalidNotation), parse("e8="));
    }

    #[test]
    fn piece_moves() {
        assert_eq!(
            Notation::Quiet(MoveText {
                destination: sq("f3"),
                mover: Mover::Piece {
                    kind: PieceKind::Knight,
                    disambiguator: None,
                },
            }),
            notation("Nf3")
        );

        assert_eq!(
            Notation::Capture(MoveText {
                destination: sq("e5"),
                mover: Mover::Piece {
                    kind: PieceKind::Rook,
                    disambiguator: None,
                },
            }),
            notation("Rxe5")
        );
    }

    #[test]
    fn disambiguators() {
        assert_eq!(
            Notation::Quiet(MoveText {
                destination: sq("d7"),
                mover: Mover::Piece {
                    kind: PieceKind::Knight,
                    disambiguator: Some(Disambiguator::File(File::B)),
                },
            }),
            notation("Nbd7")
        );

        assert_eq!(
            Notation::Capture(MoveText {
                destination: sq("e5"),
                mover: Mover::Piece {
                    kind: PieceKind::Rook,
                    disambiguator: Some(Disambiguator::Rank(Rank::One)),
                },
            }),
            notation("R1xe5")
        );
    }

    #[test]
    fn suffixes_are_kept() {
        let parsed = parse("Qh5+").unwrap();
        assert_eq!(Some(Suffix::Check), parsed.suffix);
        let parsed = parse("Qxf7#").unwrap();
        assert_eq!(Some(Suffix::Checkmate), parsed.suffix);
        assert_eq!(None, parse("Qh5").unwrap().suffix);
    }

    #[test]
    fn no_destination() {
        assert_eq!(Err(MoveError::InvalidNotation), parse("Nz9"));
        assert_eq!(Err(MoveError::InvalidNotation), parse(""));
        assert_eq!(Err(MoveError::InvalidNotation), parse("hello"));
    }

    #[test]
    fn bad_piece_letters() {
        assert_eq!(Err(MoveError::InvalidNotation), parse("Zf3"));
        assert_eq!(Err(MoveError::InvalidNotation), parse("Nb1xd2"));
    }
}
