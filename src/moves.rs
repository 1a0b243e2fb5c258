// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::piece::PieceId;
use crate::types::{Color, File, PieceKind, Square, Wing};

/// A move that has been matched to the pieces that carry it out and checked
/// against their legal-move lists. Applying one always succeeds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Normal {
        piece: PieceId,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    Castle {
        color: Color,
        wing: Wing,
        king: PieceId,
        rook: PieceId,
    },
}

impl Move {
    pub fn is_castle(&self) -> bool {
        match self {
            Move::Castle { .. } => true,
            Move::Normal { .. } => false,
        }
    }

    /// The square the moving piece (the king, for castles) ends up on.
    pub fn destination(&self) -> Square {
        match *self {
            Move::Normal { to, .. } => to,
            Move::Castle { color, wing, .. } => king_target(color, wing),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Move::Normal {
                from,
                to,
                promotion,
                ..
            } => {
                write!(f, "{}{}", from, to)?;
                if let Some(kind) = promotion {
                    write!(f, "{}", kind)?;
                }
                Ok(())
            }
            Move::Castle {
                wing: Wing::Kingside,
                ..
            } => write!(f, "O-O"),
            Move::Castle {
                wing: Wing::Queenside,
                ..
            } => write!(f, "O-O-O"),
        }
    }
}

//
// Fixed castling geometry.
//

pub fn king_home(color: Color) -> Square {
    Square::of(color.back_rank(), File::E)
}

pub fn rook_home(color: Color, wing: Wing) -> Square {
    let file = match wing {
        Wing::Kingside => File::H,
        Wing::Queenside => File::A,
    };
    Square::of(color.back_rank(), file)
}

pub fn king_target(color: Color, wing: Wing) -> Square {
    let file = match wing {
        Wing::Kingside => File::G,
        Wing::Queenside => File::C,
    };
    Square::of(color.back_rank(), file)
}

pub fn rook_target(color: Color, wing: Wing) -> Square {
    let file = match wing {
        Wing::Kingside => File::F,
        Wing::Queenside => File::D,
    };
    Square::of(color.back_rank(), file)
}

/// Squares that must be empty and unattacked for a castle on this wing. On
/// the queenside this includes the b-file square the king never crosses.
pub fn castle_path(color: Color, wing: Wing) -> Vec<Square> {
    let files: &[File] = match wing {
        Wing::Kingside => &[File::F, File::G][..],
        Wing::Queenside => &[File::B, File::C, File::D][..],
    };

    files
        .iter()
        .map(|&file| Square::of(color.back_rank(), file))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castle_geometry() {
        assert_eq!("e1", king_home(Color::White).to_string());
        assert_eq!("h8", rook_home(Color::Black, Wing::Kingside).to_string());
        assert_eq!("a1", rook_home(Color::White, Wing::Queenside).to_string());
        assert_eq!("g8", king_target(Color::Black, Wing::Kingside).to_string());
        assert_eq!("d1", rook_target(Color::White, Wing::Queenside).to_string());
    }

    #[test]
    fn castle_paths() {
        let path: Vec<_> = castle_path(Color::White, Wing::Kingside)
            .iter()
            .map(|sq| sq.to_string())
            .collect();
        assert_eq!(vec!["f1", "g1"], path);

        let path: Vec<_> = castle_path(Color::Black, Wing::Queenside)
            .iter()
            .map(|sq| sq.to_string())
            .collect();
        assert_eq!(vec!["b8", "c8", "d8"], path);
    }
}
