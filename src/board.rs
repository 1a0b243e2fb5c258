// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 8x8 grid of piece handles. The grid is plain storage: it knows
//! nothing about which pieces exist or how they move.
use crate::piece::PieceId;
use crate::types::Square;

#[derive(Clone, Debug, Default)]
pub struct Board {
    grid: [[Option<PieceId>; 8]; 8],
}

impl Board {
    pub fn new() -> Board {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    pub fn get(&self, square: Square) -> Option<PieceId> {
        self.grid[square.row()][square.col()]
    }

    pub fn set(&mut self, square: Square, occupant: Option<PieceId>) {
        self.grid[square.row()][square.col()] = occupant;
    }

    /// Raw grid access. Coordinates outside of 0..8 yield `None`.
    pub fn at(&self, row: i32, col: i32) -> Option<PieceId> {
        Square::from_grid(row, col).and_then(|sq| self.get(sq))
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }
}
