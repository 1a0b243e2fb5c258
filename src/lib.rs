// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A two-player chess board driven by algebraic notation. Each piece carries
//! a cached list of its legal destinations; moves are matched against those
//! lists, applied, and the lists of the side to move are rebuilt.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod board;
pub mod castle;
mod error;
mod game;
pub mod move_generator;
mod moves;
pub mod notation;
mod piece;
mod position;
pub mod resolver;
pub mod session;
mod types;

pub use board::Board;
pub use error::{FenParseError, MoveError};
pub use game::Game;
pub use moves::Move;
pub use piece::{Piece, PieceId, Roster, SquareVec};
pub use position::{Position, START_FEN};
pub use session::Session;
pub use types::{CastleStatus, Color, File, PieceKind, Rank, Square, Wing};
