// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The game façade: one position, driven one notation token at a time.
//!
//! Legal-move lists are regenerated exactly once per side per turn. After a
//! move is applied only the side that is now to move gets fresh lists; the
//! side that just moved keeps the lists it had before its move, and those are
//! the lists castling consults on the next turn.
use crate::error::{FenParseError, MoveError};
use crate::moves::Move;
use crate::notation;
use crate::position::Position;
use crate::resolver;
use crate::types::Square;

#[derive(Clone, Debug)]
pub struct Game {
    pos: Position,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Game {
        Game::prepare(Position::from_start_position())
    }

    pub fn from_fen<S: AsRef<str>>(fen: S) -> Result<Game, FenParseError> {
        Position::from_fen(fen).map(Game::prepare)
    }

    // Both sides need lists before the first move: the side to move to move,
    // the other side so castling has something to consult.
    fn prepare(mut pos: Position) -> Game {
        let side = pos.side_to_move();
        pos.generate_legal_moves(side.toggle());
        pos.generate_legal_moves(side);
        Game { pos }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// The cached destinations of the piece on `square`, if there is one.
    pub fn legal_moves(&self, square: Square) -> Option<&[Square]> {
        self.pos.piece_at(square).map(|piece| piece.legal_moves())
    }

    /// Parses, resolves and applies a single notation token. On failure the
    /// game is left exactly as it was.
    pub fn try_move(&mut self, token: &str) -> Result<Move, MoveError> {
        let parsed = notation::parse(token)?;
        let mov = resolver::resolve(&self.pos, parsed.notation)?;
        let mover = self.pos.side_to_move();
        self.pos.apply_move(mov);
        self.pos.generate_legal_moves(self.pos.side_to_move());
        info!("{} played {} ({})", mover, token.trim(), mov);
        Ok(mov)
    }

    /// Like `try_move`, reporting only whether the move was played.
    pub fn apply_move(&mut self, token: &str) -> bool {
        match self.try_move(token) {
            Ok(_) => true,
            Err(err) => {
                debug!("rejected move '{}': {}", token, err);
                false
            }
        }
    }

    pub fn render(&self) -> String {
        self.pos.to_string()
    }

    pub fn to_fen(&self) -> String {
        self.pos.as_fen()
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::START_FEN;
    use crate::types::{CastleStatus, Color, PieceKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn sorted(moves: &[Square]) -> Vec<String> {
        let mut names: Vec<_> = moves.iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn new_game_is_start_position() {
        let game = Game::new();
        assert_eq!(START_FEN, game.to_fen());
        assert_eq!(Color::White, game.position().side_to_move());
    }

    #[test]
    fn both_sides_have_lists() {
        let game = Game::new();
        assert_eq!(vec!["a3", "c3"], sorted(game.legal_moves(sq("b1")).unwrap()));
        assert_eq!(vec!["a6", "c6"], sorted(game.legal_moves(sq("b8")).unwrap()));
        assert_eq!(None, game.legal_moves(sq("e4")));
    }

    #[test]
    fn pawn_push_passes_turn() {
        let mut game = Game::new();
        assert!(game.apply_move("e4"));
        assert_eq!(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            game.to_fen()
        );
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut game = Game::new();
        let before = game.to_fen();
        let rendered = game.render();
        assert!(!game.apply_move("Rxe5"));
        assert!(!game.apply_move("e5"));
        assert!(!game.apply_move("Nd2"));
        assert!(!game.apply_move("gibberish"));
        assert_eq!(before, game.to_fen());
        assert_eq!(rendered, game.render());
    }

    #[test]
    fn try_move_reports_reason() {
        let mut game = Game::new();
        assert_eq!(Err(MoveError::EmptyCaptureSquare), game.try_move("Rxe5"));
        assert_eq!(Err(MoveError::CastlingDenied), game.try_move("O-O"));
        assert_eq!(Err(MoveError::InvalidNotation), game.try_move("Z9"));
    }

    #[test]
    fn only_mover_side_refreshed() {
        let mut game = Game::new();
        assert!(game.apply_move("e4"));

        // White's lists are the ones from before e4: the f1 bishop is still
        // hemmed in and the e2 square is listed for no one.
        assert_eq!(Some(&[][..]), game.legal_moves(sq("f1")));
        // Black's lists are fresh.
        assert_eq!(vec!["e5", "e6"], sorted(game.legal_moves(sq("e7")).unwrap()));

        assert!(game.apply_move("e5"));
        let bishop = sorted(game.legal_moves(sq("f1")).unwrap());
        assert_eq!(vec!["a6", "b5", "c4", "d3", "e2"], bishop);
    }

    #[test]
    fn short_castle() {
        let mut game = Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        assert!(game.apply_move("O-O"));
        let pos = game.position();
        assert_eq!(Some(PieceKind::King), pos.piece_at(sq("g1")).map(|p| p.kind));
        assert_eq!(Some(PieceKind::Rook), pos.piece_at(sq("f1")).map(|p| p.kind));
        assert!(pos.piece_at(sq("e1")).is_none());
        assert!(pos.piece_at(sq("h1")).is_none());
        assert_eq!(
            CastleStatus::BLACK_KINGSIDE | CastleStatus::BLACK_QUEENSIDE,
            pos.castle_status()
        );
        assert!(game.to_fen().contains(" b kq "));
    }

    #[test]
    fn long_castle_black() {
        let mut game = Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1").unwrap();
        assert!(game.apply_move("O-O-O"));
        assert_eq!(
            "2kr3r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQ - 0 1",
            game.to_fen()
        );
    }

    #[test]
    fn castle_through_attack_refused() {
        let mut game = Game::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let before = game.to_fen();
        assert!(!game.apply_move("O-O"));
        assert_eq!(before, game.to_fen());
        assert!(game.apply_move("O-O-O"));
    }

    #[test]
    fn promotion() {
        let mut game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(game.apply_move("a8=Q"));
        assert_eq!("Q3k3/8/8/8/8/8/8/4K3 b - - 0 1", game.to_fen());
    }

    #[test]
    fn bad_fen() {
        assert!(Game::from_fen("not a fen").is_err());
    }
}
