// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::io::{self, BufRead, Write};

use crate::game::Game;

const QUIT: &str = "q";
const PROMPT: &str = ":";

/// A line-oriented play loop: show the board, prompt, read one token, try it.
/// `q` (or end of input) ends the session and prints the final FEN.
pub struct Session {
    game: Game,
    show_board: bool,
}

impl Session {
    pub fn new(game: Game, show_board: bool) -> Session {
        Session { game, show_board }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run<R, W>(mut self, reader: R, mut writer: W) -> io::Result<Game>
    where
        R: BufRead,
        W: Write,
    {
        let mut lines = reader.lines();
        loop {
            if self.show_board {
                writeln!(&mut writer, "{}", self.game.render())?;
            }

            write!(&mut writer, "{} ", PROMPT)?;
            writer.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match line.trim() {
                "" => continue,
                QUIT => break,
                token => {
                    if !self.game.apply_move(token) {
                        writeln!(&mut writer, "Move '{}' is not legal", token)?;
                    }
                }
            }
        }

        writeln!(&mut writer)?;
        writeln!(&mut writer, "FEN: {}", self.game.to_fen())?;
        Ok(self.game)
    }
}
