// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::io;
use std::process;

use clap::{App, Arg};
use termchess::{Game, Session};

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("fen")
                .help("FEN string for the starting position")
                .value_name("FEN")
                .long("fen")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-board")
                .help("Don't print the board before each prompt")
                .long("no-board"),
        )
        .get_matches();

    let game = match matches.value_of("fen") {
        Some(fen) => match Game::from_fen(fen) {
            Ok(game) => game,
            Err(err) => {
                println!("invalid fen: {}", err);
                process::exit(1);
            }
        },
        None => Game::new(),
    };

    let session = Session::new(game, !matches.is_present("no-board"));
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = session.run(stdin.lock(), stdout.lock()) {
        eprintln!("i/o error: {}", err);
        process::exit(1);
    }
}
