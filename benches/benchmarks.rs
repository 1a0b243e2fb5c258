// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;
use termchess::{notation, Game, Position};

const MIDGAME: &str = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 4 5";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("new game", |b| b.iter(Game::new));

    c.bench_function("load midgame", |b| {
        b.iter(|| Game::from_fen(black_box(MIDGAME)))
    });

    c.bench_function("position clone", |b| {
        let pos = Position::from_start_position();
        b.iter(|| black_box(&pos).clone())
    });

    c.bench_function("parse Nbd7", |b| {
        b.iter(|| notation::parse(black_box("Nbd7")))
    });

    c.bench_function("apply e4", |b| {
        let game = Game::new();
        b.iter(|| {
            let mut game = game.clone();
            game.apply_move(black_box("e4"))
        })
    });

    c.bench_function("apply short castle", |b| {
        let game = Game::from_fen(MIDGAME).unwrap();
        b.iter(|| {
            let mut game = game.clone();
            game.apply_move(black_box("O-O"))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
