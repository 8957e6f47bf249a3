// This file is part of the deep-chess-engine library.
// Copyright (C) 2026 The deep-chess-engine developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{
    error::Error,
    fs,
    io::{self, Read as _},
    path::PathBuf,
};

use clap::Parser;
use deep_chess_engine::{Config, Game, MoveRecord};
use tracing_subscriber::EnvFilter;

/// Replays a JSON move history and prints the resulting game.
#[derive(Debug, Parser)]
#[command(name = "deep-chess", version)]
struct Opt {
    /// Name of the white player
    #[arg(long, default_value = "White")]
    white: String,
    /// Name of the black player
    #[arg(long, default_value = "Black")]
    black: String,
    /// Also prints the legal moves of the side to move as JSON
    #[arg(long)]
    moves: bool,
    /// Prints the result only
    #[arg(long)]
    test: bool,
    /// History file like `[{"from":"e2","to":"e4"}]`. Reads stdin if omitted.
    history: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opt = Opt::parse();

    let json = match opt.history {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let json = if json.trim().is_empty() { "[]" } else { json.as_str() };

    let mut game = Game::with_config(Config {
        white_name: opt.white,
        black_name: opt.black,
    });
    game.deserialize_history(json)?;

    let result = game.outcome().map_or_else(|| "*".to_owned(), |outcome| outcome.to_string());

    if opt.test {
        println!("{result}");
    } else {
        println!("[White \"{}\"]", game.config().white_name);
        println!("[Black \"{}\"]", game.config().black_name);
        println!("[Result \"{result}\"]");
        println!();
        print!("{}", game.board());
        println!();
        let pgn = game.pgn();
        if pgn.is_empty() {
            println!("{result}");
        } else {
            println!("{pgn} {result}");
        }
    }

    if opt.moves {
        let moves: Vec<MoveRecord> = game.moves().into_iter().map(MoveRecord::from).collect();
        println!("{}", serde_json::to_string(&moves)?);
    }

    Ok(())
}
