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

//! A chess rules engine for two players on one board, with move history
//! replay.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use deep_chess_engine::Game;
//!
//! let game = Game::new();
//! assert_eq!(game.moves().len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use deep_chess_engine::{square, Game, MoveRecord};
//!
//! let mut game = Game::new();
//!
//! // 1. e4
//! let pawn = game.board().piece_at(square::E2).expect("pawn on e2");
//! assert!(game.move_piece(pawn, Some(square::E4)));
//!
//! // 1... e5
//! assert!(game.play_record(MoveRecord { from: square::E7, to: square::E5 }));
//!
//! assert_eq!(game.pgn(), "1. e4 e5");
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use deep_chess_engine::{Color, Game, Outcome};
//!
//! let json = r#"[{"from":"f2","to":"f3"},{"from":"e7","to":"e5"},
//!               {"from":"g2","to":"g4"},{"from":"d8","to":"h4"}]"#;
//! let game = Game::from_history(json)?;
//! assert!(game.is_checkmate(Color::White));
//! assert_eq!(game.outcome(), Some(Outcome::Decisive { winner: Color::Black }));
//! assert_eq!(game.pgn(), "1. f3 e5 2. g4 Qh4#");
//! # Ok::<_, deep_chess_engine::HistoryError>(())
//! ```
//!
//! Moves are written in [SAN](san), and histories are (de)serialized as JSON
//! arrays of [`MoveRecord`].

#![doc(html_root_url = "https://docs.rs/deep-chess-engine/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod agent;
mod bitboard;
mod board;
mod castling_side;
mod color;
mod config;
mod errors;
mod game;
mod history;
mod movegen;
mod perft;
mod player;
mod role;

pub mod san;
pub mod square;

pub use agent::Agent;
pub use bitboard::Bitboard;
pub use board::{Board, Piece, PieceArena, PieceId};
pub use castling_side::CastlingSide;
pub use color::{ByColor, Color, ParseColorError};
pub use config::Config;
pub use errors::{HistoryError, HistoryResult};
pub use game::{Game, Outcome};
pub use history::{HistoryEntry, MoveRecord};
pub use movegen::{Move, MoveList, MoveQuery, SquareList};
pub use perft::perft;
pub use player::Player;
pub use role::Role;
pub use square::{ParseSquareError, Square};
