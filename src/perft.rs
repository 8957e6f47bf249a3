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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use deep_chess_engine::{perft, Game};
//!
//! let game = Game::new();
//! assert_eq!(perft(&game, 1), 20);
//! assert_eq!(perft(&game, 2), 400);
//! ```

use crate::game::Game;

/// Counts legal move paths of a given length.
///
/// Paths ending in mate or stalemate are not counted unless it occurs in the
/// final position. Useful for comparing, testing and debugging move
/// generation correctness and performance.
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = game.moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|m| {
            let mut child = game.clone();
            child.move_piece(m.piece, Some(m.to));
            perft(&child, depth - 1)
        })
        .sum()
}
