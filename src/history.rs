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

//! Move history and its JSON form.
//!
//! A history is serialized as an array of `{"from", "to"}` records in
//! algebraic notation:
//!
//! ```
//! use deep_chess_engine::Game;
//!
//! let json = r#"[{"from":"e2","to":"e4"},{"from":"e7","to":"e5"}]"#;
//! let game = Game::from_history(json)?;
//! assert_eq!(game.pgn(), "1. e4 e5");
//! assert_eq!(game.serialize_history(), json);
//! # Ok::<_, deep_chess_engine::HistoryError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    board::PieceId,
    errors::{HistoryError, HistoryResult},
    game::Game,
    movegen::Move,
    square::Square,
};

/// A move as it was played.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct HistoryEntry {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

/// The `{from, to}` shape shared by serialized histories and [`Agent`]
/// replies.
///
/// [`Agent`]: crate::Agent
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl From<HistoryEntry> for MoveRecord {
    fn from(entry: HistoryEntry) -> MoveRecord {
        MoveRecord {
            from: entry.from,
            to: entry.to,
        }
    }
}

impl From<Move> for MoveRecord {
    fn from(m: Move) -> MoveRecord {
        MoveRecord {
            from: m.from,
            to: m.to,
        }
    }
}

impl Game {
    /// Starts a new game with default settings and replays `json` on it.
    ///
    /// # Errors
    ///
    /// See [`Game::deserialize_history`].
    pub fn from_history(json: &str) -> HistoryResult<Game> {
        let mut game = Game::new();
        game.deserialize_history(json)?;
        Ok(game)
    }

    /// Records of every move played so far, in order.
    pub fn records(&self) -> impl Iterator<Item = MoveRecord> + '_ {
        self.history.iter().map(|&entry| MoveRecord::from(entry))
    }

    /// Serializes the history as a compact JSON array.
    pub fn serialize_history(&self) -> String {
        let records: Vec<MoveRecord> = self.records().collect();
        serde_json::to_string(&records).expect("move records serialize")
    }

    /// Resets the game to the starting position and replays `json`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if `json` is malformed or a record cannot
    /// be played. The game is then left partially replayed and should be
    /// discarded.
    pub fn deserialize_history(&mut self, json: &str) -> HistoryResult<()> {
        let result = self.replay(json);
        if let Err(ref err) = result {
            warn!(%err, "failed to replay move history");
        }
        result
    }

    fn replay(&mut self, json: &str) -> HistoryResult<()> {
        let records: Vec<MoveRecord> = serde_json::from_str(json)?;

        self.initialize();
        for (ply, record) in records.into_iter().enumerate() {
            let Some(piece) = self.board.piece_at(record.from) else {
                return Err(HistoryError::MissingPiece {
                    ply,
                    from: record.from,
                });
            };
            if !self.move_piece(piece, Some(record.to)) {
                return Err(HistoryError::IllegalMove {
                    ply,
                    from: record.from,
                    to: record.to,
                });
            }
        }

        Ok(())
    }

    /// Plays the piece on `record.from` to `record.to` through
    /// [`Game::move_piece`]. Returns `false` if the origin is empty or the
    /// move is rejected.
    pub fn play_record(&mut self, record: MoveRecord) -> bool {
        match self.board.piece_at(record.from) {
            Some(piece) => self.move_piece(piece, Some(record.to)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{square, Color};

    #[test]
    fn test_round_trip() {
        let json = r#"[{"from":"e2","to":"e4"},{"from":"e7","to":"e5"}]"#;
        let game = Game::from_history(json).expect("valid history");
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.serialize_history(), json);
    }

    #[test]
    fn test_empty_history() {
        let game = Game::from_history("[]").expect("valid history");
        assert_eq!(game, Game::new());
        assert_eq!(game.serialize_history(), "[]");
    }

    #[test]
    fn test_deserialize_resets() {
        let mut game = Game::new();
        assert!(game.play_record(MoveRecord {
            from: square::D2,
            to: square::D4,
        }));
        game.deserialize_history(r#"[{"from":"e2","to":"e4"}]"#)
            .expect("valid history");
        assert_eq!(game.pgn(), "1. e4");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Game::from_history(r#"[{"from":"e2"}]"#),
            Err(HistoryError::Json { .. })
        ));
        assert!(matches!(
            Game::from_history(r#"[{"from":"z9","to":"e4"}]"#),
            Err(HistoryError::Json { .. })
        ));
        assert!(matches!(
            Game::from_history(r#"[{"from":"e2","to":"e4"},{"from":"e3","to":"e4"}]"#),
            Err(HistoryError::MissingPiece { ply: 1, from: square::E3 })
        ));
        assert!(matches!(
            Game::from_history(r#"[{"from":"e2","to":"e5"}]"#),
            Err(HistoryError::IllegalMove { ply: 0, .. })
        ));
        assert!(matches!(
            Game::from_history(r#"[{"from":"e2","to":"e4"},{"from":"e4","to":"e5"}]"#),
            Err(HistoryError::IllegalMove { ply: 1, .. })
        ));
    }

    #[test]
    fn test_play_record() {
        let mut game = Game::new();
        let record = MoveRecord {
            from: square::G1,
            to: square::F3,
        };
        assert_eq!(record.to_string(), "g1f3");
        assert!(game.play_record(record));
        assert!(!game.play_record(record));
        assert_eq!(game.records().collect::<Vec<_>>(), vec![record]);
    }
}
