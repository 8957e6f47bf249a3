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

use std::{error::Error, fmt};

use crate::square::Square;

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Error when replaying a serialized move history.
#[derive(Debug)]
pub enum HistoryError {
    /// The input is not a JSON array of `{"from", "to"}` records.
    Json {
        #[allow(missing_docs)]
        error: serde_json::Error,
    },
    /// No piece stands on the origin square of a record.
    MissingPiece {
        /// Zero-based index of the offending record.
        ply: usize,
        #[allow(missing_docs)]
        from: Square,
    },
    /// The record names a move the piece cannot make.
    IllegalMove {
        /// Zero-based index of the offending record.
        ply: usize,
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
    },
}

impl HistoryError {
    /// Index of the record that could not be replayed, if any.
    pub fn ply(&self) -> Option<usize> {
        match *self {
            HistoryError::Json { .. } => None,
            HistoryError::MissingPiece { ply, .. } | HistoryError::IllegalMove { ply, .. } => {
                Some(ply)
            }
        }
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Json { error } => write!(f, "invalid move history: {error}"),
            HistoryError::MissingPiece { ply, from } => {
                write!(f, "no piece on {from} at ply {ply}")
            }
            HistoryError::IllegalMove { ply, from, to } => {
                write!(f, "illegal move {from}{to} at ply {ply}")
            }
        }
    }
}

impl Error for HistoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HistoryError::Json { error } => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(error: serde_json::Error) -> HistoryError {
        HistoryError::Json { error }
    }
}
