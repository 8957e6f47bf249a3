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

//! Write Standard Algebraic Notation.
//!
//! # Examples
//!
//! ```
//! use deep_chess_engine::{san::San, square, Game, Move};
//!
//! let game = Game::new();
//! let knight = game.board().piece_at(square::G1).expect("knight on g1");
//! let m = Move { piece: knight, from: square::G1, to: square::F3 };
//! assert_eq!(San::from_move(&game, m).to_string(), "Nf3");
//! ```

use std::fmt::{self, Write as _};

use crate::{
    castling_side::CastlingSide,
    game::Game,
    movegen::{Move, MoveQuery},
    role::Role,
    square::Square,
};

/// A move in Standard Algebraic Notation.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum San {
    Normal {
        role: Role,
        /// Origin file, if needed to tell the move apart.
        file: Option<u8>,
        /// Origin rank, if needed to tell the move apart.
        rank: Option<u8>,
        capture: bool,
        to: Square,
        promotion: Option<Role>,
    },
    Castle(CastlingSide),
}

impl San {
    /// Converts a move to notation in the position before it is played.
    pub fn from_move(game: &Game, m: Move) -> San {
        let board = game.board();
        let piece = board.piece(m.piece);

        if piece.role == Role::King {
            if let Some(side) = CastlingSide::from_king_move(m.from, m.to) {
                return San::Castle(side);
            }
        }

        let en_passant =
            piece.role == Role::Pawn && m.from.file() != m.to.file() && board.piece_at(m.to).is_none();
        let capture = en_passant || board.piece_at(m.to).is_some();
        let promotion = (piece.role == Role::Pawn && m.to.rank() == piece.color.promotion_rank())
            .then_some(Role::Queen);

        let (rank, file) = match piece.role {
            Role::Pawn => (false, capture),
            Role::King => (false, false),
            role => {
                // Other pieces of the same kind that can reach the target.
                let query = MoveQuery::LEGAL.ignore_turn(true);
                game.player_moves(piece.color, query)
                    .iter()
                    .filter(|c| c.piece != m.piece && c.to == m.to && board.piece(c.piece).role == role)
                    .fold((false, false), |(rank, file), c| {
                        if m.from.rank() == c.from.rank() || m.from.file() != c.from.file() {
                            (rank, true)
                        } else {
                            (true, file)
                        }
                    })
            }
        };

        San::Normal {
            role: piece.role,
            file: file.then_some(m.from.file()),
            rank: rank.then_some(m.from.rank()),
            capture,
            to: m.to,
            promotion,
        }
    }
}

impl fmt::Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            San::Normal {
                role,
                file,
                rank,
                capture,
                to,
                promotion,
            } => {
                if role != Role::Pawn {
                    f.write_char(role.upper_char())?;
                }
                if let Some(file) = file {
                    f.write_char(char::from(b'a' + file))?;
                }
                if let Some(rank) = rank {
                    f.write_char(char::from(b'1' + rank))?;
                }
                if capture {
                    f.write_char('x')?;
                }
                write!(f, "{to}")?;
                if let Some(promotion) = promotion {
                    write!(f, "={}", promotion.upper_char())?;
                }
                Ok(())
            }
            San::Castle(CastlingSide::KingSide) => f.write_str("O-O"),
            San::Castle(CastlingSide::QueenSide) => f.write_str("O-O-O"),
        }
    }
}

/// Check (`+`) or checkmate (`#`) suffix.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Suffix {
    Check,
    Checkmate,
}

impl Suffix {
    pub const fn char(self) -> char {
        match self {
            Suffix::Check => '+',
            Suffix::Checkmate => '#',
        }
    }
}

/// A [`San`] and possible check and checkmate suffixes.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct SanPlus {
    pub san: San,
    pub suffix: Option<Suffix>,
}

impl fmt::Display for SanPlus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.san)?;
        if let Some(suffix) = self.suffix {
            f.write_char(suffix.char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square;

    fn san_of(game: &Game, from: Square, to: Square) -> String {
        let piece = game.board().piece_at(from).expect("piece on origin");
        San::from_move(game, Move { piece, from, to }).to_string()
    }

    fn play(game: &mut Game, moves: &[(Square, Square)]) {
        for &(from, to) in moves {
            let id = game.board().piece_at(from).expect("piece on origin");
            assert!(game.move_piece(id, Some(to)), "{from}{to} should be legal");
        }
    }

    #[test]
    fn test_display() {
        let san = San::Normal {
            role: Role::Knight,
            file: Some(1),
            rank: None,
            capture: true,
            to: square::D7,
            promotion: None,
        };
        assert_eq!(san.to_string(), "Nbxd7");

        let promotion = SanPlus {
            san: San::Normal {
                role: Role::Pawn,
                file: None,
                rank: None,
                capture: false,
                to: square::A8,
                promotion: Some(Role::Queen),
            },
            suffix: Some(Suffix::Check),
        };
        assert_eq!(promotion.to_string(), "a8=Q+");

        let castle = SanPlus {
            san: San::Castle(CastlingSide::QueenSide),
            suffix: Some(Suffix::Checkmate),
        };
        assert_eq!(castle.to_string(), "O-O-O#");
    }

    #[test]
    fn test_pawn_capture_uses_origin_file() {
        let mut game = Game::new();
        play(&mut game, &[(square::E2, square::E4), (square::D7, square::D5)]);
        assert_eq!(san_of(&game, square::E4, square::D5), "exd5");
        assert_eq!(san_of(&game, square::E4, square::E5), "e5");
    }

    #[test]
    fn test_disambiguate_by_file() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                (square::G1, square::F3),
                (square::G8, square::F6),
                (square::D2, square::D3),
                (square::D7, square::D6),
            ],
        );
        // Both knights reach d2 now that the pawn left it.
        assert_eq!(san_of(&game, square::F3, square::D2), "Nfd2");
        assert_eq!(san_of(&game, square::B1, square::D2), "Nbd2");
        assert_eq!(san_of(&game, square::B1, square::C3), "Nc3");
    }

    #[test]
    fn test_disambiguate_by_rank() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                (square::B1, square::C3),
                (square::A7, square::A6),
                (square::G1, square::F3),
                (square::A6, square::A5),
                (square::F3, square::D4),
                (square::H7, square::H6),
                (square::D4, square::B3),
                (square::H6, square::H5),
                (square::B3, square::C5),
                (square::H5, square::H4),
            ],
        );
        // Knights on c3 and c5 share the file.
        assert_eq!(san_of(&game, square::C5, square::E4), "N5e4");
        assert_eq!(san_of(&game, square::C3, square::E4), "N3e4");
        assert_eq!(san_of(&game, square::C5, square::B7), "Nxb7");
    }
}
