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

use crate::{color::Color, square::Square};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    pub const fn is_king_side(self) -> bool {
        !self.is_queen_side()
    }

    /// Side of a king move that shifts the king by two files, if it is one.
    pub fn from_king_move(from: Square, to: Square) -> Option<CastlingSide> {
        if from.rank() != to.rank() {
            return None;
        }
        match to.file() as i8 - from.file() as i8 {
            2 => Some(CastlingSide::KingSide),
            -2 => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }

    /// Direction the king travels in, as a column offset.
    pub const fn direction(self) -> i8 {
        match self {
            CastlingSide::KingSide => 1,
            CastlingSide::QueenSide => -1,
        }
    }

    pub const fn king_to_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    pub const fn rook_from_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    pub const fn rook_to_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    pub fn king_to(self, color: Color) -> Square {
        Square::new(self.king_to_file(), color.backrank())
    }

    pub fn rook_from(self, color: Color) -> Square {
        Square::new(self.rook_from_file(), color.backrank())
    }

    pub fn rook_to(self, color: Color) -> Square {
        Square::new(self.rook_to_file(), color.backrank())
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square;

    #[test]
    fn test_squares() {
        assert_eq!(CastlingSide::KingSide.king_to(Color::White), square::G1);
        assert_eq!(CastlingSide::QueenSide.king_to(Color::Black), square::C8);
        assert_eq!(CastlingSide::QueenSide.rook_from(Color::White), square::A1);
        assert_eq!(CastlingSide::KingSide.rook_to(Color::Black), square::F8);
    }

    #[test]
    fn test_from_king_move() {
        assert_eq!(
            CastlingSide::from_king_move(square::E1, square::G1),
            Some(CastlingSide::KingSide)
        );
        assert_eq!(
            CastlingSide::from_king_move(square::E8, square::C8),
            Some(CastlingSide::QueenSide)
        );
        assert_eq!(CastlingSide::from_king_move(square::E1, square::F1), None);
    }
}
