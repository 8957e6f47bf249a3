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

//! Piece placement without any rule knowledge.

use std::fmt;

use arrayvec::ArrayVec;

use crate::{color::Color, role::Role, square::Square};

/// Stable identifier of a piece within one [`Board`].
///
/// Identifiers are handed out in creation order and never reused, so they
/// survive captures and replays of the same move sequence.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct PieceId(u8);

impl PieceId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece with [`Color`], [`Role`], its current square and whether it has
/// moved yet.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    /// `None` before placement and once the piece left the board.
    pub square: Option<Square>,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, role: Role) -> Piece {
        Piece {
            color,
            role,
            square: None,
            has_moved: false,
        }
    }

    /// Letter as used in diagrams: uppercase for white, lowercase for black.
    pub fn char(&self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    pub fn value(&self) -> u32 {
        self.role.value()
    }
}

/// Every piece created during a game: 32 at the start plus at most 16
/// promoted queens.
pub type PieceArena = ArrayVec<Piece, 64>;

/// An 8x8 mailbox of squares, each holding at most one piece.
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    squares: [Option<PieceId>; 64],
    pieces: PieceArena,
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [None; 64],
            pieces: ArrayVec::new(),
        }
    }

    /// Creates a piece that is not on the board yet.
    ///
    /// # Panics
    ///
    /// Panics if the arena is full, which no legal game reaches.
    pub(crate) fn spawn(&mut self, color: Color, role: Role) -> PieceId {
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece::new(color, role));
        id
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<PieceId> {
        self.squares[usize::from(sq.index())]
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|id| self.piece(id).color)
    }

    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|id| self.piece(id).role)
    }

    /// Resolves an algebraic address like `e4` in constant time.
    pub fn square_by_address(&self, address: &str) -> Option<Square> {
        address.parse().ok()
    }

    /// The square offset from `sq`, or `None` off the board.
    pub fn adjacent_square(&self, sq: Square, row_offset: i8, col_offset: i8) -> Option<Square> {
        sq.offset(row_offset, col_offset)
    }

    /// Overwrites the occupant of a square. Only updates the mailbox, the
    /// piece's own square is left to the caller.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, id: Option<PieceId>) {
        self.squares[usize::from(sq.index())] = id;
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<PieceId> {
        self.squares[usize::from(sq.index())].take()
    }

    /// All pieces ever created, indexed by [`PieceId`].
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, piece)| (PieceId(i as u8), piece))
    }

    /// Occupied squares with their pieces, `a1` first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|id| (sq, self.piece(id))))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("  | a | b | c | d | e | f | g | h |\n")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let sq = Square::new(file, rank);
                match self.piece_at(sq) {
                    Some(id) => write!(f, " {} |", self.piece(id).char())?,
                    None => f.write_str("   |")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square;

    #[test]
    fn test_spawn_and_place() {
        let mut board = Board::empty();
        let id = board.spawn(Color::Black, Role::Knight);
        assert_eq!(board.piece(id).square, None);
        board.set(square::G8, Some(id));
        assert_eq!(board.piece_at(square::G8), Some(id));
        assert_eq!(board.role_at(square::G8), Some(Role::Knight));
        assert_eq!(board.color_at(square::G8), Some(Color::Black));
        assert_eq!(board.take(square::G8), Some(id));
        assert_eq!(board.piece_at(square::G8), None);
    }

    #[test]
    fn test_square_by_address() {
        let board = Board::empty();
        assert_eq!(board.square_by_address("c6"), Some(square::C6));
        assert_eq!(board.square_by_address("c9"), None);
        assert_eq!(board.adjacent_square(square::B1, 2, 1), Some(square::C3));
        assert_eq!(board.adjacent_square(square::B1, -1, 0), None);
    }

    #[test]
    fn test_diagram() {
        let mut board = Board::empty();
        let king = board.spawn(Color::White, Role::King);
        board.set(square::E1, Some(king));
        let diagram = board.to_string();
        assert!(diagram.ends_with("1 |   |   |   |   | K |   |   |   |\n"));
    }
}
