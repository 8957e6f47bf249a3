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

//! Per-piece move generation.
//!
//! Every kind is expressed through one of three walkers over
//! [`Square::offset`]: fixed steps (knight, king), rays (bishop, rook,
//! queen) and the pawn rules. King safety is verified by playing the
//! candidate on a scratch copy of the board and scanning the opponent's
//! attacks, which never consider castling, so the two cannot recurse into
//! each other.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::{
    bitboard::Bitboard,
    board::{Board, Piece, PieceId},
    castling_side::CastlingSide,
    color::Color,
    game::Game,
    role::Role,
    square::Square,
};

/// Target squares of a single piece. A queen reaches at most 27 squares.
pub type SquareList = ArrayVec<Square, 32>;

/// Moves of a whole player.
pub type MoveList = Vec<Move>;

/// A move of a piece to a target square.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

/// Restrictions applied when enumerating moves.
///
/// The default asks for fully legal moves of the side to move.
///
/// # Examples
///
/// ```
/// use deep_chess_engine::MoveQuery;
///
/// let query = MoveQuery::default().ignore_turn(true);
/// assert!(query.verify_check);
/// assert!(query.ignore_turn);
/// assert!(!query.ignore_castle);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct MoveQuery {
    /// Drop moves that leave the mover's own king attacked.
    pub verify_check: bool,
    /// Also enumerate moves of the side not to move.
    pub ignore_turn: bool,
    /// Skip castling.
    pub ignore_castle: bool,
}

impl MoveQuery {
    pub const LEGAL: MoveQuery = MoveQuery {
        verify_check: true,
        ignore_turn: false,
        ignore_castle: false,
    };

    /// Raw reach of a piece regardless of whose turn it is.
    pub const PSEUDO_LEGAL: MoveQuery = MoveQuery {
        verify_check: false,
        ignore_turn: true,
        ignore_castle: true,
    };

    #[must_use]
    pub const fn verify_check(mut self, verify_check: bool) -> MoveQuery {
        self.verify_check = verify_check;
        self
    }

    #[must_use]
    pub const fn ignore_turn(mut self, ignore_turn: bool) -> MoveQuery {
        self.ignore_turn = ignore_turn;
        self
    }

    #[must_use]
    pub const fn ignore_castle(mut self, ignore_castle: bool) -> MoveQuery {
        self.ignore_castle = ignore_castle;
        self
    }
}

impl Default for MoveQuery {
    fn default() -> MoveQuery {
        MoveQuery::LEGAL
    }
}

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

const QUEEN_DIRECTIONS: [(i8, i8); 8] = KING_OFFSETS;

impl Game {
    /// Target squares of a piece, or nothing if it is not on the board.
    ///
    /// With the default query only the side to move gets moves, and moves
    /// leaving its own king attacked are filtered out.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_chess_engine::{square, Game, MoveQuery};
    ///
    /// let game = Game::new();
    /// let pawn = game.board().piece_at(square::E2).expect("pawn on e2");
    /// let targets = game.piece_moves(pawn, MoveQuery::default());
    /// assert_eq!(targets.as_slice(), &[square::E3, square::E4]);
    /// ```
    pub fn piece_moves(&self, id: PieceId, query: MoveQuery) -> SquareList {
        match self.board.piece(id).square {
            Some(from) => self.targets_on(&self.board, from, query),
            None => SquareList::new(),
        }
    }

    pub(crate) fn targets_on(&self, board: &Board, from: Square, query: MoveQuery) -> SquareList {
        let mut moves = SquareList::new();

        let Some(id) = board.piece_at(from) else {
            return moves;
        };
        let piece = *board.piece(id);

        if !query.ignore_turn && piece.color != self.turn {
            return moves;
        }

        match piece.role {
            Role::Pawn => self.pawn_targets(board, from, &piece, query, &mut moves),
            Role::Knight => self.step_targets(board, from, piece.color, &KNIGHT_OFFSETS, query, &mut moves),
            Role::Bishop => self.ray_targets(board, from, piece.color, &BISHOP_DIRECTIONS, query, &mut moves),
            Role::Rook => self.ray_targets(board, from, piece.color, &ROOK_DIRECTIONS, query, &mut moves),
            Role::Queen => self.ray_targets(board, from, piece.color, &QUEEN_DIRECTIONS, query, &mut moves),
            Role::King => {
                self.step_targets(board, from, piece.color, &KING_OFFSETS, query, &mut moves);
                if !piece.has_moved && !query.ignore_castle {
                    self.castle_targets(board, from, piece.color, &mut moves);
                }
            }
        }

        moves
    }

    /// Squares the piece on `from` attacks. Pawns attack both forward
    /// diagonals, occupied or not. Nothing here looks at castling.
    pub(crate) fn attacks_on(&self, board: &Board, from: Square) -> SquareList {
        let Some(id) = board.piece_at(from) else {
            return SquareList::new();
        };
        let piece = board.piece(id);

        match piece.role {
            Role::Pawn => [-1, 1]
                .into_iter()
                .filter_map(|col| from.offset(piece.color.forward(), col))
                .collect(),
            _ => self.targets_on(board, from, MoveQuery::PSEUDO_LEGAL),
        }
    }

    /// Union of the squares attacked by the pieces of `color`, walking that
    /// player's occupied-square index.
    pub(crate) fn attacked_by(&self, board: &Board, color: Color) -> Bitboard {
        self.players
            .by_color(color)
            .squares()
            .into_iter()
            .filter(|&sq| board.color_at(sq) == Some(color))
            .flat_map(|sq| self.attacks_on(board, sq))
            .collect()
    }

    /// Plays `from` to `to` on a scratch board and tells whether the mover's
    /// king would then be attacked.
    pub(crate) fn simulated_move_is_check(&self, board: &Board, from: Square, to: Square) -> bool {
        let Some(color) = board.color_at(from) else {
            return false;
        };

        let mut scratch = board.clone();
        if scratch.role_at(from) == Some(Role::Pawn)
            && from.file() != to.file()
            && scratch.piece_at(to).is_none()
        {
            // En passant: the captured pawn sits beside the origin.
            if let Some(victim) = Square::from_coords(to.file() as i8, from.rank() as i8) {
                scratch.set(victim, None);
            }
        }
        let mover = scratch.take(from);
        scratch.set(to, mover);

        self.is_check_on(&scratch, color)
    }

    fn push_valid(&self, board: &Board, from: Square, to: Square, query: MoveQuery, moves: &mut SquareList) {
        if !query.verify_check || !self.simulated_move_is_check(board, from, to) {
            moves.push(to);
        }
    }

    fn step_targets(
        &self,
        board: &Board,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        query: MoveQuery,
        moves: &mut SquareList,
    ) {
        for &(row, col) in offsets {
            if let Some(to) = from.offset(row, col) {
                if board.color_at(to) != Some(color) {
                    self.push_valid(board, from, to, query, moves);
                }
            }
        }
    }

    fn ray_targets(
        &self,
        board: &Board,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        query: MoveQuery,
        moves: &mut SquareList,
    ) {
        for &(row, col) in directions {
            for distance in 1..8 {
                let Some(to) = from.offset(row * distance, col * distance) else {
                    break;
                };
                match board.color_at(to) {
                    Some(c) if c == color => break,
                    Some(_) => {
                        self.push_valid(board, from, to, query, moves);
                        break;
                    }
                    None => self.push_valid(board, from, to, query, moves),
                }
            }
        }
    }

    fn pawn_targets(&self, board: &Board, from: Square, pawn: &Piece, query: MoveQuery, moves: &mut SquareList) {
        let forward = pawn.color.forward();

        let mut can_move_forward = false;
        if let Some(to) = from.offset(forward, 0) {
            if board.piece_at(to).is_none() {
                self.push_valid(board, from, to, query, moves);
                can_move_forward = true;
            }
        }

        for col in [-1, 1] {
            if let Some(to) = from.offset(forward, col) {
                if board.color_at(to) == Some(!pawn.color) {
                    self.push_valid(board, from, to, query, moves);
                }
            }
        }

        for col in [-1, 1] {
            if let Some(to) = self.en_passant_target(board, from, pawn.color, col) {
                self.push_valid(board, from, to, query, moves);
            }
        }

        if can_move_forward && !pawn.has_moved {
            if let Some(to) = from.offset(2 * forward, 0) {
                if board.piece_at(to).is_none() {
                    self.push_valid(board, from, to, query, moves);
                }
            }
        }
    }

    /// The en passant target on side `col`, available only right after the
    /// neighbouring enemy pawn advanced two squares.
    fn en_passant_target(&self, board: &Board, from: Square, color: Color, col: i8) -> Option<Square> {
        let beside = from.offset(0, col)?;
        let neighbour = board.piece_at(beside)?;
        let piece = board.piece(neighbour);
        if piece.color == color || piece.role != Role::Pawn {
            return None;
        }

        let last = self.history.last()?;
        if last.piece != neighbour || last.to != beside || last.from.rank().abs_diff(last.to.rank()) != 2 {
            return None;
        }

        let to = from.offset(color.forward(), col)?;
        trace!(%from, %to, "en passant available");
        Some(to)
    }

    fn castle_targets(&self, board: &Board, king: Square, color: Color, moves: &mut SquareList) {
        for side in CastlingSide::ALL {
            if self.can_castle(board, king, color, side) {
                moves.push(side.king_to(color));
            }
        }
    }

    fn can_castle(&self, board: &Board, king: Square, color: Color, side: CastlingSide) -> bool {
        let direction = side.direction();
        let between = if side.is_king_side() { 2 } else { 3 };

        for distance in 1..=between {
            match king.offset(0, direction * distance) {
                Some(sq) if board.piece_at(sq).is_none() => (),
                _ => return false,
            }
        }

        let rook = king
            .offset(0, direction * (between + 1))
            .and_then(|sq| board.piece_at(sq))
            .map(|id| board.piece(id));
        match rook {
            Some(rook) if rook.role == Role::Rook && rook.color == color && !rook.has_moved => (),
            _ => return false,
        }

        // Start, transit and destination of the king must not be attacked.
        let attacked = self.attacked_by(board, !color);
        (0..=2)
            .filter_map(|distance| king.offset(0, direction * distance))
            .all(|sq| !attacked.contains(sq))
    }
}
