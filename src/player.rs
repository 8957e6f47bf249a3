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

use tracing::debug;

use crate::{
    bitboard::Bitboard,
    board::{Board, PieceId},
    color::Color,
    game::Game,
    movegen::{Move, MoveList, MoveQuery},
    role::Role,
    square::Square,
};

/// One side of a game: its display name, the squares its pieces stand on,
/// and the material it has captured.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Player {
    color: Color,
    name: String,
    squares: Bitboard,
    captured: Vec<PieceId>,
    score: u32,
}

impl Player {
    pub fn new(color: Color, name: impl Into<String>) -> Player {
        Player {
            color,
            name: name.into(),
            squares: Bitboard::EMPTY,
            captured: Vec::new(),
            score: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Squares currently bearing this player's pieces.
    pub fn squares(&self) -> Bitboard {
        self.squares
    }

    /// Opponent pieces taken by this player, in capture order.
    pub fn captured(&self) -> &[PieceId] {
        &self.captured
    }

    /// Sum of the material values of [`Player::captured`].
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn occupy(&mut self, sq: Square) {
        self.squares.add(sq);
    }

    pub(crate) fn vacate(&mut self, sq: Square) {
        self.squares.remove(sq);
    }
}

impl Game {
    pub fn player(&self, color: Color) -> &Player {
        self.players.by_color(color)
    }

    /// Moves of every piece of `color`, tagged with the moving piece, in
    /// square order starting at `a1`.
    pub fn player_moves(&self, color: Color, query: MoveQuery) -> MoveList {
        let mut moves = MoveList::new();
        if !query.ignore_turn && color != self.turn {
            return moves;
        }

        for from in self.players.by_color(color).squares() {
            let Some(piece) = self.board.piece_at(from) else {
                continue;
            };
            moves.extend(
                self.targets_on(&self.board, from, query)
                    .into_iter()
                    .map(|to| Move { piece, from, to }),
            );
        }

        moves
    }

    /// Whether `color` has any legal move, regardless of whose turn it is.
    pub fn has_legal_move(&self, color: Color) -> bool {
        let query = MoveQuery::LEGAL.ignore_turn(true);
        self.players
            .by_color(color)
            .squares()
            .into_iter()
            .any(|from| !self.targets_on(&self.board, from, query).is_empty())
    }

    /// Whether the king of `color` is attacked by any opposing piece.
    pub fn is_check(&self, color: Color) -> bool {
        self.is_check_on(&self.board, color)
    }

    /// Like [`Game::is_check`], on an arbitrary board sharing this game's
    /// pieces. Opponent squares holding something else are skipped, which is
    /// what a speculative capture leaves behind.
    pub(crate) fn is_check_on(&self, board: &Board, color: Color) -> bool {
        let opponent = !color;
        self.players
            .by_color(opponent)
            .squares()
            .into_iter()
            .filter(|&sq| board.color_at(sq) == Some(opponent))
            .any(|sq| {
                self.attacks_on(board, sq).iter().any(|&target| {
                    board
                        .piece_at(target)
                        .map(|id| board.piece(id))
                        .is_some_and(|p| p.role == Role::King && p.color == color)
                })
            })
    }

    /// `color` is in check and has no legal reply.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_check(color) && !self.has_legal_move(color)
    }

    /// `color` is not in check but has no legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_check(color) && !self.has_legal_move(color)
    }

    /// Removes the piece on `sq` and credits it to `capturer`.
    pub(crate) fn capture_piece(&mut self, capturer: Color, sq: Square) {
        let Some(id) = self.board.take(sq) else {
            return;
        };

        let victim = self.board.piece_mut(id);
        victim.square = None;
        let (color, role) = (victim.color, victim.role);
        self.players.by_color_mut(color).vacate(sq);

        let player = self.players.by_color_mut(capturer);
        player.captured.push(id);
        player.score += role.value();
        debug!(%capturer, %sq, ?role, score = player.score, "captured piece");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square;

    #[test]
    fn test_fresh_player_moves() {
        let game = Game::new();
        assert_eq!(game.player_moves(Color::White, MoveQuery::default()).len(), 20);
        assert!(game.player_moves(Color::Black, MoveQuery::default()).is_empty());
        assert_eq!(
            game.player_moves(Color::Black, MoveQuery::default().ignore_turn(true)).len(),
            20
        );
    }

    #[test]
    fn test_index_matches_board() {
        let game = Game::new();
        for color in Color::ALL {
            let expected: Bitboard = game
                .board()
                .occupied()
                .filter(|(_, piece)| piece.color == color)
                .map(|(sq, _)| sq)
                .collect();
            assert_eq!(game.player(color).squares(), expected);
            assert_eq!(game.player(color).squares().count(), 16);
        }
    }

    #[test]
    fn test_capture_bookkeeping() {
        let mut game = Game::new();
        for (from, to) in [
            (square::E2, square::E4),
            (square::D7, square::D5),
            (square::E4, square::D5),
        ] {
            let id = game.board().piece_at(from).expect("piece");
            assert!(game.move_piece(id, Some(to)));
        }

        let white = game.player(Color::White);
        assert_eq!(white.score(), 1);
        assert_eq!(white.captured().len(), 1);
        let victim = game.board().piece(white.captured()[0]);
        assert_eq!((victim.color, victim.role, victim.square), (Color::Black, Role::Pawn, None));
        assert!(!game.player(Color::Black).squares().contains(square::D5));
        assert!(game.player(Color::White).squares().contains(square::D5));
        assert_eq!(game.player(Color::Black).squares().count(), 15);
    }

    #[test]
    fn test_names() {
        let game = Game::new();
        assert_eq!(game.player(Color::White).name(), "White");
        assert_eq!(game.player(Color::Black).color(), Color::Black);
    }
}
