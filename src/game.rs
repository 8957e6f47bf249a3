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

use std::fmt;

use tracing::{debug, info};

use crate::{
    board::{Board, PieceId},
    castling_side::CastlingSide,
    color::{ByColor, Color},
    config::Config,
    history::HistoryEntry,
    movegen::{Move, MoveList, MoveQuery},
    player::Player,
    role::Role,
    san::{San, SanPlus, Suffix},
    square::Square,
};

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Outcome of a finished game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        })
    }
}

/// A match between two players, mutated move by move from the standard
/// starting position until checkmate or stalemate.
///
/// # Examples
///
/// ```
/// use deep_chess_engine::{square, Game};
///
/// let mut game = Game::new();
/// assert_eq!(game.moves().len(), 20);
///
/// let pawn = game.board().piece_at(square::E2).expect("pawn on e2");
/// assert!(game.move_piece(pawn, Some(square::E4)));
/// assert_eq!(game.pgn(), "1. e4");
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Game {
    pub(crate) config: Config,
    pub(crate) board: Board,
    pub(crate) players: ByColor<Player>,
    pub(crate) turn: Color,
    pub(crate) fullmoves: u32,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) notation: Vec<SanPlus>,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Game {
        Game::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Game {
        let players = ByColor::new_with(|color| Player::new(color, config.name(color)));
        let mut game = Game {
            config,
            board: Board::empty(),
            players,
            turn: Color::White,
            fullmoves: 0,
            outcome: None,
            history: Vec::new(),
            notation: Vec::new(),
        };
        game.initialize();
        game
    }

    /// Resets board, players, turn and history to the standard starting
    /// position with white to move.
    pub fn initialize(&mut self) {
        self.board = Board::empty();
        self.players = ByColor::new_with(|color| Player::new(color, self.config.name(color)));
        self.history.clear();
        self.notation.clear();
        self.outcome = None;
        self.fullmoves = 0;

        for color in Color::ALL {
            for (file, role) in (0..).zip(BACKRANK) {
                let id = self.board.spawn(color, role);
                self.set_piece(Square::new(file, color.backrank()), id);
            }
            let pawn_rank = color.fold(1, 6);
            for file in 0..8 {
                let id = self.board.spawn(color, Role::Pawn);
                self.set_piece(Square::new(file, pawn_rank), id);
            }
        }

        self.set_next_turn(Color::White);
    }

    /// Hands the move to `color`. The full-move counter advances whenever
    /// white is to move again.
    pub fn set_next_turn(&mut self, color: Color) {
        self.turn = color;
        if color.is_white() {
            self.fullmoves += 1;
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Full-move number, starting at 1.
    pub fn fullmoves(&self) -> u32 {
        self.fullmoves
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_ended(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(Outcome::winner)
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Notation of every ply played so far.
    pub fn notation(&self) -> &[SanPlus] {
        &self.notation
    }

    /// Notation grouped by full-move number: the white ply, then the black
    /// ply if it was played.
    pub fn notation_table(&self) -> impl Iterator<Item = (u32, &[SanPlus])> {
        (1..).zip(self.notation.chunks(2))
    }

    /// Movetext like `1. e4 e5 2. Nf3`.
    pub fn pgn(&self) -> String {
        self.notation_table()
            .map(|(number, plies)| {
                let plies: Vec<String> = plies.iter().map(SanPlus::to_string).collect();
                format!("{number}. {}", plies.join(" "))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Legal moves of the side to move. Empty once the game has ended.
    pub fn moves(&self) -> MoveList {
        if self.is_ended() {
            return MoveList::new();
        }
        self.player_moves(self.turn, MoveQuery::default())
    }

    /// Puts a piece on a square. A different piece already there is
    /// captured if it belongs to the opponent and dropped otherwise.
    pub(crate) fn set_piece(&mut self, sq: Square, id: PieceId) {
        let color = self.board.piece(id).color;

        if let Some(prior) = self.board.piece_at(sq).filter(|&prior| prior != id) {
            if self.board.piece(prior).color != color {
                self.capture_piece(color, sq);
            } else {
                self.board.piece_mut(prior).square = None;
            }
        }

        self.board.set(sq, Some(id));
        self.board.piece_mut(id).square = Some(sq);
        self.players.by_color_mut(color).occupy(sq);
    }

    fn lift_piece(&mut self, sq: Square) -> Option<PieceId> {
        let id = self.board.take(sq)?;
        let color = self.board.piece(id).color;
        self.players.by_color_mut(color).vacate(sq);
        Some(id)
    }

    /// Moves a piece to `target` with all side effects: captures, promotion,
    /// en passant, castling, check and game end detection, notation and
    /// history. Then passes the turn unless the game just ended.
    ///
    /// Returns `false` without changing anything if there is no target, the
    /// game is over, or the move is not legal for the side to move.
    pub fn move_piece(&mut self, id: PieceId, target: Option<Square>) -> bool {
        let Some(to) = target else {
            debug!("rejected move without target");
            return false;
        };
        if self.is_ended() {
            debug!(%to, "rejected move after end of game");
            return false;
        }
        let piece = *self.board.piece(id);
        let Some(from) = piece.square else {
            debug!(%to, "rejected move of piece off the board");
            return false;
        };
        if !self.piece_moves(id, MoveQuery::default()).contains(&to) {
            debug!(%from, %to, "rejected illegal move");
            return false;
        }

        let color = piece.color;
        let san = San::from_move(self, Move { piece: id, from, to });
        let target_occupied = self.board.piece_at(to).is_some();

        self.lift_piece(from);
        self.set_piece(to, id);

        if piece.role == Role::Pawn {
            if to.rank() == color.promotion_rank() {
                let queen = self.board.spawn(color, Role::Queen);
                self.set_piece(to, queen);
                debug!(%color, %to, "promoted pawn to queen");
            }
            if from.file() != to.file() && !target_occupied {
                self.capture_piece(color, Square::new(to.file(), from.rank()));
            }
        }

        if piece.role == Role::King {
            if let Some(side) = CastlingSide::from_king_move(from, to) {
                self.castle_rook(color, side);
            }
        }

        self.board.piece_mut(id).has_moved = true;
        // En passant replies read the last history entry.
        self.history.push(HistoryEntry { piece: id, from, to });

        let opponent = !color;
        let check = self.is_check(opponent);
        if !self.has_legal_move(opponent) {
            self.outcome = Some(if check {
                Outcome::Decisive { winner: color }
            } else {
                Outcome::Draw
            });
        }

        let suffix = match (check, self.outcome) {
            (true, Some(_)) => Some(Suffix::Checkmate),
            (true, None) => Some(Suffix::Check),
            (false, _) => None,
        };
        self.notation.push(SanPlus { san, suffix });

        match self.outcome {
            Some(Outcome::Decisive { winner }) => info!(%winner, pgn = %self.pgn(), "checkmate"),
            Some(Outcome::Draw) => info!(pgn = %self.pgn(), "stalemate"),
            None => self.set_next_turn(opponent),
        }

        true
    }

    fn castle_rook(&mut self, color: Color, side: CastlingSide) {
        let (from, to) = (side.rook_from(color), side.rook_to(color));
        if let Some(rook) = self.lift_piece(from) {
            self.set_piece(to, rook);
            self.board.piece_mut(rook).has_moved = true;
            debug!(%color, ?side, "castled");
        }
    }
}
