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

use crate::{game::Game, history::MoveRecord};

/// A move-selection collaborator, such as an engine or a remote player.
///
/// The game never picks moves by itself. An agent looks at a snapshot and
/// answers with the squares of its move, which are then played through the
/// regular [`Game::move_piece`] path.
pub trait Agent {
    /// Picks a move for the side to move, or `None` to resign the turn.
    fn generate_move(&mut self, game: &Game) -> Option<MoveRecord>;
}

impl Game {
    /// Asks `agent` for a move and plays it. Returns the record if it was
    /// accepted.
    pub fn play_agent<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Option<MoveRecord> {
        let record = agent.generate_move(self)?;
        if self.play_record(record) {
            Some(record)
        } else {
            debug!(%record, "agent proposed a rejected move");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{square, Color};

    struct FirstMove;

    impl Agent for FirstMove {
        fn generate_move(&mut self, game: &Game) -> Option<MoveRecord> {
            game.moves().first().copied().map(MoveRecord::from)
        }
    }

    struct Fixed(MoveRecord);

    impl Agent for Fixed {
        fn generate_move(&mut self, _game: &Game) -> Option<MoveRecord> {
            Some(self.0)
        }
    }

    #[test]
    fn test_agent_moves_are_played() {
        let mut game = Game::new();
        let agent: &mut dyn Agent = &mut FirstMove;
        for _ in 0..10 {
            assert!(game.play_agent(agent).is_some());
        }
        assert_eq!(game.history().len(), 10);
        assert_eq!(game.fullmoves(), 6);
    }

    #[test]
    fn test_rejected_proposal() {
        let mut game = Game::new();
        let mut agent = Fixed(MoveRecord {
            from: square::E7,
            to: square::E5,
        });
        assert_eq!(game.play_agent(&mut agent), None);
        assert!(game.history().is_empty());
        assert_eq!(game.turn(), Color::White);
    }
}
