use serde::Deserialize;
use serde_with::{formats::SpaceSeparator, serde_as, StringWithSeparator};

use deep_chess_engine::{Game, MoveRecord};

struct Uci(MoveRecord);

impl std::str::FromStr for Uci {
    type Err = deep_chess_engine::ParseSquareError;

    fn from_str(s: &str) -> Result<Uci, Self::Err> {
        let (from, to) = s.split_at(s.len().min(2));
        Ok(Uci(MoveRecord {
            from: from.parse()?,
            to: to.parse()?,
        }))
    }
}

#[serde_as]
#[derive(Deserialize)]
struct Record {
    name: String,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Uci>")]
    moves: Vec<Uci>,
    pgn: String,
    outcome: String,
}

#[test]
fn test_recorded_games() {
    let mut reader = csv::Reader::from_path("tests/games.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");

        let mut game = Game::new();
        for Uci(m) in &record.moves {
            assert!(game.play_record(*m), "{}: {m} rejected", record.name);
        }

        assert_eq!(game.pgn(), record.pgn, "line {} ({})", i + 1, record.name);
        assert_eq!(
            game.outcome().map_or_else(|| "*".to_owned(), |o| o.to_string()),
            record.outcome,
            "line {} ({})",
            i + 1,
            record.name
        );

        let replayed = Game::from_history(&game.serialize_history()).expect("replay");
        assert_eq!(replayed, game, "line {} ({})", i + 1, record.name);
    }
}
