use deep_chess_engine::{perft, Game, MoveRecord};

fn divide(game: &Game, depth: u32) -> Vec<(String, u64)> {
    game.moves()
        .into_iter()
        .map(|m| {
            let mut child = game.clone();
            assert!(child.move_piece(m.piece, Some(m.to)));
            (MoveRecord::from(m).to_string(), perft(&child, depth - 1))
        })
        .collect()
}

#[test]
fn test_start_position() {
    let game = Game::new();
    assert_eq!(perft(&game, 0), 1);
    assert_eq!(perft(&game, 1), 20);
    assert_eq!(perft(&game, 2), 400);
    assert_eq!(perft(&game, 3), 8902);
}

#[test]
fn test_divide() {
    let nodes = divide(&Game::new(), 3);
    let expected = [
        ("a2a3", 380),
        ("d2d3", 539),
        ("d2d4", 560),
        ("e2e3", 599),
        ("e2e4", 600),
        ("b1c3", 440),
        ("g1f3", 440),
        ("g1h3", 400),
    ];
    for (uci, count) in expected {
        let (_, actual) = nodes
            .iter()
            .find(|(m, _)| m == uci)
            .unwrap_or_else(|| panic!("{uci} not generated"));
        assert_eq!(*actual, count, "{uci}");
    }
    assert_eq!(nodes.iter().map(|(_, n)| n).sum::<u64>(), 8902);
}

#[test]
#[ignore]
fn test_start_position_deep() {
    assert_eq!(perft(&Game::new(), 4), 197_281);
}
