// Integration tests for the `dotpair` crate: generate levels through the public API and play
// them with a game session.

use std::collections::HashSet;

use dotpair::feedback::{LogNotifier, Silent};
use dotpair::game::{ConnectOutcome, GameSession};
use dotpair::generator::catalog::CatalogSpec;
use dotpair::generator::level::PuzzleLevel;
use dotpair::generator::random_level::{GeneratorError, LevelGenerator, random_level};
use dotpair::level_progress::LevelProgress;

// Every generated level can be solved by following its pairing table.
#[test]
fn generated_levels_are_solvable() {
    for dot_count in 1..=8 {
        let level: PuzzleLevel = random_level(dot_count, true).unwrap();
        let pairs: Vec<(usize, usize)> = level.correct_pairs().to_vec();
        let mut game: GameSession = GameSession::new(level, Box::new(Silent));
        let outcomes: Vec<ConnectOutcome> =
            pairs.iter().map(|&(t, b)| game.connect(t, b)).collect();
        assert_eq!(outcomes.last(), Some(&ConnectOutcome::Completed));
        assert_eq!(game.score(), dot_count);
        assert!(game.result().is_some());
    }
}

// The pairing table is injective on both sides when all the colors are present.
#[test]
fn pairing_is_a_bijection() {
    let mut generator: LevelGenerator = LevelGenerator::default();
    for _ in 0..100 {
        let level: PuzzleLevel = generator.generate(5, true).unwrap();
        let tops: HashSet<usize> = level.correct_pairs().iter().map(|p| p.0).collect();
        let bottoms: HashSet<usize> = level.correct_pairs().iter().map(|p| p.1).collect();
        assert_eq!(tops.len(), 5);
        assert_eq!(bottoms.len(), 5);
    }
}

#[test]
fn out_of_range_counts_fail() {
    assert!(matches!(
        random_level(0, true),
        Err(GeneratorError::InvalidDotCount { requested: 0, .. })
    ));
    assert!(matches!(
        random_level(9, true),
        Err(GeneratorError::InvalidDotCount { requested: 9, .. })
    ));
}

// Walk through the built-in catalog, solving each level.
#[test]
fn play_through_the_catalog() {
    let mut progress: LevelProgress =
        LevelProgress::new(CatalogSpec::builtin().build().unwrap()).unwrap();
    let mut solved: usize = 0;
    loop {
        let level: PuzzleLevel = progress.current_level().clone();
        let mut game: GameSession = GameSession::new(level, Box::new(LogNotifier));
        while let Some((top, bottom)) = game.hint() {
            game.connect(top, bottom);
        }
        assert!(game.is_complete());
        solved += 1;
        if !progress.advance() {
            break;
        }
    }
    assert_eq!(solved, progress.level_count());
    assert_eq!(progress.current_index(), progress.level_count() - 1);
}
