//! Round generation tests against the classic tables.

use std::collections::HashSet;

use mezcla::games::classic::ClassicGameBuilder;
use mezcla::{Rgb, Round, Swatch};
use smallvec::smallvec;

/// Every round presents exactly 3 distinct options, one of them the
/// target, and ingredients resolved from the target's rule.
#[test]
fn test_round_shape() {
    let (engine, mut session) = ClassicGameBuilder::new().build(42);

    for _ in 0..100 {
        let round = engine.start_round(&mut session);

        assert_eq!(round.option_count(), 3);
        assert!(round.has_option(round.target_name()));

        let distinct: HashSet<_> = round.options.iter().collect();
        assert_eq!(distinct.len(), 3);

        // All options are producible colors
        for option in &round.options {
            assert!(engine.table().contains(option));
        }

        let (a, b) = engine.table().ingredients_of(round.target_name()).unwrap();
        assert_eq!(round.ingredients[0].name, a);
        assert_eq!(round.ingredients[1].name, b);
        assert_eq!(
            round.ingredients[0].rgb,
            engine.registry().lookup(a).unwrap()
        );
        assert_eq!(round.target.rgb, engine.registry().lookup(round.target_name()).unwrap());
    }
}

/// Over a large sample, targets cover the whole 9-entry universe.
#[test]
fn test_targets_cover_universe() {
    let (engine, mut session) = ClassicGameBuilder::new().build(42);

    let mut seen = HashSet::new();
    for _ in 0..500 {
        let round = engine.start_round(&mut session);
        seen.insert(round.target.name.clone());
    }

    let universe: HashSet<_> = engine
        .table()
        .result_names()
        .iter()
        .cloned()
        .collect();
    assert_eq!(seen, universe);
}

/// Distractors cover the universe too - no option is systematically
/// excluded from the wrong-answer slots.
#[test]
fn test_distractors_cover_universe() {
    let (engine, mut session) = ClassicGameBuilder::new().build(7);

    let mut seen = HashSet::new();
    for _ in 0..500 {
        let round = engine.start_round(&mut session);
        for option in &round.options {
            if option != round.target_name() {
                seen.insert(option.clone());
            }
        }
    }

    assert_eq!(seen.len(), engine.table().result_names().len());
}

/// The same seed replays the same session.
#[test]
fn test_seeded_sessions_replay() {
    let (engine, mut session1) = ClassicGameBuilder::new().build(123);
    let (_, mut session2) = ClassicGameBuilder::new().build(123);

    for _ in 0..50 {
        assert_eq!(
            engine.start_round(&mut session1),
            engine.start_round(&mut session2)
        );
    }
}

/// The worked example: naranja mixes from amarillo and rojo; guessing
/// "naranja" is correct, "violeta" is not, and both reveal the target.
#[test]
fn test_naranja_example() {
    let (engine, _) = ClassicGameBuilder::new().build(0);

    let round = Round {
        target: Swatch::new("naranja", Rgb::new(255, 165, 0)),
        ingredients: [
            Swatch::new("amarillo", Rgb::new(255, 255, 0)),
            Swatch::new("rojo", Rgb::new(255, 0, 0)),
        ],
        options: smallvec![
            "naranja".to_string(),
            "violeta".to_string(),
            "verde".to_string(),
        ],
    };

    let correct = engine.evaluate(&round, "naranja");
    assert!(correct.is_correct());
    assert_eq!(correct.target(), "naranja");

    let incorrect = engine.evaluate(&round, "violeta");
    assert!(!incorrect.is_correct());
    assert_eq!(incorrect.target(), "naranja");
}

/// A guess the tables have never heard of is just incorrect.
#[test]
fn test_unrecognized_guess_is_incorrect() {
    let (engine, mut session) = ClassicGameBuilder::new().build(42);
    let round = engine.start_round(&mut session);

    let result = engine
        .submit_guess(&mut session, &round, "chartreuse")
        .unwrap();

    assert!(!result.is_correct());
    assert_eq!(session.score(), 0);
}
