use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_trie::commands::{SolveConfig, solve_word};
use wordle_trie::core::{Pattern, Word};
use wordle_trie::solver::entropy::{PatternCache, best_guess, calculate_entropy};
use wordle_trie::solver::{GamePhase, GuessKind, Guesser, SolverConfig};
use wordle_trie::wordlists::{WORDS, loader::words_from_slice};

fn guesser(seed: u64) -> Guesser<StdRng> {
    let words = words_from_slice(WORDS);
    Guesser::with_rng(&words, SolverConfig::default(), StdRng::seed_from_u64(seed)).unwrap()
}

fn play(guesser: &mut Guesser<StdRng>, target: &Word, limit: usize) -> Vec<Word> {
    guesser.restart_game();
    for _ in 0..limit {
        let guess = guesser.next_guess();
        guesser
            .record_feedback(Pattern::calculate(&guess.word, target))
            .unwrap();
        if guesser.phase() == GamePhase::Solved {
            break;
        }
    }
    guesser.history().to_vec()
}

#[test]
fn test_opening_is_stable_across_games() {
    let mut guesser = guesser(1);
    let opening = guesser.opening().clone();

    for target in ["angle", "water", "shelf"] {
        let history = play(&mut guesser, &Word::new(target).unwrap(), 10);
        assert_eq!(history[0], opening);
    }
}

#[test]
fn test_opening_entropy_within_bounds() {
    let guesser = guesser(2);
    let bound = (WORDS.len() as f64).log2();

    assert!(guesser.opening_entropy() > 0.0);
    assert!(guesser.opening_entropy() <= bound + 1e-9);
}

#[test]
fn test_solves_embedded_targets() {
    let mut guesser = guesser(3);
    let targets = words_from_slice(WORDS);

    for target in targets.iter().step_by(25) {
        let history = play(&mut guesser, target, 30);
        assert_eq!(guesser.phase(), GamePhase::Solved, "did not solve {target}");
        assert_eq!(history.last(), Some(target));
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let target = Word::new("tough").unwrap();
    let first = play(&mut guesser(11), &target, 30);
    let second = play(&mut guesser(11), &target, 30);
    assert_eq!(first, second);
}

#[test]
fn test_single_candidate_is_guessed() {
    let mut guesser = guesser(4);
    let target = Word::new("agile").unwrap();

    // Narrow down until one candidate is left, then check the next guess
    for _ in 0..30 {
        if guesser.candidates().len() == 1 {
            let guess = guesser.next_guess();
            assert_eq!(guess.word, target);
            assert_eq!(guess.kind, GuessKind::LastCandidate);
            return;
        }
        let guess = guesser.next_guess();
        guesser
            .record_feedback(Pattern::calculate(&guess.word, &target))
            .unwrap();
        if guesser.phase() == GamePhase::Solved {
            return;
        }
    }
    panic!("never narrowed to one candidate");
}

#[test]
fn test_contradictory_feedback_surfaces_as_exhausted() {
    let mut guesser = guesser(5);
    let green_first = "g----".parse::<Pattern>().unwrap();

    // 'a' and then 'c' both claimed exact at the first position
    let remaining = guesser.observe(Word::new("about").unwrap(), green_first);
    assert!(remaining > 0);
    let remaining = guesser.observe(Word::new("crime").unwrap(), green_first);
    assert_eq!(remaining, 0);
    assert_eq!(guesser.phase(), GamePhase::Exhausted);

    let next = guesser.next_guess();
    assert_eq!(next.kind, GuessKind::Fallback);
    assert!(!guesser.history()[..2].contains(&next.word));
}

#[test]
fn test_best_guess_reaches_log_bound() {
    let targets = words_from_slice(&["angle", "ankle"]);
    let sources = words_from_slice(&["zzzzz", "ankle"]);
    let mut cache = PatternCache::new();

    let (best, entropy) = best_guess(&sources, &targets, &mut cache).unwrap();
    assert_eq!(best.text(), "ankle");
    assert!((entropy - 1.0).abs() < 1e-9);
}

#[test]
fn test_entropy_bounded_by_target_count() {
    let targets = words_from_slice(WORDS);
    let bound = (targets.len() as f64).log2();

    for guess in targets.iter().step_by(31) {
        let entropy = calculate_entropy(guess, &targets);
        assert!(entropy >= 0.0);
        assert!(entropy <= bound + 1e-9);
    }
}

#[test]
fn test_solve_command_reports_steps() {
    let mut guesser = guesser(6);
    let result = solve_word(SolveConfig::new("crane".to_string()), &mut guesser).unwrap();

    assert!(!result.guesses.is_empty());
    assert_eq!(result.guesses[0].kind, GuessKind::Opening);
    for pair in result.guesses.windows(2) {
        assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
    }
}
