use wordle_trie::candidates::CandidateTrie;
use wordle_trie::core::{Constraints, FeedbackScheme, Mark, Pattern, Word, parse_feedback};
use wordle_trie::wordlists::{WORDS, loader::words_from_slice};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

/// Every 7th embedded word, enough to cover varied letter mixes
fn sample() -> Vec<Word> {
    words_from_slice(WORDS).into_iter().step_by(7).collect()
}

#[test]
fn test_pattern_in_range_and_deterministic() {
    let words = sample();
    for guess in &words {
        for target in &words {
            let first = Pattern::calculate(guess, target);
            let second = Pattern::calculate(guess, target);
            assert_eq!(first, second);
            assert!(first.value() <= Pattern::PERFECT.value());
        }
    }
}

#[test]
fn test_self_feedback_is_perfect() {
    for guess in words_from_slice(WORDS) {
        assert!(Pattern::calculate(&guess, &guess).is_perfect());
    }
}

#[test]
fn test_doubled_guess_letter_marks_one_occurrence() {
    // One 'e' in abide: only the first guessed 'e' is marked present
    let marks = Pattern::calculate(&word("speed"), &word("abide")).marks();
    assert_eq!(
        marks,
        [Mark::Absent, Mark::Absent, Mark::Present, Mark::Absent, Mark::Present]
    );

    let marks = Pattern::calculate(&word("speed"), &word("creep")).marks();
    assert_eq!(
        marks,
        [Mark::Absent, Mark::Present, Mark::Exact, Mark::Exact, Mark::Absent]
    );
}

#[test]
fn test_schemes_agree() {
    let colors = parse_feedback("g-y-g", FeedbackScheme::Colors).unwrap();
    let marks = parse_feedback("a+-+e", FeedbackScheme::Marks).unwrap();
    let emoji = parse_feedback("🟩⬜🟨⬜🟩", FeedbackScheme::Colors).unwrap();
    assert_eq!(colors, marks);
    assert_eq!(colors, emoji);
}

#[test]
fn test_malformed_feedback_rejected() {
    assert!(parse_feedback("gggg", FeedbackScheme::Colors).is_err());
    assert!(parse_feedback("ggggx", FeedbackScheme::Colors).is_err());
    assert!(parse_feedback("a+-+*", FeedbackScheme::Marks).is_err());
    assert!("rainbow".parse::<FeedbackScheme>().is_err());
}

#[test]
fn test_filter_never_prunes_the_target() {
    let words = sample();
    let trie = CandidateTrie::build(&words);

    for guess in words.iter().step_by(5) {
        for target in &words {
            let constraints = Constraints::from_feedback(guess, Pattern::calculate(guess, target));
            let filtered = trie.filter(&constraints);
            assert!(
                filtered.contains(target),
                "{target} pruned after guessing {guess}"
            );
        }
    }
}

#[test]
fn test_filter_monotone_and_idempotent() {
    let words = sample();
    let trie = CandidateTrie::build(&words);

    for guess in words.iter().step_by(9) {
        for target in words.iter().step_by(4) {
            let constraints = Constraints::from_feedback(guess, Pattern::calculate(guess, target));
            let once = trie.filter(&constraints);
            let twice = once.filter(&constraints);

            assert!(once.len() <= trie.len());
            assert_eq!(once.words(), twice.words());
        }
    }
}

#[test]
fn test_filter_matches_brute_force() {
    let words = sample();
    let trie = CandidateTrie::build(&words);
    let guess = word("arise");

    for target in words.iter().step_by(3) {
        let constraints = Constraints::from_feedback(&guess, Pattern::calculate(&guess, target));
        let mut expected: Vec<&str> = words
            .iter()
            .filter(|w| constraints.admits(w))
            .map(Word::text)
            .collect();
        let filtered = trie.filter(&constraints);
        let mut actual: Vec<&str> = filtered.words().iter().map(Word::text).collect();

        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_contradictory_greens_filter_to_empty() {
    let trie = CandidateTrie::build(&words_from_slice(WORDS));
    let constraints = Constraints::new().with_exact(0, b's').with_exact(0, b't');

    let filtered = trie.filter(&constraints);
    assert!(filtered.is_empty());
    assert!(filtered.traverse().is_empty());
}

#[test]
fn test_apple_feedback_scenario() {
    let dictionary: Vec<Word> = ["apple", "angle", "ankle", "axles", "agile"]
        .iter()
        .map(|w| word(w))
        .collect();
    let trie = CandidateTrie::build(&dictionary);
    let apple = word("apple");

    let pattern = Pattern::from_marks([
        Mark::Exact,
        Mark::Absent,
        Mark::Absent,
        Mark::Exact,
        Mark::Exact,
    ]);
    let filtered = trie.filter(&Constraints::from_feedback(&apple, pattern));

    assert!(!filtered.contains(&apple));
    assert!(filtered.words().iter().all(|w| !w.has_letter(b'p')));
}

#[test]
fn test_trie_round_trip_with_duplicates() {
    let mut words = words_from_slice(WORDS);
    let unique = words.len();
    words.extend(words_from_slice(&WORDS[..40]));

    let trie = CandidateTrie::build(&words);
    let mut traversed: Vec<String> = trie.traverse().iter().map(|w| w.text().to_string()).collect();
    let mut expected: Vec<String> = WORDS.iter().map(|w| (*w).to_string()).collect();

    traversed.sort_unstable();
    expected.sort_unstable();
    assert_eq!(trie.len(), unique);
    assert_eq!(traversed, expected);
}
