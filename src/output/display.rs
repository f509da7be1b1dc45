//! Display functions for command results

use super::formatters::{colored_tiles, entropy_bar, kind_label, shout};
use crate::commands::{AnalysisResult, Round, SolveResult, Suggestion};
use crate::core::Word;
use crate::solver::GamePhase;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_tiles(&step.word, step.pattern),
            kind_label(step.kind)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
            }

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.max_partition);
    if !result.in_dictionary {
        println!("   {}", "Not a dictionary word (probe only)".bright_black());
    }
}

/// Print the replayed rounds and the suggested next guess
pub fn print_suggestion(rounds: &[Round], suggestion: &Suggestion) {
    for (round, remaining) in rounds.iter().zip(&suggestion.remaining_after) {
        println!(
            "{}  {remaining} candidates left",
            colored_tiles(round.guess.text(), round.pattern)
        );
    }

    match suggestion.phase {
        GamePhase::Solved => {
            println!("\n{}", "✅ Already solved!".green().bold());
            return;
        }
        GamePhase::Exhausted => {
            println!(
                "\n{}",
                "❌ No candidates remain! The feedback may be incorrect.".red()
            );
        }
        GamePhase::NoGuessYet | GamePhase::AwaitingFeedback => {
            let more = suggestion.remaining.saturating_sub(suggestion.preview.len());
            let listing = suggestion.preview.join(", ");
            let listing = if more > 0 {
                format!("{listing}, … (+{more})")
            } else {
                listing
            };
            println!("\n{} candidates: {listing}", suggestion.remaining);
        }
    }

    if let Some(guess) = &suggestion.next {
        print!(
            "\n💡 Next guess: {} ({})",
            shout(&guess.word).bright_yellow().bold(),
            kind_label(guess.kind)
        );
        match guess.entropy {
            Some(entropy) => println!(" {entropy:.3} bits"),
            None => println!(),
        }
    }
}

/// Print the precomputed opening word
pub fn print_opening(word: &Word, entropy: f64, dictionary_size: usize) {
    let bar = entropy_bar(entropy, dictionary_size, 30);
    println!(
        "\n🎯 Opening word: {}",
        shout(word).bright_yellow().bold()
    );
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{entropy:.3} bits").bright_yellow()
    );
    println!("   Dictionary:  {dictionary_size} words");
}
