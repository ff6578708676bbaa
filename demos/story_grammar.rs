use cfg_lab::{GrammarBuilder, GrammarConfig};
use std::error::Error;

/// Example of building grammars programmatically and sampling them.
///
/// Symbols are single characters; right-hand sides are scanned character
/// by character, recursing on declared non-terminals.
fn main() -> Result<(), Box<dyn Error>> {
    // The language a*b: either recurse with a leading 'a' or stop with 'b'
    let grammar = GrammarBuilder::new("S")
        .non_terminals(&["S"])
        .terminals(&["a", "b"])
        .productions("S", &["aS", "b"])
        .build();

    println!("Sentences from a*b:");
    for i in 1..=5 {
        println!("{}. {}", i, grammar.generate()?);
    }

    // Balanced parentheses with an epsilon base case
    let config = GrammarConfig {
        max_expansion_depth: 30,
    };
    let parens = GrammarBuilder::new("P")
        .config(config)
        .non_terminals(&["P"])
        .terminals(&["(", ")"])
        .productions("P", &["(P)P", "ε"])
        .build();

    println!("\nBalanced parentheses:");
    for i in 1..=5 {
        match parens.generate() {
            Ok(sentence) if sentence.is_empty() => println!("{}. <empty>", i),
            Ok(sentence) => println!("{}. {}", i, sentence),
            Err(err) => println!("{}. generation failed: {}", i, err),
        }
    }

    println!("\nMembership checks against a*b:");
    for sample in ["aab", "ba", "abc", ""] {
        println!(
            "{:?} -> {}",
            sample,
            grammar.is_terminal_string(sample)
        );
    }

    Ok(())
}
