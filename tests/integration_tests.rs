use cfg_lab::paths::{self, Graph};
use cfg_lab::{Grammar, GrammarBuilder, GrammarConfig, GrammarError};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

#[test]
fn test_full_session_protocol() {
    // The exact line protocol: declarations, start symbol, productions,
    // sentinel.
    let input = "\
S,A
a,b
S
S->aS|b
A->ε
fin
";
    let grammar = Grammar::from_reader(Cursor::new(input)).unwrap();

    // Membership is character-wise terminal membership
    assert!(grammar.is_terminal_string("ab"));
    assert!(!grammar.is_terminal_string("aB"));

    // Every sentence of this grammar matches a*b
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let sentence = grammar.generate_with(&mut rng).unwrap();
        assert!(sentence.ends_with('b'), "bad sentence: {}", sentence);
        assert!(
            sentence[..sentence.len() - 1].chars().all(|c| c == 'a'),
            "bad sentence: {}",
            sentence
        );
    }
}

#[test]
fn test_sentinel_is_case_insensitive() {
    let input = "S\na\nS\nS->a\nFIN\n";
    let grammar = Grammar::from_reader(Cursor::new(input)).unwrap();
    assert_eq!(grammar.generate().unwrap(), "a");
}

#[test]
fn test_redeclared_production_replaces_previous_list() {
    let input = "S\na,b,c\nS\nS->aS|b\nS->c\nfin\n";
    let grammar = Grammar::from_reader(Cursor::new(input)).unwrap();

    assert_eq!(grammar.productions()["S"], vec!["c"]);
    assert_eq!(grammar.generate().unwrap(), "c");
}

#[test]
fn test_epsilon_only_grammar_generates_empty() {
    let input = "S\na\nS\nS->ε\nfin\n";
    let grammar = Grammar::from_reader(Cursor::new(input)).unwrap();

    for _ in 0..10 {
        assert_eq!(grammar.generate().unwrap(), "");
    }
}

#[test]
fn test_self_recursive_grammar_hits_expansion_limit() {
    let input = "S\na\nS\nS->SS\nfin\n";
    let config = GrammarConfig {
        max_expansion_depth: 32,
    };
    let grammar = Grammar::from_reader_with_config(Cursor::new(input), config).unwrap();

    let result = grammar.generate();
    assert!(matches!(
        result,
        Err(GrammarError::ExpansionLimitExceeded { .. })
    ));
}

#[test]
fn test_malformed_production_aborts_load() {
    let input = "S\na\nS\nS=aS\nfin\n";
    let result = Grammar::from_reader(Cursor::new(input));
    assert!(matches!(result, Err(GrammarError::MalformedProduction(_))));
}

#[test]
fn test_loaded_grammar_queried_from_threads() {
    // Load-then-query phases: a fully loaded grammar is read-only and may
    // be shared across generation threads.
    let grammar = GrammarBuilder::new("S")
        .non_terminals(&["S"])
        .terminals(&["a", "b"])
        .productions("S", &["aS", "b"])
        .build();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..10 {
                    let sentence = grammar.generate().unwrap();
                    assert!(sentence.ends_with('b'));
                }
            });
        }
    });
}

#[test]
fn test_grammar_json_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grammar.json");

    let grammar = GrammarBuilder::new("S")
        .non_terminals(&["S"])
        .terminals(&["a", "b"])
        .productions("S", &["aS", "b"])
        .build();

    grammar.to_json_file(&path).unwrap();
    let restored = Grammar::from_json_file(&path).unwrap();

    assert_eq!(grammar, restored);
    assert!(restored.generate().unwrap().ends_with('b'));
}

#[test]
fn test_route_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    let json = r#"{
        "A": [["B", 1], ["C", 4]],
        "B": [["A", 1], ["C", 2], ["D", 5]],
        "C": [["A", 4], ["B", 2], ["D", 1]],
        "D": [["B", 5], ["C", 1]]
    }"#;
    std::fs::write(&path, json).unwrap();

    let graph = Graph::from_json_file(&path).unwrap();
    let (distance, route) = paths::shortest_path(&graph, "A", "D");

    // A->B (1), B->C (2), C->D (1)
    assert_eq!(distance, 4);
    assert_eq!(route, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_unreachable_route_keeps_degenerate_path() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 1).add_edge("C", "D", 1);

    let (distance, route) = paths::shortest_path(&graph, "A", "D");
    assert_eq!(distance, paths::INFINITY);
    assert_eq!(route, vec!["D"]);
}
