use criterion::{Criterion, criterion_group, criterion_main};

use cfg_lab::GrammarBuilder;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_generation(c: &mut Criterion) {
    let grammar = GrammarBuilder::new("S")
        .non_terminals(&["S", "A"])
        .terminals(&["a", "b", "c"])
        .productions("S", &["aS", "bA", "c"])
        .productions("A", &["aA", "b", "ε"])
        .build();

    c.bench_function("generate seeded", |b| {
        let mut rng = StdRng::seed_from_u64(99);
        b.iter(|| grammar.generate_with(&mut rng).unwrap())
    });

    c.bench_function("is_terminal_string", |b| {
        let sample = "abcabcabcabcabcabcabcabc";
        b.iter(|| grammar.is_terminal_string(sample))
    });
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
