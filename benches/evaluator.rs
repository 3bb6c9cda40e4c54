use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use poker_stacks::core::{Card, CardId, Rank, Suit};
use poker_stacks::evaluator::evaluate;

fn hand(layout: &[(Suit, Rank)]) -> Vec<Card> {
    layout.iter()
        .enumerate()
        .map(|(i, &(suit, rank))| Card::new(CardId(i as u32), suit, rank))
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let high_card = hand(&[
        (Suit::Spade, Rank::Ace),
        (Suit::Heart, Rank::Jack),
        (Suit::Club, Rank::Nine),
        (Suit::Diamond, Rank::Seven),
        (Suit::Spade, Rank::Two),
    ]);
    let two_pair = hand(&[
        (Suit::Spade, Rank::Nine),
        (Suit::Heart, Rank::Nine),
        (Suit::Spade, Rank::Five),
        (Suit::Heart, Rank::Five),
        (Suit::Spade, Rank::Two),
    ]);
    let straight_flush = hand(&[
        (Suit::Heart, Rank::Nine),
        (Suit::Heart, Rank::Eight),
        (Suit::Heart, Rank::Seven),
        (Suit::Heart, Rank::Six),
        (Suit::Heart, Rank::Five),
    ]);

    let mut group = c.benchmark_group("evaluate");
    for (name, cards) in [
        ("high_card", &high_card),
        ("two_pair", &two_pair),
        ("straight_flush", &straight_flush),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), cards, |b, input| {
            b.iter(|| evaluate(black_box(input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
