// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// High Card:       1303560
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        9180
// Flush:           5112
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  32
// Royal Flush:     4
// ```

use std::time::Instant;

use drawpoker_eval::*;

#[rustfmt::skip]
fn main() {
    // Rank all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 11];

    Deck::default().for_each(5, |hand| {
        if let Ok(ranked) = rank_hand(hand) {
            counts[ranked.category_rank() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandCategory::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandCategory::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandCategory::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandCategory::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandCategory::Straight as usize]);
    println!("Flush:           {}", counts[HandCategory::Flush as usize]);
    println!("Full House:      {}", counts[HandCategory::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandCategory::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandCategory::StraightFlush as usize]);
    println!("Royal Flush:     {}", counts[HandCategory::RoyalFlush as usize]);
}
