//! Tour of every selection policy.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Round-robin** with a loop bound — strict rotation until the picker
//!    reports `LoopLimitReached`.
//! 2. **Random** with and without duplicates — the unique discipline hands
//!    out every item once per cycle.
//! 3. **Weighted** draws with a fixed seed — identical output on every run.
//! 4. **Numbers** — `pick_number_between` with a seed.

use std::collections::BTreeMap;

use picker::{
    create_picker, pick_number_between, Algorithm, ItemPickerOptions, NumberPickerOptions,
    PickerConfig, PickerError, ValueWeights,
};

const FRUITS: [&str; 4] = ["apple", "banana", "cherry", "damson"];

fn print_row(label: &str, picked: &[&str]) {
    println!("  {label:<22} {}", picked.join(" "));
}

fn main() -> Result<(), PickerError> {
    println!();
    println!("══ Round-robin, two loops ══");
    let mut rr = create_picker(
        FRUITS,
        ItemPickerOptions::new().algorithm(Algorithm::RoundRobin).max_loops(2),
    )?;
    let picked: Vec<&str> = rr.picks().collect::<Result<_, _>>()?;
    print_row("picked:", &picked);
    if let Err(err) = rr.pick() {
        println!("  {:<22} {err}", "next pick:");
    }

    println!();
    println!("══ Random, seeded ══");
    for allow_duplicates in [true, false] {
        let mut random = create_picker(
            FRUITS,
            ItemPickerOptions::new().seed(2024).allow_duplicates(allow_duplicates),
        )?;
        let picked: Vec<&str> = (0..8).map(|_| random.pick()).collect::<Result<_, _>>()?;
        print_row(&format!("allow_duplicates={allow_duplicates}:"), &picked);
    }

    println!();
    println!("══ Weighted, 10 000 seeded picks ══");
    let config = PickerConfig::from_json(r#"{"algorithm": "weighted", "seed": 12345}"#)?;
    let weights = ValueWeights::from_pairs([("apple", 10), ("banana", 20), ("cherry", 30), ("damson", 40)]);
    let mut weighted = create_picker(FRUITS, ItemPickerOptions::from_config(config).weights(weights))?;
    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for _ in 0..10_000 {
        *tally.entry(weighted.pick()?).or_insert(0) += 1;
    }
    for (fruit, count) in &tally {
        println!("  {fruit:<10} {count:>5}  ({:.1}%)", *count as f64 / 100.0);
    }

    println!();
    println!("══ Numbers between 1 and 6 ══");
    let mut dice = pick_number_between(1, 6, NumberPickerOptions::seeded(7))?;
    let rolls: Vec<String> = (0..10)
        .map(|_| dice.pick().map(|v| v.to_string()))
        .collect::<Result<_, _>>()?;
    println!("  rolls: {}", rolls.join(" "));
    println!();
    Ok(())
}
