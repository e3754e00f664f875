// Copyright (C) 2025 Memory Game Developers
// SPDX-License-Identifier: Apache-2.0

//! Memory game terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use rand::{SeedableRng, rngs::StdRng};

use memory_core::{Config, Deck, GoalPlanner, PlanPolicy};

pub mod terminal;
pub mod timer;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of cards dealt in each hand.
    #[clap(long, short, default_value_t = 30, value_parser = clap::value_parser!(u8).range(5..=52))]
    cards: u8,
    /// Seed for reproducible deals.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Leave short remainders out of the goal like the classic game.
    #[clap(long)]
    reference: bool,
    /// Print a hand with its goal groups and exit.
    #[clap(long)]
    plan_only: bool,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let policy = if cli.reference {
        PlanPolicy::Reference
    } else {
        PlanPolicy::Covering
    };

    let config = Config::new(cli.cards as usize)?.with_policy(policy);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.plan_only {
        print_plan(&config, &mut rng)
    } else {
        terminal::run(config, rng).await
    }
}

fn print_plan(config: &Config, rng: &mut StdRng) -> Result<()> {
    let hand = Deck::new_and_shuffled(rng).draw(config.num_cards())?;
    let plan = GoalPlanner::new(config.policy).plan(&hand);

    println!("Hand: {}", join(&hand));
    for (n, group) in plan.groups().iter().enumerate() {
        println!("Group {:>2}: {}", n + 1, join(group));
    }

    if !plan.dropped().is_empty() {
        println!("Dropped: {}", join(plan.dropped()));
    }

    println!("Goal: under {}", plan.benchmark());

    Ok(())
}

fn join(cards: &[memory_core::Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
