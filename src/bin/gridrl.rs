//! gridrl CLI - tabular Q-learning on a deterministic grid world
//!
//! Trains an ε-greedy Q-learning agent, prints the learned Q-table,
//! state values, and greedy policy, then evaluates the policy with
//! exploration disabled.

use anyhow::Result;
use clap::Parser;

use gridrl::cli::train::TrainArgs;

fn main() -> Result<()> {
    let args = TrainArgs::parse();
    gridrl::cli::train::execute(args)
}
