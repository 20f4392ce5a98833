//! Tabular Q-learning over a deterministic grid-world MDP
//!
//! This crate provides:
//! - A deterministic grid environment with boundary clipping, pits, and a
//!   goal cell ([`gridworld`])
//! - An off-policy TD-control agent over a dense Q-table ([`q_learning`])
//! - Training and greedy-evaluation pipelines with composable observers
//!   ([`pipeline`])
//! - Greedy policy extraction into a grid of symbols ([`policy`])
//!
//! ## Example
//!
//! ```
//! use gridrl::{
//!     GridConfig, GridWorld, Policy, QLearningAgent,
//!     pipeline::{TrainingConfig, TrainingPipeline, evaluate_greedy},
//! };
//!
//! let grid = GridConfig::default();
//! let mut env = GridWorld::new(grid.clone());
//! let mut agent = QLearningAgent::new(grid.n_states(), 0.5, 0.9, 1.0, 0.995, 0.01);
//!
//! let config = TrainingConfig {
//!     episodes: 500,
//!     max_steps: 100,
//!     seed: Some(42),
//!     report_interval: 0,
//! };
//! let result = TrainingPipeline::new(config)
//!     .run(&mut env, &mut agent)
//!     .unwrap();
//! assert_eq!(result.reward_history.len(), 500);
//!
//! let q_table = agent.into_q_table();
//! let policy = Policy::extract(&q_table, &grid);
//! let evaluation = evaluate_greedy(&q_table, &mut env, 100, 100);
//! # let _ = (policy, evaluation);
//! ```

pub mod cli;
pub mod error;
pub mod gridworld;
pub mod pipeline;
pub mod policy;
pub mod ports;
pub mod q_learning;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use gridworld::{GridConfig, GridWorld, Step};
pub use pipeline::{
    EpisodeOutcome, EvaluationResult, TrainingConfig, TrainingPipeline, TrainingResult,
    evaluate_greedy,
};
pub use policy::{Policy, PolicyCell};
pub use ports::Observer;
pub use q_learning::{QLearningAgent, QTable};
pub use types::{Action, Position};
