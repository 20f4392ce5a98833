//! Tabular Q-learning
//!
//! Off-policy temporal difference control over a dense Q-table. The
//! behavior policy is ε-greedy with multiplicative per-episode decay; the
//! update always bootstraps from max_a' Q(s',a'), so the learned values
//! converge toward the optimal Q* rather than the exploratory policy's
//! own value function.
//!
//! ## Usage Example
//!
//! ```
//! use gridrl::q_learning::QLearningAgent;
//!
//! let agent = QLearningAgent::new(
//!     16,    // n_states (4x4 grid)
//!     0.5,   // learning_rate
//!     0.9,   // discount_factor
//!     1.0,   // epsilon (exploration)
//!     0.995, // epsilon_decay
//!     0.01,  // min_epsilon
//! )
//! .with_seed(42);
//! # let _ = agent;
//! ```

pub mod agent;
pub mod q_table;

// Public re-exports
pub use agent::QLearningAgent;
pub use q_table::QTable;
