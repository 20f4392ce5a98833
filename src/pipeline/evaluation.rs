//! Greedy policy evaluation
//!
//! Replays the environment with the purely greedy policy (ε = 0) against
//! a trained, read-only Q-table.

use serde::{Deserialize, Serialize};

use crate::{gridworld::GridWorld, q_learning::QTable, utils::mean};

/// Result of a greedy evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Rollouts played
    pub episodes: usize,

    /// Rollouts that reached the goal within the step budget
    pub successes: usize,

    /// Success rate as a percentage over all rollouts
    pub success_rate: f64,

    /// Mean step count over successful rollouts only.
    ///
    /// `None` when no rollout succeeded; callers must branch on this
    /// rather than treat it as zero.
    pub mean_steps: Option<f64>,
}

/// Run greedy rollouts against a trained Q-table.
///
/// Each rollout resets the environment, follows `q_table.greedy_action`
/// with no exploration, and is bounded by `max_steps`. A rollout counts
/// as a success only if it ends on the goal cell.
pub fn evaluate_greedy(
    q_table: &QTable,
    env: &mut GridWorld,
    episodes: usize,
    max_steps: usize,
) -> EvaluationResult {
    let mut successes = 0;
    let mut success_steps = Vec::new();

    for _ in 0..episodes {
        let mut position = env.reset();
        for step_num in 1..=max_steps {
            let state = env.config().state_index(position);
            let action = q_table.greedy_action(state);
            let step = env.step(action);
            position = step.state;
            if step.done {
                if env.config().is_goal(position) {
                    successes += 1;
                    success_steps.push(step_num as f64);
                }
                break;
            }
        }
    }

    let success_rate = if episodes > 0 {
        100.0 * successes as f64 / episodes as f64
    } else {
        0.0
    };

    EvaluationResult {
        episodes,
        successes,
        success_rate,
        mean_steps: mean(&success_steps),
    }
}
