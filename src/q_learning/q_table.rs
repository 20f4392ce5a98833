//! Dense Q-table for temporal difference learning

use serde::{Deserialize, Serialize};

use crate::types::Action;

/// Q-table mapping (state index, action) pairs to Q-values.
///
/// Dense `n_states x 4` array, zero-initialized. The table owns the
/// learning rate α and discount factor γ used by its update rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    /// Q-values: one row of four action values per state
    values: Vec<[f64; Action::COUNT]>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a new zero-initialized Q-table.
    pub fn new(n_states: usize, learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: vec![[0.0; Action::COUNT]; n_states],
            learning_rate,
            discount_factor,
        }
    }

    /// Get the Q-value for a state-action pair.
    pub fn get(&self, state: usize, action: Action) -> f64 {
        self.values[state][action.index()]
    }

    /// Set the Q-value for a state-action pair.
    pub fn set(&mut self, state: usize, action: Action, value: f64) {
        self.values[state][action.index()] = value;
    }

    /// All four action values for a state, in action-index order.
    pub fn action_values(&self, state: usize) -> [f64; Action::COUNT] {
        self.values[state]
    }

    /// Maximum Q-value over the action set in a state.
    pub fn max_q(&self, state: usize) -> f64 {
        self.values[state]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Greedy action for a state.
    ///
    /// Ties are broken deterministically toward the lowest action index,
    /// so an all-zero row yields `Action::Up`.
    pub fn greedy_action(&self, state: usize) -> Action {
        let mut best = Action::Up;
        let mut best_q = self.get(state, best);
        for &action in &Action::ALL[1..] {
            let q = self.get(state, action);
            if q > best_q {
                best = action;
                best_q = q;
            }
        }
        best
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// The bootstrap term is dropped on terminal transitions. As long as
    /// episodes start in a non-terminal cell, terminal rows never receive
    /// updates and stay zero, so this is equivalent to bootstrapping
    /// through them.
    pub fn q_learning_update(
        &mut self,
        state: usize,
        action: Action,
        reward: f64,
        next_state: usize,
        done: bool,
    ) {
        let current_q = self.get(state, action);
        let max_next_q = if done { 0.0 } else { self.max_q(next_state) };
        let td_target = reward + self.discount_factor * max_next_q;
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(state, action, new_q);
    }

    /// Number of states covered by the table.
    pub fn n_states(&self) -> usize {
        self.values.len()
    }

    /// Reset all Q-values to zero.
    pub fn reset(&mut self) {
        for row in &mut self.values {
            *row = [0.0; Action::COUNT];
        }
    }
}
