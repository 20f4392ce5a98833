//! Q-learning agent
//!
//! The agent owns the Q-table, the exploration schedule, and its random
//! number source. Action selection and the value update are separate
//! methods composed by the episode loop, so each is testable in isolation.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{q_learning::q_table::QTable, types::Action};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Q-learning agent (off-policy TD control)
///
/// Follows an ε-greedy behavior policy while always updating toward the
/// maximum next-state value, so it learns the optimal Q* regardless of
/// the exploration actually taken.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    epsilon: f64,
    initial_epsilon: f64,
    epsilon_decay: f64,
    min_epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create a new Q-learning agent with a zero-initialized Q-table.
    ///
    /// # Arguments
    ///
    /// * `n_states` - Number of environment states (Q-table rows)
    /// * `learning_rate` - α parameter (0.0 to 1.0)
    /// * `discount_factor` - γ parameter (0.0 to 1.0)
    /// * `epsilon` - Initial exploration rate
    /// * `epsilon_decay` - Multiplicative decay per episode
    /// * `min_epsilon` - Minimum exploration rate
    pub fn new(
        n_states: usize,
        learning_rate: f64,
        discount_factor: f64,
        epsilon: f64,
        epsilon_decay: f64,
        min_epsilon: f64,
    ) -> Self {
        Self {
            q_table: QTable::new(n_states, learning_rate, discount_factor),
            epsilon,
            initial_epsilon: epsilon,
            epsilon_decay,
            min_epsilon,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Seed the agent's RNG for reproducible training runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.set_seed(seed);
        self
    }

    /// Re-seed the agent's RNG in place.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
    }

    /// ε-greedy action selection for the given state.
    pub fn select_action(&mut self, state: usize) -> Action {
        if self.rng.random::<f64>() < self.epsilon {
            // Explore: uniformly random action
            *Action::ALL
                .choose(&mut self.rng)
                .expect("action set is non-empty")
        } else {
            // Exploit: greedy action based on Q-values
            self.q_table.greedy_action(state)
        }
    }

    /// Apply the Q-learning update for one observed transition.
    pub fn update(
        &mut self,
        state: usize,
        action: Action,
        reward: f64,
        next_state: usize,
        done: bool,
    ) {
        self.q_table
            .q_learning_update(state, action, reward, next_state, done);
    }

    /// Decay epsilon after an episode, clamped at the configured floor.
    pub fn decay_epsilon(&mut self) {
        self.epsilon = (self.epsilon * self.epsilon_decay).max(self.min_epsilon);
    }

    /// Current exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Read-only view of the learned table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Consume the agent, yielding the learned table.
    pub fn into_q_table(self) -> QTable {
        self.q_table
    }

    /// Reset learning state: zero the table, restore the initial epsilon,
    /// and re-seed the RNG if a seed was set.
    pub fn reset(&mut self) {
        self.q_table.reset();
        self.epsilon = self.initial_epsilon;
        self.rng = build_rng(self.rng_seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_with_epsilon(epsilon: f64) -> QLearningAgent {
        QLearningAgent::new(16, 0.5, 0.9, epsilon, 0.995, 0.01).with_seed(42)
    }

    #[test]
    fn greedy_when_epsilon_zero() {
        let mut agent = agent_with_epsilon(0.0);
        agent.update(0, Action::Down, 1.0, 1, true);
        for _ in 0..50 {
            assert_eq!(agent.select_action(0), Action::Down);
        }
    }

    #[test]
    fn explores_when_epsilon_one() {
        let mut agent = agent_with_epsilon(1.0);
        agent.update(0, Action::Down, 1.0, 1, true);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(agent.select_action(0));
        }
        assert_eq!(seen.len(), Action::COUNT, "all actions should be sampled");
    }

    #[test]
    fn epsilon_decays_to_floor() {
        let mut agent = QLearningAgent::new(16, 0.5, 0.9, 1.0, 0.5, 0.1);
        let mut previous = agent.epsilon();
        for _ in 0..20 {
            agent.decay_epsilon();
            assert!(agent.epsilon() <= previous);
            assert!(agent.epsilon() >= 0.1);
            previous = agent.epsilon();
        }
        assert_eq!(agent.epsilon(), 0.1);
    }

    #[test]
    fn seeded_agents_select_identically() {
        let mut a = agent_with_epsilon(1.0);
        let mut b = agent_with_epsilon(1.0);
        for state in 0..16 {
            assert_eq!(a.select_action(state), b.select_action(state));
        }
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut agent = agent_with_epsilon(0.8);
        agent.update(0, Action::Right, 1.0, 1, true);
        agent.decay_epsilon();
        agent.reset();
        assert_eq!(agent.epsilon(), 0.8);
        assert_eq!(agent.q_table().get(0, Action::Right), 0.0);
    }
}
