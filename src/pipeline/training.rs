//! Training pipeline for the Q-learning agent

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    gridworld::{GOAL_REWARD, GridWorld},
    ports::Observer,
    q_learning::QLearningAgent,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub episodes: usize,

    /// Step budget per episode
    pub max_steps: usize,

    /// Random seed (applied to the agent before the first episode)
    pub seed: Option<u64>,

    /// Milestone reporting interval in episodes (0 disables milestones)
    pub report_interval: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            max_steps: 100,
            seed: None,
            report_interval: 100,
        }
    }
}

/// Outcome of a single training or evaluation episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeOutcome {
    /// Total accumulated reward
    pub total_reward: f64,
    /// Whether the goal was reached (as opposed to a pit or an exhausted
    /// step budget)
    pub success: bool,
    /// Steps taken before termination or budget exhaustion
    pub steps: usize,
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub episodes: usize,

    /// Episodes that reached the goal
    pub successes: usize,

    /// Success rate over all episodes
    pub success_rate: f64,

    /// Exploration rate after the final decay
    pub final_epsilon: f64,

    /// Total reward per episode, in episode order
    pub reward_history: Vec<f64>,
}

impl TrainingResult {
    pub fn new(
        episodes: usize,
        successes: usize,
        final_epsilon: f64,
        reward_history: Vec<f64>,
    ) -> Self {
        let success_rate = if episodes > 0 {
            successes as f64 / episodes as f64
        } else {
            0.0
        };
        Self {
            episodes,
            successes,
            success_rate,
            final_epsilon,
            reward_history,
        }
    }
}

/// Training pipeline: drives the environment through repeated
/// reset/step cycles while the agent learns.
///
/// The pipeline owns no learning state of its own; the agent owns the
/// Q-table and the exploration schedule, the environment owns the MDP.
/// Training is strictly sequential: each episode's updates feed the next
/// episode's bootstrapped targets.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run training with the given environment and agent.
    ///
    /// Zero episodes or a zero step budget degenerate into an untouched
    /// table and an empty (or all-zero) history; neither is an error.
    pub fn run(
        &mut self,
        env: &mut GridWorld,
        agent: &mut QLearningAgent,
    ) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            agent.set_seed(seed);
        }

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut reward_history = Vec::with_capacity(self.config.episodes);
        let mut successes = 0;

        for episode in 0..self.config.episodes {
            let outcome = self.run_episode(env, agent);
            if outcome.success {
                successes += 1;
            }
            reward_history.push(outcome.total_reward);
            agent.decay_epsilon();

            for observer in &mut self.observers {
                observer.on_episode_end(episode, &outcome, agent.epsilon())?;
            }

            if self.config.report_interval > 0
                && (episode + 1).is_multiple_of(self.config.report_interval)
            {
                let rate = successes as f64 / (episode + 1) as f64 * 100.0;
                for observer in &mut self.observers {
                    observer.on_milestone(
                        episode + 1,
                        self.config.episodes,
                        rate,
                        agent.epsilon(),
                    )?;
                }
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(
            self.config.episodes,
            successes,
            agent.epsilon(),
            reward_history,
        ))
    }

    fn run_episode(&self, env: &mut GridWorld, agent: &mut QLearningAgent) -> EpisodeOutcome {
        let start = env.reset();
        let mut state = env.config().state_index(start);
        let mut total_reward = 0.0;

        for step_num in 1..=self.config.max_steps {
            let action = agent.select_action(state);
            let step = env.step(action);
            let next_state = env.config().state_index(step.state);

            agent.update(state, action, step.reward, next_state, step.done);
            total_reward += step.reward;
            state = next_state;

            if step.done {
                // Reached the goal iff the terminal reward is exactly +1.0.
                return EpisodeOutcome {
                    total_reward,
                    success: step.reward == GOAL_REWARD,
                    steps: step_num,
                };
            }
        }

        EpisodeOutcome {
            total_reward,
            success: false,
            steps: self.config.max_steps,
        }
    }
}
