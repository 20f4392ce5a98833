//! Observer implementations for training pipelines
//!
//! Observers allow composable data collection during training without
//! coupling the episode loop to specific output formats.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, pipeline::training::EpisodeOutcome, ports::Observer};

/// Progress bar observer - shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    successes: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            successes: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(
        &mut self,
        episode: usize,
        outcome: &EpisodeOutcome,
        _epsilon: f64,
    ) -> Result<()> {
        if outcome.success {
            self.successes += 1;
        }
        if let Some(pb) = &self.progress_bar {
            pb.set_position((episode + 1) as u64);
            pb.set_message(format!("goal: {}", self.successes));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("goal: {}", self.successes));
        }
        Ok(())
    }
}

/// Metrics observer - tracks per-episode statistics
pub struct MetricsObserver {
    episodes: usize,
    successes: usize,
    total_reward: f64,
    step_counts: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            episodes: 0,
            successes: 0,
            total_reward: 0.0,
            step_counts: Vec::new(),
        }
    }

    /// Cumulative success rate over observed episodes
    pub fn success_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.successes as f64 / self.episodes as f64
        }
    }

    /// Mean total reward per episode
    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_reward / self.episodes as f64
        }
    }

    /// Mean episode length in steps
    pub fn mean_episode_length(&self) -> f64 {
        if self.step_counts.is_empty() {
            0.0
        } else {
            self.step_counts.iter().sum::<usize>() as f64 / self.step_counts.len() as f64
        }
    }

    pub fn episodes(&self) -> usize {
        self.episodes
    }

    pub fn successes(&self) -> usize {
        self.successes
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(
        &mut self,
        _episode: usize,
        outcome: &EpisodeOutcome,
        _epsilon: f64,
    ) -> Result<()> {
        self.episodes += 1;
        if outcome.success {
            self.successes += 1;
        }
        self.total_reward += outcome.total_reward;
        self.step_counts.push(outcome.steps);
        Ok(())
    }
}

/// Milestone observer - prints the cumulative success rate and current
/// exploration rate at every reporting interval.
pub struct MilestoneObserver;

impl MilestoneObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MilestoneObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MilestoneObserver {
    fn on_milestone(
        &mut self,
        episode: usize,
        total_episodes: usize,
        success_rate: f64,
        epsilon: f64,
    ) -> Result<()> {
        println!(
            "Episode {episode}/{total_episodes} — success rate: {success_rate:.1}% — ε: {epsilon:.3}"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(success: bool, total_reward: f64, steps: usize) -> EpisodeOutcome {
        EpisodeOutcome {
            total_reward,
            success,
            steps,
        }
    }

    #[test]
    fn metrics_observer_tracks_rates() {
        let mut metrics = MetricsObserver::new();
        metrics
            .on_episode_end(0, &outcome(true, 0.76, 6), 0.9)
            .unwrap();
        metrics
            .on_episode_end(1, &outcome(false, -1.2, 30), 0.89)
            .unwrap();

        assert_eq!(metrics.episodes(), 2);
        assert_eq!(metrics.successes(), 1);
        assert_eq!(metrics.success_rate(), 0.5);
        assert!((metrics.mean_reward() - (-0.22)).abs() < 1e-12);
        assert_eq!(metrics.mean_episode_length(), 18.0);
    }

    #[test]
    fn metrics_observer_empty() {
        let metrics = MetricsObserver::new();
        assert_eq!(metrics.success_rate(), 0.0);
        assert_eq!(metrics.mean_reward(), 0.0);
        assert_eq!(metrics.mean_episode_length(), 0.0);
    }
}
