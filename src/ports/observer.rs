//! Observer port - abstraction for training observation
//!
//! This port defines the interface for observing training events,
//! allowing composable data collection (progress bars, metrics,
//! milestone reporting) without coupling the training loop to specific
//! output formats.

use crate::{Result, pipeline::training::EpisodeOutcome};

/// Observer trait for monitoring training.
///
/// Observers can be composed to collect different kinds of data during a
/// run. The methods are called in the following order:
///
/// 1. `on_training_start(total_episodes)` - once at the beginning
/// 2. For each episode: `on_episode_end(episode, outcome, epsilon)`
/// 3. Every `report_interval` episodes:
///    `on_milestone(episode, total_episodes, success_rate, epsilon)`
/// 4. `on_training_end()` - once at the end
///
/// All methods have no-op default implementations, so an observer only
/// overrides the events it cares about.
pub trait Observer: Send {
    /// Called once before the first episode.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every episode, once epsilon has been decayed.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the completed episode (0-based)
    /// * `outcome` - Total reward, success flag, and step count
    /// * `epsilon` - Exploration rate for the next episode
    fn on_episode_end(
        &mut self,
        _episode: usize,
        _outcome: &EpisodeOutcome,
        _epsilon: f64,
    ) -> Result<()> {
        Ok(())
    }

    /// Called at reporting milestones with the cumulative success rate
    /// (as a percentage) and the current exploration rate.
    fn on_milestone(
        &mut self,
        _episode: usize,
        _total_episodes: usize,
        _success_rate: f64,
        _epsilon: f64,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
