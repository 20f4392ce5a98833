//! Training and evaluation pipeline abstractions
//!
//! This module provides composable pipelines for:
//! - Training the Q-learning agent over repeated episodes
//! - Evaluating a trained table with the greedy policy
//! - Recording observations during training

pub mod evaluation;
pub mod observers;
pub mod training;

pub use evaluation::{EvaluationResult, evaluate_greedy};
// Re-export observer implementations (adapters)
pub use observers::{MetricsObserver, MilestoneObserver, ProgressObserver};
pub use training::{EpisodeOutcome, TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::Observer;
