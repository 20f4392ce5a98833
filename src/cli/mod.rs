//! CLI infrastructure for the gridrl trainer
//!
//! This module provides the command-line interface for training,
//! reporting, and evaluating the Q-learning agent.

pub mod output;
pub mod train;
