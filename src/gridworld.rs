//! Deterministic grid-world MDP
//!
//! States are grid cells, actions are the four compass moves, and
//! transitions clamp at the grid boundary (walking into a wall is a no-op
//! in that axis, not an error). Rewards:
//!
//! - `+1.0` on reaching the goal (terminal)
//! - `-1.0` on falling into a pit (terminal)
//! - `-0.1` for a fully blocked move (zero net displacement)
//! - `-0.04` for any other step
//!
//! The environment is a pure state machine: it knows nothing about the
//! learning algorithm driving it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::{Action, Position},
};

/// Reward for reaching the goal.
pub const GOAL_REWARD: f64 = 1.0;
/// Reward for falling into a pit.
pub const PIT_REWARD: f64 = -1.0;
/// Reward for a normal, non-terminal step.
pub const STEP_REWARD: f64 = -0.04;
/// Reward for a move with zero net displacement (blocked by the boundary).
pub const BLOCKED_REWARD: f64 = -0.1;

/// Static grid layout: dimensions, start, goal, and pit cells.
///
/// Immutable after construction. Construction validates that the
/// dimensions are positive, that start/goal/pits lie within bounds, and
/// that the goal does not overlap a pit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
    pits: HashSet<Position>,
}

impl GridConfig {
    /// Create a validated grid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero-sized grid,
    /// [`Error::OutOfBounds`] if start, goal, or any pit falls outside the
    /// grid, and [`Error::GoalPitOverlap`] if the goal cell is also a pit.
    pub fn new(
        rows: usize,
        cols: usize,
        start: Position,
        goal: Position,
        pits: impl IntoIterator<Item = Position>,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }

        let in_bounds = |p: Position| p.row < rows && p.col < cols;
        let check = |name: &'static str, p: Position| {
            if in_bounds(p) {
                Ok(())
            } else {
                Err(Error::OutOfBounds {
                    name,
                    row: p.row,
                    col: p.col,
                    rows,
                    cols,
                })
            }
        };

        check("start", start)?;
        check("goal", goal)?;

        let pits: HashSet<Position> = pits.into_iter().collect();
        for &pit in &pits {
            check("pit", pit)?;
        }
        if pits.contains(&goal) {
            return Err(Error::GoalPitOverlap {
                row: goal.row,
                col: goal.col,
            });
        }

        Ok(Self {
            rows,
            cols,
            start,
            goal,
            pits,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn pits(&self) -> &HashSet<Position> {
        &self.pits
    }

    pub fn is_pit(&self, position: Position) -> bool {
        self.pits.contains(&position)
    }

    pub fn is_goal(&self, position: Position) -> bool {
        position == self.goal
    }

    /// Total number of states (grid cells).
    pub fn n_states(&self) -> usize {
        self.rows * self.cols
    }

    /// Flatten a position into a state index: `row * cols + col`.
    pub fn state_index(&self, position: Position) -> usize {
        position.row * self.cols + position.col
    }

    /// Inverse of [`state_index`](Self::state_index) over the valid domain.
    pub fn position(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }
}

impl Default for GridConfig {
    /// The classic 4x4 layout: start (0,0), goal (3,3), pits (1,1) and (2,3).
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            start: Position::new(0, 0),
            goal: Position::new(3, 3),
            pits: [Position::new(1, 1), Position::new(2, 3)]
                .into_iter()
                .collect(),
        }
    }
}

/// Result of a single environment transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// State after the move.
    pub state: Position,
    /// Immediate reward.
    pub reward: f64,
    /// Whether a terminal state (goal or pit) was reached.
    pub done: bool,
}

/// The grid MDP: a static [`GridConfig`] plus a mutable current state.
#[derive(Debug, Clone)]
pub struct GridWorld {
    config: GridConfig,
    state: Position,
}

impl GridWorld {
    pub fn new(config: GridConfig) -> Self {
        let state = config.start();
        Self { config, state }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current agent position.
    pub fn state(&self) -> Position {
        self.state
    }

    /// Move the agent back to the start cell and return it.
    ///
    /// Only the current state is reset; the static layout never changes.
    pub fn reset(&mut self) -> Position {
        self.state = self.config.start();
        self.state
    }

    /// Apply one action, clamping at the grid boundary.
    pub fn step(&mut self, action: Action) -> Step {
        let Position { row, col } = self.state;
        let candidate = match action {
            Action::Up => Position::new(row.saturating_sub(1), col),
            Action::Right => Position::new(row, (col + 1).min(self.config.cols() - 1)),
            Action::Down => Position::new((row + 1).min(self.config.rows() - 1), col),
            Action::Left => Position::new(row, col.saturating_sub(1)),
        };
        self.advance(candidate)
    }

    /// Apply a raw integer action code.
    ///
    /// Codes outside 0-3 are a zero-displacement move, never an error.
    pub fn step_code(&mut self, code: usize) -> Step {
        match Action::from_index(code) {
            Some(action) => self.step(action),
            None => self.advance(self.state),
        }
    }

    fn advance(&mut self, candidate: Position) -> Step {
        if self.config.is_goal(candidate) {
            self.state = candidate;
            return Step {
                state: candidate,
                reward: GOAL_REWARD,
                done: true,
            };
        }
        if self.config.is_pit(candidate) {
            self.state = candidate;
            return Step {
                state: candidate,
                reward: PIT_REWARD,
                done: true,
            };
        }

        // A candidate equal to the previous state means the move was
        // blocked on every intended axis; penalize the wasted move.
        let reward = if candidate == self.state {
            BLOCKED_REWARD
        } else {
            STEP_REWARD
        };
        self.state = candidate;
        Step {
            state: candidate,
            reward,
            done: false,
        }
    }
}
