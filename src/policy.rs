//! Greedy policy extraction
//!
//! A [`Policy`] is a read-only, grid-shaped snapshot derived from a
//! Q-table: one symbol per state, recomputed on demand and never mutated
//! in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{gridworld::GridConfig, q_learning::QTable, types::Action};

/// What the greedy policy does in one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyCell {
    /// Non-terminal cell: the greedy action.
    Move(Action),
    /// The goal cell.
    Goal,
    /// A pit cell.
    Pit,
}

impl PolicyCell {
    /// Single-character rendering: an arrow, `G`, or `P`.
    pub fn symbol(self) -> char {
        match self {
            PolicyCell::Move(action) => action.arrow(),
            PolicyCell::Goal => 'G',
            PolicyCell::Pit => 'P',
        }
    }
}

/// Grid-shaped greedy policy derived from a trained Q-table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    rows: usize,
    cols: usize,
    cells: Vec<PolicyCell>,
}

impl Policy {
    /// Extract the greedy policy for every state.
    ///
    /// Terminal cells get their marker; every other cell gets the action
    /// with the maximal Q-value, ties broken toward the lowest action
    /// index exactly as during training.
    pub fn extract(q_table: &QTable, config: &GridConfig) -> Self {
        let cells = (0..config.n_states())
            .map(|index| {
                let position = config.position(index);
                if config.is_goal(position) {
                    PolicyCell::Goal
                } else if config.is_pit(position) {
                    PolicyCell::Pit
                } else {
                    PolicyCell::Move(q_table.greedy_action(index))
                }
            })
            .collect();
        Self {
            rows: config.rows(),
            cols: config.cols(),
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> PolicyCell {
        self.cells[row * self.cols + col]
    }

    /// One row of symbols, for rendering.
    pub fn row_symbols(&self, row: usize) -> String {
        (0..self.cols)
            .map(|col| self.get(row, col).symbol())
            .collect()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
