//! Output formatting for the CLI

use crate::{gridworld::GridConfig, policy::Policy, q_learning::QTable, types::Action};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the Q-table as a state-by-action grid, 3-decimal rounding.
pub fn print_q_table(q_table: &QTable, config: &GridConfig) {
    print!("{:>8}", "state");
    for action in Action::ALL {
        print!("{action:>10}");
    }
    println!();

    for index in 0..config.n_states() {
        let position = config.position(index);
        print!("{:>8}", format!("{},{}", position.row, position.col));
        for value in q_table.action_values(index) {
            print!("{value:>10.3}");
        }
        println!();
    }
}

/// Print the greedy policy as a grid of arrows and terminal markers.
pub fn print_policy(policy: &Policy) {
    for row in 0..policy.rows() {
        print!("  ");
        for col in 0..policy.cols() {
            print!("{} ", policy.get(row, col).symbol());
        }
        println!();
    }
}

/// Print the state-value map V(s) = max_a Q(s,a) as a grid.
pub fn print_value_map(q_table: &QTable, config: &GridConfig) {
    for row in 0..config.rows() {
        print!("  ");
        for col in 0..config.cols() {
            let index = row * config.cols() + col;
            print!("{:>8.3}", q_table.max_q(index));
        }
        println!();
    }
}
