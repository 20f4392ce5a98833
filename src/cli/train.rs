//! Run command - train, report, and evaluate a Q-learning agent

use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::output::{print_kv, print_policy, print_q_table, print_section, print_value_map},
    gridworld::{GridConfig, GridWorld},
    pipeline::{
        EvaluationResult, MilestoneObserver, ProgressObserver, TrainingConfig, TrainingPipeline,
        TrainingResult, evaluate_greedy,
    },
    policy::Policy,
    q_learning::QLearningAgent,
    types::Position,
    utils::moving_average,
};

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent on a grid world", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 10_000)]
    pub episodes: usize,

    /// Learning rate α
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f64,

    /// Discount factor γ
    #[arg(long, default_value_t = 0.9)]
    pub gamma: f64,

    /// Initial exploration rate ε
    #[arg(long, default_value_t = 1.0)]
    pub eps_start: f64,

    /// Minimum exploration rate
    #[arg(long, default_value_t = 0.01)]
    pub eps_min: f64,

    /// Multiplicative ε decay per episode
    #[arg(long, default_value_t = 0.995)]
    pub decay: f64,

    /// Step budget per episode
    #[arg(long, default_value_t = 100)]
    pub steps: usize,

    /// Moving-average window for the reward summary
    #[arg(long, default_value_t = 50)]
    pub window: usize,

    /// Number of greedy evaluation rollouts
    #[arg(long, default_value_t = 100)]
    pub eval_episodes: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Grid rows
    #[arg(long, default_value_t = 4)]
    pub rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 4)]
    pub cols: usize,

    /// Start cell as `row,col`
    #[arg(long, default_value = "0,0")]
    pub start: String,

    /// Goal cell as `row,col`
    #[arg(long, default_value = "3,3")]
    pub goal: String,

    /// Pit cell as `row,col` (repeatable)
    #[arg(long = "pit", value_name = "ROW,COL", default_values = ["1,1", "2,3"])]
    pub pits: Vec<String>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Suppress the progress bar and milestone reports
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

pub(crate) fn parse_position(value: &str, flag: &str) -> Result<Position> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("Invalid value '{value}' for {flag} (expected 'row,col')"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid row '{row}' for {flag}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid column '{col}' for {flag}"))?;
    Ok(Position::new(row, col))
}

fn validate_hyperparameters(args: &TrainArgs) -> Result<()> {
    if !(args.alpha > 0.0 && args.alpha <= 1.0) {
        bail!("--alpha must be in (0, 1], got {}", args.alpha);
    }
    if !(0.0..=1.0).contains(&args.gamma) {
        bail!("--gamma must be in [0, 1], got {}", args.gamma);
    }
    if !(args.decay > 0.0 && args.decay <= 1.0) {
        bail!("--decay must be in (0, 1], got {}", args.decay);
    }
    if !(0.0..=1.0).contains(&args.eps_start) || !(0.0..=1.0).contains(&args.eps_min) {
        bail!("exploration rates must be in [0, 1]");
    }
    if args.eps_min > args.eps_start {
        bail!(
            "--eps-min ({}) must not exceed --eps-start ({})",
            args.eps_min,
            args.eps_start
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct RunSummaryFile {
    grid: GridSection,
    hyperparameters: HyperparameterSection,
    training: TrainingSection,
    evaluation: EvaluationResult,
    policy: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GridSection {
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
    pits: Vec<Position>,
}

#[derive(Debug, Serialize)]
struct HyperparameterSection {
    episodes: usize,
    alpha: f64,
    gamma: f64,
    eps_start: f64,
    eps_min: f64,
    decay: f64,
    max_steps: usize,
    seed: u64,
}

#[derive(Debug, Serialize)]
struct TrainingSection {
    episodes: usize,
    successes: usize,
    success_rate: f64,
    final_epsilon: f64,
    smoothed_reward_first: Option<f64>,
    smoothed_reward_last: Option<f64>,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    validate_hyperparameters(&args)?;

    let start = parse_position(&args.start, "--start")?;
    let goal = parse_position(&args.goal, "--goal")?;
    let pits = args
        .pits
        .iter()
        .map(|p| parse_position(p, "--pit"))
        .collect::<Result<Vec<_>>>()?;

    let grid = GridConfig::new(args.rows, args.cols, start, goal, pits)?;
    let mut env = GridWorld::new(grid.clone());
    let mut agent = QLearningAgent::new(
        grid.n_states(),
        args.alpha,
        args.gamma,
        args.eps_start,
        args.decay,
        args.eps_min,
    );

    print_section("Q-Learning on Grid World");
    print_kv("Grid", &format!("{}x{}", grid.rows(), grid.cols()));
    print_kv("Start", &start.to_string());
    print_kv("Goal", &goal.to_string());
    print_kv(
        "Pits",
        &{
            let mut pits: Vec<_> = grid.pits().iter().map(ToString::to_string).collect();
            pits.sort();
            pits.join(", ")
        },
    );
    print_kv("Episodes", &args.episodes.to_string());
    print_kv(
        "Hyperparameters",
        &format!(
            "α={} γ={} ε={}→{} decay={}",
            args.alpha, args.gamma, args.eps_start, args.eps_min, args.decay
        ),
    );
    print_kv("Seed", &args.seed.to_string());

    let config = TrainingConfig {
        episodes: args.episodes,
        max_steps: args.steps,
        seed: Some(args.seed),
        report_interval: if args.quiet { 0 } else { 100 },
    };

    let mut pipeline = TrainingPipeline::new(config);
    if !args.quiet {
        pipeline = pipeline
            .with_observer(Box::new(ProgressObserver::new()))
            .with_observer(Box::new(MilestoneObserver::new()));
    }

    let result = pipeline.run(&mut env, &mut agent)?;
    let q_table = agent.into_q_table();
    let policy = Policy::extract(&q_table, &grid);

    print_section("Q-Table");
    print_q_table(&q_table, &grid);

    print_section("State Values V(s) = max_a Q(s,a)");
    print_value_map(&q_table, &grid);

    print_section("Greedy Policy");
    print_policy(&policy);

    let smoothed = moving_average(&result.reward_history, args.window);
    print_section("Training Summary");
    print_kv("Episodes", &result.episodes.to_string());
    print_kv(
        "Goal reached",
        &format!(
            "{} ({:.1}%)",
            result.successes,
            result.success_rate * 100.0
        ),
    );
    print_kv("Final ε", &format!("{:.3}", result.final_epsilon));
    if let (Some(first), Some(last)) = (smoothed.first(), smoothed.last()) {
        print_kv(
            &format!("Smoothed reward (w={})", args.window),
            &format!("{first:.3} → {last:.3}"),
        );
    }

    let evaluation = evaluate_greedy(&q_table, &mut env, args.eval_episodes, args.steps);
    print_section("Greedy Evaluation");
    print_kv("Rollouts", &evaluation.episodes.to_string());
    print_kv("Success rate", &format!("{:.1}%", evaluation.success_rate));
    match evaluation.mean_steps {
        Some(steps) => print_kv("Mean steps", &format!("{steps:.1}")),
        None => print_kv("Mean steps", "n/a (no successful rollouts)"),
    }

    if let Some(path) = &args.summary {
        write_summary(path, &args, &grid, &result, &evaluation, &policy, &smoothed)?;
        println!("\n✓ Summary written to: {}", path.display());
    }

    Ok(())
}

/// Write run results (not the learned table) to a JSON summary file.
fn write_summary(
    path: &PathBuf,
    args: &TrainArgs,
    grid: &GridConfig,
    result: &TrainingResult,
    evaluation: &EvaluationResult,
    policy: &Policy,
    smoothed: &[f64],
) -> crate::Result<()> {
    let mut pits: Vec<Position> = grid.pits().iter().copied().collect();
    pits.sort();

    let summary = RunSummaryFile {
        grid: GridSection {
            rows: grid.rows(),
            cols: grid.cols(),
            start: grid.start(),
            goal: grid.goal(),
            pits,
        },
        hyperparameters: HyperparameterSection {
            episodes: args.episodes,
            alpha: args.alpha,
            gamma: args.gamma,
            eps_start: args.eps_start,
            eps_min: args.eps_min,
            decay: args.decay,
            max_steps: args.steps,
            seed: args.seed,
        },
        training: TrainingSection {
            episodes: result.episodes,
            successes: result.successes,
            success_rate: result.success_rate,
            final_epsilon: result.final_epsilon,
            smoothed_reward_first: smoothed.first().copied(),
            smoothed_reward_last: smoothed.last().copied(),
        },
        evaluation: evaluation.clone(),
        policy: (0..policy.rows()).map(|r| policy.row_symbols(r)).collect(),
    };

    let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create summary file '{}'", path.display()),
        source,
    })?;
    to_writer_pretty(file, &summary)?;
    Ok(())
}
