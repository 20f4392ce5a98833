//! Scenario tests for the grid environment on the classic 4x4 layout:
//! start (0,0), goal (3,3), pits (1,1) and (2,3).

use gridrl::{
    Action, GridConfig, GridWorld, Position,
    gridworld::{BLOCKED_REWARD, GOAL_REWARD, PIT_REWARD, STEP_REWARD},
};

fn classic_env() -> GridWorld {
    let config = GridConfig::new(
        4,
        4,
        Position::new(0, 0),
        Position::new(3, 3),
        [Position::new(1, 1), Position::new(2, 3)],
    )
    .unwrap();
    GridWorld::new(config)
}

#[test]
fn right_from_start_is_a_normal_step() {
    let mut env = classic_env();
    env.reset();
    let step = env.step(Action::Right);
    assert_eq!(step.state, Position::new(0, 1));
    assert_eq!(step.reward, STEP_REWARD);
    assert!(!step.done);
}

#[test]
fn up_from_start_is_clamped_and_penalized() {
    let mut env = classic_env();
    env.reset();
    let step = env.step(Action::Up);
    assert_eq!(step.state, Position::new(0, 0));
    assert_eq!(step.reward, BLOCKED_REWARD);
    assert!(!step.done);
}

#[test]
fn shortest_route_reaches_the_goal() {
    let mut env = classic_env();
    env.reset();

    let route = [
        Action::Right,
        Action::Right,
        Action::Right,
        Action::Down,
        Action::Down,
        Action::Down,
    ];
    let mut last = None;
    for action in route {
        last = Some(env.step(action));
    }
    let step = last.unwrap();
    assert_eq!(step.state, Position::new(3, 3));
    assert_eq!(step.reward, GOAL_REWARD);
    assert!(step.done);
}

#[test]
fn every_pit_terminates_with_unit_penalty() {
    // (1,1) via Down, Right from the start.
    let mut env = classic_env();
    env.reset();
    env.step(Action::Down);
    let step = env.step(Action::Right);
    assert_eq!(step.state, Position::new(1, 1));
    assert_eq!(step.reward, PIT_REWARD);
    assert!(step.done);

    // (2,3) via Right x3, Down x2.
    env.reset();
    env.step(Action::Right);
    env.step(Action::Right);
    env.step(Action::Right);
    env.step(Action::Down);
    let step = env.step(Action::Down);
    assert_eq!(step.state, Position::new(2, 3));
    assert_eq!(step.reward, PIT_REWARD);
    assert!(step.done);
}

#[test]
fn index_bijection_over_the_whole_grid() {
    let env = classic_env();
    let config = env.config();
    for index in 0..config.n_states() {
        assert_eq!(config.state_index(config.position(index)), index);
    }
}

#[test]
fn raw_action_codes_share_semantics_with_typed_actions() {
    let mut env = classic_env();
    env.reset();
    assert_eq!(env.step_code(1).state, Position::new(0, 1));
    assert_eq!(env.step_code(2).state, Position::new(1, 1));

    // Out-of-range codes are a zero-displacement move, not a panic.
    env.reset();
    let step = env.step_code(42);
    assert_eq!(step.state, Position::new(0, 0));
    assert_eq!(step.reward, BLOCKED_REWARD);
    assert!(!step.done);
}
