use linear_flyer::{
    components::{score, RewardKind, SymmetricData, Task, TrajectoryWindow},
    systems::build_symmetric,
    RewardError,
};
use nalgebra::DVector;
use pretty_assertions::assert_eq;

fn actions(rows: &[&[f64]]) -> Vec<DVector<f64>> {
    rows.iter().map(|r| DVector::from_row_slice(r)).collect()
}

#[test]
fn test_sq_error_uses_latest_step_only() {
    let history = actions(&[&[0.0], &[1.0]]);
    let early = TrajectoryWindow::new(1.5, &[100.0, 4.0], &history);
    let late = TrajectoryWindow::new(1.5, &[0.0, 4.0], &history);

    assert_eq!(score("sq_error", &early), Ok(-6.0));
    assert_eq!(score("sq_error", &early), score("sq_error", &late));
}

#[test]
fn test_sq_error_is_monotone_in_error() {
    let history = actions(&[&[0.0]]);
    let errors = [0.0, 0.01, 0.5, 2.0, 30.0];

    let rewards: Vec<f64> = errors
        .iter()
        .map(|e| {
            let window = TrajectoryWindow::new(1.0, std::slice::from_ref(e), &history);
            score("sq_error", &window).unwrap()
        })
        .collect();

    assert_eq!(rewards[0], 0.0);
    assert!(rewards.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn test_constant_actions_add_no_penalty() {
    let history = actions(&[&[0.3, -0.1], &[0.2, 0.4], &[0.2, 0.4]]);
    let window = TrajectoryWindow::new(2.0, &[0.5, 0.25], &history);

    assert_eq!(score("sq_error_da", &window), score("sq_error", &window));
}

#[test]
fn test_action_change_is_penalised() {
    let history = actions(&[&[0.0, 0.0], &[0.3, -0.4]]);
    let window = TrajectoryWindow::new(1.0, &[1.0], &history);

    let plain = score("sq_error", &window).unwrap();
    let smoothed = score("sq_error_da", &window).unwrap();

    assert_eq!(plain, -1.0);
    assert!((smoothed - (plain - 0.25)).abs() < 1e-12);
    assert!(smoothed < plain);
}

#[test]
fn test_unknown_kind_rejected() {
    let history = actions(&[&[0.0]]);
    let window = TrajectoryWindow::new(1.0, &[1.0], &history);

    assert_eq!(
        score("abs_error", &window),
        Err(RewardError::UnknownRewardKind("abs_error".to_string()))
    );
    assert_eq!(
        score("", &window),
        Err(RewardError::UnknownRewardKind(String::new()))
    );
}

#[test]
fn test_empty_window_rejected() {
    let window = TrajectoryWindow::new(1.0, &[], &[]);

    for kind in [RewardKind::SqError, RewardKind::SqErrorDa] {
        assert_eq!(kind.score(&window), Err(RewardError::EmptyWindow));
    }
}

#[test]
fn test_mismatched_action_dimensions_rejected() {
    let history = actions(&[&[0.0], &[0.1, 0.2]]);
    let window = TrajectoryWindow::new(1.0, &[1.0], &history);

    assert_eq!(
        score("sq_error_da", &window),
        Err(RewardError::ActionDimension {
            previous: 1,
            latest: 2
        })
    );
    // The plain reward never looks at actions.
    assert_eq!(score("sq_error", &window), Ok(-1.0));
}

#[test]
fn test_reward_from_tracked_state() {
    let model = build_symmetric(59.9, &SymmetricData::citation()).unwrap();
    let state = DVector::from_row_slice(&[0.0, 0.05, 0.02, -0.01]);

    let sq_error = Task::Aoa
        .squared_tracking_error(&model, &state, 0.15)
        .unwrap();
    let history = actions(&[&[0.0]]);
    let window = TrajectoryWindow::new(1.0, std::slice::from_ref(&sq_error), &history);

    let reward = RewardKind::SqError.score(&window).unwrap();
    assert!((reward + 0.01).abs() < 1e-12);
}
