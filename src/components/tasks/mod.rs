mod reward;
mod task;

pub use reward::{score, RewardKind, TrajectoryWindow};
pub use task::Task;
