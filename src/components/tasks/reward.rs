use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::RewardError;

/// Reward shaping applied to each environment step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    /// Negative scaled squared tracking error.
    #[default]
    #[serde(rename = "sq_error")]
    SqError,
    /// Squared tracking error plus a penalty on action changes.
    #[serde(rename = "sq_error_da")]
    SqErrorDa,
}

impl RewardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKind::SqError => "sq_error",
            RewardKind::SqErrorDa => "sq_error_da",
        }
    }

    /// Scores the latest step of `window`.
    pub fn score(&self, window: &TrajectoryWindow<'_>) -> Result<f64, RewardError> {
        let tracking = -window.reward_scale * window.last_sq_error()?;

        match self {
            RewardKind::SqError => Ok(tracking),
            RewardKind::SqErrorDa => Ok(tracking - window.action_smoothness()?),
        }
    }
}

impl FromStr for RewardKind {
    type Err = RewardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sq_error" => Ok(RewardKind::SqError),
            "sq_error_da" => Ok(RewardKind::SqErrorDa),
            other => Err(RewardError::UnknownRewardKind(other.to_string())),
        }
    }
}

impl fmt::Display for RewardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recent step history handed over by the environment loop.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryWindow<'a> {
    pub reward_scale: f64,
    /// Squared tracking error per step, oldest first.
    pub sq_errors: &'a [f64],
    /// Applied action per step, oldest first.
    pub actions: &'a [DVector<f64>],
}

impl<'a> TrajectoryWindow<'a> {
    pub fn new(reward_scale: f64, sq_errors: &'a [f64], actions: &'a [DVector<f64>]) -> Self {
        Self {
            reward_scale,
            sq_errors,
            actions,
        }
    }

    fn last_sq_error(&self) -> Result<f64, RewardError> {
        self.sq_errors
            .last()
            .copied()
            .ok_or(RewardError::EmptyWindow)
    }

    /// Sum of squared differences between the two latest actions, zero
    /// until two actions have been taken.
    fn action_smoothness(&self) -> Result<f64, RewardError> {
        let [.., previous, latest] = self.actions else {
            return Ok(0.0);
        };
        if previous.len() != latest.len() {
            return Err(RewardError::ActionDimension {
                previous: previous.len(),
                latest: latest.len(),
            });
        }
        Ok((latest - previous).norm_squared())
    }
}

/// Scores a step with the reward named by `kind`.
///
/// # Errors
/// [`RewardError::UnknownRewardKind`] if `kind` is not a known tag.
pub fn score(kind: &str, window: &TrajectoryWindow<'_>) -> Result<f64, RewardError> {
    kind.parse::<RewardKind>()?.score(window)
}
