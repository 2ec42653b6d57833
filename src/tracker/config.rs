//! Serializable tracker configuration.

use serde::{Deserialize, Serialize};

use crate::order::Thresholds;
use crate::semiorder_error::SemiorderError;
use crate::tracker::{ApproximateTracker, EboStreamTracker, ExactTracker, MinTracker};

/// Which tracker [`TrackerConfig::build`] creates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerKind {
    #[default]
    Exact,
    Approximate,
    EboStream,
}

/// Tracker parameters, e.g. loaded from JSON:
///
/// ```json
/// { "kind": "approximate", "slack": [0.1, 0.2], "epsilon": [0.01, 0.02] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub kind: TrackerKind,
    pub slack: Thresholds,
    /// Required for [`TrackerKind::Approximate`], ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilon: Option<Thresholds>,
}

impl TrackerConfig {
    pub fn exact(slack: Thresholds) -> Self {
        Self {
            kind: TrackerKind::Exact,
            slack,
            epsilon: None,
        }
    }

    pub fn approximate(slack: Thresholds, epsilon: Thresholds) -> Self {
        Self {
            kind: TrackerKind::Approximate,
            slack,
            epsilon: Some(epsilon),
        }
    }

    pub fn ebo_stream(slack: Thresholds) -> Self {
        Self {
            kind: TrackerKind::EboStream,
            slack,
            epsilon: None,
        }
    }

    /// Instantiate the configured tracker.
    ///
    /// # Errors
    /// [`SemiorderError::ThresholdLengthMismatch`] for an approximate tracker
    /// whose epsilon is missing (reported as length 0) or of the wrong length.
    pub fn build(&self) -> Result<Box<dyn MinTracker + Send + Sync>, SemiorderError> {
        Ok(match self.kind {
            TrackerKind::Exact => Box::new(ExactTracker::new(self.slack.clone())),
            TrackerKind::EboStream => Box::new(EboStreamTracker::new(self.slack.clone())),
            TrackerKind::Approximate => {
                let epsilon = self
                    .epsilon
                    .clone()
                    .ok_or(SemiorderError::ThresholdLengthMismatch {
                        slack: self.slack.dim(),
                        epsilon: 0,
                    })?;
                Box::new(ApproximateTracker::new(self.slack.clone(), epsilon)?)
            }
        })
    }
}
