use crate::consts::{LEN_STEP, LEN_STROKE};
use crate::error::{TrackerError, TrackerResult};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The closed set of workouts the tracker understands.
///
/// `Display`/`FromStr` work on the three-letter sensor code (`RUN`, `WLK`, `SWM`),
/// while [`WorkoutKind::label`] is the human-facing name used in reports.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, IntoStaticStr, PartialEq, Eq, Hash,
)]
pub enum WorkoutKind {
    #[strum(serialize = "RUN")]
    Run,
    #[strum(serialize = "WLK")]
    Walk,
    #[strum(serialize = "SWM")]
    Swim,
}

impl WorkoutKind {
    /// Resolves a sensor type code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> TrackerResult<Self> {
        Self::from_str(code).map_err(|_| TrackerError::InvalidWorkoutType(code.to_string()))
    }

    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Run => "Running",
            Self::Walk => "SportsWalking",
            Self::Swim => "Swimming",
        }
    }

    /// Distance in meters covered by a single counted action (step or stroke).
    pub fn action_length_m(&self) -> f64 {
        match self {
            Self::Run | Self::Walk => LEN_STEP,
            Self::Swim => LEN_STROKE,
        }
    }

    /// Positional layout of a raw sensor packet for this kind.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Run => &["action", "duration", "weight"],
            Self::Walk => &["action", "duration", "weight", "height"],
            Self::Swim => &["action", "duration", "weight", "pool_length", "pool_laps"],
        }
    }

    pub fn field_count(&self) -> usize {
        self.field_names().len()
    }
}
