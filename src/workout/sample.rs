use super::kind::WorkoutKind;
use super::training::Training;
use crate::error::TrackerResult;

/// Readings every workout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Steps for running and walking, strokes for swimming.
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Measurements {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: Measurements,
}

impl Running {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: Measurements::new(action_count, duration_hours, weight_kg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: Measurements,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: Measurements::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: Measurements,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            base: Measurements::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }
}

/// One decoded sensor packet. Formula calls are forwarded to the concrete
/// workout by an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutSample {
    Run(Running),
    Walk(SportsWalking),
    Swim(Swimming),
}

macro_rules! forward {
    ($self:ident, $w:ident => $body:expr) => {
        match $self {
            WorkoutSample::Run($w) => $body,
            WorkoutSample::Walk($w) => $body,
            WorkoutSample::Swim($w) => $body,
        }
    };
}

impl Training for WorkoutSample {
    fn kind(&self) -> WorkoutKind {
        forward!(self, w => w.kind())
    }

    fn measurements(&self) -> &Measurements {
        forward!(self, w => w.measurements())
    }

    fn distance_km(&self) -> f64 {
        forward!(self, w => w.distance_km())
    }

    fn mean_speed_kmh(&self) -> f64 {
        forward!(self, w => w.mean_speed_kmh())
    }

    fn spent_calories(&self) -> f64 {
        forward!(self, w => w.spent_calories())
    }

    fn validate(&self) -> TrackerResult<()> {
        forward!(self, w => w.validate())
    }
}

impl From<Running> for WorkoutSample {
    fn from(w: Running) -> Self {
        Self::Run(w)
    }
}

impl From<SportsWalking> for WorkoutSample {
    fn from(w: SportsWalking) -> Self {
        Self::Walk(w)
    }
}

impl From<Swimming> for WorkoutSample {
    fn from(w: Swimming) -> Self {
        Self::Swim(w)
    }
}
