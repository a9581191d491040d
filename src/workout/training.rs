use super::kind::WorkoutKind;
use super::sample::{Measurements, Running, SportsWalking, Swimming};
use crate::consts::*;
use crate::error::{TrackerError, TrackerResult};
use crate::report::WorkoutReport;

/// Formulas every workout has to provide.
///
/// The three calculations are required methods, so a new workout kind does not
/// compile until it supplies all of them. Implementations must stay pure: the
/// same readings always give the same numbers.
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    fn measurements(&self) -> &Measurements;

    /// Covered distance in kilometers.
    fn distance_km(&self) -> f64;

    /// Average speed in km/h.
    fn mean_speed_kmh(&self) -> f64;

    /// Spent energy in kilocalories.
    fn spent_calories(&self) -> f64;

    /// Rejects readings the formulas would divide by zero on.
    fn validate(&self) -> TrackerResult<()> {
        check_duration(self.kind(), self.measurements())
    }

    fn summarize(&self) -> TrackerResult<WorkoutReport> {
        self.validate()?;
        Ok(WorkoutReport {
            kind_label: self.kind().label().to_string(),
            duration_hours: self.measurements().duration_hours,
            distance_km: self.distance_km(),
            avg_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        })
    }
}

fn check_duration(kind: WorkoutKind, m: &Measurements) -> TrackerResult<()> {
    if !m.duration_hours.is_finite() || m.duration_hours <= 0.0 {
        return Err(TrackerError::InvalidMeasurement(format!(
            "{} duration must be a positive number of hours, got {}",
            kind.label(),
            m.duration_hours
        )));
    }
    Ok(())
}

fn action_distance_km(kind: WorkoutKind, m: &Measurements) -> f64 {
    m.action_count as f64 * kind.action_length_m() / M_IN_KM
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Run
    }

    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn distance_km(&self) -> f64 {
        action_distance_km(self.kind(), &self.base)
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        let minutes = self.base.duration_hours * MIN_IN_H;
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * self.base.weight_kg
            / M_IN_KM
            * minutes
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walk
    }

    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn distance_km(&self) -> f64 {
        action_distance_km(self.kind(), &self.base)
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        let minutes = self.base.duration_hours * MIN_IN_H;
        // Floor of speed^2 / height, kept as the tracker firmware computes it.
        let speed_term = (self.mean_speed_kmh().powi(WALK_SPEED_EXPONENT) / self.height_cm).floor();
        (WALK_WEIGHT_MULTIPLIER * self.base.weight_kg
            + speed_term * WALK_SPEED_HEIGHT_MULTIPLIER * self.height_cm)
            * minutes
    }

    fn validate(&self) -> TrackerResult<()> {
        check_duration(self.kind(), &self.base)?;
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(TrackerError::InvalidMeasurement(format!(
                "{} height must be a positive number of centimeters, got {}",
                self.kind().label(),
                self.height_cm
            )));
        }
        Ok(())
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swim
    }

    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn distance_km(&self) -> f64 {
        action_distance_km(self.kind(), &self.base)
    }

    /// Swim speed comes from pool geometry, not from the stroke count.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps as f64 / M_IN_KM / self.base.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.base.weight_kg
    }
}
