use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed summary of one workout, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReport {
    pub kind_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories: f64,
}

impl WorkoutReport {
    /// The one-line summary shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.kind_label, self.duration_hours, self.distance_km, self.avg_speed_kmh, self.calories
        )
    }
}
