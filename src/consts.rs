/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour. Calorie formulas work on minutes of activity.
pub const MIN_IN_H: f64 = 60.0;

/// Stride length (m) of one step while running or walking.
pub const LEN_STEP: f64 = 0.65;

/// Distance (m) covered by one swimming stroke.
pub const LEN_STROKE: f64 = 1.38;

// Running
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

// Sports walking
pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
pub const WALK_SPEED_EXPONENT: i32 = 2;

// Swimming
pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;
