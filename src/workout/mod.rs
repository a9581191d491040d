pub mod kind;
pub mod sample;
pub mod training;

pub use self::kind::WorkoutKind;
pub use self::sample::{Measurements, Running, SportsWalking, Swimming, WorkoutSample};
pub use self::training::Training;
