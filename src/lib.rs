pub mod config;
pub mod consts;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod packets;
pub mod report;
pub mod workout;

pub use crate::dispatch::read_package;
pub use crate::error::{TrackerError, TrackerResult};
pub use crate::packets::SensorPacket;
pub use crate::report::WorkoutReport;
pub use crate::workout::{Training, WorkoutKind, WorkoutSample};
