//! Collaborator traits
//!
//! These traits define the interface between the host command front end
//! and the machine subsystems it drives. The front end never implements
//! motion, thermal control or storage itself.

pub mod fan;
pub mod job;
pub mod motion;
pub mod storage;
pub mod thermal;

pub use fan::FanControl;
pub use job::JobControl;
pub use motion::{MotionControl, MoveVector};
pub use storage::{FileList, FileName, FileStore, MAX_FILENAME_LEN, MAX_FILES};
pub use thermal::{HeaterId, ThermalControl};

/// Everything the dispatcher needs from the machine
pub trait Machine: JobControl + MotionControl + ThermalControl + FanControl + FileStore {}

// Blanket implementation
impl<T> Machine for T where T: JobControl + MotionControl + ThermalControl + FanControl + FileStore {}
