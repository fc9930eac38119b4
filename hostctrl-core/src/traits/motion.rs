//! Motion system trait

use hostctrl_protocol::AXIS_COUNT;

/// Per-axis relative move, in motion system native units (µm)
///
/// Indexed by [`hostctrl_protocol::Axis::index`].
pub type MoveVector = [i32; AXIS_COUNT];

/// Trait for the motion system
pub trait MotionControl {
    /// Energize the motor drivers
    fn motor_power_on(&mut self);

    /// Queue a relative move
    ///
    /// Returns false if the move was rejected.
    fn relative_move(&mut self, delta: &MoveVector, feedrate: u32) -> bool;
}
