//! Part cooling fan

/// Trait for fan control
pub trait FanControl {
    /// Turn the fan on or off
    fn enable_fan(&mut self, on: bool);
}
