//! Print job and controller state

use hostctrl_protocol::{HomeAxes, PrintState};

/// Trait for the print job controller
pub trait JobControl {
    /// Current controller state, job state and progress
    fn print_state(&self) -> PrintState;

    /// Check if the machine is idle and may accept manual commands
    ///
    /// Manual moves, heating and homing are refused unless this is true.
    fn is_standby(&self) -> bool;

    /// Request the running print to stop
    fn stop_printing(&mut self) -> bool;

    /// Start printing the named file
    fn start_printing(&mut self, file: &str) -> bool;

    /// Home the given axis group
    fn manually_home(&mut self, axes: HomeAxes) -> bool;
}
