//! Heater control traits

use hostctrl_protocol::HeaterState;

/// Heaters reachable from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaterId {
    Extruder,
    Heatbed,
}

/// Trait for heater control
///
/// Temperature regulation itself lives behind this trait; the front end
/// only starts, stops or overrides it.
pub trait ThermalControl {
    /// Current temperature, output and flags of a heater
    fn heater_state(&self, heater: HeaterId) -> HeaterState;

    /// Drive the heater output directly
    fn set_output(&mut self, heater: HeaterId, output: i32);

    /// Start closed-loop heating towards `target_c`
    fn start_heating(&mut self, heater: HeaterId, target_c: i32);

    /// Stop heating
    fn stop_heating(&mut self, heater: HeaterId);
}
