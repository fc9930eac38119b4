//! Command dispatcher
//!
//! Runs one host command to completion against the machine collaborators
//! and emits its reply. Commands with physical side effects (`DBG`, `HOME`)
//! are refused with a `0` reply unless the machine is in standby.

use hostctrl_protocol::{Command, DebugCommand, HeaterRequest, Report};

use crate::config::HostCtrlConfig;
use crate::reporter::Reporter;
use crate::sink::ReportSink;
use crate::traits::{FileList, FileName, HeaterId, Machine, MoveVector};

/// Outcome of dispatching one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchResult {
    /// An `INFO_REPLY` with this code was sent
    Reply(i32),
    /// A state snapshot was sent
    Telemetry,
    /// This many file names were sent
    Listing(usize),
    /// Nothing was done and nothing was sent
    Ignored,
}

impl DispatchResult {
    /// Check if the command was carried out
    pub fn is_success(&self) -> bool {
        match self {
            DispatchResult::Reply(code) => *code != 0,
            DispatchResult::Telemetry | DispatchResult::Listing(_) => true,
            DispatchResult::Ignored => false,
        }
    }
}

/// Host command dispatcher
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Most recent `LIST` result, used to resolve `START` indices
    listing: FileList,
    feedrate: u32,
    move_scale: i32,
}

impl Dispatcher {
    /// Create a dispatcher from configuration
    pub fn new(config: &HostCtrlConfig) -> Self {
        Self {
            listing: FileList::new(),
            feedrate: config.default_feedrate,
            move_scale: config.move_scale,
        }
    }

    /// Files from the most recent listing
    pub fn listing(&self) -> &[FileName] {
        &self.listing
    }

    /// Dispatch a typed command
    pub fn handle<M: Machine, S: ReportSink>(
        &mut self,
        command: &Command,
        machine: &mut M,
        sink: &mut S,
    ) -> DispatchResult {
        #[cfg(feature = "defmt")]
        defmt::debug!("Cmd: {}", command);

        if command.requires_standby() && !machine.is_standby() {
            #[cfg(feature = "defmt")]
            defmt::debug!("{} refused, machine busy", command.name());
            return reply(sink, 0);
        }

        match *command {
            Command::Query => {
                Reporter::report_now(machine).emit(sink);
                DispatchResult::Telemetry
            }
            Command::Stop => {
                let stopped = machine.stop_printing();
                reply(sink, stopped as i32)
            }
            Command::List => self.list(machine, sink),
            Command::Start { index } => self.start(index, machine, sink),
            Command::Debug(debug) => {
                let code = self.debug(debug, machine);
                reply(sink, code)
            }
            Command::Home(axes) => {
                let homed = match axes {
                    Some(axes) => machine.manually_home(axes),
                    None => false,
                };
                reply(sink, homed as i32)
            }
        }
    }

    fn list<M: Machine, S: ReportSink>(&mut self, machine: &mut M, sink: &mut S) -> DispatchResult {
        self.listing = machine.list_files().unwrap_or_default();
        // An empty name ends the listing
        if let Some(end) = self.listing.iter().position(|name| name.is_empty()) {
            self.listing.truncate(end);
        }
        for name in &self.listing {
            sink.report(&Report::ListFile(name.as_str()));
        }
        DispatchResult::Listing(self.listing.len())
    }

    fn start<M: Machine, S: ReportSink>(
        &mut self,
        index: i32,
        machine: &mut M,
        sink: &mut S,
    ) -> DispatchResult {
        let Some(file) = usize::try_from(index)
            .ok()
            .and_then(|i| self.listing.get(i))
        else {
            #[cfg(feature = "defmt")]
            defmt::debug!("START index {} outside listing of {}", index, self.listing.len());
            return DispatchResult::Ignored;
        };
        let started = machine.start_printing(file.as_str());
        reply(sink, started as i32)
    }

    /// Run a `DBG` sub-command, returning the reply code
    fn debug<M: Machine>(&self, command: DebugCommand, machine: &mut M) -> i32 {
        match command {
            DebugCommand::Move { axis, value } => {
                let mut delta: MoveVector = [0; hostctrl_protocol::AXIS_COUNT];
                delta[axis.index()] = value.saturating_mul(self.move_scale);
                machine.motor_power_on();
                machine.relative_move(&delta, self.feedrate) as i32
            }
            DebugCommand::ExtruderOutput(output) => {
                machine.set_output(HeaterId::Extruder, output);
                1
            }
            DebugCommand::ExtruderHeating(request) => {
                heat(machine, HeaterId::Extruder, request);
                1
            }
            DebugCommand::HeatbedOutput(output) => {
                machine.set_output(HeaterId::Heatbed, output);
                1
            }
            DebugCommand::HeatbedHeating(request) => {
                heat(machine, HeaterId::Heatbed, request);
                1
            }
            DebugCommand::Fan(on) => {
                machine.enable_fan(on);
                1
            }
            // Unrecognized sub-commands do nothing yet still report success
            DebugCommand::Unknown => 1,
        }
    }
}

fn heat<M: Machine>(machine: &mut M, heater: HeaterId, request: HeaterRequest) {
    match request {
        HeaterRequest::Heat(target) => machine.start_heating(heater, target),
        HeaterRequest::Stop => machine.stop_heating(heater),
        HeaterRequest::Unchanged => {}
    }
}

fn reply<S: ReportSink>(sink: &mut S, code: i32) -> DispatchResult {
    sink.report(&Report::Reply(code));
    DispatchResult::Reply(code)
}
