//! Shared test doubles for the host command front end

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use hostctrl_core::sink::ReportSink;
use hostctrl_core::traits::{
    FanControl, FileList, FileName, FileStore, HeaterId, JobControl, MotionControl, MoveVector,
    ThermalControl,
};
use hostctrl_hal::{OutputPin, UartRx};
use hostctrl_protocol::{HeaterState, HomeAxes, PrintState, Report};

/// Side effects observed on the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Stop,
    Start(String),
    Home(HomeAxes),
    PowerOn,
    Move(MoveVector, u32),
    Output(HeaterId, i32),
    Heat(HeaterId, i32),
    Cool(HeaterId),
    Fan(bool),
}

/// Machine double recording every actuator call
#[derive(Debug, Default)]
pub struct MockMachine {
    pub standby: bool,
    pub files: Vec<&'static str>,
    pub calls: Vec<Call>,
    /// Calls to the print and heater state getters
    pub state_reads: Cell<usize>,
}

impl MockMachine {
    pub fn standby() -> Self {
        Self {
            standby: true,
            ..Default::default()
        }
    }

    pub fn printing() -> Self {
        Self::default()
    }
}

impl JobControl for MockMachine {
    fn print_state(&self) -> PrintState {
        self.state_reads.set(self.state_reads.get() + 1);
        PrintState {
            state: if self.standby { 0 } else { 2 },
            job_state: 1,
            progress: 37,
        }
    }

    fn is_standby(&self) -> bool {
        self.standby
    }

    fn stop_printing(&mut self) -> bool {
        self.calls.push(Call::Stop);
        true
    }

    fn start_printing(&mut self, file: &str) -> bool {
        self.calls.push(Call::Start(file.into()));
        true
    }

    fn manually_home(&mut self, axes: HomeAxes) -> bool {
        self.calls.push(Call::Home(axes));
        true
    }
}

impl MotionControl for MockMachine {
    fn motor_power_on(&mut self) {
        self.calls.push(Call::PowerOn);
    }

    fn relative_move(&mut self, delta: &MoveVector, feedrate: u32) -> bool {
        self.calls.push(Call::Move(*delta, feedrate));
        true
    }
}

impl ThermalControl for MockMachine {
    fn heater_state(&self, heater: HeaterId) -> HeaterState {
        self.state_reads.set(self.state_reads.get() + 1);
        match heater {
            HeaterId::Extruder => HeaterState {
                temperature: 205,
                output: 140,
                flags: 1,
            },
            HeaterId::Heatbed => HeaterState {
                temperature: 60,
                output: 90,
                flags: 0,
            },
        }
    }

    fn set_output(&mut self, heater: HeaterId, output: i32) {
        self.calls.push(Call::Output(heater, output));
    }

    fn start_heating(&mut self, heater: HeaterId, target_c: i32) {
        self.calls.push(Call::Heat(heater, target_c));
    }

    fn stop_heating(&mut self, heater: HeaterId) {
        self.calls.push(Call::Cool(heater));
    }
}

impl FanControl for MockMachine {
    fn enable_fan(&mut self, on: bool) {
        self.calls.push(Call::Fan(on));
    }
}

impl FileStore for MockMachine {
    fn list_files(&mut self) -> Option<FileList> {
        let mut list = FileList::new();
        for name in &self.files {
            list.push(FileName::try_from(*name).ok()?).ok()?;
        }
        Some(list)
    }
}

/// Sink collecting rendered lines
#[derive(Debug, Default)]
pub struct LineLog {
    pub lines: Vec<String>,
}

impl ReportSink for LineLog {
    fn report(&mut self, report: &Report<'_>) {
        let line = report.to_line().expect("report fits a line");
        self.lines.push(line.as_str().into());
    }
}

/// UART receiver fed from a byte script
#[derive(Debug, Default)]
pub struct ScriptedRx {
    pub bytes: VecDeque<u8>,
}

impl ScriptedRx {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
        }
    }
}

impl UartRx for ScriptedRx {
    type Error = ();

    fn try_read_byte(&mut self) -> Result<Option<u8>, ()> {
        Ok(self.bytes.pop_front())
    }
}

/// Heartbeat LED double
#[derive(Debug, Default)]
pub struct Led {
    pub high: bool,
    pub toggles: usize,
}

impl OutputPin for Led {
    fn set_high(&mut self) {
        self.high = true;
        self.toggles += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.toggles += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
