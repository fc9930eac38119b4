//! Typed host commands
//!
//! A completed [`Frame`] is turned into a [`Command`] once, here, so the
//! dispatcher works on a closed set of variants instead of raw characters.
//!
//! | Name    | Parameter                       |
//! |---------|---------------------------------|
//! | `QRY`   | none                            |
//! | `STOP`  | none                            |
//! | `LIST`  | none                            |
//! | `START` | file index from the last `LIST` |
//! | `DBG`   | sub-command letter + value      |
//! | `HOME`  | `XY` or `Z`                     |

use crate::frame::Frame;
use crate::numeric::parse_lenient_i32;

/// Number of axes addressable by a debug move
pub const AXIS_COUNT: usize = 4;

/// Motion axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
    /// Extruder drive
    A,
}

impl Axis {
    /// Parse an axis from its wire letter
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'X' => Some(Axis::X),
            b'Y' => Some(Axis::Y),
            b'Z' => Some(Axis::Z),
            b'A' => Some(Axis::A),
            _ => None,
        }
    }

    /// Position of this axis in a move vector
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::A => 3,
        }
    }
}

/// Axis groups that can be homed from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomeAxes {
    /// X and Y together
    Xy,
    /// Z alone
    Z,
}

/// What to do with a heater's closed-loop control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaterRequest {
    /// Start heating towards a target temperature
    Heat(i32),
    /// Stop heating
    Stop,
    /// No value given, leave the heater alone
    Unchanged,
}

impl HeaterRequest {
    fn parse(value: &[u8]) -> Self {
        match value.first() {
            None => HeaterRequest::Unchanged,
            Some(b'-') => HeaterRequest::Stop,
            Some(_) => HeaterRequest::Heat(parse_lenient_i32(value)),
        }
    }
}

/// `DBG` sub-commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebugCommand {
    /// Relative move of one axis, in millimetres
    Move { axis: Axis, value: i32 },
    /// Raw extruder heater output (`e`)
    ExtruderOutput(i32),
    /// Extruder heating control (`E`)
    ExtruderHeating(HeaterRequest),
    /// Raw heatbed output (`h`)
    HeatbedOutput(i32),
    /// Heatbed heating control (`H`)
    HeatbedHeating(HeaterRequest),
    /// Fan on/off (`f1`/`f0`)
    Fan(bool),
    /// Unrecognized letter or empty parameter
    Unknown,
}

impl DebugCommand {
    /// Parse a `DBG` parameter
    pub fn parse(param: &[u8]) -> Self {
        let Some((&letter, value)) = param.split_first() else {
            return DebugCommand::Unknown;
        };

        if let Some(axis) = Axis::from_byte(letter) {
            return DebugCommand::Move {
                axis,
                value: parse_lenient_i32(value),
            };
        }

        match letter {
            b'e' => DebugCommand::ExtruderOutput(parse_lenient_i32(value)),
            b'E' => DebugCommand::ExtruderHeating(HeaterRequest::parse(value)),
            b'h' => DebugCommand::HeatbedOutput(parse_lenient_i32(value)),
            b'H' => DebugCommand::HeatbedHeating(HeaterRequest::parse(value)),
            b'f' => DebugCommand::Fan(value.first() == Some(&b'1')),
            _ => DebugCommand::Unknown,
        }
    }
}

/// Commands accepted from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Report system, extruder and heatbed state
    Query,
    /// Stop the running print
    Stop,
    /// List printable files
    List,
    /// Start printing a file from the last listing
    Start { index: i32 },
    /// Manual machine control
    Debug(DebugCommand),
    /// Home an axis group; `None` for an unrecognized group
    Home(Option<HomeAxes>),
}

impl Command {
    /// Parse a command from a completed frame
    ///
    /// Returns `None` for unknown command names.
    pub fn parse(frame: &Frame) -> Option<Self> {
        let param = frame.param();
        let command = match frame.command() {
            b"QRY" => Command::Query,
            b"STOP" => Command::Stop,
            b"LIST" => Command::List,
            b"START" => Command::Start {
                index: parse_lenient_i32(param),
            },
            b"DBG" => Command::Debug(DebugCommand::parse(param)),
            b"HOME" => Command::Home(match param {
                b"XY" => Some(HomeAxes::Xy),
                b"Z" => Some(HomeAxes::Z),
                _ => None,
            }),
            _ => return None,
        };
        Some(command)
    }

    /// Wire name of this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Query => "QRY",
            Command::Stop => "STOP",
            Command::List => "LIST",
            Command::Start { .. } => "START",
            Command::Debug(_) => "DBG",
            Command::Home(_) => "HOME",
        }
    }

    /// Check if this command may only run while the machine is in standby
    pub fn requires_standby(&self) -> bool {
        matches!(self, Command::Debug(_) | Command::Home(_))
    }
}
