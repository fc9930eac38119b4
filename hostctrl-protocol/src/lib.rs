//! Host Command Protocol
//!
//! This crate defines the text protocol spoken between a host (PC, phone
//! app, Bluetooth bridge) and the motion/heating controller over a serial
//! link.
//!
//! # Protocol Overview
//!
//! Requests are framed as:
//! ```text
//! !<CMD>#<PARAM><CR|LF>
//! ```
//!
//! - `CMD`: 1 to 6 uppercase letters (longer names are truncated)
//! - `PARAM`: 0 to 6 bytes, anything but CR/LF (longer values are truncated)
//!
//! Replies are tagged, comma-separated text lines:
//! ```text
//! INFO_PRINT:<state>,<job_state>,<progress>
//! INFO_EXTRUDER:<temperature>,<output>,<flags>
//! INFO_HEATBED:<temperature>,<output>,<flags>
//! INFO_REPLY:<code>
//! INFO_LIST_FILES:<name>
//! ```
//!
//! The link is noisy by assumption. Malformed input is discarded and the
//! framer resynchronizes on the next `!`; nothing about framing is ever
//! reported back to the host.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod frame;
pub mod mailbox;
pub mod numeric;
pub mod report;

pub use command::{Axis, Command, DebugCommand, HeaterRequest, HomeAxes, AXIS_COUNT};
pub use frame::{
    FeedStatus, Frame, Framer, FramingError, ParserState, Token, FRAME_START, MAX_COMMAND_LEN,
    MAX_PARAM_LEN, SEPARATOR,
};
pub use mailbox::Mailbox;
pub use numeric::parse_lenient_i32;
pub use report::{
    HeaterState, PrintState, Report, ReportError, ReportLine, ReportTag, LINE_END, MAX_LINE_LEN,
};
