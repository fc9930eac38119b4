//! Reply lines sent back to the host
//!
//! Every reply is one text line: a tag naming the report kind, a colon, and
//! a comma-separated payload.
//!
//! ```text
//! INFO_EXTRUDER:215,180,1\r\n
//! ```

use core::fmt::{self, Write};

use heapless::String;

/// Maximum rendered line length, terminator included
pub const MAX_LINE_LEN: usize = 64;

/// Line terminator appended to every report
pub const LINE_END: &str = "\r\n";

/// A rendered report line
pub type ReportLine = String<MAX_LINE_LEN>;

/// Errors that can occur while rendering a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError {
    /// Rendered line does not fit in [`MAX_LINE_LEN`]
    LineTooLong,
}

/// Report kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportTag {
    Print,
    Extruder,
    Heatbed,
    Reply,
    ListFiles,
}

impl ReportTag {
    /// Tag text as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            ReportTag::Print => "INFO_PRINT",
            ReportTag::Extruder => "INFO_EXTRUDER",
            ReportTag::Heatbed => "INFO_HEATBED",
            ReportTag::Reply => "INFO_REPLY",
            ReportTag::ListFiles => "INFO_LIST_FILES",
        }
    }
}

/// Controller and print job state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PrintState {
    /// Controller state code
    pub state: u8,
    /// Print job state code
    pub job_state: u16,
    /// Job progress in percent
    pub progress: u8,
}

/// Heater state (extruder or heatbed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeaterState {
    /// Current temperature in °C
    pub temperature: i16,
    /// Current output drive
    pub output: i32,
    /// Heater status flags
    pub flags: u8,
}

/// A single report sent to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report<'a> {
    Print(PrintState),
    Extruder(HeaterState),
    Heatbed(HeaterState),
    /// Result code of a command
    Reply(i32),
    /// One entry of a file listing
    ListFile(&'a str),
}

impl<'a> Report<'a> {
    /// Reply carrying a boolean outcome as `1`/`0`
    pub fn reply(success: bool) -> Self {
        Report::Reply(success as i32)
    }

    /// Tag for this report
    pub fn tag(&self) -> ReportTag {
        match self {
            Report::Print(_) => ReportTag::Print,
            Report::Extruder(_) => ReportTag::Extruder,
            Report::Heatbed(_) => ReportTag::Heatbed,
            Report::Reply(_) => ReportTag::Reply,
            Report::ListFile(_) => ReportTag::ListFiles,
        }
    }

    /// Write the payload (everything after the tag)
    pub fn write_payload<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Report::Print(p) => write!(out, "{},{},{}", p.state, p.job_state, p.progress),
            Report::Extruder(h) | Report::Heatbed(h) => {
                write!(out, "{},{},{}", h.temperature, h.output, h.flags)
            }
            Report::Reply(code) => write!(out, "{}", code),
            Report::ListFile(name) => out.write_str(name),
        }
    }

    /// Render the full line, terminator included
    pub fn to_line(&self) -> Result<ReportLine, ReportError> {
        let mut line = ReportLine::new();
        line.push_str(self.tag().as_str())
            .map_err(|_| ReportError::LineTooLong)?;
        line.push(':').map_err(|_| ReportError::LineTooLong)?;
        self.write_payload(&mut line)
            .map_err(|_| ReportError::LineTooLong)?;
        line.push_str(LINE_END)
            .map_err(|_| ReportError::LineTooLong)?;
        Ok(line)
    }
}
