//! Configuration type definitions
//!
//! With the `serde` feature the configuration can be stored in flash as
//! postcard-serialized binary data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default interval between periodic state reports
pub const DEFAULT_REPORT_PERIOD_MS: u32 = 1000;

/// Default feedrate for manual moves (mm/min)
pub const DEFAULT_FEEDRATE: u32 = 3000;

/// Host move values are millimetres, the motion system takes micrometres
pub const MOVE_SCALE: i32 = 1000;

/// Default maximum bytes drained from the UART per poll
pub const DEFAULT_RX_BURST: u8 = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Report period must be non-zero
    InvalidReportPeriod,
    /// Move scale must be non-zero
    InvalidMoveScale,
    /// Receive burst must be non-zero
    InvalidRxBurst,
    /// Stored configuration could not be decoded
    Decode,
    /// Buffer too small to encode the configuration
    Encode,
}

/// Host command front end configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HostCtrlConfig {
    /// Interval between periodic state reports (ms)
    pub report_period_ms: u32,
    /// Feedrate used for `DBG` moves
    pub default_feedrate: u32,
    /// Multiplier from host move units to motion units
    pub move_scale: i32,
    /// Maximum bytes taken from the UART per poll
    pub rx_burst: u8,
}

impl Default for HostCtrlConfig {
    fn default() -> Self {
        Self {
            report_period_ms: DEFAULT_REPORT_PERIOD_MS,
            default_feedrate: DEFAULT_FEEDRATE,
            move_scale: MOVE_SCALE,
            rx_burst: DEFAULT_RX_BURST,
        }
    }
}

impl HostCtrlConfig {
    /// Check the configuration for values the front end cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_period_ms == 0 {
            return Err(ConfigError::InvalidReportPeriod);
        }
        if self.move_scale == 0 {
            return Err(ConfigError::InvalidMoveScale);
        }
        if self.rx_burst == 0 {
            return Err(ConfigError::InvalidRxBurst);
        }
        Ok(())
    }

    /// Encode into `buf`, returning the used part
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Decode and validate a stored configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }

    /// Decode a stored configuration, falling back to defaults
    #[cfg(feature = "serde")]
    pub fn from_bytes_or_default(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes).unwrap_or_default()
    }
}
