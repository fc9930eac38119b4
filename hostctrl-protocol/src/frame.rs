//! Frame recognition for the host command protocol.
//!
//! Frame format:
//! - START (1 byte): `!`
//! - COMMAND (1-6 bytes): uppercase ASCII letters
//! - SEPARATOR (1 byte): `#`
//! - PARAM (0-6 bytes): any byte except CR and LF
//! - TERMINATOR (1 byte): CR or LF
//!
//! The [`Framer`] consumes one byte per call and never allocates. Bytes past
//! a token's capacity are dropped while the frame keeps going, so an
//! over-long token arrives truncated rather than rejected.

use heapless::Vec;

use crate::mailbox::Mailbox;

/// Frame start sentinel
pub const FRAME_START: u8 = b'!';

/// Command/parameter separator
pub const SEPARATOR: u8 = b'#';

/// Usable bytes in the command token
pub const MAX_COMMAND_LEN: usize = 6;

/// Usable bytes in the parameter token
pub const MAX_PARAM_LEN: usize = 6;

/// Fixed-capacity token storage
pub type Token<const N: usize> = Vec<u8, N>;

/// Framing faults
///
/// These never reach the host. They are reported through [`FeedStatus`] so
/// callers can log or count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FramingError {
    /// Byte that cannot appear in a command token
    InvalidCommandByte(u8),
}

/// Result of feeding one byte to the [`Framer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedStatus {
    /// Byte outside of any frame, discarded
    Ignored,
    /// Frame start discarded because the mailbox still holds a frame
    Busy,
    /// Byte accepted, frame still in progress
    Pending,
    /// Malformed frame abandoned, framer back to idle
    Resync(FramingError),
    /// Frame completed and posted to the mailbox
    Complete,
}

/// A complete command frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Command name (uppercase letters)
    pub command: Token<MAX_COMMAND_LEN>,
    /// Raw parameter bytes
    pub param: Token<MAX_PARAM_LEN>,
}

impl Frame {
    /// Build a frame from raw tokens, truncating each to its capacity
    pub fn new(command: &[u8], param: &[u8]) -> Self {
        let mut frame = Self::default();
        for &byte in command.iter().take(MAX_COMMAND_LEN) {
            let _ = frame.command.push(byte);
        }
        for &byte in param.iter().take(MAX_PARAM_LEN) {
            let _ = frame.param.push(byte);
        }
        frame
    }

    /// Command token bytes
    pub fn command(&self) -> &[u8] {
        &self.command
    }

    /// Parameter token bytes
    pub fn param(&self) -> &[u8] {
        &self.param
    }

    /// Command token as text
    ///
    /// Always valid since the framer only accepts `A`-`Z` there.
    pub fn command_str(&self) -> &str {
        core::str::from_utf8(&self.command).unwrap_or("")
    }

    /// Parameter token as text, if it is valid UTF-8
    pub fn param_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.param).ok()
    }
}

/// Framer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParserState {
    /// Waiting for `!`
    #[default]
    Idle,
    /// Collecting command letters until `#`
    InCommand,
    /// Collecting parameter bytes until CR/LF
    InParam,
}

/// Byte-driven frame recognizer
#[derive(Debug, Clone, Default)]
pub struct Framer {
    state: ParserState,
    command: Token<MAX_COMMAND_LEN>,
    param: Token<MAX_PARAM_LEN>,
}

impl Framer {
    /// Create a new framer in the idle state
    pub const fn new() -> Self {
        Self {
            state: ParserState::Idle,
            command: Vec::new(),
            param: Vec::new(),
        }
    }

    /// Current parser state
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Abandon any partial frame
    pub fn reset(&mut self) {
        self.state = ParserState::Idle;
        self.command.clear();
        self.param.clear();
    }

    /// Feed a single byte
    ///
    /// A completed frame is posted to `mailbox`. A frame start is only
    /// honoured while the mailbox is empty, so at most one command is ever
    /// waiting for dispatch.
    pub fn feed(&mut self, byte: u8, mailbox: &mut Mailbox) -> FeedStatus {
        match self.state {
            ParserState::Idle => {
                if byte != FRAME_START {
                    return FeedStatus::Ignored;
                }
                if mailbox.is_ready() {
                    return FeedStatus::Busy;
                }
                self.command.clear();
                self.param.clear();
                self.state = ParserState::InCommand;
                FeedStatus::Pending
            }
            ParserState::InCommand => match byte {
                b'A'..=b'Z' => {
                    // Overflow truncates; the frame stays alive
                    let _ = self.command.push(byte);
                    FeedStatus::Pending
                }
                SEPARATOR => {
                    self.state = ParserState::InParam;
                    FeedStatus::Pending
                }
                _ => {
                    self.reset();
                    FeedStatus::Resync(FramingError::InvalidCommandByte(byte))
                }
            },
            ParserState::InParam => match byte {
                b'\r' | b'\n' => {
                    mailbox.post(Frame {
                        command: core::mem::take(&mut self.command),
                        param: core::mem::take(&mut self.param),
                    });
                    self.state = ParserState::Idle;
                    FeedStatus::Complete
                }
                _ => {
                    let _ = self.param.push(byte);
                    FeedStatus::Pending
                }
            },
        }
    }

    /// Feed multiple bytes
    ///
    /// Returns true if at least one frame completed. Every byte is consumed;
    /// frames arriving while the mailbox is occupied are dropped.
    pub fn feed_bytes(&mut self, bytes: &[u8], mailbox: &mut Mailbox) -> bool {
        let mut completed = false;
        for &byte in bytes {
            if self.feed(byte, mailbox) == FeedStatus::Complete {
                completed = true;
            }
        }
        completed
    }
}
