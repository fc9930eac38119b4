//! Single-slot command mailbox
//!
//! Holds the most recently completed [`Frame`] until the dispatcher takes
//! it. There is no queue: while a frame is waiting, the framer drops any new
//! frame start.

use crate::frame::Frame;

/// Single-slot holding area between framer and dispatcher
#[derive(Debug, Clone, Default)]
pub struct Mailbox {
    frame: Option<Frame>,
}

impl Mailbox {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self { frame: None }
    }

    /// Check if a frame is waiting to be dispatched
    pub fn is_ready(&self) -> bool {
        self.frame.is_some()
    }

    /// Take the waiting frame and clear the slot in one step
    pub fn try_take(&mut self) -> Option<Frame> {
        self.frame.take()
    }

    /// Peek at the waiting frame without consuming it
    pub fn peek(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Store a completed frame
    ///
    /// Only the framer posts, and it never starts a frame while the slot is
    /// occupied, so this does not overwrite an undispatched command.
    pub(crate) fn post(&mut self, frame: Frame) {
        debug_assert!(self.frame.is_none());
        self.frame = Some(frame);
    }

    /// Drop any waiting frame
    pub fn clear(&mut self) {
        self.frame = None;
    }
}
