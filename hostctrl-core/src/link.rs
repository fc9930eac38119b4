//! Interrupt-safe framer and mailbox
//!
//! For boards that run the framer from the UART interrupt. Framer and
//! mailbox share one critical-section mutex, so the interrupt's "is the
//! mailbox ready" check and the task's take-and-clear never interleave.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use hostctrl_protocol::{FeedStatus, Frame, Framer, Mailbox, ParserState};

struct LinkState {
    framer: Framer,
    mailbox: Mailbox,
}

/// Framer and mailbox shared between interrupt and task
///
/// Intended to live in a `static`:
///
/// ```ignore
/// static HOST_LINK: SharedLink = SharedLink::new();
///
/// // UART RX interrupt
/// HOST_LINK.feed(byte);
///
/// // polled task
/// if let Some(frame) = HOST_LINK.try_take() { /* dispatch */ }
/// ```
pub struct SharedLink {
    state: Mutex<CriticalSectionRawMutex, RefCell<LinkState>>,
}

impl Default for SharedLink {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedLink {
    /// Create an idle link with an empty mailbox
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(LinkState {
                framer: Framer::new(),
                mailbox: Mailbox::new(),
            })),
        }
    }

    /// Feed one received byte (interrupt side)
    pub fn feed(&self, byte: u8) -> FeedStatus {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            let LinkState { framer, mailbox } = &mut *state;
            framer.feed(byte, mailbox)
        })
    }

    /// Take the pending frame and clear the mailbox (task side)
    pub fn try_take(&self) -> Option<Frame> {
        self.state.lock(|state| state.borrow_mut().mailbox.try_take())
    }

    /// Check if a frame is waiting
    pub fn is_ready(&self) -> bool {
        self.state.lock(|state| state.borrow().mailbox.is_ready())
    }

    /// Current framer state
    pub fn parser_state(&self) -> ParserState {
        self.state.lock(|state| state.borrow().framer.state())
    }
}
