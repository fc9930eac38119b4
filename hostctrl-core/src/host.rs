//! Host control task
//!
//! [`HostCtrl`] owns the framer, mailbox, dispatcher and reporter and is
//! driven by one periodic task:
//!
//! ```text
//! UART ──byte──▶ Framer ──Frame──▶ Mailbox ──▶ Dispatcher ──▶ machine
//!                                                   │
//! tick ──────────────────────────▶ Reporter         └──▶ ReportSink
//! ```
//!
//! Framer and dispatcher run in the same task, so the mailbox hand-over is
//! a plain `&mut` take and needs no locking.

use hostctrl_hal::{OutputPin, UartRx};
use hostctrl_protocol::{Command, FeedStatus, Frame, Framer, Mailbox, ParserState};

use crate::config::HostCtrlConfig;
use crate::dispatcher::{DispatchResult, Dispatcher};
use crate::link::SharedLink;
use crate::reporter::Reporter;
use crate::sink::ReportSink;
use crate::traits::Machine;

/// Link counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Frames completed
    pub frames: u32,
    /// Frame starts dropped because a command was still pending
    pub busy_drops: u32,
    /// Malformed frames abandoned
    pub resyncs: u32,
    /// Frames with an unknown command name
    pub unknown: u32,
}

/// Host command front end
#[derive(Debug, Clone)]
pub struct HostCtrl {
    framer: Framer,
    mailbox: Mailbox,
    dispatcher: Dispatcher,
    reporter: Reporter,
    rx_burst: usize,
    stats: LinkStats,
}

impl HostCtrl {
    /// Create the front end from configuration
    pub fn new(config: &HostCtrlConfig) -> Self {
        Self {
            framer: Framer::new(),
            mailbox: Mailbox::new(),
            dispatcher: Dispatcher::new(config),
            reporter: Reporter::new(config.report_period_ms),
            rx_burst: config.rx_burst.max(1) as usize,
            stats: LinkStats::default(),
        }
    }

    /// Link counters
    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    /// Current framer state
    pub fn parser_state(&self) -> ParserState {
        self.framer.state()
    }

    /// The command dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// One scheduler tick
    ///
    /// Drains up to `rx_burst` bytes from `rx`, dispatching each completed
    /// frame before the next byte is framed, then runs the periodic report.
    pub fn poll<R, M, S, L>(
        &mut self,
        rx: &mut R,
        now_ms: u32,
        machine: &mut M,
        sink: &mut S,
        heartbeat: &mut L,
    ) -> Result<(), R::Error>
    where
        R: UartRx,
        M: Machine,
        S: ReportSink,
        L: OutputPin,
    {
        for _ in 0..self.rx_burst {
            match rx.try_read_byte()? {
                Some(byte) => {
                    self.receive(byte, machine, sink);
                }
                None => break,
            }
        }

        self.reporter.maybe_report(now_ms, machine, sink, heartbeat);
        Ok(())
    }

    /// One scheduler tick for a board that frames in its UART interrupt
    ///
    /// Dispatches the frame waiting in `link`, if any, then runs the
    /// periodic report.
    pub fn poll_link<M, S, L>(
        &mut self,
        link: &SharedLink,
        now_ms: u32,
        machine: &mut M,
        sink: &mut S,
        heartbeat: &mut L,
    ) -> Option<DispatchResult>
    where
        M: Machine,
        S: ReportSink,
        L: OutputPin,
    {
        let result = link
            .try_take()
            .map(|frame| self.dispatch(&frame, machine, sink));
        self.reporter.maybe_report(now_ms, machine, sink, heartbeat);
        result
    }

    /// Frame one byte and dispatch the frame it completes, if any
    pub fn receive<M: Machine, S: ReportSink>(
        &mut self,
        byte: u8,
        machine: &mut M,
        sink: &mut S,
    ) -> Option<DispatchResult> {
        match self.framer.feed(byte, &mut self.mailbox) {
            FeedStatus::Busy => {
                self.stats.busy_drops = self.stats.busy_drops.wrapping_add(1);
            }
            FeedStatus::Resync(_err) => {
                self.stats.resyncs = self.stats.resyncs.wrapping_add(1);
                #[cfg(feature = "defmt")]
                defmt::trace!("Framer resync: {}", _err);
            }
            FeedStatus::Complete => {
                self.stats.frames = self.stats.frames.wrapping_add(1);
            }
            FeedStatus::Ignored | FeedStatus::Pending => {}
        }

        self.dispatch_pending(machine, sink)
    }

    /// Dispatch the frame waiting in the mailbox, if any
    pub fn dispatch_pending<M: Machine, S: ReportSink>(
        &mut self,
        machine: &mut M,
        sink: &mut S,
    ) -> Option<DispatchResult> {
        let frame = self.mailbox.try_take()?;
        Some(self.dispatch(&frame, machine, sink))
    }

    fn dispatch<M: Machine, S: ReportSink>(
        &mut self,
        frame: &Frame,
        machine: &mut M,
        sink: &mut S,
    ) -> DispatchResult {
        let Some(command) = Command::parse(frame) else {
            self.stats.unknown = self.stats.unknown.wrapping_add(1);
            #[cfg(feature = "defmt")]
            defmt::debug!("Unknown command {=[u8]:a}", frame.command());
            return DispatchResult::Ignored;
        };
        self.dispatcher.handle(&command, machine, sink)
    }
}
