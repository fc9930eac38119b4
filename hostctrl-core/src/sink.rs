//! Report sinks
//!
//! The dispatcher and reporter hand every reply to a [`ReportSink`]. A sink
//! never fails the caller: a reply that cannot be delivered is counted and
//! dropped, the controller keeps running.

use heapless::Vec;

use hostctrl_hal::UartTx;
use hostctrl_protocol::{Report, ReportError, ReportLine};

/// Destination for reply lines
pub trait ReportSink {
    /// Deliver one report
    fn report(&mut self, report: &Report<'_>);
}

/// Errors that can occur while delivering a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError<E> {
    /// Report could not be rendered
    Report(ReportError),
    /// Transport refused the bytes
    Transport(E),
}

impl<E> From<ReportError> for SinkError<E> {
    fn from(err: ReportError) -> Self {
        SinkError::Report(err)
    }
}

/// Sink writing lines straight to a UART
pub struct UartSink<T: UartTx> {
    tx: T,
    dropped: u32,
}

impl<T: UartTx> UartSink<T> {
    /// Wrap a UART transmitter
    pub fn new(tx: T) -> Self {
        Self { tx, dropped: 0 }
    }

    /// Render and write one report
    pub fn send(&mut self, report: &Report<'_>) -> Result<(), SinkError<T::Error>> {
        let line = report.to_line()?;
        self.tx
            .write_blocking(line.as_bytes())
            .map_err(SinkError::Transport)
    }

    /// Number of reports that could not be delivered
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Release the transmitter
    pub fn into_inner(self) -> T {
        self.tx
    }
}

impl<T: UartTx> ReportSink for UartSink<T> {
    fn report(&mut self, report: &Report<'_>) {
        if self.send(report).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("Dropped {} report", report.tag());
        }
    }
}

/// Sink collecting rendered lines for later transmission
///
/// Useful when replies are produced in one context and sent from another,
/// and for inspecting replies in tests.
#[derive(Debug, Default)]
pub struct BufferedSink<const N: usize> {
    lines: Vec<ReportLine, N>,
    dropped: u32,
}

impl<const N: usize> BufferedSink<N> {
    /// Create an empty sink
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            dropped: 0,
        }
    }

    /// Lines collected so far
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Number of reports that did not fit or could not be rendered
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Discard collected lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Write all collected lines to a UART and clear the buffer
    ///
    /// Lines are kept if the transport fails.
    pub fn flush<T: UartTx>(&mut self, tx: &mut T) -> Result<(), T::Error> {
        for line in &self.lines {
            tx.write_blocking(line.as_bytes())?;
        }
        tx.flush()?;
        self.lines.clear();
        Ok(())
    }
}

impl<const N: usize> ReportSink for BufferedSink<N> {
    fn report(&mut self, report: &Report<'_>) {
        let stored = report
            .to_line()
            .ok()
            .and_then(|line| self.lines.push(line).ok());
        if stored.is_none() {
            self.dropped = self.dropped.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("Dropped {} report", report.tag());
        }
    }
}
