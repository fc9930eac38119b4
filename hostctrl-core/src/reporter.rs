//! Telemetry reporter
//!
//! Produces the same three-line state snapshot whether it is asked for by a
//! `QRY` command or triggered by the periodic tick.

use hostctrl_hal::OutputPin;
use hostctrl_protocol::{HeaterState, PrintState, Report};

use crate::sink::ReportSink;
use crate::traits::{HeaterId, JobControl, ThermalControl};

/// Controller, extruder and heatbed state at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub print: PrintState,
    pub extruder: HeaterState,
    pub heatbed: HeaterState,
}

impl Snapshot {
    /// Reports in wire order
    pub fn reports(&self) -> [Report<'static>; 3] {
        [
            Report::Print(self.print),
            Report::Extruder(self.extruder),
            Report::Heatbed(self.heatbed),
        ]
    }

    /// Send all three reports
    pub fn emit<S: ReportSink>(&self, sink: &mut S) {
        for report in &self.reports() {
            sink.report(report);
        }
    }
}

/// Periodic state reporter with heartbeat
#[derive(Debug, Clone)]
pub struct Reporter {
    period_ms: u32,
    last_report_ms: u32,
}

impl Reporter {
    /// Create a reporter firing every `period_ms`
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_report_ms: 0,
        }
    }

    /// Reporting period
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Read the three state getters
    ///
    /// Used for both `QRY` and the periodic report.
    pub fn report_now<M: JobControl + ThermalControl>(machine: &M) -> Snapshot {
        Snapshot {
            print: machine.print_state(),
            extruder: machine.heater_state(HeaterId::Extruder),
            heatbed: machine.heater_state(HeaterId::Heatbed),
        }
    }

    /// Report and toggle the heartbeat once the period has elapsed
    ///
    /// `now_ms` is a free-running millisecond counter; the comparison is
    /// wrap-around safe. Returns true if a report was sent.
    pub fn maybe_report<M, S, L>(
        &mut self,
        now_ms: u32,
        machine: &M,
        sink: &mut S,
        heartbeat: &mut L,
    ) -> bool
    where
        M: JobControl + ThermalControl,
        S: ReportSink,
        L: OutputPin,
    {
        if now_ms.wrapping_sub(self.last_report_ms) <= self.period_ms {
            return false;
        }
        self.last_report_ms = now_ms;

        Self::report_now(machine).emit(sink);
        heartbeat.toggle();
        #[cfg(feature = "defmt")]
        defmt::trace!("Heartbeat at {} ms", now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferedSink;
    use hostctrl_protocol::HomeAxes;

    struct Board {
        standby: bool,
    }

    impl JobControl for Board {
        fn print_state(&self) -> PrintState {
            PrintState {
                state: 1,
                job_state: 2,
                progress: 50,
            }
        }
        fn is_standby(&self) -> bool {
            self.standby
        }
        fn stop_printing(&mut self) -> bool {
            true
        }
        fn start_printing(&mut self, _file: &str) -> bool {
            true
        }
        fn manually_home(&mut self, _axes: HomeAxes) -> bool {
            true
        }
    }

    impl ThermalControl for Board {
        fn heater_state(&self, heater: HeaterId) -> HeaterState {
            match heater {
                HeaterId::Extruder => HeaterState {
                    temperature: 210,
                    output: 128,
                    flags: 1,
                },
                HeaterId::Heatbed => HeaterState {
                    temperature: 60,
                    output: 255,
                    flags: 0,
                },
            }
        }
        fn set_output(&mut self, _heater: HeaterId, _output: i32) {}
        fn start_heating(&mut self, _heater: HeaterId, _target_c: i32) {}
        fn stop_heating(&mut self, _heater: HeaterId) {}
    }

    #[derive(Default)]
    struct Led {
        high: bool,
    }

    impl OutputPin for Led {
        fn set_high(&mut self) {
            self.high = true;
        }
        fn set_low(&mut self) {
            self.high = false;
        }
        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_snapshot_lines() {
        let board = Board { standby: true };
        let mut sink = BufferedSink::<4>::new();
        Reporter::report_now(&board).emit(&mut sink);

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_str(), "INFO_PRINT:1,2,50\r\n");
        assert_eq!(lines[1].as_str(), "INFO_EXTRUDER:210,128,1\r\n");
        assert_eq!(lines[2].as_str(), "INFO_HEATBED:60,255,0\r\n");
    }

    #[test]
    fn test_waits_for_period() {
        let board = Board { standby: false };
        let mut sink = BufferedSink::<8>::new();
        let mut led = Led::default();
        let mut reporter = Reporter::new(1000);

        assert!(!reporter.maybe_report(500, &board, &mut sink, &mut led));
        assert!(!reporter.maybe_report(1000, &board, &mut sink, &mut led));
        assert!(sink.lines().is_empty());

        assert!(reporter.maybe_report(1001, &board, &mut sink, &mut led));
        assert_eq!(sink.lines().len(), 3);
        assert!(led.is_set_high());

        assert!(!reporter.maybe_report(1500, &board, &mut sink, &mut led));
        assert!(reporter.maybe_report(2002, &board, &mut sink, &mut led));
        assert!(led.is_set_low());
    }

    #[test]
    fn test_tick_wraparound() {
        let board = Board { standby: true };
        let mut sink = BufferedSink::<8>::new();
        let mut led = Led::default();
        let mut reporter = Reporter::new(100);

        assert!(reporter.maybe_report(u32::MAX - 10, &board, &mut sink, &mut led));
        // 50 ticks later, across the wrap
        assert!(!reporter.maybe_report(39, &board, &mut sink, &mut led));
        // 111 ticks later
        assert!(reporter.maybe_report(100, &board, &mut sink, &mut led));
    }

    #[test]
    fn test_periodic_report_matches_query() {
        let board = Board { standby: true };
        let mut periodic = BufferedSink::<4>::new();
        let mut query = BufferedSink::<4>::new();
        let mut led = Led::default();

        assert!(Reporter::new(10).maybe_report(11, &board, &mut periodic, &mut led));
        Reporter::report_now(&board).emit(&mut query);
        assert_eq!(periodic.lines(), query.lines());
    }
}
