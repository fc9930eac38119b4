//! Board-agnostic host command handling
//!
//! This crate turns frames recognized by `hostctrl-protocol` into actions on
//! the machine and reports the results back to the host:
//!
//! - Collaborator traits for the subsystems the front end drives
//! - Command dispatcher with standby gating for motion and heating
//! - Telemetry reporter (on demand and periodic, with heartbeat)
//! - Report sinks rendering tagged reply lines
//! - The polled `HostCtrl` task tying framer, mailbox and dispatcher together
//! - Interrupt-side helpers: critical-section link and SPSC receive queue
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatcher;
pub mod host;
pub mod link;
pub mod reporter;
pub mod rx;
pub mod sink;
pub mod traits;

pub use config::{ConfigError, HostCtrlConfig};
pub use dispatcher::{DispatchResult, Dispatcher};
pub use host::{HostCtrl, LinkStats};
pub use link::SharedLink;
pub use reporter::{Reporter, Snapshot};
pub use rx::{QueuedRx, RxProducer, RxQueue};
pub use sink::{BufferedSink, ReportSink, SinkError, UartSink};
pub use traits::Machine;
