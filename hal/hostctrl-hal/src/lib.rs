//! hostctrl Hardware Abstraction Layer
//!
//! This crate defines the few hardware traits the host command front end
//! needs from a board. Chip-specific HALs implement them; the core crates
//! only ever see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  hostctrl-core (HostCtrl task)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hostctrl-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  board support (USART, LED pin, ...)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartRx`], [`uart::UartTx`] - Host serial link
//! - [`gpio::OutputPin`] - Heartbeat indicator

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use uart::{UartRx, UartTx};
