//! Configuration types
//!
//! Board-agnostic configuration structures, storable as postcard binary data.

pub mod types;

pub use types::*;
