//! Utility Module
//!
//! - [`time`]: wall-clock frame timing for hosts

pub mod time;

pub use time::FrameClock;
