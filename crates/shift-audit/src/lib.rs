//! Timecard scheduling audit.
//!
//! Reads clock-in/clock-out rows and flags employees whose shifts break the
//! configured scheduling thresholds. See [`workflows::timecard`].

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
