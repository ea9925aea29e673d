//! Closed-form input signals for tracer-kinetic models
//!
//! - [`influx_step`]: flux of contrast agent into the circulation during a
//!   constant-rate injection
//! - [`aif_parker`]: the Parker population arterial input function

pub mod aif;
pub mod influx;
mod samples;

pub use aif::{aif_parker, parker_concentration};
pub use influx::{influx_step, injection_duration};
pub use samples::Samples;
