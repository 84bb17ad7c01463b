//! Countdown timer.
//!
//! This module provides functionality to:
//! - Detect timer requests like `5 minute timer`
//! - Hold the countdown state and format it as `HH:MM:SS`
//! - Drive the countdown on a fixed one-second interval

mod clock;
mod parser;
mod runner;
mod state;

pub use clock::{format_clock, parse_clock};
pub use parser::parse_timer_query;
pub use runner::{TIMER_TICK, run_countdown};
pub use state::{Tick, TimerState};
