//! Pomodoro countdown.
//!
//! [`Countdown`] is a plain state machine advanced by [`Countdown::tick`]; it
//! knows nothing about wall-clock time. [`Ticker`] supplies the one-second
//! beat. Keeping the two apart lets the state machine be tested tick by tick.

pub mod countdown;
pub mod ticker;

pub use countdown::{Countdown, Phase, TickOutcome, Transition};
pub use ticker::Ticker;
