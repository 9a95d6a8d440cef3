//! Sine-envelope LED PWM for the ATmega128
//!
//! Three interrupt domains share the state in [`state::SharedState`]:
//! the PWM carrier tick advances the sine phase ([`scheduler`]), a timer
//! tick multiplexes the two-digit frequency display ([`display`]), and the
//! button edge and debounce interrupts adjust the frequency ([`debounce`]).
//! Everything except [`hal`] is plain logic and runs on the host too.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod debounce;
pub mod display;
pub mod frequency;
pub mod monitor;
pub mod scheduler;
pub mod sine;
pub mod state;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use debounce::{Button, DebounceState, InputDebouncer, TimerCommand};
pub use display::{
    segment_pattern, Digit, DigitFrame, DisplayMultiplexer, SegmentBus, SegmentDisplay,
};
pub use frequency::{Frequency, InvalidFrequency};
pub use monitor::FrequencyMonitor;
pub use scheduler::DutyCycleScheduler;
pub use sine::SINE_TABLE;
pub use state::SharedState;
