//! Variables shared between the interrupt handlers
//!
//! Every field has exactly one writer. Setters are crate-private and only
//! called from the owning component:
//!
//! | field            | writer                 | readers                         |
//! |------------------|------------------------|---------------------------------|
//! | `frequency`      | `InputDebouncer`       | scheduler, multiplexer, monitor |
//! | `sample_index`   | `DutyCycleScheduler`   | -                               |
//! | `pwm_tick_count` | `DutyCycleScheduler`   | -                               |
//! | `active_digit`   | `DisplayMultiplexer`   | -                               |
//! | `debounce`       | `InputDebouncer`       | -                               |
//!
//! All fields are single bytes so loads and stores are single instructions
//! on AVR. No read-modify-write atomics are used. A writer loads, computes
//! and stores; with one writer per field and non-nesting handlers nobody
//! can interleave with that sequence.

use crate::debounce::DebounceState;
use crate::display::Digit;
use crate::frequency::Frequency;
use core::sync::atomic::{AtomicU8, Ordering};

pub struct SharedState {
    frequency: AtomicU8,
    sample_index: AtomicU8,
    pwm_tick_count: AtomicU8,
    active_digit: AtomicU8,
    debounce: AtomicU8,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            frequency: AtomicU8::new(Frequency::INITIAL.hz()),
            sample_index: AtomicU8::new(0),
            pwm_tick_count: AtomicU8::new(0),
            active_digit: AtomicU8::new(Digit::Units as u8),
            debounce: AtomicU8::new(DebounceState::Idle.to_bits()),
        }
    }

    /// Snapshot of the current frequency. Readers outside the debouncer may
    /// see the previous value for up to one of their own ticks.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        Frequency::try_from(self.frequency.load(Ordering::Relaxed)).unwrap_or(Frequency::INITIAL)
    }

    #[inline]
    pub(crate) fn set_frequency(&self, frequency: Frequency) {
        self.frequency.store(frequency.hz(), Ordering::Relaxed);
    }

    #[inline]
    pub fn sample_index(&self) -> u8 {
        self.sample_index.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn set_sample_index(&self, index: u8) {
        self.sample_index.store(index, Ordering::Relaxed);
    }

    #[inline]
    pub fn pwm_tick_count(&self) -> u8 {
        self.pwm_tick_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn set_pwm_tick_count(&self, count: u8) {
        self.pwm_tick_count.store(count, Ordering::Relaxed);
    }

    #[inline]
    pub fn active_digit(&self) -> Digit {
        Digit::from_bits(self.active_digit.load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn set_active_digit(&self, digit: Digit) {
        self.active_digit.store(digit as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn debounce_state(&self) -> DebounceState {
        DebounceState::from_bits(self.debounce.load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn set_debounce_state(&self, state: DebounceState) {
        self.debounce.store(state.to_bits(), Ordering::Relaxed);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::Button;

    #[test]
    fn starts_in_reset_state() {
        let state = SharedState::new();
        assert_eq!(state.frequency(), Frequency::INITIAL);
        assert_eq!(state.sample_index(), 0);
        assert_eq!(state.pwm_tick_count(), 0);
        assert_eq!(state.active_digit(), Digit::Units);
        assert_eq!(state.debounce_state(), DebounceState::Idle);
    }

    #[test]
    fn fields_hold_what_was_stored() {
        let state = SharedState::new();
        state.set_frequency(Frequency::MAX);
        state.set_sample_index(200);
        state.set_pwm_tick_count(15);
        state.set_active_digit(Digit::Tens);
        state.set_debounce_state(DebounceState::Armed(Button::Down));

        assert_eq!(state.frequency(), Frequency::MAX);
        assert_eq!(state.sample_index(), 200);
        assert_eq!(state.pwm_tick_count(), 15);
        assert_eq!(state.active_digit(), Digit::Tens);
        assert_eq!(state.debounce_state(), DebounceState::Armed(Button::Down));
    }
}
