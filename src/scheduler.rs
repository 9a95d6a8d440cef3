//! Duty cycle scheduler, driven by the PWM carrier period interrupt
//!
//! Each sine sample is held for `TICKS_PER_SAMPLE` carrier periods, then the
//! phase index jumps ahead by `frequency` samples. One envelope period thus
//! takes `TICKS_PER_SAMPLE * 256 / frequency` carrier periods.

use crate::config::TICKS_PER_SAMPLE;
use crate::sine::SINE_TABLE;
use crate::state::SharedState;

pub struct DutyCycleScheduler<'a> {
    state: &'a SharedState,
}

impl<'a> DutyCycleScheduler<'a> {
    pub const fn new(state: &'a SharedState) -> Self {
        Self { state }
    }

    /// Called once per carrier period. Returns the duty cycle to load into
    /// the compare register when the phase advanced on this tick.
    pub fn on_carrier_period(&self) -> Option<u8> {
        let ticks = self.state.pwm_tick_count() + 1;
        if ticks < TICKS_PER_SAMPLE {
            self.state.set_pwm_tick_count(ticks);
            return None;
        }
        self.state.set_pwm_tick_count(0);

        let step = self.state.frequency().hz();
        let index = self.state.sample_index().wrapping_add(step);
        self.state.set_sample_index(index);

        Some(SINE_TABLE.sample_at(index))
    }

    /// Duty cycle for the current phase, used to preload the compare
    /// register before the carrier starts
    pub fn duty_cycle(&self) -> u8 {
        SINE_TABLE.sample_at(self.state.sample_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Frequency;

    fn run(scheduler: &DutyCycleScheduler, ticks: u32) -> Option<u8> {
        let mut last = None;
        for _ in 0..ticks {
            if let Some(duty) = scheduler.on_carrier_period() {
                last = Some(duty);
            }
        }
        last
    }

    #[test]
    fn first_sample_after_sixteen_ticks() {
        let state = SharedState::new();
        let scheduler = DutyCycleScheduler::new(&state);

        assert_eq!(run(&scheduler, 15), None);
        assert_eq!(state.sample_index(), 0);
        assert_eq!(state.pwm_tick_count(), 15);

        assert_eq!(scheduler.on_carrier_period(), Some(SINE_TABLE.sample_at(1)));
        assert_eq!(state.sample_index(), 1);
        assert_eq!(state.pwm_tick_count(), 0);
    }

    #[test]
    fn one_advance_per_sixteen_ticks() {
        let state = SharedState::new();
        let scheduler = DutyCycleScheduler::new(&state);

        let published = (0..16 * 10)
            .filter_map(|_| scheduler.on_carrier_period())
            .count();
        assert_eq!(published, 10);
        assert_eq!(state.sample_index(), 10);
    }

    #[test]
    fn full_envelope_returns_to_start() {
        for hz in [1u8, 2, 4, 8, 16] {
            let state = SharedState::new();
            state.set_frequency(Frequency::try_from(hz).unwrap());
            state.set_sample_index(37);
            let scheduler = DutyCycleScheduler::new(&state);

            let period = TICKS_PER_SAMPLE as u32 * 256 / hz as u32;
            run(&scheduler, period);
            assert_eq!(state.sample_index(), 37, "frequency {}", hz);
            assert_eq!(state.pwm_tick_count(), 0);
        }
    }

    #[test]
    fn highest_frequency_envelope_is_256_ticks() {
        let state = SharedState::new();
        state.set_frequency(Frequency::MAX);
        let scheduler = DutyCycleScheduler::new(&state);

        run(&scheduler, 255);
        assert_ne!(state.sample_index(), 0);
        run(&scheduler, 1);
        assert_eq!(state.sample_index(), 0);
    }

    #[test]
    fn phase_step_follows_frequency_change() {
        let state = SharedState::new();
        let scheduler = DutyCycleScheduler::new(&state);

        run(&scheduler, 16);
        assert_eq!(state.sample_index(), 1);

        state.set_frequency(Frequency::try_from(5).unwrap());
        run(&scheduler, 16);
        assert_eq!(state.sample_index(), 6);
    }

    #[test]
    fn index_wraps_modulo_256() {
        let state = SharedState::new();
        state.set_frequency(Frequency::MAX);
        state.set_sample_index(250);
        let scheduler = DutyCycleScheduler::new(&state);

        assert_eq!(run(&scheduler, 16), Some(SINE_TABLE.sample_at(10)));
        assert_eq!(state.sample_index(), 10);
    }

    #[test]
    fn preload_uses_current_phase() {
        let state = SharedState::new();
        let scheduler = DutyCycleScheduler::new(&state);
        assert_eq!(scheduler.duty_cycle(), 127);
    }
}
