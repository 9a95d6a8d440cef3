//! LED PWM on Timer1 channel A (OC1A / PB5)
//!
//! Fast PWM with TOP = ICR1 (mode 14) and no prescaler, so the carrier rate
//! is set exactly by `config::PWM_CARRIER_HZ`. The overflow interrupt fires
//! once per carrier period and drives the duty cycle scheduler.

use super::gpio::board::LedOutput;
use crate::config::{pwm_compare, pwm_top};
use avr_device::atmega128a::TC1;

// TCCR1A: COM1A1 (non-inverting OC1A), WGM11
const TCCR1A_FAST_PWM_OC1A: u8 = 0x82;
// TCCR1B: WGM13 | WGM12
const TCCR1B_FAST_PWM_ICR: u8 = 0x18;
const CS_DIRECT: u8 = 0x01;
// TIMSK / TIFR
const TOIE1: u8 = 1 << 2;
const TOV1: u8 = 1 << 2;

pub struct LedPwm {
    tc1: TC1,
    _pin: LedOutput,
}

impl LedPwm {
    /// Configures the carrier and preloads `duty`. The timer starts
    /// running immediately; the overflow interrupt stays off until
    /// `enable_carrier_interrupt`.
    pub fn new(tc1: TC1, pin: LedOutput, duty: u8) -> Self {
        unsafe {
            tc1.tccr1b.write(|w| w.bits(0));
            tc1.tcnt1.write(|w| w.bits(0));
            tc1.icr1.write(|w| w.bits(pwm_top()));
            tc1.ocr1a.write(|w| w.bits(pwm_compare(duty)));
            tc1.tccr1a.write(|w| w.bits(TCCR1A_FAST_PWM_OC1A));
            tc1.tccr1b.write(|w| w.bits(TCCR1B_FAST_PWM_ICR | CS_DIRECT));
        }
        Self { tc1, _pin: pin }
    }

    /// Set duty cycle out of 256
    #[inline]
    pub fn set_duty(&mut self, duty: u8) {
        unsafe {
            self.tc1.ocr1a.write(|w| w.bits(pwm_compare(duty)));
        }
    }

    pub fn enable_carrier_interrupt(&mut self) {
        unsafe {
            self.tc1.tifr.write(|w| w.bits(TOV1));
            self.tc1.timsk.modify(|r, w| w.bits(r.bits() | TOIE1));
        }
    }
}
