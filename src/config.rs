//! Configuration constants for the sine PWM firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// PWM carrier rate. 4096 Hz makes the envelope run at exactly 1 Hz for
/// frequency 1 (16 ticks per sample, 256 samples per period).
pub const PWM_CARRIER_HZ: u32 = 4096;

/// Number of carrier periods each sine sample is held for
pub const TICKS_PER_SAMPLE: u8 = 16;

/// Display multiplex tick rate (each digit is lit at half this rate)
pub const MULTIPLEX_TICK_HZ: u32 = 200;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u16 = 20;

/// Envelope frequency bounds in Hz
pub const FREQUENCY_MIN_HZ: u8 = 1;
pub const FREQUENCY_MAX_HZ: u8 = 16;

/// Envelope frequency after reset
pub const FREQUENCY_INITIAL_HZ: u8 = 1;

// Timer prescalers used by the hal layer
pub const MULTIPLEX_PRESCALER: u32 = 1024;
pub const DEBOUNCE_PRESCALER: u32 = 64;

/// Timer1 TOP value (ICR1) for the PWM carrier, no prescaler
pub const fn pwm_top() -> u16 {
    (CPU_FREQ_HZ / PWM_CARRIER_HZ - 1) as u16
}

/// OCR1A value for an 8-bit duty cycle, keeping the duty/256 fraction of
/// the Timer1 period
pub const fn pwm_compare(duty: u8) -> u16 {
    (duty as u32 * (pwm_top() as u32 + 1) / 256) as u16
}

/// Timer0 compare value (OCR0) for the multiplex tick
pub const fn multiplex_compare() -> u8 {
    (CPU_FREQ_HZ / MULTIPLEX_PRESCALER / MULTIPLEX_TICK_HZ - 1) as u8
}

/// Timer3 compare value (OCR3A) for the debounce window
pub const fn debounce_compare() -> u16 {
    (CPU_FREQ_HZ / DEBOUNCE_PRESCALER / 1000 * BUTTON_DEBOUNCE_MS as u32 - 1) as u16
}

/// UBRR value for `UART_BAUD` in normal speed mode
pub const fn uart_ubrr() -> u16 {
    (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16
}

const _: () = assert!(CPU_FREQ_HZ / PWM_CARRIER_HZ - 1 <= u16::MAX as u32);
const _: () = assert!(CPU_FREQ_HZ / PWM_CARRIER_HZ > 256);
const _: () = assert!(CPU_FREQ_HZ / MULTIPLEX_PRESCALER / MULTIPLEX_TICK_HZ - 1 <= u8::MAX as u32);
const _: () = assert!(MULTIPLEX_TICK_HZ / 2 >= 60);
const _: () = assert!(
    CPU_FREQ_HZ / DEBOUNCE_PRESCALER / 1000 * BUTTON_DEBOUNCE_MS as u32 - 1 <= u16::MAX as u32
);
const _: () = assert!(FREQUENCY_MIN_HZ >= 1 && FREQUENCY_MIN_HZ <= FREQUENCY_INITIAL_HZ);
const _: () = assert!(FREQUENCY_INITIAL_HZ <= FREQUENCY_MAX_HZ && FREQUENCY_MAX_HZ <= 99);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_timer_values() {
        assert_eq!(pwm_top(), 3905);
        assert_eq!(multiplex_compare(), 77);
        assert_eq!(debounce_compare(), 4999);
        assert_eq!(uart_ubrr(), 103);
    }

    #[test]
    fn pwm_compare_scales_to_period() {
        assert_eq!(pwm_compare(0), 0);
        assert_eq!(pwm_compare(128), 1953);
        assert!(pwm_compare(2) > 0);
        assert!(pwm_compare(254) < pwm_top());
        assert!(pwm_compare(255) <= pwm_top());
    }

    #[test]
    fn envelope_is_one_hz_at_minimum_frequency() {
        let ticks_per_period = TICKS_PER_SAMPLE as u32 * 256 / FREQUENCY_MIN_HZ as u32;
        assert_eq!(ticks_per_period, PWM_CARRIER_HZ);
    }
}
