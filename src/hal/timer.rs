use crate::debounce::TimerCommand;
use avr_device::atmega128a::{TC0, TC3};

// TCCR0: WGM01 (CTC), CS02:0 = 0b111 (clk/1024)
const TCCR0_CTC: u8 = 0x08;
const TC0_DIV1024: u8 = 0x07;
// TIMSK / TIFR
const OCIE0: u8 = 1 << 1;
const OCF0: u8 = 1 << 1;

// TCCR3B: WGM32 (CTC, TOP = OCR3A), CS32:0 = 0b011 (clk/64)
const TCCR3B_CTC: u8 = 0x08;
const TC3_DIV64: u8 = 0x03;
const TC3_CLOCK_MASK: u8 = 0x07;
// ETIMSK / ETIFR
const OCIE3A: u8 = 1 << 4;
const OCF3A: u8 = 1 << 4;

/// Periodic display multiplex tick on Timer0 compare match
pub struct MultiplexTimer {
    tc0: TC0,
}

impl MultiplexTimer {
    pub fn new(tc0: TC0, compare: u8) -> Self {
        unsafe {
            tc0.tccr0.write(|w| w.bits(TCCR0_CTC));
            tc0.tcnt0.write(|w| w.bits(0));
            tc0.ocr0.write(|w| w.bits(compare));
            tc0.tifr.write(|w| w.bits(OCF0));
            tc0.timsk.modify(|r, w| w.bits(r.bits() | OCIE0));
        }
        Self { tc0 }
    }

    pub fn start(&mut self) {
        unsafe {
            self.tc0.tccr0.write(|w| w.bits(TCCR0_CTC | TC0_DIV1024));
        }
    }
}

/// One-shot debounce window on Timer3 compare match A. The timer only
/// runs between `restart` and the compare interrupt.
pub struct DebounceTimer {
    tc3: TC3,
}

impl DebounceTimer {
    pub fn new(tc3: TC3, compare: u16) -> Self {
        unsafe {
            tc3.tccr3b.write(|w| w.bits(TCCR3B_CTC));
            tc3.tccr3a.write(|w| w.bits(0));
            tc3.tcnt3.write(|w| w.bits(0));
            tc3.ocr3a.write(|w| w.bits(compare));
            tc3.etifr.write(|w| w.bits(OCF3A));
            tc3.etimsk.modify(|r, w| w.bits(r.bits() | OCIE3A));
        }
        Self { tc3 }
    }

    /// Throw away any window in progress and start a fresh one
    pub fn restart(&mut self) {
        unsafe {
            self.tc3.tccr3b.write(|w| w.bits(TCCR3B_CTC));
            self.tc3.tcnt3.write(|w| w.bits(0));
            self.tc3.etifr.write(|w| w.bits(OCF3A));
            self.tc3.tccr3b.write(|w| w.bits(TCCR3B_CTC | TC3_DIV64));
        }
    }

    pub fn stop(&mut self) {
        unsafe {
            self.tc3
                .tccr3b
                .modify(|r, w| w.bits(r.bits() & !TC3_CLOCK_MASK));
        }
    }

    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Restart => self.restart(),
        }
    }
}
