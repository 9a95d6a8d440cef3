use avr_device::atmega128a::EXINT;

// INT4 (PE4) = UP, INT5 (PE5) = DOWN
const INT4: u8 = 1 << 4;
const INT5: u8 = 1 << 5;

// ISCn1:ISCn0 = 0b10, falling edge
const ISC4_FALLING: u8 = 0b10;
const ISC5_FALLING: u8 = 0b10 << 2;
const ISC45_MASK: u8 = 0x0F;

/// Falling-edge interrupts for the two frequency buttons
pub struct ButtonInterrupts {
    exint: EXINT,
}

impl ButtonInterrupts {
    pub fn new(exint: EXINT) -> Self {
        unsafe {
            exint.eimsk.modify(|r, w| w.bits(r.bits() & !(INT4 | INT5)));
            exint
                .eicrb
                .modify(|r, w| w.bits((r.bits() & !ISC45_MASK) | ISC4_FALLING | ISC5_FALLING));
            // Changing the sense bits can latch a stale flag
            exint.eifr.write(|w| w.bits(INT4 | INT5));
        }
        Self { exint }
    }

    pub fn enable(&mut self) {
        unsafe {
            self.exint.eimsk.modify(|r, w| w.bits(r.bits() | INT4 | INT5));
        }
    }

    pub fn disable(&mut self) {
        unsafe {
            self.exint.eimsk.modify(|r, w| w.bits(r.bits() & !(INT4 | INT5)));
        }
    }
}
