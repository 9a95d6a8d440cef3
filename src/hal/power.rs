use avr_device::atmega128a::CPU;

// MCUCR
const SE: u8 = 1 << 5;
const SM_MASK: u8 = 0x1C;

pub struct Power {
    cpu: CPU,
}

impl Power {
    pub fn new(cpu: CPU) -> Self {
        Self { cpu }
    }

    /// Stop the CPU clock until the next interrupt. Timers, external
    /// interrupts and the UART keep running in idle mode.
    pub fn enter_idle_mode(&mut self) {
        unsafe {
            self.cpu
                .mcucr
                .modify(|r, w| w.bits((r.bits() & !SM_MASK) | SE));
        }
        avr_device::asm::sleep();
        unsafe {
            self.cpu.mcucr.modify(|r, w| w.bits(r.bits() & !SE));
        }
    }
}
