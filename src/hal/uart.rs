use crate::config::uart_ubrr;
use avr_device::atmega128a::USART0;
use core::convert::Infallible;

// UCSR0A
const UDRE0: u8 = 1 << 5;
// UCSR0B
const TXEN0: u8 = 1 << 3;
// UCSR0C: UCSZ01 | UCSZ00, 8N1
const FRAME_8N1: u8 = 0x06;

/// Transmit-only USART0 for the serial console. Polled, so it is only
/// used from the foreground.
pub struct Usart0 {
    usart: USART0,
}

impl Usart0 {
    pub fn new(usart: USART0) -> Self {
        let ubrr = uart_ubrr();
        unsafe {
            usart.ubrr0h.write(|w| w.bits((ubrr >> 8) as u8));
            usart.ubrr0l.write(|w| w.bits(ubrr as u8));
            usart.ucsr0c.write(|w| w.bits(FRAME_8N1));
            usart.ucsr0b.write(|w| w.bits(TXEN0));
        }
        Self { usart }
    }

    #[inline]
    fn is_tx_ready(&self) -> bool {
        self.usart.ucsr0a.read().bits() & UDRE0 != 0
    }
}

impl embedded_hal::serial::Write<u8> for Usart0 {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if !self.is_tx_ready() {
            return Err(nb::Error::WouldBlock);
        }
        unsafe {
            self.usart.udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.is_tx_ready() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

impl ufmt::uWrite for Usart0 {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        use embedded_hal::serial::Write;

        for byte in s.bytes() {
            nb::block!(self.write(byte))?;
        }
        Ok(())
    }
}
