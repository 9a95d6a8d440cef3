use crate::display::SegmentBus;
use avr_device::atmega128a::{PORTB, PORTC, PORTE, PORTG};
use core::convert::Infallible;
use core::marker::PhantomData;

pub struct Input;
pub struct Output;

/// Register access for one GPIO port
pub trait Port {
    fn modify_ddr<F: FnOnce(u8) -> u8>(f: F);
    fn modify_port<F: FnOnce(u8) -> u8>(f: F);
    fn write_port(bits: u8);
    fn read_pin() -> u8;
}

macro_rules! impl_port {
    ($PORT:ident, $port:ident, $ddr:ident, $pin:ident) => {
        impl Port for $PORT {
            #[inline]
            fn modify_ddr<F: FnOnce(u8) -> u8>(f: F) {
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(f(r.bits())));
                }
            }

            #[inline]
            fn modify_port<F: FnOnce(u8) -> u8>(f: F) {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(f(r.bits())));
                }
            }

            #[inline]
            fn write_port(bits: u8) {
                unsafe {
                    (*$PORT::ptr()).$port.write(|w| w.bits(bits));
                }
            }

            #[inline]
            fn read_pin() -> u8 {
                unsafe { (*$PORT::ptr()).$pin.read().bits() }
            }
        }
    };
}

impl_port!(PORTB, portb, ddrb, pinb);
impl_port!(PORTC, portc, ddrc, pinc);
impl_port!(PORTE, porte, ddre, pine);
impl_port!(PORTG, portg, ddrg, ping);

/// A single port pin. Only `board::Pins` hands these out, one per pin.
#[derive(Debug)]
pub struct Pin<PORT, const N: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT: Port, const N: u8, MODE> Pin<PORT, N, MODE> {
    const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }

    /// Push-pull output, driven high first (all drive lines here are
    /// active-low, so high is "off")
    pub fn into_output_high(self) -> Pin<PORT, N, Output> {
        PORT::modify_port(|bits| bits | (1 << N));
        PORT::modify_ddr(|bits| bits | (1 << N));
        Pin::new()
    }

    pub fn into_output(self) -> Pin<PORT, N, Output> {
        PORT::modify_port(|bits| bits & !(1 << N));
        PORT::modify_ddr(|bits| bits | (1 << N));
        Pin::new()
    }

    pub fn into_pull_up_input(self) -> Pin<PORT, N, Input> {
        PORT::modify_ddr(|bits| bits & !(1 << N));
        PORT::modify_port(|bits| bits | (1 << N));
        Pin::new()
    }
}

impl<PORT: Port, const N: u8> Pin<PORT, N, Input> {
    #[inline]
    pub fn is_high(&self) -> bool {
        PORT::read_pin() & (1 << N) != 0
    }

    #[inline]
    pub fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<PORT: Port, const N: u8> embedded_hal::digital::v2::OutputPin for Pin<PORT, N, Output> {
    type Error = Infallible;

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        PORT::modify_port(|bits| bits & !(1 << N));
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        PORT::modify_port(|bits| bits | (1 << N));
        Ok(())
    }
}

/// All eight PORTC lines as the display segment bus
pub struct SegmentPort {
    _port: PhantomData<PORTC>,
}

impl SegmentPort {
    fn new() -> Self {
        PORTC::write_port(crate::display::SEGMENTS_BLANK);
        PORTC::modify_ddr(|_| 0xFF);
        Self { _port: PhantomData }
    }
}

impl SegmentBus for SegmentPort {
    type Error = Infallible;

    #[inline]
    fn write_segments(&mut self, pattern: u8) -> Result<(), Infallible> {
        PORTC::write_port(pattern);
        Ok(())
    }
}

// Board wiring
pub mod board {
    use super::*;

    pub type LedPin = Pin<PORTB, 5, Input>;
    pub type UpButton = Pin<PORTE, 4, Input>;
    pub type DownButton = Pin<PORTE, 5, Input>;
    pub type TensSelect = Pin<PORTG, 0, Input>;
    pub type UnitsSelect = Pin<PORTG, 1, Input>;

    pub type TensDrive = Pin<PORTG, 0, Output>;
    pub type UnitsDrive = Pin<PORTG, 1, Output>;
    pub type LedOutput = Pin<PORTB, 5, Output>;

    pub struct Pins {
        pub led: LedPin,
        pub up: UpButton,
        pub down: DownButton,
        pub segments: SegmentPort,
        pub tens: TensSelect,
        pub units: UnitsSelect,
    }

    impl Pins {
        /// Consumes the port singletons so no other code can claim the pins
        pub fn new(_portb: PORTB, _portc: PORTC, _porte: PORTE, _portg: PORTG) -> Self {
            Self {
                led: Pin::new(),
                up: Pin::new(),
                down: Pin::new(),
                segments: SegmentPort::new(),
                tens: Pin::new(),
                units: Pin::new(),
            }
        }
    }
}
