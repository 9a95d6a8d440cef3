//! Two-digit multiplexed seven-segment display
//!
//! The multiplexer tick decides *what* to show; `SegmentDisplay` applies it
//! to the pins. Both digits share the segment bus, so a digit must be
//! switched off before the bus changes and the next digit is switched on.

use crate::state::SharedState;
use embedded_hal::digital::v2::OutputPin;

/// Common-anode patterns, bit 0 = segment a ... bit 6 = segment g,
/// bit 7 = decimal point. A cleared bit lights the segment.
const SEGMENT_PATTERNS: [u8; 10] = [
    0xC0, // 0
    0xF9, // 1
    0xA4, // 2
    0xB0, // 3
    0x99, // 4
    0x92, // 5
    0x82, // 6
    0xF8, // 7
    0x80, // 8
    0x90, // 9
];

/// All segments off
pub const SEGMENTS_BLANK: u8 = 0xFF;

/// Segment pattern for a decimal digit. Anything above 9 is blank.
#[inline]
pub const fn segment_pattern(digit: u8) -> u8 {
    if digit < 10 {
        SEGMENT_PATTERNS[digit as usize]
    } else {
        SEGMENTS_BLANK
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Digit {
    Tens = 0,
    Units = 1,
}

impl Digit {
    #[inline]
    pub const fn other(self) -> Digit {
        match self {
            Digit::Tens => Digit::Units,
            Digit::Units => Digit::Tens,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Digit {
        match bits {
            0 => Digit::Tens,
            _ => Digit::Units,
        }
    }
}

/// Pin writes for one multiplex step, applied in field order
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DigitFrame {
    pub deselect: Digit,
    pub segments: u8,
    pub select: Digit,
}

pub struct DisplayMultiplexer<'a> {
    state: &'a SharedState,
}

impl<'a> DisplayMultiplexer<'a> {
    pub const fn new(state: &'a SharedState) -> Self {
        Self { state }
    }

    /// Called on every multiplex timer tick. Moves to the other digit and
    /// returns what to drive for it.
    pub fn on_tick(&self) -> DigitFrame {
        let previous = self.state.active_digit();
        let digit = previous.other();
        self.state.set_active_digit(digit);

        let frequency = self.state.frequency();
        let value = match digit {
            Digit::Tens => frequency.tens(),
            Digit::Units => frequency.units(),
        };

        DigitFrame {
            deselect: previous,
            segments: segment_pattern(value),
            select: digit,
        }
    }
}

/// Shared segment outputs of the display
pub trait SegmentBus {
    type Error;

    fn write_segments(&mut self, pattern: u8) -> Result<(), Self::Error>;
}

/// Segment bus plus the two digit drive lines. Drive lines are active-low.
pub struct SegmentDisplay<BUS, TENS, UNITS> {
    bus: BUS,
    tens: TENS,
    units: UNITS,
}

impl<BUS, TENS, UNITS, E> SegmentDisplay<BUS, TENS, UNITS>
where
    BUS: SegmentBus<Error = E>,
    TENS: OutputPin<Error = E>,
    UNITS: OutputPin<Error = E>,
{
    pub fn new(bus: BUS, tens: TENS, units: UNITS) -> Self {
        Self { bus, tens, units }
    }

    /// Both digits off, bus blank
    pub fn blank(&mut self) -> Result<(), E> {
        self.tens.set_high()?;
        self.units.set_high()?;
        self.bus.write_segments(SEGMENTS_BLANK)
    }

    pub fn show(&mut self, frame: DigitFrame) -> Result<(), E> {
        self.drive(frame.deselect, false)?;
        self.bus.write_segments(frame.segments)?;
        self.drive(frame.select, true)
    }

    fn drive(&mut self, digit: Digit, on: bool) -> Result<(), E> {
        match (digit, on) {
            (Digit::Tens, true) => self.tens.set_low(),
            (Digit::Tens, false) => self.tens.set_high(),
            (Digit::Units, true) => self.units.set_low(),
            (Digit::Units, false) => self.units.set_high(),
        }
    }

    pub fn release(self) -> (BUS, TENS, UNITS) {
        (self.bus, self.tens, self.units)
    }
}
