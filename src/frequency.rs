use crate::config::{FREQUENCY_INITIAL_HZ, FREQUENCY_MAX_HZ, FREQUENCY_MIN_HZ};

/// Envelope frequency in whole Hz, always within
/// `FREQUENCY_MIN_HZ..=FREQUENCY_MAX_HZ`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(u8);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidFrequency(pub u8);

impl Frequency {
    pub const MIN: Frequency = Frequency(FREQUENCY_MIN_HZ);
    pub const MAX: Frequency = Frequency(FREQUENCY_MAX_HZ);
    pub const INITIAL: Frequency = Frequency(FREQUENCY_INITIAL_HZ);

    #[inline]
    pub const fn hz(self) -> u8 {
        self.0
    }

    /// One step up, saturating at `MAX`
    pub const fn step_up(self) -> Self {
        if self.0 < FREQUENCY_MAX_HZ {
            Frequency(self.0 + 1)
        } else {
            self
        }
    }

    /// One step down, saturating at `MIN`
    pub const fn step_down(self) -> Self {
        if self.0 > FREQUENCY_MIN_HZ {
            Frequency(self.0 - 1)
        } else {
            self
        }
    }

    #[inline]
    pub const fn tens(self) -> u8 {
        self.0 / 10
    }

    #[inline]
    pub const fn units(self) -> u8 {
        self.0 % 10
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl TryFrom<u8> for Frequency {
    type Error = InvalidFrequency;

    fn try_from(hz: u8) -> Result<Self, Self::Error> {
        if (FREQUENCY_MIN_HZ..=FREQUENCY_MAX_HZ).contains(&hz) {
            Ok(Frequency(hz))
        } else {
            Err(InvalidFrequency(hz))
        }
    }
}

impl From<Frequency> for u8 {
    fn from(f: Frequency) -> u8 {
        f.0
    }
}

impl ufmt::uDisplay for Frequency {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uwrite!(f, "{} Hz", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> impl Iterator<Item = Frequency> {
        (FREQUENCY_MIN_HZ..=FREQUENCY_MAX_HZ).map(|hz| Frequency::try_from(hz).unwrap())
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Frequency::try_from(0), Err(InvalidFrequency(0)));
        assert_eq!(Frequency::try_from(17), Err(InvalidFrequency(17)));
        assert_eq!(Frequency::try_from(16).map(Frequency::hz), Ok(16));
    }

    #[test]
    fn step_up_converges_to_max() {
        for start in all() {
            let mut f = start;
            for _ in 0..20 {
                let next = f.step_up();
                assert!(next >= f);
                f = next;
            }
            assert_eq!(f, Frequency::MAX);
            assert_eq!(f.step_up(), Frequency::MAX);
        }
    }

    #[test]
    fn step_down_converges_to_min() {
        for start in all() {
            let mut f = start;
            for _ in 0..20 {
                let next = f.step_down();
                assert!(next <= f);
                f = next;
            }
            assert_eq!(f, Frequency::MIN);
            assert_eq!(f.step_down(), Frequency::MIN);
        }
    }

    #[test]
    fn digits_reconstruct_value() {
        for f in all() {
            assert!(f.tens() <= 1);
            assert!(f.units() <= 9);
            assert_eq!(f.tens() * 10 + f.units(), f.hz());
        }
        let f = Frequency::MAX;
        assert_eq!((f.tens(), f.units()), (1, 6));
    }
}
