use crate::frequency::Frequency;
use ufmt::{uWrite, uwrite};

/// Line-oriented text log on top of any `ufmt` writer (USART0 on the board)
pub struct SerialConsole<W> {
    writer: W,
}

impl<W: uWrite> SerialConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), W::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    pub fn info(&mut self, msg: &str) -> Result<(), W::Error> {
        self.write_str("[INF] ")?;
        self.write_line(msg)
    }

    // Print formatted debug info
    pub fn debug(&mut self, msg: &str, val: u8) -> Result<(), W::Error> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        let hex = [
            HEX_CHARS[(val >> 4) as usize] as char,
            HEX_CHARS[(val & 0xF) as usize] as char,
        ];
        uwrite!(self.writer, "[DBG] {}: 0x", msg)?;
        self.writer.write_char(hex[0])?;
        self.writer.write_char(hex[1])?;
        self.write_str("\r\n")
    }

    pub fn frequency(&mut self, frequency: Frequency) -> Result<(), W::Error> {
        uwrite!(self.writer, "[INF] frequency: {}\r\n", frequency)
    }

    pub fn release(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::string::String;

    #[derive(Default)]
    struct Capture(String);

    impl uWrite for Capture {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn lines_end_with_crlf() {
        let mut console = SerialConsole::new(Capture::default());
        console.write_line("Ready...").unwrap();
        console.info("display on").unwrap();
        assert_eq!(console.release().0, "Ready...\r\n[INF] display on\r\n");
    }

    #[test]
    fn debug_prints_hex() {
        let mut console = SerialConsole::new(Capture::default());
        console.debug("Duty", 0xFE).unwrap();
        console.debug("Index", 0x07).unwrap();
        assert_eq!(
            console.release().0,
            "[DBG] Duty: 0xFE\r\n[DBG] Index: 0x07\r\n"
        );
    }

    #[test]
    fn frequency_line() {
        let mut console = SerialConsole::new(Capture::default());
        console.frequency(Frequency::MAX).unwrap();
        console.frequency(Frequency::MIN).unwrap();
        assert_eq!(
            console.release().0,
            "[INF] frequency: 16 Hz\r\n[INF] frequency: 1 Hz\r\n"
        );
    }
}
