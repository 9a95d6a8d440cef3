pub mod exint;
pub mod gpio;
pub mod power;
pub mod pwm;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use exint::ButtonInterrupts;
pub use gpio::{board, Input, Output, Pin, SegmentPort};
pub use power::Power;
pub use pwm::LedPwm;
pub use timer::{DebounceTimer, MultiplexTimer};
pub use uart::Usart0;
