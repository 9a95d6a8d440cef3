#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega128a::Peripherals;
    use avr_device::interrupt::{self, Mutex};
    use core::cell::RefCell;

    use sine_pwm_firmware::config::{debounce_compare, multiplex_compare};
    use sine_pwm_firmware::console::SerialConsole;
    use sine_pwm_firmware::hal::gpio::{board, SegmentPort};
    use sine_pwm_firmware::hal::{
        ButtonInterrupts, DebounceTimer, LedPwm, MultiplexTimer, Power, Usart0,
    };
    use sine_pwm_firmware::{
        Button, DisplayMultiplexer, DutyCycleScheduler, FrequencyMonitor, InputDebouncer,
        SegmentDisplay, SharedState,
    };

    type Display = SegmentDisplay<SegmentPort, board::TensDrive, board::UnitsDrive>;

    /// Peripherals the interrupt handlers drive
    struct Hardware {
        pwm: LedPwm,
        display: Display,
        debounce_timer: DebounceTimer,
    }

    static STATE: SharedState = SharedState::new();
    static SCHEDULER: DutyCycleScheduler<'static> = DutyCycleScheduler::new(&STATE);
    static MULTIPLEXER: DisplayMultiplexer<'static> = DisplayMultiplexer::new(&STATE);
    static DEBOUNCER: InputDebouncer<'static> = InputDebouncer::new(&STATE);

    // Global state for interrupt handling
    static HARDWARE: Mutex<RefCell<Option<Hardware>>> = Mutex::new(RefCell::new(None));

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();

        let pins = board::Pins::new(dp.PORTB, dp.PORTC, dp.PORTE, dp.PORTG);
        let _up = pins.up.into_pull_up_input();
        let _down = pins.down.into_pull_up_input();

        let mut display = SegmentDisplay::new(
            pins.segments,
            pins.tens.into_output_high(),
            pins.units.into_output_high(),
        );
        display.blank().ok();

        let pwm = LedPwm::new(dp.TC1, pins.led.into_output(), SCHEDULER.duty_cycle());
        let mut multiplex_timer = MultiplexTimer::new(dp.TC0, multiplex_compare());
        let debounce_timer = DebounceTimer::new(dp.TC3, debounce_compare());
        let mut buttons = ButtonInterrupts::new(dp.EXINT);

        let mut console = SerialConsole::new(Usart0::new(dp.USART0));
        let mut power = Power::new(dp.CPU);

        interrupt::free(|cs| {
            let mut hardware = HARDWARE.borrow(cs).borrow_mut();
            let hardware = hardware.insert(Hardware {
                pwm,
                display,
                debounce_timer,
            });
            hardware.pwm.enable_carrier_interrupt();
        });
        multiplex_timer.start();
        buttons.enable();

        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        console.write_line("Sine PWM v0.1.0").ok();
        console.debug("Multiplex OCR0", multiplex_compare()).ok();
        console.debug("Initial duty", SCHEDULER.duty_cycle()).ok();
        console.write_line("Ready...").ok();

        let mut monitor = FrequencyMonitor::new(&STATE);
        loop {
            if let Some(frequency) = monitor.poll() {
                console.frequency(frequency).ok();
            }
            power.enter_idle_mode();
        }
    }

    /// Once per PWM carrier period
    #[avr_device::interrupt(atmega128a)]
    fn TIMER1_OVF() {
        if let Some(duty) = SCHEDULER.on_carrier_period() {
            interrupt::free(|cs| {
                if let Some(hardware) = HARDWARE.borrow(cs).borrow_mut().as_mut() {
                    hardware.pwm.set_duty(duty);
                }
            });
        }
    }

    #[avr_device::interrupt(atmega128a)]
    fn TIMER0_COMP() {
        let frame = MULTIPLEXER.on_tick();
        interrupt::free(|cs| {
            if let Some(hardware) = HARDWARE.borrow(cs).borrow_mut().as_mut() {
                hardware.display.show(frame).ok();
            }
        });
    }

    #[avr_device::interrupt(atmega128a)]
    fn INT4() {
        button_edge(Button::Up);
    }

    #[avr_device::interrupt(atmega128a)]
    fn INT5() {
        button_edge(Button::Down);
    }

    fn button_edge(button: Button) {
        let command = DEBOUNCER.on_edge(button);
        interrupt::free(|cs| {
            if let Some(hardware) = HARDWARE.borrow(cs).borrow_mut().as_mut() {
                hardware.debounce_timer.apply(command);
            }
        });
    }

    /// Debounce window closed without a new edge
    #[avr_device::interrupt(atmega128a)]
    fn TIMER3_COMPA() {
        interrupt::free(|cs| {
            if let Some(hardware) = HARDWARE.borrow(cs).borrow_mut().as_mut() {
                hardware.debounce_timer.stop();
            }
        });
        DEBOUNCER.on_timeout();
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("sine_pwm_firmware runs on the ATmega128; build it with the avr-atmega128.json target");
}
