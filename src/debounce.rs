//! Button debouncing for the UP and DOWN frequency buttons
//!
//! A falling edge on either button arms a one-shot debounce timer and
//! latches which button was pressed. Every further edge while armed
//! restarts the timer, so contact bounce keeps pushing the decision out
//! until the line has been quiet for a full window. When the timer
//! expires the latched button is applied to the frequency exactly once.

use crate::frequency::Frequency;
use crate::state::SharedState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Armed(Button),
}

impl DebounceState {
    pub(crate) const fn to_bits(self) -> u8 {
        match self {
            DebounceState::Idle => 0,
            DebounceState::Armed(Button::Up) => 1,
            DebounceState::Armed(Button::Down) => 2,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> DebounceState {
        match bits {
            1 => DebounceState::Armed(Button::Up),
            2 => DebounceState::Armed(Button::Down),
            _ => DebounceState::Idle,
        }
    }
}

/// What the caller must do with the debounce timer
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Reset the counter to zero and (re)start the one-shot window
    Restart,
}

pub struct InputDebouncer<'a> {
    state: &'a SharedState,
}

impl<'a> InputDebouncer<'a> {
    pub const fn new(state: &'a SharedState) -> Self {
        Self { state }
    }

    /// Falling edge on a button pin
    pub fn on_edge(&self, button: Button) -> TimerCommand {
        if self.state.debounce_state() == DebounceState::Idle {
            self.state.set_debounce_state(DebounceState::Armed(button));
        }
        TimerCommand::Restart
    }

    /// Debounce window elapsed without another edge. Returns the new
    /// frequency when a press was resolved. Saturated presses still
    /// resolve; they just return the unchanged bound.
    pub fn on_timeout(&self) -> Option<Frequency> {
        let button = match self.state.debounce_state() {
            DebounceState::Armed(button) => button,
            DebounceState::Idle => return None,
        };

        let current = self.state.frequency();
        let next = match button {
            Button::Up => current.step_up(),
            Button::Down => current.step_down(),
        };
        self.state.set_frequency(next);
        self.state.set_debounce_state(DebounceState::Idle);

        Some(next)
    }

    pub fn is_armed(&self) -> bool {
        self.state.debounce_state() != DebounceState::Idle
    }
}
