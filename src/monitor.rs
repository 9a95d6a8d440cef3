use crate::frequency::Frequency;
use crate::state::SharedState;

/// Foreground watcher that notices frequency changes made by the button
/// handlers, so they can be logged outside interrupt context.
pub struct FrequencyMonitor<'a> {
    state: &'a SharedState,
    reported: Option<Frequency>,
}

impl<'a> FrequencyMonitor<'a> {
    pub const fn new(state: &'a SharedState) -> Self {
        Self {
            state,
            reported: None,
        }
    }

    /// Returns the frequency if it differs from the last one returned.
    /// The first call always reports.
    pub fn poll(&mut self) -> Option<Frequency> {
        let current = self.state.frequency();
        if self.reported == Some(current) {
            return None;
        }
        self.reported = Some(current);
        Some(current)
    }
}
