//! Step count label

use core::fmt::Write;

use heapless::String;

/// Buffer size for the steps label
pub const STEPS_LEN: usize = 12;

/// A daily step count sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepReading {
    /// Steps since the start of the current day
    Counted(u32),
    /// The step source could not be queried
    Unavailable,
}

/// The steps readout under the dial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepsLabel {
    text: String<STEPS_LEN>,
}

impl Default for StepsLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl StepsLabel {
    /// First-paint placeholder shown until the first reading arrives
    pub fn new() -> Self {
        let mut text = String::new();
        let _ = text.push_str("00000");
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply a reading; returns whether the text changed
    ///
    /// An unavailable source clears the label. It never shows "0" or a
    /// previous count in place of missing data.
    pub fn apply(&mut self, reading: StepReading) -> bool {
        let mut next = String::new();
        if let StepReading::Counted(steps) = reading {
            let _ = write!(next, "{}", steps);
        }

        if next == self.text {
            return false;
        }
        self.text = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_placeholder() {
        assert_eq!(StepsLabel::new().text(), "00000");
    }

    #[test]
    fn shows_count() {
        let mut label = StepsLabel::new();
        assert!(label.apply(StepReading::Counted(4321)));
        assert_eq!(label.text(), "4321");
    }

    #[test]
    fn unavailable_clears_not_zeroes() {
        let mut label = StepsLabel::new();
        label.apply(StepReading::Counted(4321));

        assert!(label.apply(StepReading::Unavailable));
        assert_eq!(label.text(), "");
    }

    #[test]
    fn unchanged_reading_reports_no_change() {
        let mut label = StepsLabel::new();
        label.apply(StepReading::Counted(100));
        assert!(!label.apply(StepReading::Counted(100)));
    }
}
