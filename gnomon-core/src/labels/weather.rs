//! Weather label

use core::fmt::Write;

use gnomon_protocol::messages::CONDITIONS_MAX;
use gnomon_protocol::WeatherReport;
use heapless::String;

/// Buffer size for the weather label: conditions, newline, temperature, unit
pub const WEATHER_LEN: usize = CONDITIONS_MAX + 16;

/// The two-line weather readout above the dial pivot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherLabel {
    text: String<WEATHER_LEN>,
}

impl Default for WeatherLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherLabel {
    /// First-paint placeholder shown until the first report arrives
    pub fn new() -> Self {
        let mut text = String::new();
        let _ = text.push_str("LOADING");
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply a report; returns whether the text changed
    ///
    /// Only a complete report (both temperature and conditions) rewrites
    /// the label. A partial report leaves the display exactly as it was.
    pub fn apply(&mut self, report: &WeatherReport) -> bool {
        let (Some(celsius), Some(conditions)) = (report.temperature, report.conditions.as_ref())
        else {
            return false;
        };

        let mut next = String::new();
        let _ = write!(next, "{}\n{}C", conditions, celsius);

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

    fn report(temperature: Option<i32>, conditions: Option<&str>) -> WeatherReport {
        WeatherReport {
            temperature,
            conditions: conditions.map(|text| {
                let mut s = String::new();
                let _ = s.push_str(text);
                s
            }),
        }
    }

    #[test]
    fn starts_with_placeholder() {
        assert_eq!(WeatherLabel::new().text(), "LOADING");
    }

    #[test]
    fn complete_report_formats_two_lines() {
        let mut label = WeatherLabel::new();
        assert!(label.apply(&report(Some(21), Some("Cloudy"))));
        assert_eq!(label.text(), "Cloudy\n21C");
    }

    #[test]
    fn negative_temperature() {
        let mut label = WeatherLabel::new();
        label.apply(&report(Some(-5), Some("Snow")));
        assert_eq!(label.text(), "Snow\n-5C");
    }

    #[test]
    fn conditions_only_leaves_display_unchanged() {
        let mut label = WeatherLabel::new();
        assert!(!label.apply(&report(None, Some("Rain"))));
        assert_eq!(label.text(), "LOADING");
    }

    #[test]
    fn temperature_only_leaves_display_unchanged() {
        let mut label = WeatherLabel::new();
        label.apply(&report(Some(21), Some("Cloudy")));

        assert!(!label.apply(&report(Some(30), None)));
        assert_eq!(label.text(), "Cloudy\n21C");
    }

    #[test]
    fn newer_complete_report_overwrites() {
        let mut label = WeatherLabel::new();
        label.apply(&report(Some(21), Some("Cloudy")));
        label.apply(&report(Some(18), Some("Rain")));
        assert_eq!(label.text(), "Rain\n18C");
    }
}
