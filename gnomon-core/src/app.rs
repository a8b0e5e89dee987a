//! Application state
//!
//! `WatchApp` owns every piece of shared widget state: the lifecycle
//! state plus the date, weather and steps label buffers. It is owned by
//! a single controller and touched only between awaits, never shared.

use chrono::NaiveDate;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Text};
use gnomon_protocol::WeatherReport;
use heapless::String;

use crate::clock::{ClockTime, WallClock};
use crate::face::{self, layout};
use crate::labels::{format_date, StepReading, StepsLabel, WeatherLabel, DATE_LEN};
use crate::state::{Event, State};

/// Work the controller fans out after a minute rollover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MinuteActions {
    /// Query the step source again
    pub refresh_steps: bool,
    /// Send a weather request to the phone
    pub request_weather: bool,
}

/// All watchface state behind the display
pub struct WatchApp {
    state: State,
    date: String<DATE_LEN>,
    weather: WeatherLabel,
    steps: StepsLabel,
}

impl Default for WatchApp {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchApp {
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
            date: String::new(),
            weather: WeatherLabel::new(),
            steps: StepsLabel::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Load handler: seat the date label and go live
    pub fn load(&mut self, today: NaiveDate) {
        self.date = format_date(today);
        self.state = self.state.transition(Event::LoadComplete);
    }

    /// Teardown handler
    pub fn teardown(&mut self) {
        self.state = self.state.transition(Event::Teardown);
    }

    /// Per-second tick: whether a redraw should happen
    pub fn on_second_tick(&self, _clock: &WallClock) -> bool {
        self.state.drawing_allowed()
    }

    /// Minute rollover: refresh the date label and decide follow-up work
    ///
    /// Steps are refreshed every minute; a weather request goes out on
    /// the half hour.
    pub fn on_minute_tick(&mut self, clock: &WallClock) -> MinuteActions {
        if !self.state.drawing_allowed() {
            return MinuteActions::default();
        }

        self.date = format_date(clock.date);
        MinuteActions {
            refresh_steps: true,
            request_weather: clock.time.minute % 30 == 0,
        }
    }

    /// Inbound weather report; returns whether the label changed
    pub fn on_weather(&mut self, report: &WeatherReport) -> bool {
        self.weather.apply(report)
    }

    /// Step reading; returns whether the label changed
    pub fn on_steps(&mut self, reading: StepReading) -> bool {
        self.steps.apply(reading)
    }

    pub fn date_text(&self) -> &str {
        &self.date
    }

    pub fn weather_text(&self) -> &str {
        self.weather.text()
    }

    pub fn steps_text(&self) -> &str {
        self.steps.text()
    }

    /// Redraw the whole face from a single clock sample
    ///
    /// No-op unless the app is Running.
    pub fn draw<D>(&self, target: &mut D, time: ClockTime) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.state.drawing_allowed() {
            return Ok(());
        }

        target.clear(layout::BACKGROUND)?;

        let weather_style = MonoTextStyle::new(layout::WEATHER_FONT, layout::TEXT_COLOR);
        Text::with_alignment(
            self.weather.text(),
            layout::WEATHER_POS,
            weather_style,
            Alignment::Center,
        )
        .draw(target)?;

        let date_style = MonoTextStyle::new(layout::DATE_FONT, layout::TEXT_COLOR);
        Text::with_alignment(&self.date, layout::DATE_POS, date_style, Alignment::Center)
            .draw(target)?;

        let steps_style = MonoTextStyle::new(layout::STEPS_FONT, layout::TEXT_COLOR);
        Text::with_alignment(
            self.steps.text(),
            layout::STEPS_POS,
            steps_style,
            Alignment::Center,
        )
        .draw(target)?;

        // Hands go on top of the labels
        face::draw_face(target, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn clock(hour: u8, minute: u8, second: u8) -> WallClock {
        WallClock {
            date: date(),
            time: ClockTime::new(hour, minute, second),
        }
    }

    fn weather(temperature: Option<i32>, conditions: Option<&str>) -> WeatherReport {
        WeatherReport {
            temperature,
            conditions: conditions.map(|text| {
                let mut s = heapless::String::new();
                let _ = s.push_str(text);
                s
            }),
        }
    }

    #[test]
    fn no_redraws_before_load() {
        let app = WatchApp::new();
        assert!(!app.on_second_tick(&clock(10, 0, 0)));
    }

    #[test]
    fn load_seats_date_and_goes_live() {
        let mut app = WatchApp::new();
        app.load(date());

        assert_eq!(app.state(), State::Running);
        assert_eq!(app.date_text(), "Sun 23");
        assert!(app.on_second_tick(&clock(10, 0, 0)));
    }

    #[test]
    fn minute_tick_before_load_does_nothing() {
        let mut app = WatchApp::new();
        assert_eq!(app.on_minute_tick(&clock(10, 30, 0)), MinuteActions::default());
    }

    #[test]
    fn weather_requested_on_the_half_hour() {
        let mut app = WatchApp::new();
        app.load(date());

        assert!(app.on_minute_tick(&clock(10, 0, 0)).request_weather);
        assert!(app.on_minute_tick(&clock(10, 30, 0)).request_weather);
        assert!(!app.on_minute_tick(&clock(10, 29, 0)).request_weather);
        assert!(!app.on_minute_tick(&clock(10, 31, 0)).request_weather);
        assert!(!app.on_minute_tick(&clock(10, 45, 0)).request_weather);
    }

    #[test]
    fn steps_refresh_every_minute() {
        let mut app = WatchApp::new();
        app.load(date());

        assert!(app.on_minute_tick(&clock(10, 7, 0)).refresh_steps);
        assert!(app.on_minute_tick(&clock(10, 8, 0)).refresh_steps);
    }

    #[test]
    fn partial_weather_leaves_label_unchanged() {
        let mut app = WatchApp::new();
        app.load(date());

        assert!(!app.on_weather(&weather(None, Some("Rain"))));
        assert_eq!(app.weather_text(), "LOADING");

        assert!(app.on_weather(&weather(Some(21), Some("Cloudy"))));
        assert_eq!(app.weather_text(), "Cloudy\n21C");

        assert!(!app.on_weather(&weather(Some(30), None)));
        assert_eq!(app.weather_text(), "Cloudy\n21C");
    }

    #[test]
    fn unavailable_steps_show_empty() {
        let mut app = WatchApp::new();
        app.load(date());

        app.on_steps(StepReading::Counted(5000));
        assert_eq!(app.steps_text(), "5000");

        app.on_steps(StepReading::Unavailable);
        assert_eq!(app.steps_text(), "");
    }

    #[test]
    fn teardown_stops_everything() {
        let mut app = WatchApp::new();
        app.load(date());
        app.teardown();

        assert_eq!(app.state(), State::TornDown);
        assert!(!app.on_second_tick(&clock(10, 0, 0)));
        assert_eq!(app.on_minute_tick(&clock(10, 30, 0)), MinuteActions::default());
    }

    #[test]
    fn draw_before_load_touches_nothing() {
        let app = WatchApp::new();
        let mut display = MockDisplay::<Rgb565>::new();
        app.draw(&mut display, ClockTime::new(10, 0, 0)).unwrap();

        assert_eq!(display, MockDisplay::new());
    }

    #[test]
    fn draw_after_load_succeeds() {
        let mut app = WatchApp::new();
        app.load(date());
        app.on_weather(&weather(Some(21), Some("Cloudy")));
        app.on_steps(StepReading::Counted(1234));

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        app.draw(&mut display, ClockTime::new(10, 8, 37)).unwrap();
    }
}
