//! Text labels around the dial

mod date;
mod steps;
mod weather;

pub use date::{format_date, DATE_LEN};
pub use steps::{StepReading, StepsLabel, STEPS_LEN};
pub use weather::{WeatherLabel, WEATHER_LEN};
