//! Fixed face layout for a round 240x240 panel
//!
//! Everything visual is a compiled-in constant; there is no runtime
//! configuration surface.

use embedded_graphics::geometry::Point;
use embedded_graphics::mono_font::ascii::{FONT_6X13, FONT_10X20};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// Panel dimensions
pub const WIDTH: u32 = 240;
pub const HEIGHT: u32 = 240;

/// Face center
pub const CENTER: Point = Point::new(120, 120);

/// Dial tick marks: outer radius shared, inner radius per tick weight
pub const TICK_OUTER: i32 = 116;
pub const TICK_INNER_HOUR: i32 = 104;
pub const TICK_INNER_MINUTE: i32 = 111;

/// Second hand reaches almost to the tick ring
pub const SECOND_HAND_LENGTH: i32 = 100;

/// Minute hand outline, pointing at 12 o'clock, relative to the center
pub const MINUTE_HAND: [Point; 5] = [
    Point::new(-5, 14),
    Point::new(5, 14),
    Point::new(5, -80),
    Point::new(0, -90),
    Point::new(-5, -80),
];

/// Hour hand outline, pointing at 12 o'clock, relative to the center
pub const HOUR_HAND: [Point; 5] = [
    Point::new(-6, 14),
    Point::new(6, 14),
    Point::new(6, -52),
    Point::new(0, -62),
    Point::new(-6, -52),
];

/// Side of the filled square over the hand pivot
pub const HUB_SIZE: u32 = 7;

// Colors
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const TICK_COLOR: Rgb565 = Rgb565::WHITE;
pub const MINUTE_HAND_COLOR: Rgb565 = Rgb565::WHITE;
pub const HOUR_HAND_COLOR: Rgb565 = Rgb565::RED;
pub const SECOND_HAND_COLOR: Rgb565 = Rgb565::WHITE;
pub const HAND_OUTLINE_COLOR: Rgb565 = Rgb565::BLACK;
pub const HUB_COLOR: Rgb565 = Rgb565::WHITE;
pub const TEXT_COLOR: Rgb565 = Rgb565::WHITE;

// Labels: weather above the pivot, date and steps below
pub const WEATHER_FONT: &MonoFont<'static> = &FONT_10X20;
pub const WEATHER_POS: Point = Point::new(120, 58);

pub const DATE_FONT: &MonoFont<'static> = &FONT_10X20;
pub const DATE_POS: Point = Point::new(120, 178);

pub const STEPS_FONT: &MonoFont<'static> = &FONT_6X13;
pub const STEPS_POS: Point = Point::new(120, 200);
