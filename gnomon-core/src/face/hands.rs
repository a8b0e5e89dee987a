//! Hand and dial drawing
//!
//! One call draws the whole overlay for a single clock sample: tick
//! marks, minute hand, hour hand, second hand, pivot hub. Draw order
//! matters; the hub covers the hand roots.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, Polyline, PrimitiveStyle, Rectangle};

use super::{angle, layout};
use crate::clock::ClockTime;

/// Draw the dial and all three hands for one clock sample
pub fn draw_face<D>(target: &mut D, time: ClockTime) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_ticks(target)?;

    let minute = angle::minute_angle(time.minute);
    let hour = angle::hour_angle(time.hour, time.minute);
    let second = angle::second_angle(time.second);

    draw_hand(target, &layout::MINUTE_HAND, minute, layout::MINUTE_HAND_COLOR)?;
    draw_hand(target, &layout::HOUR_HAND, hour, layout::HOUR_HAND_COLOR)?;
    draw_second_hand(target, second)?;
    draw_hub(target)?;

    Ok(())
}

fn draw_ticks<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for mark in 0..60u8 {
        let a = angle::minute_angle(mark);
        let on_hour = mark % 5 == 0;
        let inner = if on_hour {
            layout::TICK_INNER_HOUR
        } else {
            layout::TICK_INNER_MINUTE
        };
        let weight = if on_hour { 3 } else { 1 };

        let (x0, y0) = angle::tip(a, inner);
        let (x1, y1) = angle::tip(a, layout::TICK_OUTER);
        Line::new(
            layout::CENTER + Point::new(x0, y0),
            layout::CENTER + Point::new(x1, y1),
        )
        .into_styled(PrimitiveStyle::with_stroke(layout::TICK_COLOR, weight))
        .draw(target)?;
    }
    Ok(())
}

/// Draw a filled, outlined hand polygon rotated to the given angle
fn draw_hand<D>(
    target: &mut D,
    outline: &[Point; 5],
    hand_angle: u32,
    fill: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut points = [Point::zero(); 6];
    for (i, p) in outline.iter().enumerate() {
        let (x, y) = angle::rotate(p.x, p.y, hand_angle);
        points[i] = layout::CENTER + Point::new(x, y);
    }
    // Close the outline
    points[5] = points[0];

    // Fill as a triangle fan from the first vertex
    for i in 1..outline.len() - 1 {
        embedded_graphics::primitives::Triangle::new(points[0], points[i], points[i + 1])
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(target)?;
    }

    Polyline::new(&points)
        .into_styled(PrimitiveStyle::with_stroke(layout::HAND_OUTLINE_COLOR, 1))
        .draw(target)?;

    Ok(())
}

fn draw_second_hand<D>(target: &mut D, hand_angle: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (x, y) = angle::tip(hand_angle, layout::SECOND_HAND_LENGTH);
    Line::new(layout::CENTER, layout::CENTER + Point::new(x, y))
        .into_styled(PrimitiveStyle::with_stroke(layout::SECOND_HAND_COLOR, 1))
        .draw(target)
}

fn draw_hub<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::with_center(layout::CENTER, Size::new(layout::HUB_SIZE, layout::HUB_SIZE))
        .into_styled(PrimitiveStyle::with_fill(layout::HUB_COLOR))
        .draw(target)
}
