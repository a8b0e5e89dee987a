//! Hand angle math
//!
//! Angles are fixed point: 1/65536 of a full clockwise turn, with zero
//! at 12 o'clock. All three hand angles derive from one clock sample.

use libm::{cosf, roundf, sinf};

/// One full turn
pub const ANGLE_MAX: u32 = 0x1_0000;

/// Second hand angle
pub fn second_angle(second: u8) -> u32 {
    ANGLE_MAX * second as u32 / 60
}

/// Minute hand angle
pub fn minute_angle(minute: u8) -> u32 {
    ANGLE_MAX * minute as u32 / 60
}

/// Hour hand angle
///
/// The hour hand advances in discrete steps, once every ten minutes:
/// six positions per hour, 72 per half day.
pub fn hour_angle(hour: u8, minute: u8) -> u32 {
    ANGLE_MAX * ((hour % 12) as u32 * 6 + minute as u32 / 10) / 72
}

fn sin_cos(angle: u32) -> (f32, f32) {
    let radians = angle as f32 / ANGLE_MAX as f32 * core::f32::consts::TAU;
    (sinf(radians), cosf(radians))
}

/// Endpoint of a hand of the given length, relative to the face center
///
/// Screen coordinates: y grows downward, so 12 o'clock is (0, -length).
pub fn tip(angle: u32, length: i32) -> (i32, i32) {
    let (sin, cos) = sin_cos(angle);
    let len = length as f32;
    (roundf(sin * len) as i32, roundf(-cos * len) as i32)
}

/// Rotate a point about the origin by the given clockwise angle
pub fn rotate(x: i32, y: i32, angle: u32) -> (i32, i32) {
    let (sin, cos) = sin_cos(angle);
    let (fx, fy) = (x as f32, y as f32);
    (
        roundf(fx * cos - fy * sin) as i32,
        roundf(fx * sin + fy * cos) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn second_angle_three_quarters() {
        assert_eq!(second_angle(45), ANGLE_MAX * 3 / 4);
    }

    #[test]
    fn second_angle_bounds() {
        assert_eq!(second_angle(0), 0);
        assert!(second_angle(59) < ANGLE_MAX);
    }

    #[test]
    fn minute_angle_key_positions() {
        assert_eq!(minute_angle(0), 0);
        assert_eq!(minute_angle(30), ANGLE_MAX / 2);
        assert!(minute_angle(59) < ANGLE_MAX);
    }

    #[test]
    fn hour_angle_steps_every_ten_minutes() {
        // Within one ten-minute bucket the hour hand does not move
        assert_eq!(hour_angle(3, 0), hour_angle(3, 9));
        // At the bucket boundary it advances by one 72nd of a turn
        assert_eq!(hour_angle(3, 10) - hour_angle(3, 9), ANGLE_MAX / 72);
    }

    #[test]
    fn hour_angle_wraps_at_twelve() {
        assert_eq!(hour_angle(0, 0), hour_angle(12, 0));
        assert_eq!(hour_angle(3, 30), hour_angle(15, 30));
    }

    #[test]
    fn tip_cardinal_directions() {
        assert_eq!(tip(0, 100), (0, -100)); // 12 o'clock
        assert_eq!(tip(ANGLE_MAX / 4, 100), (100, 0)); // 3 o'clock
        assert_eq!(tip(ANGLE_MAX / 2, 100), (0, 100)); // 6 o'clock
        assert_eq!(tip(ANGLE_MAX * 3 / 4, 100), (-100, 0)); // 9 o'clock
    }

    #[test]
    fn rotate_quarter_turn() {
        // A point at 12 o'clock rotates to 3 o'clock
        assert_eq!(rotate(0, -88, ANGLE_MAX / 4), (88, 0));
        // Identity at angle zero
        assert_eq!(rotate(-5, 12, 0), (-5, 12));
    }

    proptest! {
        #[test]
        fn hour_angle_constant_within_bucket(
            hour in 0u8..24,
            bucket in 0u8..6,
            offset in 0u8..10,
        ) {
            let start = bucket * 10;
            prop_assert_eq!(hour_angle(hour, start), hour_angle(hour, start + offset));
        }

        #[test]
        fn angles_stay_below_full_turn(hour in 0u8..24, minute in 0u8..60, second in 0u8..60) {
            prop_assert!(second_angle(second) < ANGLE_MAX);
            prop_assert!(minute_angle(minute) < ANGLE_MAX);
            prop_assert!(hour_angle(hour, minute) < ANGLE_MAX);
        }
    }
}
