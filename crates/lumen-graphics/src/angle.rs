//! Angles for arcs and sectors

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::ops::{Add, Neg, Sub};

/// A rotation measure, stored in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle {
    pub radians: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };
    pub const QUARTER_CIRCLE: Angle = Angle { radians: FRAC_PI_2 };
    pub const HALF_CIRCLE: Angle = Angle { radians: PI };
    pub const FULL_CIRCLE: Angle = Angle { radians: TAU };

    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            radians: degrees * PI / 180.0,
        }
    }

    pub fn to_degrees(&self) -> f32 {
        self.radians * 180.0 / PI
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle {
            radians: self.radians + rhs.radians,
        }
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle {
            radians: self.radians - rhs.radians,
        }
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle {
            radians: -self.radians,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPSILON: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(45.0)]
    #[case(-30.0)]
    #[case(123.456)]
    #[case(720.0)]
    fn degrees_convert_linearly(#[case] degrees: f32) {
        assert_close(Angle::from_degrees(degrees).radians, degrees * PI / 180.0);
    }

    #[rstest]
    #[case(0.0, Angle::ZERO)]
    #[case(90.0, Angle::QUARTER_CIRCLE)]
    #[case(180.0, Angle::HALF_CIRCLE)]
    #[case(360.0, Angle::FULL_CIRCLE)]
    fn named_constants_match_degrees(#[case] degrees: f32, #[case] expected: Angle) {
        assert_close(Angle::from_degrees(degrees).radians, expected.radians);
    }

    #[test]
    fn from_radians_keeps_value() {
        assert_eq!(Angle::from_radians(1.25).radians, 1.25);
    }

    #[test]
    fn degrees_round_trip() {
        assert_close(Angle::from_degrees(270.0).to_degrees(), 270.0);
        assert_close(Angle::HALF_CIRCLE.to_degrees(), 180.0);
    }

    #[test]
    fn arithmetic() {
        assert_close(
            (Angle::HALF_CIRCLE + Angle::HALF_CIRCLE).radians,
            Angle::FULL_CIRCLE.radians,
        );
        assert_close(
            (Angle::FULL_CIRCLE - Angle::QUARTER_CIRCLE).to_degrees(),
            270.0,
        );
        assert_eq!((-Angle::QUARTER_CIRCLE).radians, -FRAC_PI_2);
    }
}
