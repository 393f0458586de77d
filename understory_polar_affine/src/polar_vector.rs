// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::{Point, Vec2};

/// A 2D vector in polar form.
///
/// `r` is the radius and `a` the angle in radians, measured counter‑clockwise
/// from the positive X axis. The radius may be negative: `(-r, a)` names the
/// same point as `(r, a ± π)`. [`PolarVector::flip`] switches between these
/// two encodings of one vector.
///
/// Angles are never normalized. Interpolation callers treat `a` as a plain
/// real number, so wrapping it into a canonical range would change how two
/// nearby angles blend across the ±π boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarVector {
    /// Radius (length, possibly negated).
    pub r: f64,
    /// Angle in radians.
    pub a: f64,
}

impl PolarVector {
    /// Creates a polar vector from a radius and an angle in radians.
    #[must_use]
    pub const fn new(r: f64, a: f64) -> Self {
        Self { r, a }
    }

    /// Converts a Cartesian point (treated as a vector from the origin) to polar form.
    ///
    /// The `+0` origin maps to `r = 0, a = 0`; a negative zero `x` gives
    /// `a = π` instead. Either way the angle carries no direction, so
    /// interpolating toward or away from a zero‑length vector may rotate
    /// abruptly, but it never fails.
    #[must_use]
    pub fn from_point(p: Point) -> Self {
        let v = p.to_vec2();
        Self {
            r: v.hypot(),
            a: v.atan2(),
        }
    }

    /// Converts back to a Cartesian point: `(r·cos a, r·sin a)`.
    ///
    /// A negative radius lands on the opposite ray.
    #[must_use]
    pub fn to_point(self) -> Point {
        (Vec2::from_angle(self.a) * self.r).to_point()
    }

    /// Re‑encodes the same vector with a negated radius.
    ///
    /// The angle moves by half a turn toward zero, `a + π` for negative
    /// angles and `a − π` otherwise, so it stays within `[-π, π]` whenever
    /// `self.a` does. [`PolarVector::to_point`] gives the same point before
    /// and after; only the angle used for interpolation changes.
    #[must_use]
    pub fn flip(self) -> Self {
        let a = if self.a < 0.0 {
            self.a + PI
        } else {
            self.a - PI
        };
        Self { r: -self.r, a }
    }

    /// Linearly interpolates radius and angle independently.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: lerp(self.r, other.r, t),
            a: lerp(self.a, other.a, t),
        }
    }
}

impl From<Point> for PolarVector {
    fn from(p: Point) -> Self {
        Self::from_point(p)
    }
}

impl From<PolarVector> for Point {
    fn from(v: PolarVector) -> Self {
        v.to_point()
    }
}

pub(crate) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (1.0 - t) * from + t * to
}
