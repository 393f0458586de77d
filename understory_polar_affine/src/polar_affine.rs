// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

use crate::polar_vector::{PolarVector, lerp};

/// Which basis vector of a decomposition carries the reflection, if any.
///
/// For an orientation‑reversing map, [`PolarAffine::decompose`] re‑encodes
/// exactly one basis vector with [`PolarVector::flip`]. That moves its angle
/// next to the angle of its un‑reflected neighbour, so blending the angles
/// linearly does not swing the shape across ±π.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FlippedBasis {
    /// The map preserves orientation (or is singular); nothing is flipped.
    #[default]
    None,
    /// The first basis vector `u` is flipped.
    U,
    /// The second basis vector `v` is flipped.
    V,
}

impl FlippedBasis {
    /// Decides which basis vector of `m` absorbs the reflection.
    ///
    /// For a negative determinant, `u` is flipped when `a < d` and `v`
    /// otherwise, where `[a, b, c, d, ..]` are the coefficients of `m`.
    #[must_use]
    pub fn of(m: Affine) -> Self {
        let [a, b, c, d, _, _] = m.as_coeffs();
        let det = a * d - b * c;
        if det < 0.0 {
            if a < d { Self::U } else { Self::V }
        } else {
            Self::None
        }
    }
}

/// A 2D affine transform in polar form.
///
/// `u` and `v` are the two columns of the linear part, `(a, b)` and `(c, d)`
/// in [`Affine::as_coeffs`] order, and `t` is the translation. Interpolating
/// these six numbers field by field and converting back gives motion that
/// rotates and scales rather than collapsing through the origin the way a
/// blend of raw coefficients does.
///
/// ```rust
/// use core::f64::consts::FRAC_PI_2;
/// use kurbo::{Affine, Point};
/// use understory_polar_affine::PolarAffine;
///
/// let from = PolarAffine::decompose(Affine::IDENTITY);
/// let to = PolarAffine::decompose(Affine::rotate(FRAC_PI_2));
///
/// // Halfway through a quarter turn the unit X axis is still unit length.
/// let halfway = from.lerp(to, 0.5).recompose();
/// let x_axis = halfway * Point::new(1.0, 0.0);
/// assert!((x_axis.to_vec2().hypot() - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarAffine {
    /// First basis column, `(a, b)`.
    pub u: PolarVector,
    /// Second basis column, `(c, d)`.
    pub v: PolarVector,
    /// Translation, `(tx, ty)`.
    pub t: Point,
}

impl PolarAffine {
    /// Creates a polar transform from its parts.
    #[must_use]
    pub const fn new(u: PolarVector, v: PolarVector, t: Point) -> Self {
        Self { u, v, t }
    }

    /// Decomposes an affine transform into polar form.
    ///
    /// When the linear part reverses orientation, one basis vector is
    /// re‑encoded with [`PolarVector::flip`]; see [`FlippedBasis::of`] for
    /// which one. Singular and zero‑length bases are decomposed without
    /// error, though interpolating them may not look good.
    #[must_use]
    pub fn decompose(m: Affine) -> Self {
        let [a, b, c, d, tx, ty] = m.as_coeffs();
        let u = PolarVector::from_point(Point::new(a, b));
        let v = PolarVector::from_point(Point::new(c, d));
        let (u, v) = match FlippedBasis::of(m) {
            FlippedBasis::None => (u, v),
            FlippedBasis::U => (u.flip(), v),
            FlippedBasis::V => (u, v.flip()),
        };
        Self {
            u,
            v,
            t: Point::new(tx, ty),
        }
    }

    /// Converts back to an affine transform.
    ///
    /// This inverts [`PolarAffine::decompose`] up to floating‑point rounding;
    /// a flipped basis vector is restored by its negative radius.
    #[must_use]
    pub fn recompose(self) -> Affine {
        let u = self.u.to_point();
        let v = self.v.to_point();
        Affine::new([u.x, u.y, v.x, v.y, self.t.x, self.t.y])
    }

    /// Interpolates all six fields linearly.
    ///
    /// `t` is not clamped. Angles are blended as plain numbers, without
    /// wrapping, which is what the flip encoding relies on.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            u: self.u.lerp(other.u, t),
            v: self.v.lerp(other.v, t),
            t: Point::new(lerp(self.t.x, other.t.x, t), lerp(self.t.y, other.t.y, t)),
        }
    }
}

impl From<Affine> for PolarAffine {
    fn from(m: Affine) -> Self {
        Self::decompose(m)
    }
}

impl From<PolarAffine> for Affine {
    fn from(p: PolarAffine) -> Self {
        p.recompose()
    }
}

/// Interpolates between two affine transforms in polar space.
///
/// Equivalent to decomposing both, calling [`PolarAffine::lerp`] with `t`
/// and recomposing the result.
#[must_use]
pub fn interpolate(from: Affine, to: Affine, t: f64) -> Affine {
    PolarAffine::decompose(from)
        .lerp(PolarAffine::decompose(to), t)
        .recompose()
}
