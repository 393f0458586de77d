// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::FRAC_PI_2;

use kurbo::{Affine, Point};

use crate::polar_affine::{FlippedBasis, PolarAffine, interpolate};
use crate::polar_vector::PolarVector;

/// One of the two endpoints of an [`AffineInterpolation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Preset {
    /// The transform at abscissa `0`.
    #[default]
    First,
    /// The transform at abscissa `1`.
    Second,
}

/// Removes scaling and/or shearing from `m`, working in polar form.
///
/// - Without shearing, the second basis vector is turned to be perpendicular
///   to the first, keeping its length and the handedness of `m`.
/// - Without scaling, both basis vectors are made unit length.
///
/// The translation is left alone. When both are allowed, `m` is returned
/// unchanged.
#[must_use]
pub fn constrain(m: Affine, allows_scaling: bool, allows_shearing: bool) -> Affine {
    if allows_scaling && allows_shearing {
        return m;
    }
    let [a, b, c, d, tx, ty] = m.as_coeffs();
    let mut u = PolarVector::from_point(Point::new(a, b));
    let mut v = PolarVector::from_point(Point::new(c, d));

    if !allows_shearing {
        let handedness = match FlippedBasis::of(m) {
            FlippedBasis::None => 1.0,
            FlippedBasis::U | FlippedBasis::V => -1.0,
        };
        v = PolarVector::new(handedness * v.r, u.a + FRAC_PI_2);
    }
    if !allows_scaling {
        u.r = 1.0;
        v.r = if v.r < 0.0 { -1.0 } else { 1.0 };
    }

    PolarAffine::new(u, v, Point::new(tx, ty)).recompose()
}

/// Interpolation state between two preset transforms.
///
/// This is the headless model behind a "tween between two poses" control:
/// two presets, an abscissa in `[0, 1]` selecting a point between them, and
/// switches restricting what kinds of transform may be stored as a preset.
///
/// The model does not notify anyone. Every effective change bumps
/// [`AffineInterpolation::revision`], which callers can compare against a
/// remembered value to decide whether to redraw.
///
/// ```rust
/// use core::f64::consts::FRAC_PI_2;
/// use kurbo::Affine;
/// use understory_polar_affine::AffineInterpolation;
///
/// let mut tween = AffineInterpolation::with_presets(Affine::IDENTITY, Affine::rotate(FRAC_PI_2));
/// tween.set_abscissa(0.5);
/// let m = tween.interpolated_transform();
/// assert!((m.determinant() - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct AffineInterpolation {
    preset0: Affine,
    preset1: Affine,
    abscissa: f64,
    allows_scaling: bool,
    allows_shearing: bool,
    revision: u64,
}

impl Default for AffineInterpolation {
    fn default() -> Self {
        Self::new()
    }
}

impl AffineInterpolation {
    /// Creates a model with both presets at identity and abscissa `0`.
    ///
    /// Scaling and shearing are allowed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_presets(Affine::IDENTITY, Affine::IDENTITY)
    }

    /// Creates a model interpolating from `preset0` to `preset1`.
    #[must_use]
    pub fn with_presets(preset0: Affine, preset1: Affine) -> Self {
        Self {
            preset0,
            preset1,
            abscissa: 0.0,
            allows_scaling: true,
            allows_shearing: true,
            revision: 0,
        }
    }

    /// Returns the transform stored for `preset`.
    #[must_use]
    pub fn preset(&self, preset: Preset) -> Affine {
        match preset {
            Preset::First => self.preset0,
            Preset::Second => self.preset1,
        }
    }

    /// Replaces the transform stored for `preset`.
    ///
    /// The transform is stored as given; constraints only apply through
    /// [`AffineInterpolation::set_current_preset_to_transform`].
    pub fn set_preset(&mut self, preset: Preset, transform: Affine) {
        let slot = match preset {
            Preset::First => &mut self.preset0,
            Preset::Second => &mut self.preset1,
        };
        if *slot == transform {
            return;
        }
        *slot = transform;
        self.bump();
    }

    /// Returns the interpolation abscissa, in `[0, 1]`.
    #[must_use]
    pub fn abscissa(&self) -> f64 {
        self.abscissa
    }

    /// Sets the interpolation abscissa, clamping it into `[0, 1]`.
    ///
    /// NaN is ignored.
    pub fn set_abscissa(&mut self, abscissa: f64) {
        if abscissa.is_nan() {
            return;
        }
        let clamped = abscissa.clamp(0.0, 1.0);
        if clamped == self.abscissa {
            return;
        }
        self.abscissa = clamped;
        self.bump();
    }

    /// Returns the preset nearest to the current abscissa.
    ///
    /// Ties at `0.5` go to [`Preset::Second`].
    #[must_use]
    pub fn current_preset(&self) -> Preset {
        if self.abscissa < 0.5 {
            Preset::First
        } else {
            Preset::Second
        }
    }

    /// Stores `transform` into the [current preset](Self::current_preset),
    /// after removing whatever scaling or shearing is disallowed.
    pub fn set_current_preset_to_transform(&mut self, transform: Affine) {
        let transform = constrain(transform, self.allows_scaling, self.allows_shearing);
        self.set_preset(self.current_preset(), transform);
    }

    /// Returns whether presets may contain scaling.
    #[must_use]
    pub fn allows_scaling(&self) -> bool {
        self.allows_scaling
    }

    /// Sets whether presets may contain scaling.
    ///
    /// Stored presets are not rewritten.
    pub fn set_allows_scaling(&mut self, allows: bool) {
        if self.allows_scaling != allows {
            self.allows_scaling = allows;
            self.bump();
        }
    }

    /// Returns whether presets may contain shearing.
    #[must_use]
    pub fn allows_shearing(&self) -> bool {
        self.allows_shearing
    }

    /// Sets whether presets may contain shearing.
    ///
    /// Stored presets are not rewritten.
    pub fn set_allows_shearing(&mut self, allows: bool) {
        if self.allows_shearing != allows {
            self.allows_shearing = allows;
            self.bump();
        }
    }

    /// Returns the transform at the current abscissa.
    ///
    /// At abscissa `0` and `1` the presets are returned exactly, without a
    /// polar round trip.
    #[must_use]
    pub fn interpolated_transform(&self) -> Affine {
        if self.abscissa <= 0.0 {
            self.preset0
        } else if self.abscissa >= 1.0 {
            self.preset1
        } else {
            interpolate(self.preset0, self.preset1, self.abscissa)
        }
    }

    /// Returns a counter that increases whenever the model changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the current model state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> AffineInterpolationDebugInfo {
        AffineInterpolationDebugInfo {
            preset0: self.preset0,
            preset1: self.preset1,
            polar0: PolarAffine::decompose(self.preset0),
            polar1: PolarAffine::decompose(self.preset1),
            flipped0: FlippedBasis::of(self.preset0),
            flipped1: FlippedBasis::of(self.preset1),
            abscissa: self.abscissa,
            current_preset: self.current_preset(),
            interpolated: self.interpolated_transform(),
            allows_scaling: self.allows_scaling,
            allows_shearing: self.allows_shearing,
            revision: self.revision,
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Debug snapshot of an [`AffineInterpolation`] state.
#[derive(Clone, Copy, Debug)]
pub struct AffineInterpolationDebugInfo {
    /// Transform at abscissa `0`.
    pub preset0: Affine,
    /// Transform at abscissa `1`.
    pub preset1: Affine,
    /// Polar decomposition of `preset0`.
    pub polar0: PolarAffine,
    /// Polar decomposition of `preset1`.
    pub polar1: PolarAffine,
    /// Basis vector of `preset0` carrying its reflection.
    pub flipped0: FlippedBasis,
    /// Basis vector of `preset1` carrying its reflection.
    pub flipped1: FlippedBasis,
    /// Current abscissa.
    pub abscissa: f64,
    /// Preset that [`AffineInterpolation::set_current_preset_to_transform`] writes to.
    pub current_preset: Preset,
    /// Transform at the current abscissa.
    pub interpolated: Affine,
    /// Whether presets may contain scaling.
    pub allows_scaling: bool,
    /// Whether presets may contain shearing.
    pub allows_shearing: bool,
    /// Change counter.
    pub revision: u64,
}
