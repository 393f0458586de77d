// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Polar Affine: natural-looking interpolation of 2D affine transforms.
//!
//! Blending the six coefficients of two affine transforms directly gives poor
//! motion: a shape rotating by half a turn shrinks to a point on the way.
//! This crate instead rewrites the linear part of a transform as two basis
//! vectors in polar form (radius + angle) and keeps the translation as a
//! point. Radii, angles and translation are interpolated independently, then
//! converted back, so intermediate frames rotate and scale the way a user
//! expects.
//!
//! It provides:
//! - [`PolarVector`]: a vector as `(r, a)`, with conversions to and from
//!   [`kurbo::Point`] and a [`flip`](PolarVector::flip) that re-encodes the
//!   same vector with a negated radius and an angle half a turn away.
//! - [`PolarAffine`]: [`decompose`](PolarAffine::decompose) /
//!   [`recompose`](PolarAffine::recompose) between [`kurbo::Affine`] and polar
//!   form, plus field-wise [`lerp`](PolarAffine::lerp) and the [`interpolate`]
//!   shorthand.
//! - [`AffineInterpolation`]: a small headless model holding two presets and
//!   an interpolation abscissa, with optional constraints that strip scaling
//!   or shearing from newly stored presets.
//!
//! It does **not** handle gestures, drawing, or change notification. Callers
//! poll [`AffineInterpolation::revision`] to notice changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::f64::consts::PI;
//! use kurbo::{Affine, Point};
//! use understory_polar_affine::interpolate;
//!
//! let from = Affine::IDENTITY;
//! let to = Affine::rotate(0.9 * PI);
//!
//! for i in 0..=10 {
//!     let m = interpolate(from, to, f64::from(i) / 10.0);
//!     // A unit point stays on the unit circle for the whole rotation.
//!     let p = m * Point::new(1.0, 0.0);
//!     assert!((p.to_vec2().hypot() - 1.0).abs() < 1e-9);
//! }
//! ```
//!
//! ## Reflections
//!
//! A transform whose determinant is negative mirrors the plane. Its
//! decomposition flips exactly one basis vector: the radius is negated and
//! the angle moved by half a turn toward zero, which names the same vector. `u` is flipped when `a < d`
//! and `v` otherwise (see [`FlippedBasis::of`]). Because the flipped angle
//! stays close to its neighbours, interpolating between two mirrored poses
//! does not swing the shape through a large arc.
//!
//! ## Degenerate input
//!
//! Every function is total over finite input. Singular maps and zero-length
//! basis vectors decompose to well-defined values (a zero vector has angle
//! `0`), although the resulting motion may turn abruptly.
//!
//! Angles are never normalized; interpolation relies on that.
//!
//! This crate is `no_std`.

#![no_std]

mod model;
mod polar_affine;
mod polar_vector;

pub use model::{AffineInterpolation, AffineInterpolationDebugInfo, Preset, constrain};
pub use polar_affine::{FlippedBasis, PolarAffine, interpolate};
pub use polar_vector::PolarVector;
