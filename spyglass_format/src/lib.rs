// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spyglass_format --heading-base-level=0

//! Spyglass Format: deterministic rendering of geometric values.
//!
//! This crate turns scalars, points, sizes, and rectangles into the
//! fixed-precision strings an inspector panel displays. Formatting is pure
//! and deterministic: output never depends on the process locale, and the
//! configuration is an explicitly constructed, immutable value rather than
//! shared process state.
//!
//! - [`FormatOptions`]: immutable configuration (fraction digits, zero by
//!   default).
//! - [`GeometryFormatter`]: the formatting functions themselves.
//!
//! Scalars are rounded half-away-from-zero. Values the formatter cannot
//! render — NaN and the infinities — degrade to the literal `"0"` instead
//! of propagating an error.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use spyglass_format::GeometryFormatter;
//!
//! let formatter = GeometryFormatter::default();
//! assert_eq!(formatter.format_scalar(2.5), "3");
//! assert_eq!(formatter.format_point(Point::new(100.4, -0.5)), "(100, -1)");
//! assert_eq!(
//!     formatter.format_rect(Rect::new(50.0, 100.0, 200.0, 300.0)),
//!     "(50, 100, 150, 200)"
//! );
//! ```
//!
//! This crate is `no_std` (with `alloc`); enable the `libm` feature instead
//! of `std` to supply the rounding primitive on `no_std` targets.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect, Size};

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("spyglass_format requires either the `std` or `libm` feature");

/// Immutable formatting configuration for [`GeometryFormatter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of fraction digits to render; zero by default.
    pub fraction_digits: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { fraction_digits: 0 }
    }
}

/// Pure formatter for the geometric values an inspector displays.
///
/// All methods are deterministic, side-effect free, and independent of the
/// process locale: digits are plain ASCII with no grouping separators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeometryFormatter {
    options: FormatOptions,
}

impl GeometryFormatter {
    /// Creates a formatter with the given options.
    #[must_use]
    pub const fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Returns the formatter's configuration.
    #[must_use]
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Formats a scalar, rounding half-away-from-zero to the configured
    /// fraction digits.
    ///
    /// Non-finite input degrades to the literal `"0"`. Negative zero
    /// renders without a sign.
    #[must_use]
    pub fn format_scalar(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::from("0");
        }
        let mut scale = 1.0;
        for _ in 0..self.options.fraction_digits {
            scale *= 10.0;
        }
        let mut rounded = round_half_away_from_zero(value * scale) / scale;
        if rounded == 0.0 {
            // Drop the sign of negative zero.
            rounded = 0.0;
        }
        format!("{:.*}", usize::from(self.options.fraction_digits), rounded)
    }

    /// Formats a point as `"(x, y)"`.
    #[must_use]
    pub fn format_point(&self, point: Point) -> String {
        format!(
            "({}, {})",
            self.format_scalar(point.x),
            self.format_scalar(point.y)
        )
    }

    /// Formats a size as `"(width, height)"`.
    #[must_use]
    pub fn format_size(&self, size: Size) -> String {
        format!(
            "({}, {})",
            self.format_scalar(size.width),
            self.format_scalar(size.height)
        )
    }

    /// Formats a rectangle as `"(x, y, width, height)"`, origin then size.
    #[must_use]
    pub fn format_rect(&self, rect: Rect) -> String {
        let origin = rect.origin();
        let size = rect.size();
        format!(
            "({}, {}, {}, {})",
            self.format_scalar(origin.x),
            self.format_scalar(origin.y),
            self.format_scalar(size.width),
            self.format_scalar(size.height)
        )
    }
}

#[cfg(feature = "std")]
#[inline]
fn round_half_away_from_zero(value: f64) -> f64 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn round_half_away_from_zero(value: f64) -> f64 {
    libm::round(value)
}
