// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spyglass_scrollbar --heading-base-level=0

//! Spyglass Scroll Bar: decoration configuration and indicator geometry.
//!
//! A scroll-bar decoration is configured once at startup, independently per
//! axis, and then re-reads the viewport on every "viewport changed" event —
//! the same event the inspector consumes. This crate provides:
//!
//! - [`ScrollBarConfig`]: per-axis visual configuration (normal/active
//!   indicator appearance, fade timing), with a platform-style preset
//!   matching the conventional 8-point native indicator.
//! - [`indicator_span`]: the fraction of the track the indicator occupies
//!   and where its leading edge sits, derived from the viewport's offset,
//!   extent, content size, and zoom scale.
//!
//! Rendering, hit testing, and animation playback stay with the host; this
//! crate only describes what to draw.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use spyglass_scrollbar::{indicator_span, Axis, ScrollBarConfig};
//! use spyglass_view::ScrollViewport;
//!
//! let config = ScrollBarConfig::platform_style(Axis::Vertical);
//! assert_eq!(config.normal.thickness, 8.0);
//!
//! let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 250.0, 250.0));
//! viewport.set_content_size(Size::new(1000.0, 1000.0));
//! viewport.set_content_offset(Point::new(0.0, 250.0));
//!
//! let span = indicator_span(&viewport, Axis::Vertical);
//! assert_eq!(span.length, 0.25);
//! assert_eq!(span.leading, 0.25);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::time::Duration;

use spyglass_view::ScrollViewport;

/// The axis a scroll-bar decoration runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A bar along the bottom edge, tracking horizontal scrolling.
    Horizontal,
    /// A bar along the trailing edge, tracking vertical scrolling.
    Vertical,
}

/// Visual appearance of the scroll indicator in one interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorAppearance {
    /// Indicator thickness across the scroll axis, in screen points.
    pub thickness: f64,
    /// Gap between the indicator and the viewport edge, in screen points.
    pub edge_inset: f64,
}

impl IndicatorAppearance {
    /// The conventional platform look: an 8-point indicator hugging the edge.
    pub const PLATFORM: Self = Self {
        thickness: 8.0,
        edge_inset: 2.0,
    };
}

/// Fade timing for showing and hiding the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeAnimation {
    /// Idle time before the indicator starts fading out.
    pub delay: Duration,
    /// Length of the fade itself.
    pub duration: Duration,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
            duration: Duration::from_millis(300),
        }
    }
}

/// Per-axis configuration for a scroll-bar decoration.
///
/// Built once at startup; the decoration itself re-reads the viewport via
/// the host's change notifications.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBarConfig {
    /// Which axis this bar decorates.
    pub axis: Axis,
    /// Appearance while idle.
    pub normal: IndicatorAppearance,
    /// Appearance while the user is interacting with the bar.
    pub active: IndicatorAppearance,
    /// Fade-out timing once scrolling stops.
    pub fade: FadeAnimation,
}

impl ScrollBarConfig {
    /// Platform-style configuration for the given axis: the same 8-point
    /// indicator in both states, with default fade timing.
    #[must_use]
    pub fn platform_style(axis: Axis) -> Self {
        Self {
            axis,
            normal: IndicatorAppearance::PLATFORM,
            active: IndicatorAppearance::PLATFORM,
            fade: FadeAnimation::default(),
        }
    }
}

/// Where the indicator sits on its track, as fractions of the track length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorSpan {
    /// Leading edge of the indicator, in `[0, 1]`.
    pub leading: f64,
    /// Indicator length, in `(0, 1]`.
    pub length: f64,
}

impl IndicatorSpan {
    /// A span covering the whole track, shown when the content fits.
    pub const FULL_TRACK: Self = Self {
        leading: 0.0,
        length: 1.0,
    };
}

/// Computes the indicator span for `viewport` along `axis`.
///
/// The content extent is taken in screen points (content size times zoom
/// scale, the space the content offset lives in). Content that fits the
/// viewport — or a degenerate viewport extent — maps to
/// [`IndicatorSpan::FULL_TRACK`]. Overscrolled offsets are clamped so the
/// indicator never leaves the track.
#[must_use]
pub fn indicator_span(viewport: &ScrollViewport, axis: Axis) -> IndicatorSpan {
    let bounds_size = viewport.bounds_size();
    let content_size = viewport.content_size();
    let (viewport_extent, content_extent, offset) = match axis {
        Axis::Horizontal => (
            bounds_size.width,
            content_size.width * viewport.zoom_scale(),
            viewport.content_offset().x,
        ),
        Axis::Vertical => (
            bounds_size.height,
            content_size.height * viewport.zoom_scale(),
            viewport.content_offset().y,
        ),
    };

    if viewport_extent <= 0.0 || content_extent <= viewport_extent {
        return IndicatorSpan::FULL_TRACK;
    }

    let length = viewport_extent / content_extent;
    let leading = (offset / content_extent).clamp(0.0, 1.0 - length);
    IndicatorSpan { leading, length }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};
    use spyglass_view::ScrollViewport;

    use super::{indicator_span, Axis, IndicatorSpan, ScrollBarConfig};

    fn viewport() -> ScrollViewport {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 250.0, 250.0));
        viewport.set_content_size(Size::new(1000.0, 500.0));
        viewport
    }

    #[test]
    fn fitting_content_fills_the_track() {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 250.0, 250.0));
        viewport.set_content_size(Size::new(100.0, 100.0));
        assert_eq!(
            indicator_span(&viewport, Axis::Horizontal),
            IndicatorSpan::FULL_TRACK
        );
        assert_eq!(
            indicator_span(&viewport, Axis::Vertical),
            IndicatorSpan::FULL_TRACK
        );
    }

    #[test]
    fn span_tracks_offset_and_extent() {
        let mut viewport = viewport();
        viewport.set_content_offset(Point::new(250.0, 125.0));

        let horizontal = indicator_span(&viewport, Axis::Horizontal);
        assert_eq!(horizontal.length, 0.25);
        assert_eq!(horizontal.leading, 0.25);

        let vertical = indicator_span(&viewport, Axis::Vertical);
        assert_eq!(vertical.length, 0.5);
        assert_eq!(vertical.leading, 0.25);
    }

    #[test]
    fn zooming_in_shrinks_the_indicator() {
        let mut viewport = viewport();
        let before = indicator_span(&viewport, Axis::Horizontal);
        viewport.set_zoom_scale(2.0);
        let after = indicator_span(&viewport, Axis::Horizontal);
        assert!(after.length < before.length);
        assert_eq!(after.length, 0.125);
    }

    #[test]
    fn overscroll_is_clamped_to_the_track() {
        let mut viewport = viewport();

        viewport.set_content_offset(Point::new(-50.0, 0.0));
        let span = indicator_span(&viewport, Axis::Horizontal);
        assert_eq!(span.leading, 0.0);

        viewport.set_content_offset(Point::new(5000.0, 0.0));
        let span = indicator_span(&viewport, Axis::Horizontal);
        assert_eq!(span.leading, 1.0 - span.length);
    }

    #[test]
    fn platform_style_matches_native_indicator() {
        let config = ScrollBarConfig::platform_style(Axis::Horizontal);
        assert_eq!(config.axis, Axis::Horizontal);
        assert_eq!(config.normal.thickness, 8.0);
        assert_eq!(config.normal, config.active);
        assert!(config.fade.delay > config.fade.duration);
    }
}
