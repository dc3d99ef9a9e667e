// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::insets::EdgeInsets;

/// Headless model of a scrollable, zoomable viewport over larger content.
///
/// `ScrollViewport` tracks the raw state a scroll view exposes — content
/// offset, frame, bounds, content size, and a uniform zoom scale with
/// limits — and derives the region of content currently visible. It can be
/// used to:
/// - Apply scroll and zoom gestures via change-reporting mutators.
/// - Compute the visible rectangle and visible size in content coordinates.
/// - Drive inspectors or decorations that re-read geometry on change.
#[derive(Clone, Debug)]
pub struct ScrollViewport {
    frame: Rect,
    bounds: Rect,
    content_offset: Point,
    content_size: Size,
    zoom_scale: f64,
    min_zoom_scale: f64,
    max_zoom_scale: f64,
}

impl ScrollViewport {
    /// Creates a new viewport with the given frame.
    ///
    /// - Bounds start at the frame's size with a zero origin.
    /// - Content offset is zero and content size is empty.
    /// - Initial zoom scale is `1.0`, clamped to the range `[0.1, 4.0]` by
    ///   default.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            bounds: frame.with_origin(Point::ZERO),
            content_offset: Point::ZERO,
            content_size: Size::ZERO,
            zoom_scale: 1.0,
            min_zoom_scale: 0.1,
            max_zoom_scale: 4.0,
        }
    }

    /// Returns the viewport's frame rectangle, as supplied by the host.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Sets the frame rectangle, returning whether it changed.
    pub fn set_frame(&mut self, frame: Rect) -> bool {
        if self.frame == frame {
            return false;
        }
        self.frame = frame;
        true
    }

    /// Returns the viewport's bounds rectangle, as supplied by the host.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Sets the bounds rectangle, returning whether it changed.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        if self.bounds == bounds {
            return false;
        }
        self.bounds = bounds;
        true
    }

    /// Returns the on-screen viewport extent, i.e. the bounds size.
    #[must_use]
    pub fn bounds_size(&self) -> Size {
        self.bounds.size()
    }

    /// Returns the content-coordinate origin of the visible area.
    #[must_use]
    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    /// Sets the content offset, returning whether it changed.
    pub fn set_content_offset(&mut self, offset: Point) -> bool {
        if self.content_offset == offset {
            return false;
        }
        self.content_offset = offset;
        true
    }

    /// Returns the total scrollable content extent.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Sets the content size, returning whether it changed.
    pub fn set_content_size(&mut self, size: Size) -> bool {
        if self.content_size == size {
            return false;
        }
        self.content_size = size;
        true
    }

    /// Returns the current uniform zoom scale.
    ///
    /// This is the ratio of screen points to content points and is kept
    /// strictly positive by the zoom limits.
    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    /// Returns the minimum zoom scale.
    #[must_use]
    pub fn min_zoom_scale(&self) -> f64 {
        self.min_zoom_scale
    }

    /// Returns the maximum zoom scale.
    #[must_use]
    pub fn max_zoom_scale(&self) -> f64 {
        self.max_zoom_scale
    }

    /// Sets the zoom scale, clamping it into the configured zoom range.
    ///
    /// Returns whether the effective scale changed.
    pub fn set_zoom_scale(&mut self, zoom_scale: f64) -> bool {
        let clamped = zoom_scale.clamp(self.min_zoom_scale, self.max_zoom_scale);
        if (self.zoom_scale - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.zoom_scale = clamped;
        true
    }

    /// Sets the minimum and maximum zoom scales.
    ///
    /// The provided range is normalized so that the minimum does not exceed
    /// the maximum, and the minimum is floored at `f64::MIN_POSITIVE` so the
    /// scale can never reach zero. The current zoom scale is clamped into
    /// the new range. Returns whether the limits or the effective scale
    /// changed.
    pub fn set_zoom_limits(&mut self, min_zoom_scale: f64, max_zoom_scale: f64) -> bool {
        let (min_zoom_scale, max_zoom_scale) = if min_zoom_scale <= max_zoom_scale {
            (min_zoom_scale, max_zoom_scale)
        } else {
            (max_zoom_scale, min_zoom_scale)
        };
        let min_zoom_scale = min_zoom_scale.max(f64::MIN_POSITIVE);
        let max_zoom_scale = max_zoom_scale.max(min_zoom_scale);
        let mut changed =
            self.min_zoom_scale != min_zoom_scale || self.max_zoom_scale != max_zoom_scale;
        self.min_zoom_scale = min_zoom_scale;
        self.max_zoom_scale = max_zoom_scale;
        changed |= self.set_zoom_scale(self.zoom_scale);
        changed
    }

    /// Resets the zoom scale to `1.0`, leaving the content offset untouched.
    ///
    /// The reset scale is still clamped into the configured zoom range.
    /// Returns whether the effective scale changed.
    pub fn reset_zoom(&mut self) -> bool {
        self.set_zoom_scale(1.0)
    }

    /// Returns the visible rectangle in content coordinates.
    ///
    /// Equivalent to [`Self::visible_rect_with_insets`] with
    /// [`EdgeInsets::ZERO`].
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.visible_rect_with_insets(EdgeInsets::ZERO)
    }

    /// Returns the visible rectangle in content coordinates, narrowed by
    /// `insets` in screen space before the zoom transform.
    ///
    /// The computation starts from a screen-space rectangle at the content
    /// offset with the bounds size, shrinks it by `insets` (unclamped, so
    /// oversized insets yield negative extents), and scales it by
    /// `1 / zoom_scale`. The zoom limits keep the scale strictly positive,
    /// so the result is always finite for finite state.
    #[must_use]
    pub fn visible_rect_with_insets(&self, insets: EdgeInsets) -> Rect {
        let screen = Rect::from_origin_size(self.content_offset, self.bounds.size());
        let screen = insets.shrink(screen);
        let scale = 1.0 / self.zoom_scale;
        Rect::new(
            screen.x0 * scale,
            screen.y0 * scale,
            screen.x1 * scale,
            screen.y1 * scale,
        )
    }

    /// Returns the size of the visible rectangle in content coordinates.
    ///
    /// Derived from [`Self::visible_rect`] so the two can never disagree.
    #[must_use]
    pub fn visible_size(&self) -> Size {
        self.visible_rect().size()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{EdgeInsets, ScrollViewport};

    fn sample_viewport() -> ScrollViewport {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 300.0, 400.0));
        viewport.set_content_size(Size::new(1000.0, 1000.0));
        viewport.set_content_offset(Point::new(100.0, 200.0));
        viewport.set_zoom_scale(2.0);
        viewport
    }

    #[test]
    fn visible_rect_at_2x_zoom() {
        let viewport = sample_viewport();
        let visible = viewport.visible_rect();
        assert_eq!(visible.origin(), Point::new(50.0, 100.0));
        assert_eq!(visible.size(), Size::new(150.0, 200.0));
    }

    #[test]
    fn visible_size_agrees_with_visible_rect() {
        let viewport = sample_viewport();
        assert_eq!(viewport.visible_size(), viewport.visible_rect().size());
        assert_eq!(viewport.visible_size(), Size::new(150.0, 200.0));
    }

    #[test]
    fn identity_zoom_shows_bounds_at_offset() {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 50.0, 50.0));
        viewport.set_content_offset(Point::ZERO);
        assert_eq!(viewport.visible_rect(), Rect::new(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn visible_rect_is_pure() {
        let viewport = sample_viewport();
        assert_eq!(viewport.visible_rect(), viewport.visible_rect());
    }

    #[test]
    fn zero_insets_match_plain_visible_rect() {
        let viewport = sample_viewport();
        assert_eq!(
            viewport.visible_rect_with_insets(EdgeInsets::ZERO),
            viewport.visible_rect()
        );
    }

    #[test]
    fn insets_shrink_before_the_zoom_transform() {
        let viewport = sample_viewport();
        let visible = viewport.visible_rect_with_insets(EdgeInsets::new(20.0, 10.0, 20.0, 10.0));
        // Screen rect (110, 220) .. (390, 580), halved by the 2x zoom.
        assert_eq!(visible, Rect::new(55.0, 110.0, 195.0, 290.0));
    }

    #[test]
    fn oversized_insets_pass_through_negative_extents() {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        viewport.set_content_offset(Point::ZERO);
        let visible = viewport.visible_rect_with_insets(EdgeInsets::uniform(8.0));
        assert_eq!(visible.width(), -6.0);
        assert_eq!(visible.height(), -6.0);
    }

    #[test]
    fn zoom_scale_is_clamped_to_limits() {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        viewport.set_zoom_scale(100.0);
        assert_eq!(viewport.zoom_scale(), 4.0);
        viewport.set_zoom_scale(0.0);
        assert_eq!(viewport.zoom_scale(), 0.1);
    }

    #[test]
    fn zoom_limits_are_normalized_and_floored() {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(viewport.set_zoom_limits(8.0, 2.0));
        assert_eq!(viewport.min_zoom_scale(), 2.0);
        assert_eq!(viewport.max_zoom_scale(), 8.0);
        // The current zoom is pulled into the new range.
        assert_eq!(viewport.zoom_scale(), 2.0);

        viewport.set_zoom_limits(0.0, 1.0);
        assert!(viewport.min_zoom_scale() > 0.0);
    }

    #[test]
    fn reset_zoom_keeps_content_offset() {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        viewport.set_content_offset(Point::new(10.0, 10.0));
        viewport.set_zoom_scale(3.0);

        assert!(viewport.reset_zoom());
        assert_eq!(viewport.zoom_scale(), 1.0);
        assert_eq!(viewport.content_offset(), Point::new(10.0, 10.0));

        // Resetting again is a no-op.
        assert!(!viewport.reset_zoom());
    }

    #[test]
    fn mutators_report_no_change_for_identical_state() {
        let mut viewport = sample_viewport();
        assert!(!viewport.set_content_offset(Point::new(100.0, 200.0)));
        assert!(!viewport.set_zoom_scale(2.0));
        assert!(!viewport.set_frame(viewport.frame()));
        assert!(!viewport.set_bounds(viewport.bounds()));
        assert!(!viewport.set_content_size(Size::new(1000.0, 1000.0)));
    }
}
