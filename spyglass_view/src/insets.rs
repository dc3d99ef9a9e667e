// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Per-edge shrink amounts applied to a rectangle in screen coordinates.
///
/// Positive values shrink the rectangle: the origin moves right/down by the
/// left/top inset, and the size shrinks by the sum of the opposing insets.
/// Negative values expand it. Insets are applied before the screen→content
/// zoom transform in [`crate::ScrollViewport::visible_rect_with_insets`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the right edge.
    pub right: f64,
}

impl EdgeInsets {
    /// Insets of zero on every edge; shrinking by these is the identity.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Creates insets from the four per-edge amounts.
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates insets with the same amount on every edge.
    #[must_use]
    pub const fn uniform(amount: f64) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    /// Shrinks `rect` by these insets.
    ///
    /// Insets exceeding the rectangle's size produce negative width/height;
    /// the result is returned unclamped so callers observe the degenerate
    /// extents directly.
    #[must_use]
    pub fn shrink(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 + self.left,
            rect.y0 + self.top,
            rect.x1 - self.right,
            rect.y1 - self.bottom,
        )
    }
}
