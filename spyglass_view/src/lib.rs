// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spyglass_view --heading-base-level=0

//! Spyglass View: scroll-viewport state and visible-rect geometry.
//!
//! This crate provides a small, headless model of a scrollable, zoomable
//! viewport over larger content. It tracks the raw viewport state — content
//! offset, frame, bounds, content size, and a uniform zoom scale with limits —
//! and derives the portion of content currently visible:
//!
//! - [`ScrollViewport`]: the raw state plus change-reporting mutators.
//! - [`EdgeInsets`]: a per-edge shrink applied to a rectangle before the
//!   screen→content transform.
//! - [`ScrollViewport::visible_rect`] / [`ScrollViewport::visible_size`]:
//!   the visible region in content coordinates.
//!
//! It does **not** own any widget tree, gesture recognition, or rendering
//! backend. Callers are expected to:
//! - Feed scroll and zoom gestures into the mutators at a higher layer.
//! - Re-read the derived geometry whenever a mutator reports a change.
//! - Render the content and any decorations themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use spyglass_view::ScrollViewport;
//!
//! // A 300x400 viewport over 1000x1000 content.
//! let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 300.0, 400.0));
//! viewport.set_content_size(Size::new(1000.0, 1000.0));
//!
//! // Scroll and zoom in.
//! viewport.set_content_offset(Point::new(100.0, 200.0));
//! viewport.set_zoom_scale(2.0);
//!
//! // At 2x zoom, the viewport shows a quarter of the area it would at 1x.
//! let visible = viewport.visible_rect();
//! assert_eq!(visible, Rect::new(50.0, 100.0, 200.0, 300.0));
//! ```
//!
//! ## Design notes
//!
//! - The zoom scale is uniform and kept strictly positive by the configured
//!   limits, so the `1 / zoom_scale` transform never divides by zero.
//! - Mutators return `bool` to report whether the state actually changed,
//!   letting hosts decide when to fire a "viewport changed" notification.
//! - Inset shrinking is deliberately unclamped: insets larger than the
//!   viewport produce a rectangle with negative extents, which callers see
//!   as-is.
//!
//! This crate is `no_std`.

#![no_std]

mod insets;
mod viewport;

pub use insets::EdgeInsets;
pub use viewport::ScrollViewport;
