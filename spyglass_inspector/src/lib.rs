// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spyglass_inspector --heading-base-level=0

//! Spyglass Inspector: live property snapshots of a scroll viewport.
//!
//! This crate connects a [`spyglass_view::ScrollViewport`] to a display
//! layer that lists the viewport's geometric properties. It provides:
//!
//! - [`Property`]: the closed, explicitly ordered enumeration of inspected
//!   properties (zoom scale, content offset, content size, frame, bounds,
//!   visible rect, visible size).
//! - [`PropertyDescriptor`]: a statically declared table pairing each
//!   property with the function that extracts and formats its value.
//! - [`PropertySnapshot`]: the ordered property→string mapping, rebuilt in
//!   full on every geometry change and never patched in place.
//! - [`ViewportHub`]: an explicit observer hub that owns the viewport,
//!   applies mutations, and synchronously notifies subscribers whenever the
//!   state actually changed.
//! - [`Inspector`]: a presenter holding the formatter and the latest
//!   snapshot, exposing `(label, value)` rows for a list widget.
//!
//! The pipeline is a pure, single-threaded sequence: gesture → hub mutation
//! → change notification → snapshot rebuild → row re-render. There is no
//! background work and no shared mutable state beyond the current snapshot,
//! which is always replaced wholesale.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect, Size};
//! use spyglass_format::GeometryFormatter;
//! use spyglass_inspector::{Inspector, Property, ViewportHub};
//! use spyglass_view::ScrollViewport;
//!
//! let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 300.0, 400.0));
//! viewport.set_content_size(Size::new(1000.0, 1000.0));
//!
//! let mut hub = ViewportHub::new(viewport);
//! let inspector = Rc::new(RefCell::new(Inspector::new(
//!     GeometryFormatter::default(),
//!     hub.viewport(),
//! )));
//!
//! let shared = inspector.clone();
//! hub.subscribe(move |viewport| shared.borrow_mut().viewport_changed(viewport));
//!
//! hub.scroll_to(Point::new(100.0, 200.0));
//! hub.set_zoom_scale(2.0);
//!
//! let inspector = inspector.borrow();
//! assert_eq!(inspector.snapshot().get(Property::ZoomScale), "2");
//! assert_eq!(
//!     inspector.snapshot().get(Property::VisibleRect),
//!     "(50, 100, 150, 200)"
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod events;
mod presenter;
mod property;
mod snapshot;

pub use events::{SubscriptionId, ViewportHub};
pub use presenter::Inspector;
pub use property::{Property, PropertyDescriptor};
pub use snapshot::PropertySnapshot;
