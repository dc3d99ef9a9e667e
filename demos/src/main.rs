// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless inspector demo.
//!
//! Wires a [`ScrollViewport`] through a [`ViewportHub`] to an [`Inspector`]
//! and two scroll-bar decorations, replays a short scroll/zoom session, and
//! prints the property list after every change — the same pipeline a real
//! host would drive from gesture callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use spyglass_format::GeometryFormatter;
use spyglass_inspector::{Inspector, ViewportHub};
use spyglass_scrollbar::{indicator_span, Axis, ScrollBarConfig};
use spyglass_view::ScrollViewport;

fn print_rows(inspector: &Inspector) {
    for (label, value) in inspector.rows() {
        println!("  {label:<14} {value}");
    }
}

fn main() {
    // A phone-sized viewport over a landscape photo.
    let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 375.0, 667.0));
    viewport.set_content_size(Size::new(1024.0, 768.0));

    let mut hub = ViewportHub::new(viewport);

    let inspector = Rc::new(RefCell::new(Inspector::new(
        GeometryFormatter::default(),
        hub.viewport(),
    )));
    let shared = inspector.clone();
    hub.subscribe(move |viewport| shared.borrow_mut().viewport_changed(viewport));

    // The decorations are configured once and re-read the viewport on the
    // same change event the inspector consumes.
    let bars = [
        ScrollBarConfig::platform_style(Axis::Horizontal),
        ScrollBarConfig::platform_style(Axis::Vertical),
    ];
    for bar in bars {
        hub.subscribe(move |viewport| {
            let span = indicator_span(viewport, bar.axis);
            println!(
                "  {:?} indicator: leading {:.2}, length {:.2}",
                bar.axis, span.leading, span.length
            );
        });
    }

    println!("initial state:");
    print_rows(&inspector.borrow());

    println!("\nscroll to (100, 200):");
    hub.scroll_to(Point::new(100.0, 200.0));
    print_rows(&inspector.borrow());

    println!("\nzoom to 2x:");
    hub.set_zoom_scale(2.0);
    print_rows(&inspector.borrow());

    println!("\nreset zoom (offset is kept):");
    hub.reset_zoom();
    print_rows(&inspector.borrow());
}
