// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use spyglass_format::GeometryFormatter;
use spyglass_view::ScrollViewport;

/// The closed set of inspected viewport properties.
///
/// The declaration order is the display order and is stable: snapshots list
/// properties exactly as [`Property::ALL`] does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// The current uniform zoom scale.
    ZoomScale,
    /// The content-coordinate origin of the visible area.
    ContentOffset,
    /// The total scrollable content extent.
    ContentSize,
    /// The viewport's frame rectangle.
    Frame,
    /// The viewport's bounds rectangle.
    Bounds,
    /// The visible rectangle in content coordinates.
    VisibleRect,
    /// The size of the visible rectangle in content coordinates.
    VisibleSize,
}

impl Property {
    /// Number of inspected properties.
    pub const COUNT: usize = 7;

    /// Every property, in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ZoomScale,
        Self::ContentOffset,
        Self::ContentSize,
        Self::Frame,
        Self::Bounds,
        Self::VisibleRect,
        Self::VisibleSize,
    ];

    /// Returns the stable display label for this property.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ZoomScale => "ZoomScale",
            Self::ContentOffset => "ContentOffset",
            Self::ContentSize => "ContentSize",
            Self::Frame => "Frame",
            Self::Bounds => "Bounds",
            Self::VisibleRect => "VisibleRect",
            Self::VisibleSize => "VisibleSize",
        }
    }
}

/// Pairs a [`Property`] with the function that reads and formats its value.
///
/// The descriptor table [`PropertyDescriptor::ALL`] is declared statically
/// in display order; snapshot building walks it rather than enumerating
/// properties dynamically.
#[derive(Clone, Copy, Debug)]
pub struct PropertyDescriptor {
    /// The property this descriptor reads.
    pub property: Property,
    /// Extracts the property's value from the viewport and formats it.
    pub read: fn(&ScrollViewport, &GeometryFormatter) -> String,
}

impl PropertyDescriptor {
    /// One descriptor per property, in [`Property::ALL`] order.
    pub const ALL: [Self; Property::COUNT] = [
        Self {
            property: Property::ZoomScale,
            read: read_zoom_scale,
        },
        Self {
            property: Property::ContentOffset,
            read: read_content_offset,
        },
        Self {
            property: Property::ContentSize,
            read: read_content_size,
        },
        Self {
            property: Property::Frame,
            read: read_frame,
        },
        Self {
            property: Property::Bounds,
            read: read_bounds,
        },
        Self {
            property: Property::VisibleRect,
            read: read_visible_rect,
        },
        Self {
            property: Property::VisibleSize,
            read: read_visible_size,
        },
    ];
}

fn read_zoom_scale(viewport: &ScrollViewport, formatter: &GeometryFormatter) -> String {
    formatter.format_scalar(viewport.zoom_scale())
}

fn read_content_offset(viewport: &ScrollViewport, formatter: &GeometryFormatter) -> String {
    formatter.format_point(viewport.content_offset())
}

fn read_content_size(viewport: &ScrollViewport, formatter: &GeometryFormatter) -> String {
    formatter.format_size(viewport.content_size())
}

fn read_frame(viewport: &ScrollViewport, formatter: &GeometryFormatter) -> String {
    formatter.format_rect(viewport.frame())
}

fn read_bounds(viewport: &ScrollViewport, formatter: &GeometryFormatter) -> String {
    formatter.format_rect(viewport.bounds())
}

fn read_visible_rect(viewport: &ScrollViewport, formatter: &GeometryFormatter) -> String {
    formatter.format_rect(viewport.visible_rect())
}

fn read_visible_size(viewport: &ScrollViewport, formatter: &GeometryFormatter) -> String {
    formatter.format_size(viewport.visible_size())
}
