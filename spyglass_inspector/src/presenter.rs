// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use spyglass_format::GeometryFormatter;
use spyglass_view::ScrollViewport;

use crate::snapshot::PropertySnapshot;

/// Presenter holding the formatter and the latest property snapshot.
///
/// An `Inspector` builds its first snapshot at construction and rebuilds it
/// on every [`Self::viewport_changed`] call, replacing the previous one
/// wholesale. Display layers read [`Self::rows`] to render the property
/// list; the rows always cover every property, in display order.
#[derive(Clone, Debug)]
pub struct Inspector {
    formatter: GeometryFormatter,
    snapshot: PropertySnapshot,
}

impl Inspector {
    /// Creates an inspector with an initial snapshot of `viewport`.
    #[must_use]
    pub fn new(formatter: GeometryFormatter, viewport: &ScrollViewport) -> Self {
        let snapshot = PropertySnapshot::build(viewport, &formatter);
        Self {
            formatter,
            snapshot,
        }
    }

    /// Returns the formatter used for snapshot values.
    #[must_use]
    pub fn formatter(&self) -> &GeometryFormatter {
        &self.formatter
    }

    /// Returns the latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &PropertySnapshot {
        &self.snapshot
    }

    /// Rebuilds the snapshot from the viewport's current state.
    ///
    /// Wire this to a change source such as
    /// [`crate::ViewportHub::subscribe`].
    pub fn viewport_changed(&mut self, viewport: &ScrollViewport) {
        self.snapshot = PropertySnapshot::build(viewport, &self.formatter);
    }

    /// Iterates `(label, value)` rows for a list widget, in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.snapshot
            .iter()
            .map(|(property, value)| (property.label(), value))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size};
    use spyglass_format::GeometryFormatter;
    use spyglass_view::ScrollViewport;

    use super::Inspector;
    use crate::property::Property;

    #[test]
    fn initial_snapshot_reflects_construction_state() {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 50.0, 50.0));
        viewport.set_content_size(Size::new(200.0, 200.0));
        let inspector = Inspector::new(GeometryFormatter::default(), &viewport);

        assert_eq!(inspector.snapshot().get(Property::VisibleRect), "(0, 0, 50, 50)");
        assert_eq!(inspector.rows().count(), Property::COUNT);
    }

    #[test]
    fn rows_pair_labels_with_values_in_order() {
        let viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let inspector = Inspector::new(GeometryFormatter::default(), &viewport);

        let labels: Vec<_> = inspector.rows().map(|(label, _)| label).collect();
        assert_eq!(labels[0], "ZoomScale");
        assert_eq!(labels[6], "VisibleSize");
        assert_eq!(labels.len(), 7);
    }

    #[test]
    fn reset_flow_rebuilds_with_zoom_one_and_offset_kept() {
        let mut viewport = ScrollViewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        viewport.set_content_offset(Point::new(10.0, 10.0));
        viewport.set_zoom_scale(3.0);

        let mut inspector = Inspector::new(GeometryFormatter::default(), &viewport);
        assert_eq!(inspector.snapshot().get(Property::ZoomScale), "3");

        viewport.reset_zoom();
        inspector.viewport_changed(&viewport);

        assert_eq!(inspector.snapshot().get(Property::ZoomScale), "1");
        assert_eq!(inspector.snapshot().get(Property::ContentOffset), "(10, 10)");
    }
}
