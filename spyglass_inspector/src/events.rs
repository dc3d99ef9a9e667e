// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use spyglass_view::ScrollViewport;

/// Identifies a subscription registered with [`ViewportHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ScrollViewport)>;

/// Owns a [`ScrollViewport`] and delivers "viewport changed" notifications.
///
/// The hub is the explicit observer interface between gesture handling and
/// everything that re-reads geometry (inspectors, scroll-bar decorations).
/// Mutating operations apply a change to the viewport and synchronously
/// invoke every subscriber — but only when the state actually changed, so
/// no-op gestures produce no notifications.
///
/// Delivery is strictly sequential on the calling thread; subscribers see
/// the fully updated viewport and there is no notion of a pending or
/// partial change.
pub struct ViewportHub {
    viewport: ScrollViewport,
    subscribers: SmallVec<[(SubscriptionId, Callback); 2]>,
    next_id: u64,
}

impl ViewportHub {
    /// Creates a hub owning `viewport`, with no subscribers.
    #[must_use]
    pub fn new(viewport: ScrollViewport) -> Self {
        Self {
            viewport,
            subscribers: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Returns the current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &ScrollViewport {
        &self.viewport
    }

    /// Registers a callback invoked after every effective viewport change.
    ///
    /// The callback is not invoked at registration time; hosts that need an
    /// initial read should consume [`Self::viewport`] directly (as
    /// [`crate::Inspector::new`] does) or call [`Self::notify`].
    pub fn subscribe(&mut self, callback: impl FnMut(&ScrollViewport) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription, returning whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Applies `apply` to the viewport and notifies subscribers if it
    /// reports a change. Returns that report.
    pub fn update(&mut self, apply: impl FnOnce(&mut ScrollViewport) -> bool) -> bool {
        let changed = apply(&mut self.viewport);
        if changed {
            self.notify();
        }
        changed
    }

    /// Notifies all subscribers to re-read the current state.
    ///
    /// Fired automatically by the mutating operations; also callable
    /// directly after a programmatic geometry change made outside the hub.
    pub fn notify(&mut self) {
        let Self {
            viewport,
            subscribers,
            ..
        } = self;
        for (_, callback) in subscribers.iter_mut() {
            callback(viewport);
        }
    }

    /// Scrolls to the given content offset.
    pub fn scroll_to(&mut self, offset: Point) -> bool {
        self.update(|viewport| viewport.set_content_offset(offset))
    }

    /// Sets the zoom scale, clamped into the viewport's zoom range.
    pub fn set_zoom_scale(&mut self, zoom_scale: f64) -> bool {
        self.update(|viewport| viewport.set_zoom_scale(zoom_scale))
    }

    /// Sets the minimum and maximum zoom scales.
    pub fn set_zoom_limits(&mut self, min_zoom_scale: f64, max_zoom_scale: f64) -> bool {
        self.update(|viewport| viewport.set_zoom_limits(min_zoom_scale, max_zoom_scale))
    }

    /// Resets the zoom scale to `1.0`, leaving the content offset untouched.
    pub fn reset_zoom(&mut self) -> bool {
        self.update(ScrollViewport::reset_zoom)
    }

    /// Sets the frame rectangle.
    pub fn set_frame(&mut self, frame: Rect) -> bool {
        self.update(|viewport| viewport.set_frame(frame))
    }

    /// Sets the bounds rectangle.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        self.update(|viewport| viewport.set_bounds(bounds))
    }

    /// Sets the content size.
    pub fn set_content_size(&mut self, size: Size) -> bool {
        self.update(|viewport| viewport.set_content_size(size))
    }
}

impl fmt::Debug for ViewportHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportHub")
            .field("viewport", &self.viewport)
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Point, Rect};
    use spyglass_view::ScrollViewport;

    use super::ViewportHub;

    fn hub() -> ViewportHub {
        ViewportHub::new(ScrollViewport::new(Rect::new(0.0, 0.0, 300.0, 400.0)))
    }

    #[test]
    fn subscribers_fire_on_effective_changes_only() {
        let mut hub = hub();
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        hub.subscribe(move |_| seen.set(seen.get() + 1));

        assert!(hub.scroll_to(Point::new(10.0, 0.0)));
        assert_eq!(count.get(), 1);

        // Scrolling to the same offset is a no-op and must not notify.
        assert!(!hub.scroll_to(Point::new(10.0, 0.0)));
        assert_eq!(count.get(), 1);

        assert!(hub.set_zoom_scale(2.0));
        assert!(hub.reset_zoom());
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn subscribers_observe_the_updated_state() {
        let mut hub = hub();
        let zoom = Rc::new(Cell::new(0.0));
        let seen = zoom.clone();
        hub.subscribe(move |viewport| seen.set(viewport.zoom_scale()));

        hub.set_zoom_scale(2.0);
        assert_eq!(zoom.get(), 2.0);

        hub.reset_zoom();
        assert_eq!(zoom.get(), 1.0);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut hub = hub();
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let id = hub.subscribe(move |_| seen.set(seen.get() + 1));

        hub.scroll_to(Point::new(1.0, 1.0));
        assert!(hub.unsubscribe(id));
        hub.scroll_to(Point::new(2.0, 2.0));

        assert_eq!(count.get(), 1);
        assert!(!hub.unsubscribe(id));
    }

    #[test]
    fn update_only_notifies_when_reported() {
        let mut hub = hub();
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        hub.subscribe(move |_| seen.set(seen.get() + 1));

        assert!(!hub.update(|_| false));
        assert_eq!(count.get(), 0);

        assert!(hub.update(|viewport| viewport.set_zoom_scale(0.5)));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn notify_forces_a_re_read() {
        let mut hub = hub();
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        hub.subscribe(move |_| seen.set(seen.get() + 1));

        hub.notify();
        assert_eq!(count.get(), 1);
    }
}
