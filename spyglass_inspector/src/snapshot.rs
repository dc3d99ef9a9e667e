// Copyright 2026 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use spyglass_format::GeometryFormatter;
use spyglass_view::ScrollViewport;

use crate::property::{Property, PropertyDescriptor};

/// An ordered mapping from every [`Property`] to its formatted value.
///
/// A snapshot is built in one pass over the descriptor table, so it always
/// holds exactly one entry per property, in [`Property::ALL`] order. It is
/// replaced wholesale on each geometry change; there is no partially built
/// state for a display layer to observe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySnapshot {
    entries: [(Property, String); Property::COUNT],
}

impl PropertySnapshot {
    /// Builds a snapshot of `viewport` using `formatter`.
    #[must_use]
    pub fn build(viewport: &ScrollViewport, formatter: &GeometryFormatter) -> Self {
        let entries = core::array::from_fn(|i| {
            let descriptor = &PropertyDescriptor::ALL[i];
            (descriptor.property, (descriptor.read)(viewport, formatter))
        });
        Self { entries }
    }

    /// Returns the formatted value for `property`.
    #[must_use]
    pub fn get(&self, property: Property) -> &str {
        // Entries are laid out in declaration order by construction.
        &self.entries[property as usize].1
    }

    /// Iterates entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &str)> {
        self.entries
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    /// Number of entries; always [`Property::COUNT`].
    #[must_use]
    pub const fn len(&self) -> usize {
        Property::COUNT
    }

    /// Returns `false`; a built snapshot is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}
