// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the model: index paths and sections.

use alloc::vec::Vec;

/// Two-level position of an object in a sectioned model.
///
/// Ordered section-major, so sorting a list of paths yields display order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IndexPath {
    /// Section index.
    pub section: usize,
    /// Row index within the section.
    pub row: usize,
}

impl IndexPath {
    /// Create a path from a section and row.
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl core::fmt::Display for IndexPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

/// One section of a [`Model`](crate::Model): optional header and footer plus its rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Section<H, F, T> {
    /// Header object, if any.
    pub header: Option<H>,
    /// Footer object, if any.
    pub footer: Option<F>,
    /// Row objects in display order.
    pub objects: Vec<T>,
}

impl<H, F, T> Section<H, F, T> {
    /// An empty section without header or footer.
    pub const fn empty() -> Self {
        Self {
            header: None,
            footer: None,
            objects: Vec::new(),
        }
    }

    /// A section holding `objects`, without header or footer.
    pub fn with_objects(objects: Vec<T>) -> Self {
        Self {
            header: None,
            footer: None,
            objects,
        }
    }

    /// An empty section with a header.
    pub fn with_header(header: H) -> Self {
        Self {
            header: Some(header),
            footer: None,
            objects: Vec::new(),
        }
    }
}

impl<H, F, T> Default for Section<H, F, T> {
    fn default() -> Self {
        Self::empty()
    }
}
