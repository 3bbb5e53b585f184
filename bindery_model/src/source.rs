// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-side trait for sectioned data sources.

use crate::types::IndexPath;

/// Read access to a sectioned collection of row objects.
///
/// View adapters are written against this trait so that any container able to
/// answer these queries (not only [`Model`](crate::Model)) can back a table.
pub trait SectionedSource {
    /// Row object type.
    type Object;
    /// Section header type.
    type Header;
    /// Section footer type.
    type Footer;

    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of rows in `section`, or `None` if the section does not exist.
    fn row_count(&self, section: usize) -> Option<usize>;

    /// Object at `path`, or `None` if the path is out of range.
    fn object_at(&self, path: IndexPath) -> Option<&Self::Object>;

    /// Header of `section`, if the section exists and has one.
    fn header_at(&self, section: usize) -> Option<&Self::Header>;

    /// Footer of `section`, if the section exists and has one.
    fn footer_at(&self, section: usize) -> Option<&Self::Footer>;

    /// First path (section-major) whose object satisfies `pred`.
    ///
    /// This is a linear scan.
    fn path_where(&self, mut pred: impl FnMut(&Self::Object) -> bool) -> Option<IndexPath>
    where
        Self: Sized,
    {
        for section in 0..self.section_count() {
            let rows = self.row_count(section).unwrap_or(0);
            for row in 0..rows {
                let path = IndexPath::new(section, row);
                if self.object_at(path).is_some_and(&mut pred) {
                    return Some(path);
                }
            }
        }
        None
    }
}
