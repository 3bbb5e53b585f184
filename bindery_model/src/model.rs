// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sectioned model: storage, queries, and mutations.
//!
//! ## Addressing
//!
//! Every row is addressed by an [`IndexPath`]. Mutations return the paths (or
//! section indices) they affected so callers can forward them to a view's
//! batch-update API unchanged.
//!
//! ## Out-of-range indices
//!
//! Reads return `None` and mutations return [`ModelError`] rather than
//! panicking. Appending helpers ([`Model::add_object`],
//! [`Model::set_footer_for_last_section`]) first ensure at least one section
//! exists, so they cannot fail.

use alloc::vec::Vec;

use crate::source::SectionedSource;
use crate::types::{IndexPath, Section};

/// Errors returned by [`Model`] mutations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// The section index is past the end of the model.
    #[error("section {section} out of bounds (model has {count} sections)")]
    SectionOutOfBounds {
        /// Requested section.
        section: usize,
        /// Number of sections at the time of the call.
        count: usize,
    },
    /// The row index is past the end of its section.
    #[error("row {path} out of bounds (section has {count} rows)")]
    RowOutOfBounds {
        /// Requested path.
        path: IndexPath,
        /// Number of rows in the section at the time of the call.
        count: usize,
    },
}

/// A container of objects arranged in sections with optional header and footer objects.
///
/// `H` is the header type, `F` the footer type, and `T` the row object type.
#[derive(Clone, Debug, PartialEq)]
pub struct Model<H, F, T> {
    sections: Vec<Section<H, F, T>>,
}

impl<H, F, T> Default for Model<H, F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, F, T> Model<H, F, T> {
    /// A model with a single, empty section.
    pub fn new() -> Self {
        Self::from_sections(alloc::vec![Section::empty()])
    }

    /// A model with a single section holding `list`.
    pub fn from_list(list: Vec<T>) -> Self {
        Self::from_sections(alloc::vec![Section::with_objects(list)])
    }

    /// A model from explicit sections. An empty vector yields a model with no sections.
    pub fn from_sections(sections: Vec<Section<H, F, T>>) -> Self {
        Self { sections }
    }

    /// All sections in order.
    pub fn sections(&self) -> &[Section<H, F, T>] {
        &self.sections
    }

    /// Consume the model, returning its sections.
    pub fn into_sections(self) -> Vec<Section<H, F, T>> {
        self.sections
    }

    /// Total number of rows across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.objects.len()).sum()
    }

    /// Returns true if no section holds any row.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.objects.is_empty())
    }

    /// Iterate all rows with their paths, section-major.
    pub fn iter(&self) -> impl Iterator<Item = (IndexPath, &T)> + '_ {
        self.sections.iter().enumerate().flat_map(|(s, section)| {
            section
                .objects
                .iter()
                .enumerate()
                .map(move |(r, o)| (IndexPath::new(s, r), o))
        })
    }

    /// Mutable access to the object at `path`.
    pub fn object_at_mut(&mut self, path: IndexPath) -> Option<&mut T> {
        self.sections
            .get_mut(path.section)?
            .objects
            .get_mut(path.row)
    }

    /// Append `object` to the last section, creating a section if the model has none.
    pub fn add_object(&mut self, object: T) -> IndexPath {
        self.ensure_minimal_state();
        let last = self.sections.len() - 1;
        self.push_row(last, object)
    }

    /// Append each of `objects` to the last section.
    pub fn add_objects(&mut self, objects: impl IntoIterator<Item = T>) -> Vec<IndexPath> {
        objects.into_iter().map(|o| self.add_object(o)).collect()
    }

    /// Append `object` to `section`.
    pub fn add_object_to_section(
        &mut self,
        object: T,
        section: usize,
    ) -> Result<IndexPath, ModelError> {
        self.check_section(section)?;
        Ok(self.push_row(section, object))
    }

    /// Append each of `objects` to `section`.
    ///
    /// The section is validated up front, so either every object is added or none is.
    pub fn add_objects_to_section(
        &mut self,
        objects: impl IntoIterator<Item = T>,
        section: usize,
    ) -> Result<Vec<IndexPath>, ModelError> {
        self.check_section(section)?;
        Ok(objects
            .into_iter()
            .map(|o| self.push_row(section, o))
            .collect())
    }

    /// Remove and return the object at `path`. Later rows in the section shift up.
    pub fn remove_object_at(&mut self, path: IndexPath) -> Result<T, ModelError> {
        self.check_section(path.section)?;
        let objects = &mut self.sections[path.section].objects;
        if path.row >= objects.len() {
            return Err(ModelError::RowOutOfBounds {
                path,
                count: objects.len(),
            });
        }
        Ok(objects.remove(path.row))
    }

    /// Append a new, empty section with `header`. Returns its index.
    pub fn add_section_with_header(&mut self, header: H) -> usize {
        self.sections.push(Section::with_header(header));
        self.sections.len() - 1
    }

    /// Insert a new, empty section with `header` at `section`.
    ///
    /// `section` may equal the current section count, which appends.
    pub fn insert_section_with_header(
        &mut self,
        header: H,
        section: usize,
    ) -> Result<usize, ModelError> {
        if section > self.sections.len() {
            return Err(ModelError::SectionOutOfBounds {
                section,
                count: self.sections.len(),
            });
        }
        self.sections.insert(section, Section::with_header(header));
        Ok(section)
    }

    /// Remove and return the section at `section`.
    pub fn remove_section_at(&mut self, section: usize) -> Result<Section<H, F, T>, ModelError> {
        self.check_section(section)?;
        Ok(self.sections.remove(section))
    }

    /// Set the footer of the last section, creating a section if the model has none.
    pub fn set_footer_for_last_section(&mut self, footer: F) -> usize {
        self.ensure_minimal_state();
        let last = self.sections.len() - 1;
        self.sections[last].footer = Some(footer);
        last
    }

    /// Set the footer of `section`, replacing any previous footer.
    pub fn set_footer(&mut self, footer: F, section: usize) -> Result<usize, ModelError> {
        self.check_section(section)?;
        self.sections[section].footer = Some(footer);
        Ok(section)
    }

    fn push_row(&mut self, section: usize, object: T) -> IndexPath {
        let objects = &mut self.sections[section].objects;
        objects.push(object);
        IndexPath::new(section, objects.len() - 1)
    }

    fn check_section(&self, section: usize) -> Result<(), ModelError> {
        if section < self.sections.len() {
            Ok(())
        } else {
            Err(ModelError::SectionOutOfBounds {
                section,
                count: self.sections.len(),
            })
        }
    }

    fn ensure_minimal_state(&mut self) {
        if self.sections.is_empty() {
            self.sections.push(Section::empty());
        }
    }
}

impl<H, F, T> SectionedSource for Model<H, F, T> {
    type Object = T;
    type Header = H;
    type Footer = F;

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn row_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(|s| s.objects.len())
    }

    fn object_at(&self, path: IndexPath) -> Option<&T> {
        self.sections.get(path.section)?.objects.get(path.row)
    }

    fn header_at(&self, section: usize) -> Option<&H> {
        self.sections.get(section)?.header.as_ref()
    }

    fn footer_at(&self, section: usize) -> Option<&F> {
        self.sections.get(section)?.footer.as_ref()
    }
}

impl<H, F, T> FromIterator<T> for Model<H, F, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_list(iter.into_iter().collect())
    }
}
