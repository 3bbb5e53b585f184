// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bindery Model: a sectioned, index-path addressed data model.
//!
//! Bindery Model is the data side of a table or collection view binding.
//!
//! - Stores row objects in sections, each with an optional header and footer object.
//! - Addresses rows with [`IndexPath`] (section, row).
//! - Returns the affected paths from every mutation so view batch updates can be driven directly.
//!
//! It does not know about cells or views. Adapters (for example the table
//! adapter in `bindery_actions`) read it through the [`SectionedSource`] trait.
//!
//! # Example
//!
//! ```rust
//! use bindery_model::{IndexPath, Model, SectionedSource};
//!
//! let mut model: Model<&str, &str, u32> = Model::from_list(vec![1, 2]);
//! let section = model.add_section_with_header("More");
//! let path = model.add_object(3);
//! assert_eq!(path, IndexPath::new(section, 0));
//! assert_eq!(model.object_at(path), Some(&3));
//! assert_eq!(model.header_at(section), Some(&"More"));
//!
//! // Out-of-range mutations are reported rather than panicking.
//! assert!(model.add_object_to_section(4, 9).is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod model;
pub mod source;
pub mod types;

pub use model::{Model, ModelError};
pub use source::SectionedSource;
pub use types::{IndexPath, Section};
