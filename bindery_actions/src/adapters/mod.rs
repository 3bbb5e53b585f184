// Copyright 2025 the Bindery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters that connect the registry to view data sources.

pub mod table;
