// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing contract for Vizlet visuals.
//!
//! A host embeds a [`Visual`], constructs it once with [`HostServices`], then calls
//! [`Visual::update`] serially with [`UpdateOptions`]: a viewport, an optional tabular
//! [`DataView`] and the raw persisted-settings blob. The visual returns
//! [`vizlet_scene::MarkDiff`]s describing how its retained mark set changed, and the host
//! applies them to whatever surface it renders to. [`Visual::enumerate_settings`] backs a
//! host-driven configuration pane.

mod data_view;
mod settings;
mod visual;

pub use data_view::{Categorical, CategoryColumn, ColumnMetadata, DataView, Metadata, ValueColumn};
pub use settings::{NumberRange, SettingsCard, SettingsProperty, SettingsValue};
pub use visual::{HostServices, UpdateOptions, Viewport, Visual};
