// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A categorical barchart visual.
//!
//! [`Barchart`] implements [`vizlet_host::Visual`]. Every update runs the same pipeline:
//!
//! 1. Re-parse [`BarchartSettings`] from the persisted blob, falling back per field.
//! 2. Validate the data view and build an immutable [`ViewModel`] (category/value pairs,
//!    the measure's number format, column display names).
//! 3. Derive the plot rectangle from the viewport, base margins and axis font sizes.
//! 4. Build the band and linear scales, the two axes and one bar per data point, then
//!    reconcile against the retained scene and hand the diffs back to the host.
//!
//! Nothing here is fatal: invalid input leaves the prior render standing, a degenerate
//! value domain renders the plot background only, and malformed settings degrade to
//! defaults.

mod data;
mod settings;
mod view_model;
mod visual;

pub use data::{TabularInput, ViewModelError};
pub use settings::{
    BarColor, BarchartSettings, MAX_AXIS_FONT_SIZE, MIN_AXIS_FONT_SIZE, PROPERTIES_CARD,
};
pub use view_model::{DataPoint, ViewModel};
pub use visual::Barchart;
