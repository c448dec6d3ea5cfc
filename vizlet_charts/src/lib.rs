// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for Vizlet visuals.
//!
//! This crate is a small, reusable layer above `vizlet_scene`:
//! - **Scales** map categories and data values into plot coordinates.
//! - **Layout** turns a viewport plus margins into a plot rectangle.
//! - **Guides** (axes) and **series** (bars) are built by generating `vizlet_scene::Mark`s
//!   with stable ids, so repeated generation diffs incrementally.
//! - **Formatting** renders tick values with display units (`12500` as `12.5K`).
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod axis;
mod bar_mark;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod scale;
mod z_order;

pub use axis::{AxisOrient, AxisScale, AxisSpec, AxisStyle, StrokeStyle};
pub use bar_mark::BarMarkSpec;
pub use format::{DisplayUnit, DisplayUnitFormatter, FormatOptions, ValueFormatter};
pub use layout::{Margins, PlotLayout, PlotLayoutSpec, REFERENCE_FONT_SIZE, Size};
pub use scale::{ScaleBand, ScaleLinear};
pub use z_order::*;
