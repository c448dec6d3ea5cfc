// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `vizlet_scene` marks carry an explicit `z_index` for render ordering. The chart layer sets
//! z-indexes consistently so visuals don't have to hand-tune paint order.
//!
//! These values are intentionally coarse. Renderers should sort by `(z_index, MarkId)` for a
//! deterministic tie-break.

/// Plot background/frame fills.
pub const PLOT_BACKGROUND: i32 = -100;

/// Filled series marks (bars).
pub const SERIES_FILL: i32 = 0;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Chart-level annotations (e.g. diagnostic text).
pub const ANNOTATIONS: i32 = 80;
