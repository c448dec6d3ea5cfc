// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot-area layout from a viewport and margins.
//!
//! Hosted visuals don't get to measure their guides: the host hands them a viewport, and the
//! plot rectangle is whatever remains after fixed margins. The only flexibility is that the
//! left and bottom margins grow with the axis label font sizes (a 20px font needs twice the
//! room of the 10px reference).

use kurbo::Rect;

/// The font size at which margins are authored; see [`PlotLayoutSpec`].
pub const REFERENCE_FONT_SIZE: f64 = 10.0;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene coordinate units.
    pub width: f64,
    /// Height in scene coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-side margins around the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Space above the plot.
    pub top: f64,
    /// Space to the right of the plot.
    pub right: f64,
    /// Space below the plot (x-axis labels live here).
    pub bottom: f64,
    /// Space to the left of the plot (y-axis labels live here).
    pub left: f64,
}

impl Margins {
    /// Creates margins.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Layout inputs: base margins plus the axis font sizes that scale them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayoutSpec {
    /// Margins as authored at [`REFERENCE_FONT_SIZE`].
    pub margins: Margins,
    /// Font size of the x-axis tick labels; scales the bottom margin.
    pub x_axis_font_size: f64,
    /// Font size of the y-axis tick labels; scales the left margin.
    pub y_axis_font_size: f64,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    /// Outer bounds, anchored at the origin.
    pub view: Rect,
    /// The plot rectangle. Collapses to zero size when margins exceed the viewport.
    pub plot: Rect,
    /// Effective margins after font scaling.
    pub margins: Margins,
}

impl PlotLayoutSpec {
    /// Creates a layout spec with both axis fonts at the reference size.
    pub fn new(margins: Margins) -> Self {
        Self {
            margins,
            x_axis_font_size: REFERENCE_FONT_SIZE,
            y_axis_font_size: REFERENCE_FONT_SIZE,
        }
    }

    /// Sets the axis font sizes that scale the bottom and left margins.
    pub fn with_axis_font_sizes(mut self, x_axis: f64, y_axis: f64) -> Self {
        self.x_axis_font_size = x_axis;
        self.y_axis_font_size = y_axis;
        self
    }

    /// Computes the plot layout for a viewport.
    pub fn arrange(&self, view: Size) -> PlotLayout {
        let top = self.margins.top.max(0.0);
        let right = self.margins.right.max(0.0);
        let bottom =
            (self.margins.bottom * (self.x_axis_font_size / REFERENCE_FONT_SIZE)).max(0.0);
        let left = (self.margins.left * (self.y_axis_font_size / REFERENCE_FONT_SIZE)).max(0.0);

        let view_w = view.width.max(0.0);
        let view_h = view.height.max(0.0);
        let plot_w = (view_w - left - right).max(0.0);
        let plot_h = (view_h - top - bottom).max(0.0);

        PlotLayout {
            view: Rect::new(0.0, 0.0, view_w, view_h),
            plot: Rect::new(left, top, left + plot_w, top + plot_h),
            margins: Margins::new(top, right, bottom, left),
        }
    }
}
