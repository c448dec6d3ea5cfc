// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick value formatting.
//!
//! Value axes format their tick labels through a [`ValueFormatter`]. The default
//! implementation, [`DisplayUnitFormatter`], mirrors what BI hosts do: pick a display unit
//! (`K`/`M`/`bn`/`T`) from a reference magnitude so all labels on one axis share a unit, and
//! take decimal precision from the column's number format string when one is present.
//!
//! Only a small slice of the host number-format grammar is understood here: the first
//! format section, its decimal places, a `%` marker and a leading `$`. That covers the
//! sample visuals; anything fancier belongs in a host-provided formatter.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats axis tick values for display.
pub trait ValueFormatter: core::fmt::Debug {
    /// Formats one value.
    fn format(&self, value: f64) -> String;
}

/// A power-of-a-thousand display unit shared by all labels of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayUnit {
    /// Values are shown as-is.
    None,
    /// Values are divided by 1e3 and suffixed `K`.
    Thousands,
    /// Values are divided by 1e6 and suffixed `M`.
    Millions,
    /// Values are divided by 1e9 and suffixed `bn`.
    Billions,
    /// Values are divided by 1e12 and suffixed `T`.
    Trillions,
}

impl DisplayUnit {
    /// Picks the unit for a reference magnitude (typically a fraction of the axis maximum).
    pub fn from_reference(reference: f64) -> Self {
        let r = reference.abs();
        if !r.is_finite() {
            return Self::None;
        }
        if r >= 1e12 {
            Self::Trillions
        } else if r >= 1e9 {
            Self::Billions
        } else if r >= 1e6 {
            Self::Millions
        } else if r >= 1e3 {
            Self::Thousands
        } else {
            Self::None
        }
    }

    /// The divisor applied to values before formatting.
    pub fn factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Thousands => 1e3,
            Self::Millions => 1e6,
            Self::Billions => 1e9,
            Self::Trillions => 1e12,
        }
    }

    /// The suffix appended after the scaled value.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Thousands => "K",
            Self::Millions => "M",
            Self::Billions => "bn",
            Self::Trillions => "T",
        }
    }
}

/// Inputs for constructing a [`DisplayUnitFormatter`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormatOptions {
    /// The column's number format string, if the data source provides one.
    pub format: Option<String>,
    /// Reference magnitude used to pick the display unit.
    pub reference: f64,
    /// Host locale tag (e.g. `en-US`).
    ///
    /// Accepted for interface parity with host formatters; the default implementation
    /// formats invariantly and ignores it.
    pub locale: Option<String>,
}

/// The default, locale-agnostic [`ValueFormatter`].
///
/// Hosts with real localization plug their own [`ValueFormatter`] into the axis instead.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayUnitFormatter {
    unit: DisplayUnit,
    decimals: Option<usize>,
    percent: bool,
    prefix: String,
}

impl DisplayUnitFormatter {
    /// Builds a formatter from a number format string, reference magnitude and locale.
    ///
    /// Percent formats suppress the display unit; everything else picks it from
    /// `options.reference`.
    pub fn new(options: &FormatOptions) -> Self {
        let parsed = parse_format(options.format.as_deref());
        let unit = if parsed.percent {
            DisplayUnit::None
        } else {
            DisplayUnit::from_reference(options.reference)
        };
        Self {
            unit,
            decimals: parsed.decimals,
            percent: parsed.percent,
            prefix: parsed.prefix,
        }
    }

    /// Returns the display unit all labels share.
    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }
}

impl ValueFormatter for DisplayUnitFormatter {
    fn format(&self, value: f64) -> String {
        let mut scaled = if self.percent {
            value * 100.0
        } else {
            value / self.unit.factor()
        };
        if scaled == 0.0 {
            // Normalize -0.0 so zero ticks never render with a sign.
            scaled = 0.0;
        }
        let decimals = self.decimals.unwrap_or_else(|| auto_decimals(scaled));
        let suffix = if self.percent { "%" } else { self.unit.suffix() };
        format!("{}{scaled:.decimals$}{suffix}", self.prefix)
    }
}

struct ParsedFormat {
    decimals: Option<usize>,
    percent: bool,
    prefix: String,
}

fn parse_format(format: Option<&str>) -> ParsedFormat {
    let Some(format) = format else {
        return ParsedFormat {
            decimals: None,
            percent: false,
            prefix: String::new(),
        };
    };
    // Only the positive section matters for tick labels.
    let section = format.split(';').next().unwrap_or(format);
    let percent = section.contains('%');
    let prefix = if section.starts_with('$') {
        String::from("$")
    } else {
        String::new()
    };
    let decimals = if section.contains(['0', '#']) {
        let after_dot = match section.find('.') {
            Some(dot) => section[dot + 1..]
                .chars()
                .take_while(|c| *c == '0' || *c == '#')
                .count(),
            None => 0,
        };
        Some(after_dot)
    } else {
        None
    };
    ParsedFormat {
        decimals,
        percent,
        prefix,
    }
}

/// Smallest precision in `0..=2` that reproduces `value`, for format-less columns.
fn auto_decimals(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let scales = [1.0, 10.0, 100.0];
    for (decimals, scale) in scales.iter().enumerate() {
        let rounded = (value * scale).round() / scale;
        if (rounded - value).abs() <= 1e-9 * value.abs().max(1.0) {
            return decimals;
        }
    }
    2
}

/// Formats a tick value with precision derived from the tick step.
///
/// This keeps labels like `0.6000000000000001` (float noise from `start + i * step`) from
/// leaking into axes that have no number format.
pub(crate) fn format_tick_with_step(value: f64, step: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let decimals = decimals_for_step(step);
    format!("{value:.decimals$}")
}

fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    let d = -step.log10().floor();
    if !d.is_finite() || d <= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/positive checks and capped at 10"
    )]
    {
        d.min(10.0) as usize
    }
}
