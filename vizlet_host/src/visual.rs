// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visual lifecycle contract.

use vizlet_scene::MarkDiff;

use crate::data_view::DataView;
use crate::settings::SettingsCard;

/// Viewport size in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Width in device pixels.
    pub width: f64,
    /// Height in device pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport from a width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything a host hands a visual on one update call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateOptions {
    /// Current viewport size.
    pub viewport: Viewport,
    /// Current tabular data, absent when the host has none bound.
    pub data_view: Option<DataView>,
    /// Raw persisted-settings blob. Visuals re-parse it on every update and fall back
    /// per field to their defaults when a value is missing or malformed.
    pub settings: serde_json::Value,
}

impl UpdateOptions {
    /// Creates options with no data view and no settings.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            data_view: None,
            settings: serde_json::Value::Null,
        }
    }

    /// Attaches a data view.
    pub fn with_data_view(mut self, data_view: DataView) -> Self {
        self.data_view = Some(data_view);
        self
    }

    /// Attaches a persisted-settings blob.
    pub fn with_settings(mut self, settings: serde_json::Value) -> Self {
        self.settings = settings;
        self
    }
}

/// Services a host supplies once, at visual construction time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HostServices {
    /// BCP 47 locale tag for value formatting, when the host has one.
    pub locale: Option<String>,
}

impl HostServices {
    /// Creates services with no locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// A hosted visual.
///
/// Hosts call [`update`](Self::update) serially; one call completes before the next
/// begins. Each call rebuilds the visual's desired mark set from the options alone and
/// returns the diffs against what the visual still has retained, so an update that
/// changes nothing returns no diffs and invalid input can leave the prior render
/// standing.
pub trait Visual {
    /// Rebuilds the visual for the given options and returns the resulting mark diffs.
    fn update(&mut self, options: &UpdateOptions) -> Vec<MarkDiff>;

    /// Describes the visual's current settings for a host configuration pane.
    ///
    /// Visuals without configurable settings keep the default empty answer.
    fn enumerate_settings(&self) -> Vec<SettingsCard> {
        Vec::new()
    }
}
