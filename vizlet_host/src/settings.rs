// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settings descriptions for a host configuration pane.
//!
//! [`crate::Visual::enumerate_settings`] reports the visual's current settings as cards.
//! The host renders one pane section per card, edits properties through its own UI, and
//! persists the result back into the settings blob it hands to the next update.

/// A named group of settings; one section in a host configuration pane.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsCard {
    /// Stable object name the host persists the card's properties under.
    pub name: String,
    /// Properties in display order.
    pub properties: Vec<SettingsProperty>,
}

impl SettingsCard {
    /// Creates an empty card.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Appends a property to the card.
    pub fn with_property(mut self, property: SettingsProperty) -> Self {
        self.properties.push(property);
        self
    }
}

/// One configurable property and its current value.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsProperty {
    /// Stable property name within the card.
    pub name: String,
    /// Current value.
    pub value: SettingsValue,
    /// Bounds the host should clamp numeric input to.
    pub valid_range: Option<NumberRange>,
}

impl SettingsProperty {
    /// An on/off toggle.
    pub fn bool(name: impl Into<String>, value: bool) -> Self {
        Self::raw(name, SettingsValue::Bool(value))
    }

    /// A numeric input.
    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self::raw(name, SettingsValue::Number(value))
    }

    /// A color picker holding a CSS color string.
    pub fn color(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::raw(name, SettingsValue::Color(value.into()))
    }

    /// Constrains a numeric property to an inclusive range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.valid_range = Some(NumberRange { min, max });
        self
    }

    fn raw(name: impl Into<String>, value: SettingsValue) -> Self {
        Self {
            name: name.into(),
            value,
            valid_range: None,
        }
    }
}

/// A current settings value.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsValue {
    /// On/off toggle.
    Bool(bool),
    /// Numeric input.
    Number(f64),
    /// CSS color string.
    Color(String),
}

/// Inclusive numeric bounds for a settings property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberRange {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
}
