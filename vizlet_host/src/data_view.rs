// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabular data views, as handed to a visual on update.
//!
//! The shapes mirror the camelCase JSON hosts exchange, so a captured host payload
//! deserializes directly. Every field is defaulted: hosts routinely omit sections a
//! query did not produce, and a missing section must read as empty rather than fail.

use serde::{Deserialize, Serialize};

/// One update's worth of tabular data plus its column metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataView {
    /// Categorical section, if the host query produced one.
    pub categorical: Option<Categorical>,
    /// View-wide metadata.
    pub metadata: Metadata,
}

/// Parallel category and measure columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Categorical {
    /// Grouping columns. Empty when the category field well is unbound.
    pub categories: Vec<CategoryColumn>,
    /// Measure columns, row-parallel to `categories`.
    pub values: Vec<ValueColumn>,
}

/// A grouping column: untyped labels plus the column's metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryColumn {
    /// Column metadata.
    pub source: ColumnMetadata,
    /// Raw label values; hosts supply strings, numbers, bools or nulls.
    pub values: Vec<serde_json::Value>,
}

/// A measure column: numeric values plus the column's metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueColumn {
    /// Column metadata, including the measure's display format string.
    pub source: ColumnMetadata,
    /// Row values. `None` marks a null cell.
    pub values: Vec<Option<f64>>,
}

/// Metadata for one column of the view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnMetadata {
    /// Human-readable column name.
    pub display_name: String,
    /// Display format string for the column's values, when the host has one.
    pub format: Option<String>,
}

impl ColumnMetadata {
    /// Creates metadata with the given display name and no format string.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            format: None,
        }
    }

    /// Sets the display format string.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// View-wide metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    /// Columns in host order.
    pub columns: Vec<ColumnMetadata>,
    /// Host-persisted settings blob, for hosts that store settings inline.
    pub objects: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_payloads_deserialize_from_camel_case() {
        let json = r#"{
            "categorical": {
                "categories": [{
                    "source": { "displayName": "Drink" },
                    "values": ["Coffee", 7, null]
                }],
                "values": [{
                    "source": { "displayName": "Sales", "format": "0.0" },
                    "values": [10.5, null, 3]
                }]
            },
            "metadata": { "columns": [{ "displayName": "Sales" }, { "displayName": "Drink" }] }
        }"#;
        let view: DataView = serde_json::from_str(json).unwrap();
        let categorical = view.categorical.unwrap();
        assert_eq!(categorical.categories[0].source.display_name, "Drink");
        assert_eq!(categorical.categories[0].values.len(), 3);
        assert_eq!(
            categorical.values[0].source.format.as_deref(),
            Some("0.0"),
            "format string rides on the measure column"
        );
        assert_eq!(categorical.values[0].values, vec![Some(10.5), None, Some(3.0)]);
        assert_eq!(view.metadata.columns[1].display_name, "Drink");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let view: DataView = serde_json::from_str("{}").unwrap();
        assert!(view.categorical.is_none());
        assert!(view.metadata.columns.is_empty());
        assert!(view.metadata.objects.is_none());
    }

    #[test]
    fn data_views_round_trip_through_json() {
        let view = DataView {
            categorical: Some(Categorical {
                categories: vec![CategoryColumn {
                    source: ColumnMetadata::named("Drink"),
                    values: vec!["Tea".into()],
                }],
                values: vec![ValueColumn {
                    source: ColumnMetadata::named("Sales").with_format("0"),
                    values: vec![Some(2.0)],
                }],
            }),
            metadata: Metadata::default(),
        };
        let json = serde_json::to_string(&view).unwrap();
        let back: DataView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
