// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabular input validation and extraction.

use thiserror::Error;
use vizlet_host::DataView;

use crate::view_model::DataPoint;

/// Why a data view could not produce a view model.
///
/// Every variant is recoverable; the visual logs it and leaves the prior render standing.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ViewModelError {
    /// The host bound no data view at all.
    #[error("no data view bound")]
    MissingDataView,
    /// The data view has no categorical section.
    #[error("data view has no categorical section")]
    MissingCategorical,
    /// The categorical section has no category column.
    #[error("categorical section has no category column")]
    MissingCategories,
    /// The categorical section has no measure column.
    #[error("categorical section has no measure column")]
    MissingValues,
}

/// Validated tabular input, extracted from a data view.
#[derive(Clone, Debug, PartialEq)]
pub struct TabularInput {
    /// Paired category labels and measure values, in host row order.
    pub data_points: Vec<DataPoint>,
    /// Display format string of the measure column.
    pub number_format: Option<String>,
    /// Display name of the category column.
    pub column_name: String,
    /// Display name of the measure column.
    pub measure_name: String,
}

impl TabularInput {
    /// Validates `data_view` and extracts paired rows plus column names.
    ///
    /// Rows pair `categories[0]` with `values[0]` index by index, stopping at the shorter
    /// column. Category cells are stringified; null measure cells read as `0.0`.
    pub fn from_data_view(data_view: Option<&DataView>) -> Result<Self, ViewModelError> {
        let view = data_view.ok_or(ViewModelError::MissingDataView)?;
        let categorical = view
            .categorical
            .as_ref()
            .ok_or(ViewModelError::MissingCategorical)?;
        let categories = categorical
            .categories
            .first()
            .ok_or(ViewModelError::MissingCategories)?;
        let values = categorical
            .values
            .first()
            .ok_or(ViewModelError::MissingValues)?;

        let data_points = categories
            .values
            .iter()
            .zip(values.values.iter().copied())
            .map(|(label, value)| DataPoint {
                category: stringify(label),
                value: value.unwrap_or(0.0),
            })
            .collect();

        // View metadata lists the measure column first and the category column second.
        let column_name = metadata_name(view, 1, &categories.source.display_name);
        let measure_name = metadata_name(view, 0, &values.source.display_name);

        Ok(Self {
            data_points,
            number_format: values.source.format.clone(),
            column_name,
            measure_name,
        })
    }
}

fn metadata_name(view: &DataView, index: usize, fallback: &str) -> String {
    view.metadata
        .columns
        .get(index)
        .map_or_else(|| fallback.to_owned(), |column| column.display_name.clone())
}

fn stringify(label: &serde_json::Value) -> String {
    match label {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
