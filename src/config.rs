//! Persisted color scale configuration.
//!
//! Every field is optional; [`ColorScale`](crate::ColorScale) substitutes
//! a default for anything absent.  The serialized form uses camelCase
//! keys, e.g.
//!
//! ```json
//! { "binningStrategy": "manual",
//!   "customNumericValues": [10, 20, 30],
//!   "customCategoryColors": { "No data": "#ccc" } }
//! ```

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Algorithm choosing numeric bin boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BinningStrategy {
    /// Bins of equal width between the minimum bin value and the maximum.
    #[default]
    EqualInterval,
    /// Bins holding approximately the same number of values.
    Quantiles,
    /// Same boundaries as [`BinningStrategy::Quantiles`]; kept as a
    /// separate name for configurations that ask for it.
    Quartiles,
    /// Optimal one-dimensional k-means clustering.
    Ckmeans,
    /// The configured `customNumericValues` are the bin maxima.
    Manual,
}

/// Color scale settings, as stored alongside a chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorScaleConfig {
    pub binning_strategy: Option<BinningStrategy>,
    /// Number of bins for the automatic strategies.
    pub binning_strategy_bin_count: Option<usize>,

    /// Bin maxima used by [`BinningStrategy::Manual`].
    pub custom_numeric_values: Option<Vec<f64>>,
    /// Per-bin CSS colors; `null` entries keep the scheme color.
    pub custom_numeric_colors: Option<Vec<Option<String>>>,
    /// `customNumericColors` are ignored unless this is `true`.
    pub custom_numeric_colors_active: Option<bool>,
    /// Per-bin labels, only used with manual bins.
    pub custom_numeric_labels: Option<Vec<Option<String>>>,
    /// Lower bound of the first bin.
    pub custom_numeric_min_value: Option<f64>,

    pub custom_category_colors: Option<HashMap<String, String>>,
    pub custom_category_labels: Option<HashMap<String, String>>,
    pub custom_hidden_categories: Option<HashMap<String, bool>>,

    pub base_color_scheme: Option<String>,
    pub color_scheme_invert: Option<bool>,

    pub legend_description: Option<String>,
}

impl ColorScaleConfig {
    /// Read a configuration from its JSON form.
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize the configuration, omitting nothing (absent fields are
    /// written as `null`).
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}
