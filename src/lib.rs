//! Color classification for choropleth maps and their legends.
//!
//! A [`ColorScale`] turns numeric data (and/or category names) plus a
//! [`ColorScaleConfig`] into an ordered list of legend [`Bin`]s and
//! answers “which color for this value?” queries:
//!
//! - numeric bins come from one of the [`BinningStrategy`] algorithms
//!   (after the outliers are set aside) or from manual boundaries,
//! - colors come from a [`ColorScheme`], possibly inverted, with per-bin
//!   and per-category overrides,
//! - a reserved “No data” entry can close the legend.
//!
//! Many schemes are shipped: all [`BuiltinSchemes`] by Cynthia Brewer
//! (see <https://colorbrewer2.org/>) commonly used for maps, and the
//! Matplotlib Viridis and Magma colormaps.
//!
//! ```
//! use color_scale::{ColorScale, ColorScaleConfig};
//! let config = ColorScaleConfig::from_json(r#"{
//!     "binningStrategy": "manual",
//!     "customNumericValues": [10, 20, 30],
//!     "baseColorScheme": "Reds" }"#).unwrap();
//! let scale: ColorScale = ColorScale::builder(config)
//!     .sorted_numeric_values(vec![3., 12., 25., 28.])
//!     .categorical_values(["Disputed"])
//!     .has_no_data_bin(true)
//!     .build();
//! let texts: Vec<_> = scale.legend_data().iter().map(|b| b.text()).collect();
//! assert_eq!(texts, ["0 – 10", "10 – 20", "20 – 30", "Disputed", "No data"]);
//! assert_eq!(scale.get_color(None), Some(scale.no_data_color()));
//! ```

mod bin;
mod binning;
mod color;
mod config;
mod error;
mod gradient;
mod palettes;
mod scale;
mod scheme;
pub mod stats;

pub use bin::{Bin, CategoricalBin, NumericBin, Value};
pub use color::{parse_color, to_hex, RGBColor, NO_DATA_GRAY};
pub use config::{BinningStrategy, ColorScaleConfig};
pub use error::Error;
pub use gradient::{ColorRange, Gradient, PaletteGradient, Samples};
pub use palettes::DEFAULT_SCHEME;
pub use scale::{ColorScale, ColorScaleBuilder, DEFAULT_BIN_COUNT,
                MAX_AUTO_BIN_COUNT, NO_DATA_LABEL};
pub use scheme::{BuiltinSchemes, ColorScheme, PaletteType, Scheme,
                 SchemeRegistry};
