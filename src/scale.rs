//! The color scale: from data values and a configuration to legend bins
//! and a value → color lookup.
//!
//! Derived values are computed on first use and kept until one of the
//! inputs is replaced through a `set_*` method.

use std::cell::OnceCell;
use std::collections::HashMap;

use rgb::RGB8;
use tracing::{debug, warn};

use crate::bin::{Bin, CategoricalBin, NumericBin, Value};
use crate::color::{parse_color, RGBColor, NO_DATA_GRAY};
use crate::config::{BinningStrategy, ColorScaleConfig};
use crate::palettes::DEFAULT_SCHEME;
use crate::scheme::{BuiltinSchemes, ColorScheme, Scheme, SchemeRegistry};
use crate::stats::{round_sig_fig, without_outliers};

/// Category standing for missing values.
pub const NO_DATA_LABEL: &str = "No data";

/// Number of automatic bins when the configuration gives none.
pub const DEFAULT_BIN_COUNT: usize = 5;

/// Upper limit on the configured number of automatic bins.
pub const MAX_AUTO_BIN_COUNT: usize = 100;

type NumericFormat = Box<dyn Fn(f64) -> String + Send>;
type CategoricalFormat = Box<dyn Fn(&str) -> String + Send>;

/// Color classification of a dataset.
///
/// # Example
///
/// ```
/// use color_scale::{ColorScale, ColorScaleConfig, BinningStrategy};
/// let config = ColorScaleConfig {
///     binning_strategy: Some(BinningStrategy::EqualInterval),
///     ..Default::default() };
/// let scale: ColorScale = ColorScale::builder(config)
///     .sorted_numeric_values(vec![10., 20., 30., 40., 50.])
///     .build();
/// assert_eq!(scale.bucket_maximums(), [10., 20., 30., 40., 50.]);
/// assert_eq!(scale.get_color(Some(25.0.into())),
///            Some(*scale.legend_data()[2].color()));
/// ```
pub struct ColorScale<Color = RGB8> {
    config: ColorScaleConfig,
    sorted_numeric_values: Vec<f64>,
    categorical_values: Vec<String>,
    has_no_data_bin: bool,
    default_no_data_color: Option<Color>,
    default_base_color_scheme: Option<String>,
    default_binning_strategy: BinningStrategy,
    format_numeric: NumericFormat,
    format_categorical: CategoricalFormat,
    schemes: Box<dyn SchemeRegistry<Color> + Send>,
    fallback_scheme: Scheme<Color>,
    derived: OnceCell<Derived<Color>>,
}

/// Everything computed from the inputs.
struct Derived<Color> {
    without_outliers: Vec<f64>,
    min_bin_value: f64,
    bucket_maximums: Vec<f64>,
    base_colors: Vec<Color>,
    single_color_scale: bool,
    no_data_color: Color,
    legend: Vec<Bin<Color>>,
}

/// Fluent builder for [`ColorScale`].
pub struct ColorScaleBuilder<Color> {
    config: ColorScaleConfig,
    sorted_numeric_values: Vec<f64>,
    categorical_values: Vec<String>,
    has_no_data_bin: bool,
    default_no_data_color: Option<Color>,
    default_base_color_scheme: Option<String>,
    default_binning_strategy: BinningStrategy,
    format_numeric: Option<NumericFormat>,
    format_categorical: Option<CategoricalFormat>,
    schemes: Option<Box<dyn SchemeRegistry<Color> + Send>>,
}

impl<Color> ColorScaleBuilder<Color>
where Color: RGBColor + Copy + 'static {
    /// Numeric data, sorted in increasing order (not checked).
    pub fn sorted_numeric_values(mut self, v: Vec<f64>) -> Self {
        self.sorted_numeric_values = v;
        self
    }

    /// Category names, in the order they are met in the data.
    pub fn categorical_values<I, S>(mut self, v: I) -> Self
    where I: IntoIterator<Item = S>, S: Into<String> {
        self.categorical_values = v.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the legend ends with a “No data” entry.
    pub fn has_no_data_bin(mut self, b: bool) -> Self {
        self.has_no_data_bin = b;
        self
    }

    pub fn default_no_data_color(mut self, c: Color) -> Self {
        self.default_no_data_color = Some(c);
        self
    }

    /// Scheme used when the configuration names none.
    pub fn default_base_color_scheme(mut self, name: impl Into<String>) -> Self {
        self.default_base_color_scheme = Some(name.into());
        self
    }

    /// Strategy used when the configuration names none.
    pub fn default_binning_strategy(mut self, s: BinningStrategy) -> Self {
        self.default_binning_strategy = s;
        self
    }

    /// Formatting of bin boundaries (default: `f64::to_string`).
    pub fn format_numeric(mut self,
                          f: impl Fn(f64) -> String + Send + 'static) -> Self {
        self.format_numeric = Some(Box::new(f));
        self
    }

    /// Formatting of category names without a custom label (default:
    /// the name itself).
    pub fn format_categorical(mut self,
                              f: impl Fn(&str) -> String + Send + 'static)
                              -> Self {
        self.format_categorical = Some(Box::new(f));
        self
    }

    /// Where scheme names are looked up (default: [`BuiltinSchemes`]).
    pub fn schemes(mut self, r: impl SchemeRegistry<Color> + Send + 'static)
                   -> Self {
        self.schemes = Some(Box::new(r));
        self
    }

    pub fn build(self) -> ColorScale<Color> {
        ColorScale {
            config: self.config,
            sorted_numeric_values: self.sorted_numeric_values,
            categorical_values: self.categorical_values,
            has_no_data_bin: self.has_no_data_bin,
            default_no_data_color: self.default_no_data_color,
            default_base_color_scheme: self.default_base_color_scheme,
            default_binning_strategy: self.default_binning_strategy,
            format_numeric: self.format_numeric
                .unwrap_or_else(|| Box::new(|v: f64| v.to_string())),
            format_categorical: self.format_categorical
                .unwrap_or_else(|| Box::new(|v: &str| v.to_string())),
            schemes: self.schemes
                .unwrap_or_else(|| Box::new(BuiltinSchemes::default())),
            fallback_scheme: Scheme::bugn(),
            derived: OnceCell::new(),
        }
    }
}

/// Parse a configured color, warning about (and ignoring) bad ones.
fn custom_color<Color: RGBColor>(s: &str) -> Option<Color> {
    match parse_color(s) {
        Ok(c) => Some(c),
        Err(e) => {
            warn!("ignoring custom color: {e}");
            None
        }
    }
}

/// `Some(s)` unless `s` is empty.
fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

// # Configuration with defaults

impl<Color> ColorScale<Color>
where Color: RGBColor + Copy + 'static {
    pub fn builder(config: ColorScaleConfig) -> ColorScaleBuilder<Color> {
        ColorScaleBuilder {
            config,
            sorted_numeric_values: vec![],
            categorical_values: vec![],
            has_no_data_bin: false,
            default_no_data_color: None,
            default_base_color_scheme: None,
            default_binning_strategy: BinningStrategy::default(),
            format_numeric: None,
            format_categorical: None,
            schemes: None,
        }
    }

    pub fn config(&self) -> &ColorScaleConfig { &self.config }

    pub fn binning_strategy(&self) -> BinningStrategy {
        self.config.binning_strategy.unwrap_or(self.default_binning_strategy)
    }

    pub fn is_manual_buckets(&self) -> bool {
        self.binning_strategy() == BinningStrategy::Manual
    }

    pub fn custom_numeric_values(&self) -> &[f64] {
        self.config.custom_numeric_values.as_deref().unwrap_or(&[])
    }

    pub fn custom_numeric_colors_active(&self) -> bool {
        self.config.custom_numeric_colors_active.unwrap_or(false)
    }

    /// Per-bin color overrides; empty unless they are active.
    pub fn custom_numeric_colors(&self) -> Vec<Option<Color>> {
        if !self.custom_numeric_colors_active() { return vec![] }
        self.config.custom_numeric_colors.iter().flatten()
            .map(|c| c.as_deref().and_then(custom_color))
            .collect()
    }

    /// Per-bin labels, padded to [`num_bins`](Self::num_bins); empty
    /// unless bins are manual.
    pub fn custom_numeric_labels(&self) -> Vec<Option<String>> {
        if !self.is_manual_buckets() { return vec![] }
        let mut labels: Vec<Option<String>> =
            self.config.custom_numeric_labels.iter().flatten()
            .map(|l| l.as_deref().and_then(non_empty).map(String::from))
            .collect();
        if labels.len() < self.num_bins() { labels.resize(self.num_bins(), None) }
        labels
    }

    /// Configured number of automatic bins, at most
    /// [`MAX_AUTO_BIN_COUNT`].
    pub fn num_auto_bins(&self) -> usize {
        self.config.binning_strategy_bin_count.unwrap_or(DEFAULT_BIN_COUNT)
            .min(MAX_AUTO_BIN_COUNT)
    }

    pub fn num_bins(&self) -> usize {
        if self.is_manual_buckets() { self.custom_numeric_values().len() }
        else { self.num_auto_bins() }
    }

    pub fn is_color_scheme_inverted(&self) -> bool {
        self.config.color_scheme_invert.unwrap_or(false)
    }

    /// Name of the requested scheme.
    pub fn base_color_scheme(&self) -> &str {
        self.config.base_color_scheme.as_deref()
            .or(self.default_base_color_scheme.as_deref())
            .unwrap_or(DEFAULT_SCHEME)
    }

    /// The scheme in use: the requested one if known, BuGn otherwise.
    pub fn color_scheme(&self) -> &dyn ColorScheme<Color> {
        let name = self.base_color_scheme();
        if let Some(s) = self.schemes.scheme(name) { return s }
        warn!("unknown color scheme “{name}”, using {DEFAULT_SCHEME}");
        self.schemes.scheme(DEFAULT_SCHEME)
            .unwrap_or(&self.fallback_scheme as &dyn ColorScheme<Color>)
    }

    /// Category colors from the configuration, with “No data” always
    /// present.
    pub fn custom_category_colors(&self) -> HashMap<String, Color> {
        let default = self.default_no_data_color();
        let mut colors = HashMap::from([(NO_DATA_LABEL.to_string(), default)]);
        for (k, v) in self.config.custom_category_colors.iter().flatten() {
            if let Some(c) = custom_color(v) { colors.insert(k.clone(), c); }
        }
        colors
    }

    fn default_no_data_color(&self) -> Color {
        self.default_no_data_color
            .unwrap_or_else(|| Color::from_rgba(NO_DATA_GRAY))
    }

    fn custom_category_label(&self, value: &str) -> Option<&str> {
        self.config.custom_category_labels.as_ref()?
            .get(value).map(String::as_str).and_then(non_empty)
    }

    fn is_hidden(&self, value: &str) -> bool {
        self.config.custom_hidden_categories.as_ref()
            .and_then(|h| h.get(value).copied())
            .unwrap_or(false)
    }

    pub fn legend_description(&self) -> Option<&str> {
        self.config.legend_description.as_deref()
    }

    pub fn sorted_numeric_values(&self) -> &[f64] { &self.sorted_numeric_values }

    pub fn categorical_values(&self) -> &[String] { &self.categorical_values }

    pub fn has_no_data_bin(&self) -> bool { self.has_no_data_bin }

    /// Smallest data value.
    pub fn min_possible_value(&self) -> Option<f64> {
        self.sorted_numeric_values.first().copied()
    }

    /// Largest data value.
    pub fn max_possible_value(&self) -> Option<f64> {
        self.sorted_numeric_values.last().copied()
    }
}

// # Inputs replacement

impl<Color> ColorScale<Color> {
    pub fn set_config(&mut self, config: ColorScaleConfig) {
        self.config = config;
        self.derived.take();
    }

    pub fn set_sorted_numeric_values(&mut self, v: Vec<f64>) {
        self.sorted_numeric_values = v;
        self.derived.take();
    }

    pub fn set_categorical_values(&mut self, v: Vec<String>) {
        self.categorical_values = v;
        self.derived.take();
    }

    pub fn set_has_no_data_bin(&mut self, b: bool) {
        self.has_no_data_bin = b;
        self.derived.take();
    }
}

// # Derived values

impl<Color> ColorScale<Color>
where Color: RGBColor + Copy + 'static {
    fn derived(&self) -> &Derived<Color> {
        self.derived.get_or_init(|| self.derive())
    }

    fn derive(&self) -> Derived<Color> {
        let without_outliers = without_outliers(&self.sorted_numeric_values);
        let min_bin_value = self.config.custom_numeric_min_value
            .unwrap_or_else(|| auto_min_bin_value(&without_outliers));
        let bucket_maximums =
            if self.is_manual_buckets() { self.manual_bin_maximums() }
            else { self.auto_bin_maximums(&without_outliers, min_bin_value) };
        let scheme = self.color_scheme();
        let base_colors = self.scheme_colors(scheme, bucket_maximums.len());
        let category_colors = self.custom_category_colors();
        let no_data_color = category_colors.get(NO_DATA_LABEL).copied()
            .unwrap_or_else(|| self.default_no_data_color());
        let mut legend = self.numeric_bins(&bucket_maximums, &base_colors,
                                           min_bin_value, no_data_color);
        legend.extend(self.categorical_bins(&bucket_maximums, &base_colors,
                                            &category_colors, no_data_color));
        debug!(numeric = bucket_maximums.len(),
               categorical = legend.len().saturating_sub(bucket_maximums.len()),
               scheme = self.base_color_scheme(),
               "color scale legend computed");
        Derived { without_outliers, min_bin_value, bucket_maximums,
                  base_colors, single_color_scale: scheme.single_color_scale(),
                  no_data_color, legend }
    }

    /// The configured maxima, zero-padded or truncated to
    /// [`num_bins`](Self::num_bins).  Inconsistent configurations may
    /// thus produce empty bins.
    fn manual_bin_maximums(&self) -> Vec<f64> {
        let n = self.num_bins();
        if self.sorted_numeric_values.is_empty() || n == 0 { return vec![] }
        let mut values = self.custom_numeric_values().to_vec();
        // No-op while `num_bins` is the length of the custom values.
        values.resize(n, 0.);
        values
    }

    fn auto_bin_maximums(&self, without_outliers: &[f64], min_bin_value: f64)
                         -> Vec<f64> {
        if let Some(n) = self.config.binning_strategy_bin_count
            .filter(|&n| n > MAX_AUTO_BIN_COUNT) {
            warn!("{n} bins requested, using {MAX_AUTO_BIN_COUNT}");
        }
        // Values up to the minimum fall in the first bin anyway.
        let values: Vec<f64> = without_outliers.iter().copied()
            .filter(|&v| v > min_bin_value).collect();
        self.binning_strategy().bin_maximums(&values, self.num_auto_bins(),
                                             min_bin_value)
    }

    /// One scheme color per numeric bin and per (real) category, in
    /// reverse order if the scheme is inverted.
    fn scheme_colors(&self, scheme: &dyn ColorScheme<Color>, num_buckets: usize)
                   -> Vec<Color> {
        let n = num_buckets + self.categorical_values.len();
        let mut colors = scheme.colors(n);
        if colors.len() < n {
            warn!("color scheme “{}” gave {} colors instead of {n}",
                  self.base_color_scheme(), colors.len());
        }
        if self.is_color_scheme_inverted() { colors.reverse() }
        colors
    }

    fn numeric_bins(&self, maximums: &[f64], base_colors: &[Color],
                    min_bin_value: f64, no_data_color: Color)
                    -> Vec<Bin<Color>> {
        let (Some(min_possible), Some(max_possible)) =
            (self.min_possible_value(), self.max_possible_value())
        else { return vec![] };
        let custom_colors = self.custom_numeric_colors();
        let mut labels = self.custom_numeric_labels().into_iter();
        let last = maximums.len().saturating_sub(1);
        let mut min = min_bin_value;
        let mut bins = Vec::with_capacity(maximums.len());
        for (i, &max) in maximums.iter().enumerate() {
            let color = custom_colors.get(i).copied().flatten()
                .or_else(|| base_colors.get(i).copied())
                .unwrap_or(no_data_color);
            bins.push(Bin::Numeric(NumericBin {
                min, max, color,
                label: labels.next().flatten(),
                is_first: i == 0,
                is_open_left: i == 0 && min > min_possible,
                is_open_right: i == last && max < max_possible,
                min_formatted: (self.format_numeric)(min),
                max_formatted: (self.format_numeric)(max),
            }));
            min = max;
        }
        bins
    }

    fn categorical_bins(&self, maximums: &[f64], base_colors: &[Color],
                        category_colors: &HashMap<String, Color>,
                        no_data_color: Color) -> Vec<Bin<Color>> {
        let mut values: Vec<&str> =
            self.categorical_values.iter().map(String::as_str).collect();
        // Last, so that it never takes a scheme color from a category.
        if self.has_no_data_bin && !values.contains(&NO_DATA_LABEL) {
            values.push(NO_DATA_LABEL);
        }
        // Categories continue from the last numeric color.
        let offset = maximums.len().saturating_sub(1);
        values.into_iter().enumerate().map(|(i, value)| {
            let color = category_colors.get(value).copied()
                .or_else(|| base_colors.get(i + offset).copied())
                .unwrap_or(no_data_color);
            let label = match self.custom_category_label(value) {
                Some(l) => l.to_string(),
                None => (self.format_categorical)(value),
            };
            Bin::Categorical(CategoricalBin {
                index: i,
                value: value.to_string(),
                color, label,
                is_hidden: self.is_hidden(value),
            })
        }).collect()
    }

    /// Data values with the outliers (beyond two standard deviations)
    /// removed.
    pub fn sorted_numeric_values_without_outliers(&self) -> &[f64] {
        &self.derived().without_outliers
    }

    /// Lower bound of the first numeric bin.
    pub fn min_bin_value(&self) -> f64 { self.derived().min_bin_value }

    /// Upper bounds of the numeric bins.
    pub fn bucket_maximums(&self) -> &[f64] { &self.derived().bucket_maximums }

    /// Scheme colors before any custom override.
    pub fn base_colors(&self) -> &[Color] { &self.derived().base_colors }

    pub fn single_color_scale(&self) -> bool {
        self.derived().single_color_scale
    }

    pub fn no_data_color(&self) -> Color { self.derived().no_data_color }

    /// Numeric bins in increasing order, then categorical bins.
    pub fn legend_data(&self) -> &[Bin<Color>] { &self.derived().legend }

    /// Color of the first bin containing `value`; missing values get the
    /// “No data” color.  `None` when no bin matches.
    pub fn get_color(&self, value: Option<Value>) -> Option<Color> {
        let d = self.derived();
        match value {
            None => Some(d.no_data_color),
            Some(v) => d.legend.iter().find(|b| b.contains(v))
                .map(|b| *b.color()),
        }
    }
}

/// Lower bound of the first bin: 0, or the smallest value rounded to one
/// significant figure if it is negative.
fn auto_min_bin_value(sorted: &[f64]) -> f64 {
    match sorted.first() {
        Some(&v) if v < 0. => round_sig_fig(v, 1),
        _ => 0.,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_hex;

    fn manual(values: &[f64]) -> ColorScaleConfig {
        ColorScaleConfig {
            binning_strategy: Some(BinningStrategy::Manual),
            custom_numeric_values: Some(values.to_vec()),
            ..Default::default() }
    }

    fn scale(config: ColorScaleConfig, values: &[f64]) -> ColorScale {
        ColorScale::builder(config).sorted_numeric_values(values.to_vec())
            .build()
    }

    #[test]
    fn defaults() {
        let s = scale(ColorScaleConfig::default(), &[]);
        assert_eq!(s.binning_strategy(), BinningStrategy::EqualInterval);
        assert_eq!(s.num_auto_bins(), 5);
        assert_eq!(s.num_bins(), 5);
        assert!(!s.is_color_scheme_inverted());
        assert!(!s.custom_numeric_colors_active());
        assert_eq!(s.base_color_scheme(), "BuGn");
        assert_eq!(to_hex(&s.no_data_color()), "#eeeeee");
        assert_eq!(s.min_bin_value(), 0.);
        assert!(s.bucket_maximums().is_empty());
        assert!(s.legend_data().is_empty());
        assert_eq!(s.legend_description(), None);
    }

    #[test]
    fn caller_defaults() {
        let s: ColorScale = ColorScale::builder(ColorScaleConfig::default())
            .default_base_color_scheme("Reds")
            .default_binning_strategy(BinningStrategy::Quantiles)
            .default_no_data_color(RGB8::new(1, 2, 3))
            .build();
        assert_eq!(s.base_color_scheme(), "Reds");
        assert_eq!(s.binning_strategy(), BinningStrategy::Quantiles);
        assert_eq!(s.no_data_color(), RGB8::new(1, 2, 3));
        assert!(s.single_color_scale());
    }

    #[test]
    fn unknown_scheme_falls_back() {
        let c = ColorScaleConfig { base_color_scheme: Some("Nope".into()),
                                   ..Default::default() };
        let s = scale(c, &[1., 2., 3.]);
        let bugn = Scheme::<RGB8>::bugn().colors(5);
        assert_eq!(s.base_colors(), bugn);
    }

    #[test]
    fn registry_without_default_scheme() {
        let empty: HashMap<String, Scheme<RGB8>> = HashMap::new();
        let s: ColorScale = ColorScale::builder(ColorScaleConfig::default())
            .sorted_numeric_values(vec![1., 2., 3.])
            .schemes(empty)
            .build();
        assert_eq!(s.base_colors(), Scheme::<RGB8>::bugn().colors(5));
    }

    #[test]
    fn single_value_gives_no_automatic_bins() {
        for strategy in [BinningStrategy::EqualInterval,
                         BinningStrategy::Quantiles, BinningStrategy::Ckmeans] {
            let c = ColorScaleConfig { binning_strategy: Some(strategy),
                                       ..Default::default() };
            let s = scale(c, &[5.]);
            assert!(s.sorted_numeric_values_without_outliers().is_empty());
            assert_eq!(s.min_bin_value(), 0.);
            assert!(s.bucket_maximums().is_empty());
            assert!(s.legend_data().is_empty());
        }
        // Manual bins only need some data.
        let s = scale(manual(&[10., 20.]), &[5.]);
        assert_eq!(s.bucket_maximums(), [10., 20.]);
    }

    #[test]
    fn bin_count_is_capped() {
        let c = ColorScaleConfig::from_json(
            r#"{ "binningStrategyBinCount": 1000000000000 }"#).unwrap();
        let s = scale(c, &[1., 2., 3.]);
        assert_eq!(s.num_auto_bins(), MAX_AUTO_BIN_COUNT);
        assert_eq!(s.num_bins(), MAX_AUTO_BIN_COUNT);
        assert_eq!(s.bucket_maximums().len(), MAX_AUTO_BIN_COUNT);
        assert_eq!(s.base_colors().len(), MAX_AUTO_BIN_COUNT);
    }

    #[test]
    fn scale_moves_across_threads() {
        let s: ColorScale = ColorScale::builder(manual(&[10., 20.]))
            .sorted_numeric_values(vec![1., 15.])
            .format_numeric(|v| format!("{v:.1}"))
            .build();
        let texts = std::thread::spawn(move || {
            s.legend_data().iter().map(Bin::text).collect::<Vec<_>>()
        }).join().unwrap();
        assert_eq!(texts, ["0.0 – 10.0", "10.0 – 20.0"]);
    }

    #[test]
    fn manual_bins_count() {
        let s = scale(manual(&[10., 20., 30.]), &[5., 15., 25.]);
        assert_eq!(s.num_bins(), 3);
        assert_eq!(s.bucket_maximums(), [10., 20., 30.]);
        // No data: no numeric bins at all.
        let s = scale(manual(&[10., 20., 30.]), &[]);
        assert!(s.bucket_maximums().is_empty());
    }

    #[test]
    fn manual_labels_only() {
        let mut c = manual(&[10., 20.]);
        c.custom_numeric_labels = Some(vec![None, Some("High".into())]);
        let s = scale(c.clone(), &[1., 15.]);
        assert_eq!(s.custom_numeric_labels(), [None, Some("High".to_string())]);
        assert_eq!(s.legend_data()[1].text(), "High");
        assert_eq!(s.legend_data()[0].text(), "0 – 10");
        c.binning_strategy = Some(BinningStrategy::EqualInterval);
        let s = scale(c, &[1., 15.]);
        assert!(s.custom_numeric_labels().is_empty());
    }

    #[test]
    fn auto_min_bin_value_rounding() {
        assert_eq!(auto_min_bin_value(&[-17.3, 4.]), -20.);
        assert_eq!(auto_min_bin_value(&[3., 4.]), 0.);
        assert_eq!(auto_min_bin_value(&[]), 0.);
        let c = ColorScaleConfig { custom_numeric_min_value: Some(-5.),
                                   ..Default::default() };
        assert_eq!(scale(c, &[-17.3, 0., 4.]).min_bin_value(), -5.);
    }

    #[test]
    fn open_ends() {
        let s = scale(manual(&[10., 20.]), &[5., 12., 35.]);
        let b: Vec<_> = s.legend_data().iter()
            .filter_map(Bin::as_numeric).collect();
        assert!(!b[0].is_open_left); // 0 ≤ 5
        assert!(b[1].is_open_right); // 20 < 35
        let c = ColorScaleConfig { custom_numeric_min_value: Some(8.),
                                   ..manual(&[10., 20.]) };
        let s = scale(c, &[5., 12., 15.]);
        let b = s.legend_data()[0].as_numeric().unwrap();
        assert!(b.is_open_left);
        assert_eq!(b.text(), "≤8 – 10");
        assert!(!s.legend_data()[1].as_numeric().unwrap().is_open_right);
    }

    #[test]
    fn custom_numeric_colors_need_activation() {
        let mut c = manual(&[10., 20.]);
        c.custom_numeric_colors = Some(vec![Some("#ff0000".into()), None]);
        let s = scale(c.clone(), &[1., 15.]);
        assert_eq!(*s.legend_data()[0].color(), s.base_colors()[0]);
        c.custom_numeric_colors_active = Some(true);
        let s = scale(c, &[1., 15.]);
        assert_eq!(*s.legend_data()[0].color(), RGB8::new(255, 0, 0));
        assert_eq!(*s.legend_data()[1].color(), s.base_colors()[1]);
    }

    #[test]
    fn bad_custom_colors_are_ignored() {
        let mut c = manual(&[10.]);
        c.custom_numeric_colors_active = Some(true);
        c.custom_numeric_colors = Some(vec![Some("bogus".into())]);
        c.custom_category_colors = Some(HashMap::from([
            (NO_DATA_LABEL.to_string(), "bogus".to_string())]));
        let s = scale(c, &[1.]);
        assert_eq!(*s.legend_data()[0].color(), s.base_colors()[0]);
        assert_eq!(to_hex(&s.no_data_color()), "#eeeeee");
    }

    #[test]
    fn categorical_offset_without_numeric_bins() {
        let s: ColorScale = ColorScale::builder(ColorScaleConfig::default())
            .categorical_values(["A", "B"])
            .build();
        let base = s.base_colors().to_vec();
        assert_eq!(base.len(), 2);
        assert_eq!(*s.legend_data()[0].color(), base[0]);
        assert_eq!(*s.legend_data()[1].color(), base[1]);
    }

    #[test]
    fn categorical_offset_after_numeric_bins() {
        let s: ColorScale = ColorScale::builder(manual(&[10., 20., 30.]))
            .sorted_numeric_values(vec![1., 2.])
            .categorical_values(["A", "B"])
            .build();
        let base = s.base_colors().to_vec();
        assert_eq!(base.len(), 5);
        // Categories start on the last numeric color.
        assert_eq!(*s.legend_data()[3].color(), base[2]);
        assert_eq!(*s.legend_data()[4].color(), base[3]);
    }

    #[test]
    fn cache_is_dropped_on_input_change() {
        let mut s = scale(manual(&[10., 20.]), &[1., 2.]);
        assert_eq!(s.bucket_maximums().len(), 2);
        s.set_config(manual(&[10., 20., 30.]));
        assert_eq!(s.bucket_maximums().len(), 3);
        s.set_sorted_numeric_values(vec![]);
        assert!(s.legend_data().is_empty());
        s.set_categorical_values(vec!["X".into()]);
        s.set_has_no_data_bin(true);
        assert_eq!(s.legend_data().len(), 2);
    }
}
