pub(crate) use rgb::RGBA;

use crate::color::hex_rgba;

/// A named color scheme, given as one or more class sets.
pub(crate) struct SchemeData {
    pub(crate) name: &'static str,
    /// Color sets sorted by increasing length.
    /// Invariant: non-empty, each set has length ≥ 2.
    pub(crate) sets: Vec<Vec<RGBA<f64>>>,
    pub(crate) typ: PaletteType,
    /// Whether the scheme varies a single hue (only lightness changes).
    pub(crate) single_hue: bool,
    /// Colormaps are sampled along their gradient for any length
    /// instead of being used as discrete class sets.
    pub(crate) continuous: bool,
}

impl SchemeData {
    pub(crate) fn new(name: &'static str, typ: PaletteType, single_hue: bool,
                      sets: &[&[u32]]) -> Self {
        let sets = sets.iter()
            .map(|s| s.iter().map(|&x| hex_rgba(x))
                 .collect())
            .collect();
        SchemeData { name, sets, typ, single_hue, continuous: false }
    }

    /// Build a colormap sampled along its gradient.
    pub(crate) fn colormap(name: &'static str, stops: &[u32]) -> Self {
        let stops = stops.iter().map(|&x| hex_rgba(x)).collect();
        SchemeData { name, sets: vec![stops], typ: PaletteType::Seq,
                     single_hue: false, continuous: true }
    }

    /// Build a qualitative scheme whose class sets are the prefixes
    /// (of length ≥ 3) of `colors`.
    pub(crate) fn qualitative(name: &'static str, colors: &[u32]) -> Self {
        let colors: Vec<_> = colors.iter().map(|&x| hex_rgba(x)).collect();
        let sets = (3 ..= colors.len()).map(|n| colors[.. n].to_vec())
            .collect();
        SchemeData { name, sets, typ: PaletteType::Qual, single_hue: false,
                     continuous: false }
    }

    /// The class set holding exactly `n` colors, if any.
    pub(crate) fn set(&self, n: usize) -> Option<&[RGBA<f64>]> {
        self.sets.iter().find(|s| s.len() == n).map(|s| s.as_slice())
    }

    pub(crate) fn smallest(&self) -> &[RGBA<f64>] { &self.sets[0] }

    pub(crate) fn largest(&self) -> &[RGBA<f64>] {
        &self.sets[self.sets.len() - 1]
    }
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high. Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.  The critical class or break in the middle of the legend
    /// is emphasized with light colors and low and high extremes are
    /// emphasized with dark colors that have contrasting hues.
    Div,
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between legend classes, and hues are used to
    /// create the primary visual differences between classes.
    /// Qualitative schemes are best suited to representing nominal or
    /// categorical data.
    Qual
}
