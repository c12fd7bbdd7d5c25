//! Legend entries: numeric ranges and categorical values.

/// A datum to be colored: a number or a category name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    Number(f64),
    Category(&'a str),
}

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self { Value::Number(x) }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self { Value::Category(s) }
}

/// A numeric bin.
///
/// The first bin contains `min ..= max`, the following ones
/// `min < v <= max`, so that a value equal to an inner boundary belongs
/// to a single bin.  `is_open_left` and `is_open_right` only affect how
/// the bin is displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericBin<Color> {
    pub min: f64,
    pub max: f64,
    pub color: Color,
    /// Custom label replacing the “min – max” text.
    pub label: Option<String>,
    pub is_first: bool,
    /// The first bin starts above the smallest value of the data.
    pub is_open_left: bool,
    /// The last bin ends below the largest value of the data.
    pub is_open_right: bool,
    /// `min` formatted for display.
    pub(crate) min_formatted: String,
    /// `max` formatted for display.
    pub(crate) max_formatted: String,
}

impl<Color> NumericBin<Color> {
    pub fn contains(&self, v: f64) -> bool {
        if self.is_first { self.min <= v && v <= self.max }
        else { self.min < v && v <= self.max }
    }

    /// Displayed lower bound, prefixed with “≤” for an open left end.
    pub fn min_text(&self) -> String {
        if self.is_open_left { format!("≤{}", self.min_formatted) }
        else { self.min_formatted.clone() }
    }

    /// Displayed upper bound, prefixed with “≥” for an open right end.
    pub fn max_text(&self) -> String {
        if self.is_open_right { format!("≥{}", self.max_formatted) }
        else { self.max_formatted.clone() }
    }

    /// The custom label or, by default, “min – max”.
    pub fn text(&self) -> String {
        match &self.label {
            Some(l) => l.clone(),
            None => format!("{} – {}", self.min_text(), self.max_text()),
        }
    }
}

/// A bin made of a single category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalBin<Color> {
    /// Position among the categorical bins.
    pub index: usize,
    pub value: String,
    pub color: Color,
    pub label: String,
    pub is_hidden: bool,
}

impl<Color> CategoricalBin<Color> {
    pub fn contains(&self, v: &str) -> bool { self.value == v }

    pub fn text(&self) -> &str { &self.label }
}

/// One entry of the legend.
#[derive(Clone, Debug, PartialEq)]
pub enum Bin<Color> {
    Numeric(NumericBin<Color>),
    Categorical(CategoricalBin<Color>),
}

impl<Color> Bin<Color> {
    /// Whether `v` falls in this bin.  Numbers never belong to a
    /// categorical bin and category names never to a numeric one.
    pub fn contains(&self, v: Value) -> bool {
        match (self, v) {
            (Bin::Numeric(b), Value::Number(x)) => b.contains(x),
            (Bin::Categorical(b), Value::Category(s)) => b.contains(s),
            _ => false,
        }
    }

    pub fn color(&self) -> &Color {
        match self {
            Bin::Numeric(b) => &b.color,
            Bin::Categorical(b) => &b.color,
        }
    }

    /// Text displayed next to the swatch.
    pub fn text(&self) -> String {
        match self {
            Bin::Numeric(b) => b.text(),
            Bin::Categorical(b) => b.text().to_string(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        match self {
            Bin::Numeric(_) => false,
            Bin::Categorical(b) => b.is_hidden,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericBin<Color>> {
        match self {
            Bin::Numeric(b) => Some(b),
            Bin::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalBin<Color>> {
        match self {
            Bin::Numeric(_) => None,
            Bin::Categorical(b) => Some(b),
        }
    }
}
