//! Named color schemes handing out a given number of swatches.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::color::RGBColor;
use crate::gradient::{ColorRange, PaletteGradient};
use crate::palettes::{self, ty::SchemeData};
pub use crate::palettes::ty::PaletteType;

/// A source of ordered colors.
pub trait ColorScheme<Color> {
    /// Return exactly `n` colors, ordered from the “low” end of the
    /// scheme to the “high” one.
    fn colors(&self, n: usize) -> Vec<Color>;

    /// Whether the scheme varies the shade of a single hue.
    fn single_color_scale(&self) -> bool { false }
}

/// Color schemes by name.
pub trait SchemeRegistry<Color> {
    fn scheme(&self, name: &str) -> Option<&dyn ColorScheme<Color>>;
}

impl<Color, S> SchemeRegistry<Color> for HashMap<String, S>
where S: ColorScheme<Color> {
    fn scheme(&self, name: &str) -> Option<&dyn ColorScheme<Color>> {
        self.get(name).map(|s| s as &dyn ColorScheme<Color>)
    }
}

/// One of the schemes shipped with this crate.
pub struct Scheme<Color> {
    data: &'static SchemeData,
    color: PhantomData<fn() -> Color>,
}

impl<Color> Clone for Scheme<Color> {
    fn clone(&self) -> Self { *self }
}

impl<Color> Copy for Scheme<Color> {}

impl<Color> fmt::Debug for Scheme<Color> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheme").field("name", &self.data.name).finish()
    }
}

impl<Color: RGBColor> Scheme<Color> {
    fn new(data: &'static SchemeData) -> Self {
        Self { data, color: PhantomData }
    }

    /// Look a shipped scheme up by its (case sensitive) name, e.g.
    /// `"BuGn"`, `"RdBu"`, `"Set2"` or `"Viridis"`.
    pub fn named(name: &str) -> Option<Self> {
        palettes::ALL_SCHEMES.get(name).map(|&d| Self::new(d))
    }

    /// Brewer "Light blue to dark green" sequential scheme, the
    /// fallback for unknown scheme names.
    pub fn bugn() -> Self { Self::new(&palettes::BUGN) }

    pub fn name(&self) -> &'static str { self.data.name }

    /// Says whether the scheme is `Seq`uential, `Div`ergent or
    /// `Qual`itative.
    pub fn typ(&self) -> PaletteType { self.data.typ }

    fn convert(colors: &[rgb::RGBA<f64>]) -> Vec<Color> {
        colors.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    fn sample(colors: &[rgb::RGBA<f64>], n: usize) -> Vec<Color> {
        match PaletteGradient::new(colors) {
            Some(g) => g.samples(n).collect(),
            None => colors.iter().cycle().take(n)
                .map(|&c| Color::from_rgba(c)).collect(),
        }
    }
}

impl<Color: RGBColor> ColorScheme<Color> for Scheme<Color> {
    /// Exact class sets are used as is.  Fewer colors than the smallest
    /// set are taken from its start; more colors than the largest set
    /// are cycled for qualitative schemes and interpolated otherwise.
    fn colors(&self, n: usize) -> Vec<Color> {
        let d = self.data;
        if n == 0 { return vec![] }
        if d.continuous { return Self::sample(d.largest(), n) }
        if let Some(set) = d.set(n) { return Self::convert(set) }
        let smallest = d.smallest();
        if n < smallest.len() { return Self::convert(&smallest[.. n]) }
        match d.typ {
            PaletteType::Qual => d.largest().iter().cycle().take(n)
                .map(|&c| Color::from_rgba(c)).collect(),
            PaletteType::Seq | PaletteType::Div =>
                Self::sample(d.largest(), n),
        }
    }

    fn single_color_scale(&self) -> bool { self.data.single_hue }
}

/// Registry of every scheme shipped with this crate.
pub struct BuiltinSchemes<Color> {
    schemes: HashMap<&'static str, Scheme<Color>>,
}

impl<Color: RGBColor> Default for BuiltinSchemes<Color> {
    fn default() -> Self {
        let schemes = palettes::ALL_SCHEMES.iter()
            .map(|(&name, &d)| (name, Scheme::new(d)))
            .collect();
        BuiltinSchemes { schemes }
    }
}

impl<Color: RGBColor> BuiltinSchemes<Color> {
    /// Names of the available schemes, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.schemes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<Color: RGBColor> SchemeRegistry<Color> for BuiltinSchemes<Color> {
    fn scheme(&self, name: &str) -> Option<&dyn ColorScheme<Color>> {
        self.schemes.get(name).map(|s| s as &dyn ColorScheme<Color>)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;
    use crate::color::to_hex;

    fn hex(c: &[RGB8]) -> Vec<String> { c.iter().map(to_hex).collect() }

    #[test]
    fn exact_class_set() {
        let s = Scheme::<RGB8>::bugn();
        assert_eq!(hex(&s.colors(3)), ["#e5f5f9", "#99d8c9", "#2ca25f"]);
        assert_eq!(s.colors(9).len(), 9);
        assert!(s.colors(0).is_empty());
        assert!(!s.single_color_scale());
    }

    #[test]
    fn short_requests_take_the_smallest_set() {
        let s = Scheme::<RGB8>::named("Blues").unwrap();
        assert_eq!(hex(&s.colors(1)), ["#deebf7"]);
        assert_eq!(hex(&s.colors(2)), ["#deebf7", "#9ecae1"]);
        assert!(s.single_color_scale());
    }

    #[test]
    fn long_requests() {
        let seq = Scheme::<RGB8>::bugn();
        let c = seq.colors(14);
        assert_eq!(c.len(), 14);
        assert_eq!(to_hex(&c[0]), "#f7fcfd");
        assert_eq!(to_hex(&c[13]), "#00441b");
        let qual = Scheme::<RGB8>::named("Dark2").unwrap();
        let c = qual.colors(10);
        assert_eq!(c[8], c[0]);
        assert_eq!(c[9], c[1]);
    }

    #[test]
    fn colormaps_are_sampled() {
        let s = Scheme::<RGB8>::named("Viridis").unwrap();
        let c = s.colors(2);
        assert_eq!(hex(&c), ["#440154", "#fde725"]);
        assert_eq!(s.colors(100).len(), 100);
    }

    #[test]
    fn registry() {
        let r = BuiltinSchemes::<RGB8>::default();
        assert!(r.scheme("RdBu").is_some());
        assert!(r.scheme("rdbu").is_none());
        assert!(r.names().contains(&"Viridis"));
        assert_eq!(Scheme::<RGB8>::named("RdYlGn").unwrap().typ(),
                   PaletteType::Div);
    }

    #[test]
    fn map_registry() {
        let mut m = HashMap::new();
        m.insert("Mine".to_string(), Scheme::<RGB8>::named("Reds").unwrap());
        assert_eq!(m.scheme("Mine").unwrap().colors(3).len(), 3);
        assert!(m.scheme("Reds").is_none());
    }
}
