//! RGB color encodings accepted by the scale, and conversions from and
//! to the CSS strings found in persisted configurations.

use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

use crate::error::Error;
use crate::gradient::Gradient;

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `self` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use color_scale::{RGBColor, ColorRange};
    /// let red = RGB8::new(255,0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// let rgb = grad.rgb(0.5);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        Gradient::new(self.to_rgba(), c1.to_rgba())
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: channel(c.r) as u8,  g: channel(c.g) as u8,
               b: channel(c.b) as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: channel(c.r) as u16,  g: channel(c.g) as u16,
                b: channel(c.b) as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: channel(c.r) as u8,  g: channel(c.g) as u8,
                b: channel(c.b) as u8, a: channel(c.a) as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: channel(c.r) as u16,  g: channel(c.g) as u16,
                 b: channel(c.b) as u16, a: channel(c.a) as u16 }
    }
}

/// Round a component to the nearest integer in \[0, 255\].
#[inline]
fn channel(x: f64) -> f64 { x.round().clamp(0., 255.) }

/// Build an opaque color from a `0xRRGGBB` literal.
pub(crate) const fn hex_rgba(x: u32) -> RGBA<f64> {
    RGBA { r: ((x >> 16) & 0xff) as f64,
           g: ((x >> 8) & 0xff) as f64,
           b: (x & 0xff) as f64,
           a: 255. }
}

/// Light gray used for the “No data” entry when the caller supplies
/// nothing else (CSS `#eee`).
pub const NO_DATA_GRAY: RGBA<f64> = hex_rgba(0xeeeeee);

/// Parse any CSS color (`"#eee"`, `"steelblue"`, `"rgb(1, 2, 3)"`,…).
///
/// ```
/// use rgb::RGB8;
/// let c: RGB8 = color_scale::parse_color("#2ca25f").unwrap();
/// assert_eq!(c, RGB8::new(0x2c, 0xa2, 0x5f));
/// ```
pub fn parse_color<Color: RGBColor>(s: &str) -> Result<Color, Error> {
    let c = csscolorparser::parse(s.trim())
        .map_err(|e| Error::Color { value: s.to_string(),
                                    reason: e.to_string() })?;
    let [r, g, b, a] = c.to_rgba8();
    Ok(Color::from_rgba(RGBA { r: r as f64, g: g as f64, b: b as f64,
                               a: a as f64 }))
}

/// Format a color as a lowercase `#rrggbb` string (the alpha channel is
/// dropped).
pub fn to_hex<Color: RGBColor>(c: &Color) -> String {
    let RGBA { r, g, b, .. } = c.to_rgba();
    format!("#{:02x}{:02x}{:02x}",
            channel(r) as u8, channel(g) as u8, channel(b) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_hex() {
        let c: RGB8 = parse_color("#eee").unwrap();
        assert_eq!(c, <RGB8 as RGBColor>::from_rgba(NO_DATA_GRAY));
        assert_eq!(to_hex(&c), "#eeeeee");
    }

    #[test]
    fn parse_named_and_functional() {
        let c: RGBA8 = parse_color("red").unwrap();
        assert_eq!(c, RGBA8::new(255, 0, 0, 255));
        let c: RGB8 = parse_color(" rgb(1, 2, 3) ").unwrap();
        assert_eq!(c, RGB8::new(1, 2, 3));
    }

    #[test]
    fn parse_garbage() {
        let e = parse_color::<RGB8>("not a color").unwrap_err();
        assert!(matches!(e, Error::Color { .. }), "{e}");
    }

    #[test]
    fn out_of_range_components_saturate() {
        let c = <RGB8 as RGBColor>::from_rgba(RGBA { r: -3., g: 255.6, b: 127.4, a: 0. });
        assert_eq!(c, RGB8::new(0, 255, 127));
    }
}
