//! Static color schemes: the [ColorBrewer](https://colorbrewer2.org/)
//! schemes by Cynthia Brewer (one class set per number of classes) and
//! the Matplotlib colormaps.

use std::collections::HashMap;
use lazy_static::lazy_static;

pub(crate) mod ty;
use ty::{PaletteType::*, SchemeData};

/// Name of the scheme used when the requested one is unknown.
pub const DEFAULT_SCHEME: &str = "BuGn";

lazy_static! {
    pub(crate) static ref BUGN: SchemeData = SchemeData::new(
        "BuGn", Seq, false, &[
            &[0xe5f5f9, 0x99d8c9, 0x2ca25f],
            &[0xedf8fb, 0xb2e2e2, 0x66c2a4, 0x238b45],
            &[0xedf8fb, 0xb2e2e2, 0x66c2a4, 0x2ca25f, 0x006d2c],
            &[0xedf8fb, 0xccece6, 0x99d8c9, 0x66c2a4, 0x2ca25f, 0x006d2c],
            &[0xedf8fb, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76, 0x238b45,
              0x005824],
            &[0xf7fcfd, 0xe5f5f9, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76,
              0x238b45, 0x005824],
            &[0xf7fcfd, 0xe5f5f9, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76,
              0x238b45, 0x006d2c, 0x00441b]]);

    static ref BLUES: SchemeData = SchemeData::new(
        "Blues", Seq, true, &[
            &[0xdeebf7, 0x9ecae1, 0x3182bd],
            &[0xeff3ff, 0xbdd7e7, 0x6baed6, 0x2171b5],
            &[0xeff3ff, 0xbdd7e7, 0x6baed6, 0x3182bd, 0x08519c],
            &[0xeff3ff, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x3182bd, 0x08519c],
            &[0xeff3ff, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5,
              0x084594],
            &[0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6,
              0x2171b5, 0x084594],
            &[0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6,
              0x2171b5, 0x08519c, 0x08306b]]);

    static ref GREENS: SchemeData = SchemeData::new(
        "Greens", Seq, true, &[
            &[0xe5f5e0, 0xa1d99b, 0x31a354],
            &[0xedf8e9, 0xbae4b3, 0x74c476, 0x238b45],
            &[0xedf8e9, 0xbae4b3, 0x74c476, 0x31a354, 0x006d2c],
            &[0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x31a354, 0x006d2c],
            &[0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45,
              0x005a32],
            &[0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d,
              0x238b45, 0x005a32],
            &[0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d,
              0x238b45, 0x006d2c, 0x00441b]]);

    static ref GREYS: SchemeData = SchemeData::new(
        "Greys", Seq, true, &[
            &[0xf0f0f0, 0xbdbdbd, 0x636363],
            &[0xf7f7f7, 0xcccccc, 0x969696, 0x525252],
            &[0xf7f7f7, 0xcccccc, 0x969696, 0x636363, 0x252525],
            &[0xf7f7f7, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x636363, 0x252525],
            &[0xf7f7f7, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252,
              0x252525],
            &[0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373,
              0x525252, 0x252525],
            &[0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373,
              0x525252, 0x252525, 0x000000]]);

    static ref REDS: SchemeData = SchemeData::new(
        "Reds", Seq, true, &[
            &[0xfee0d2, 0xfc9272, 0xde2d26],
            &[0xfee5d9, 0xfcae91, 0xfb6a4a, 0xcb181d],
            &[0xfee5d9, 0xfcae91, 0xfb6a4a, 0xde2d26, 0xa50f15],
            &[0xfee5d9, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xde2d26, 0xa50f15],
            &[0xfee5d9, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d,
              0x99000d],
            &[0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c,
              0xcb181d, 0x99000d],
            &[0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c,
              0xcb181d, 0xa50f15, 0x67000d]]);

    static ref ORANGES: SchemeData = SchemeData::new(
        "Oranges", Seq, true, &[
            &[0xfee6ce, 0xfdae6b, 0xe6550d],
            &[0xfeedde, 0xfdbe85, 0xfd8d3c, 0xd94701],
            &[0xfeedde, 0xfdbe85, 0xfd8d3c, 0xe6550d, 0xa63603],
            &[0xfeedde, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xe6550d, 0xa63603],
            &[0xfeedde, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801,
              0x8c2d04],
            &[0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913,
              0xd94801, 0x8c2d04],
            &[0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913,
              0xd94801, 0xa63603, 0x7f2704]]);

    static ref PURPLES: SchemeData = SchemeData::new(
        "Purples", Seq, true, &[
            &[0xefedf5, 0xbcbddc, 0x756bb1],
            &[0xf2f0f7, 0xcbc9e2, 0x9e9ac8, 0x6a51a3],
            &[0xf2f0f7, 0xcbc9e2, 0x9e9ac8, 0x756bb1, 0x54278f],
            &[0xf2f0f7, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x756bb1, 0x54278f],
            &[0xf2f0f7, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3,
              0x4a1486],
            &[0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba,
              0x6a51a3, 0x4a1486],
            &[0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba,
              0x6a51a3, 0x54278f, 0x3f007d]]);

    static ref YLGN: SchemeData = SchemeData::new(
        "YlGn", Seq, false, &[
            &[0xf7fcb9, 0xaddd8e, 0x31a354],
            &[0xffffcc, 0xc2e699, 0x78c679, 0x238443],
            &[0xffffcc, 0xc2e699, 0x78c679, 0x31a354, 0x006837],
            &[0xffffcc, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x31a354, 0x006837],
            &[0xffffcc, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d, 0x238443,
              0x005a32],
            &[0xffffe5, 0xf7fcb9, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d,
              0x238443, 0x005a32],
            &[0xffffe5, 0xf7fcb9, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d,
              0x238443, 0x006837, 0x004529]]);

    static ref YLORRD: SchemeData = SchemeData::new(
        "YlOrRd", Seq, false, &[
            &[0xffeda0, 0xfeb24c, 0xf03b20],
            &[0xffffb2, 0xfecc5c, 0xfd8d3c, 0xe31a1c],
            &[0xffffb2, 0xfecc5c, 0xfd8d3c, 0xf03b20, 0xbd0026],
            &[0xffffb2, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xf03b20, 0xbd0026],
            &[0xffffb2, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c,
              0xb10026],
            &[0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a,
              0xe31a1c, 0xb10026],
            &[0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a,
              0xe31a1c, 0xbd0026, 0x800026]]);

    static ref RDBU: SchemeData = SchemeData::new(
        "RdBu", Div, false, &[
            &[0xef8a62, 0xf7f7f7, 0x67a9cf],
            &[0xca0020, 0xf4a582, 0x92c5de, 0x0571b0],
            &[0xca0020, 0xf4a582, 0xf7f7f7, 0x92c5de, 0x0571b0],
            &[0xb2182b, 0xef8a62, 0xfddbc7, 0xd1e5f0, 0x67a9cf, 0x2166ac],
            &[0xb2182b, 0xef8a62, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x67a9cf,
              0x2166ac],
            &[0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xd1e5f0, 0x92c5de,
              0x4393c3, 0x2166ac],
            &[0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0,
              0x92c5de, 0x4393c3, 0x2166ac],
            &[0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xd1e5f0,
              0x92c5de, 0x4393c3, 0x2166ac, 0x053061],
            &[0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7,
              0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac, 0x053061]]);

    static ref RDYLGN: SchemeData = SchemeData::new(
        "RdYlGn", Div, false, &[
            &[0xfc8d59, 0xffffbf, 0x91cf60],
            &[0xd7191c, 0xfdae61, 0xa6d96a, 0x1a9641],
            &[0xd7191c, 0xfdae61, 0xffffbf, 0xa6d96a, 0x1a9641],
            &[0xd73027, 0xfc8d59, 0xfee08b, 0xd9ef8b, 0x91cf60, 0x1a9850],
            &[0xd73027, 0xfc8d59, 0xfee08b, 0xffffbf, 0xd9ef8b, 0x91cf60,
              0x1a9850],
            &[0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xd9ef8b, 0xa6d96a,
              0x66bd63, 0x1a9850],
            &[0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xd9ef8b,
              0xa6d96a, 0x66bd63, 0x1a9850],
            &[0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xd9ef8b,
              0xa6d96a, 0x66bd63, 0x1a9850, 0x006837],
            &[0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf,
              0xd9ef8b, 0xa6d96a, 0x66bd63, 0x1a9850, 0x006837]]);

    static ref SET1: SchemeData = SchemeData::qualitative(
        "Set1", &[0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00,
                  0xffff33, 0xa65628, 0xf781bf, 0x999999]);

    static ref SET2: SchemeData = SchemeData::qualitative(
        "Set2", &[0x66c2a5, 0xfc8d62, 0x8da0cb, 0xe78ac3, 0xa6d854,
                  0xffd92f, 0xe5c494, 0xb3b3b3]);

    static ref DARK2: SchemeData = SchemeData::qualitative(
        "Dark2", &[0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e,
                   0xe6ab02, 0xa6761d, 0x666666]);

    static ref VIRIDIS: SchemeData = SchemeData::colormap(
        "Viridis", &[
            0x440154, 0x470e61, 0x481a6c, 0x482575, 0x472f7d, 0x443a83,
            0x414487, 0x3d4e8a, 0x39568c, 0x35608d, 0x31688e, 0x2d708e,
            0x2a788e, 0x27818e, 0x23888e, 0x21918d, 0x1f988b, 0x1fa088,
            0x22a884, 0x2ab07f, 0x35b779, 0x43bf71, 0x54c568, 0x66cc5d,
            0x7ad151, 0x8fd744, 0xa5db36, 0xbcdf27, 0xd2e21b, 0xe9e51a,
            0xfde725]);

    static ref MAGMA: SchemeData = SchemeData::colormap(
        "Magma", &[
            0x000004, 0x040413, 0x0b0924, 0x150e37, 0x20114b, 0x2c1160,
            0x3b0f70, 0x4a1079, 0x57157e, 0x651a80, 0x721f81, 0x7f2482,
            0x8c2981, 0x9a2e80, 0xa8327d, 0xb6377a, 0xc43c75, 0xd1426f,
            0xde4968, 0xe95462, 0xf1605d, 0xf76f5c, 0xfa7f5e, 0xfc8f65,
            0xfe9f6d, 0xfeaf78, 0xfebf84, 0xfece91, 0xfddea0, 0xfcedaf,
            0xfcfdbf]);

    /// All known schemes, by name.
    pub(crate) static ref ALL_SCHEMES: HashMap<&'static str, &'static SchemeData> = {
        let all: [&'static SchemeData; 16] = [
            &*BUGN, &*BLUES, &*GREENS, &*GREYS, &*REDS, &*ORANGES,
            &*PURPLES, &*YLGN, &*YLORRD, &*RDBU, &*RDYLGN, &*SET1, &*SET2,
            &*DARK2, &*VIRIDIS, &*MAGMA];
        all.into_iter().map(|s| (s.name, s)).collect()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_are_well_formed() {
        for s in ALL_SCHEMES.values() {
            assert!(!s.sets.is_empty(), "{}", s.name);
            for w in s.sets.windows(2) {
                assert!(w[0].len() < w[1].len(), "{} not sorted", s.name);
            }
            assert!(s.smallest().len() >= 2, "{}", s.name);
        }
    }

    #[test]
    fn brewer_class_sets() {
        assert_eq!(BUGN.smallest().len(), 3);
        assert_eq!(BUGN.largest().len(), 9);
        assert!(BUGN.set(5).is_some());
        assert!(BUGN.set(10).is_none());
        assert_eq!(RDBU.largest().len(), 11);
        assert_eq!(ALL_SCHEMES.len(), 16);
        assert!(ALL_SCHEMES.contains_key(DEFAULT_SCHEME));
    }
}
