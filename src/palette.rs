//! Open Color palette (MIT, https://yeun.github.io/open-color/).
//!
//! Thirteen hue families with ten shades each (`0` lightest, `9` darkest)
//! plus `white` and `black`. Names look like `red_6`; a bare family name
//! means shade [`DEFAULT_SHADE`]. `#rrggbb` and `#rrggbbaa` literals are
//! accepted as well so configuration can step outside the table.

use egui::Color32;

use crate::error::PaletteError;

pub const DEFAULT_SHADE: usize = 6;

pub const WHITE: Color32 = rgb(0xffffff);
pub const BLACK: Color32 = rgb(0x000000);

#[rustfmt::skip]
const FAMILIES: [(&str, [u32; 10]); 13] = [
    ("gray", [
        0xf8f9fa, 0xf1f3f5, 0xe9ecef, 0xdee2e6, 0xced4da,
        0xadb5bd, 0x868e96, 0x495057, 0x343a40, 0x212529,
    ]),
    ("red", [
        0xfff5f5, 0xffe3e3, 0xffc9c9, 0xffa8a8, 0xff8787,
        0xff6b6b, 0xfa5252, 0xf03e3e, 0xe03131, 0xc92a2a,
    ]),
    ("pink", [
        0xfff0f6, 0xffdeeb, 0xfcc2d7, 0xfaa2c1, 0xf783ac,
        0xf06595, 0xe64980, 0xd6336c, 0xc2255c, 0xa61e4d,
    ]),
    ("grape", [
        0xf8f0fc, 0xf3d9fa, 0xeebefa, 0xe599f7, 0xda77f2,
        0xcc5de8, 0xbe4bdb, 0xae3ec9, 0x9c36b5, 0x862e9c,
    ]),
    ("violet", [
        0xf3f0ff, 0xe5dbff, 0xd0bfff, 0xb197fc, 0x9775fa,
        0x845ef7, 0x7950f2, 0x7048e8, 0x6741d9, 0x5f3dc4,
    ]),
    ("indigo", [
        0xedf2ff, 0xdbe4ff, 0xbac8ff, 0x91a7ff, 0x748ffc,
        0x5c7cfa, 0x4c6ef5, 0x4263eb, 0x3b5bdb, 0x364fc7,
    ]),
    ("blue", [
        0xe7f5ff, 0xd0ebff, 0xa5d8ff, 0x74c0fc, 0x4dabf7,
        0x339af0, 0x228be6, 0x1c7ed6, 0x1971c2, 0x1864ab,
    ]),
    ("cyan", [
        0xe3fafc, 0xc5f6fa, 0x99e9f2, 0x66d9e8, 0x3bc9db,
        0x22b8cf, 0x15aabf, 0x1098ad, 0x0c8599, 0x0b7285,
    ]),
    ("teal", [
        0xe6fcf5, 0xc3fae8, 0x96f2d7, 0x63e6be, 0x38d9a9,
        0x20c997, 0x12b886, 0x0ca678, 0x099268, 0x087f5b,
    ]),
    ("green", [
        0xebfbee, 0xd3f9d8, 0xb2f2bb, 0x8ce99a, 0x69db7c,
        0x51cf66, 0x40c057, 0x37b24d, 0x2f9e44, 0x2b8a3e,
    ]),
    ("lime", [
        0xf4fce3, 0xe9fac8, 0xd8f5a2, 0xc0eb75, 0xa9e34b,
        0x94d82d, 0x82c91e, 0x74b816, 0x66a80f, 0x5c940d,
    ]),
    ("yellow", [
        0xfff9db, 0xfff3bf, 0xffec99, 0xffe066, 0xffd43b,
        0xfcc419, 0xfab005, 0xf59f00, 0xf08c00, 0xe67700,
    ]),
    ("orange", [
        0xfff4e6, 0xffe8cc, 0xffd8a8, 0xffc078, 0xffa94d,
        0xff922b, 0xfd7e14, 0xf76707, 0xe8590c, 0xd9480f,
    ]),
];

/// Opaque color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Names of all hue families, in table order.
pub fn families() -> impl Iterator<Item = &'static str> {
    FAMILIES.iter().map(|(name, _)| *name)
}

/// Shade `index` of `family`, if both exist.
pub fn shade(family: &str, index: usize) -> Option<Color32> {
    FAMILIES
        .iter()
        .find(|(name, _)| *name == family)
        .and_then(|(_, shades)| shades.get(index))
        .map(|hex| rgb(*hex))
}

/// Resolves a palette name or hex literal to a color.
pub fn lookup(name: &str) -> Result<Color32, PaletteError> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }

    match name {
        "white" => return Ok(WHITE),
        "black" => return Ok(BLACK),
        _ => {}
    }

    let unknown = || PaletteError::UnknownColor(name.to_string());
    match name.rsplit_once('_') {
        Some((family, index)) => {
            let index: usize = index.parse().map_err(|_| unknown())?;
            shade(family, index).ok_or_else(unknown)
        }
        None => shade(name, DEFAULT_SHADE).ok_or_else(unknown),
    }
}

fn parse_hex(hex: &str) -> Result<Color32, PaletteError> {
    let invalid = || PaletteError::InvalidHex(format!("#{hex}"));
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_shades() {
        assert_eq!(lookup("gray_9").unwrap(), Color32::from_rgb(0x21, 0x25, 0x29));
        assert_eq!(lookup("red_0").unwrap(), Color32::from_rgb(0xff, 0xf5, 0xf5));
        assert_eq!(lookup("blue").unwrap(), lookup("blue_6").unwrap());
        assert_eq!(lookup("white").unwrap(), Color32::WHITE);
        assert_eq!(lookup("black").unwrap(), Color32::BLACK);
    }

    #[test]
    fn test_every_family_has_ten_shades() {
        assert_eq!(families().count(), 13);
        for family in families() {
            assert!(shade(family, 9).is_some(), "{family}");
            assert!(shade(family, 10).is_none(), "{family}");
        }
    }

    #[test]
    fn test_hex_literals() {
        assert_eq!(lookup("#ff0000").unwrap(), Color32::from_rgb(255, 0, 0));
        assert_eq!(lookup("#00ff0080").unwrap().a(), 0x80);
        assert!(matches!(lookup("#12345"), Err(PaletteError::InvalidHex(_))));
        assert!(matches!(lookup("#zzzzzz"), Err(PaletteError::InvalidHex(_))));
    }

    #[test]
    fn test_unknown_names() {
        assert!(matches!(lookup("mauve"), Err(PaletteError::UnknownColor(_))));
        assert!(matches!(lookup("red_10"), Err(PaletteError::UnknownColor(_))));
        assert!(matches!(lookup("red_x"), Err(PaletteError::UnknownColor(_))));
    }
}
