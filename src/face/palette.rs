//! Face colors.
//!
//! Skin and hair tones are taken from the Heart Gem palette
//! (<https://lospec.com/palette-list/heart-gem>).

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse six hex digits (`"rrggbb"`, no `#`). Either case is accepted.
    pub const fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.as_bytes();
        if bytes.len() != 6 {
            return None;
        }
        match (
            hex_pair(bytes[0], bytes[1]),
            hex_pair(bytes[2], bytes[3]),
            hex_pair(bytes[4], bytes[5]),
        ) {
            (Some(r), Some(g), Some(b)) => Some(Self::new(r, g, b)),
            _ => None,
        }
    }
}

const fn hex_digit(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

const fn hex_pair(high: u8, low: u8) -> Option<u8> {
    match (hex_digit(high), hex_digit(low)) {
        (Some(high), Some(low)) => Some(high * 16 + low),
        _ => None,
    }
}

/// Palette entry; a malformed literal fails the build.
const fn color(hex: &str) -> Rgb {
    match Rgb::from_hex(hex) {
        Some(rgb) => rgb,
        None => panic!("palette colors are six hex digits"),
    }
}

/// Colors addressed by the digit symbols of a face bitmap.
pub const PALETTE: [Rgb; 10] = [
    color("2d272a"), // 0: black
    color("ff0026"), // 1: hair
    color("cc001e"), // 2: hair shade
    color("b3001a"), // 3: hair dark
    color("ee0e46"), // 4: eyes
    color("f6cdcb"), // 5: skin
    color("f79ca1"), // 6: skin shade
    color("925b6e"), // 7: dress
    color("76445f"), // 8: dress shade
    color("ffffff"), // 9: highlight
];
