use serde::{Deserialize, Serialize};

/// Packed `0xAARRGGBB` color; the unit of every pixel write.
///
/// The default value (`0x00000000`) is the frame background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    pub const LIGHT_GRAY: Self = Self(0xFFD3_D3D3);
    pub const DARK_GRAY: Self = Self(0xFFA9_A9A9);
    pub const DIM_GRAY: Self = Self(0xFF69_6969);
    pub const DARK_SLATE_GRAY: Self = Self(0xFF2F_4F4F);
    pub const SLATE_GRAY: Self = Self(0xFF70_8090);
    pub const LIGHT_SLATE_GRAY: Self = Self(0xFF77_8899);

    pub const RED: Self = Self(0xFFFF_0000);
    pub const GREEN: Self = Self(0xFF00_FF00);
    pub const BLUE: Self = Self(0xFF00_00FF);

    pub const COPPER: Self = Self(0xFFB8_7333);
    pub const BRONZE: Self = Self(0xFFCD_7F32);
    pub const AMBER: Self = Self(0xFFFF_BF00);
    pub const DESERT: Self = Self(0xFFED_C9AF);

    pub const ORANGE: Self = Self(0xFFFF_A500);
    pub const DARK_ORANGE: Self = Self(0xFFFF_8C00);

    pub const PINK: Self = Self(0xFFFF_C0CB);
    pub const HOT_PINK: Self = Self(0xFFFF_69B4);
    pub const DEEP_PINK: Self = Self(0xFFFF_1493);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color from straight RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self::from_argb(a, self.r(), self.g(), self.b())
    }

    /// Channels in encoder order (R, G, B, A).
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    pub const fn to_rgb8(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Scale RGB toward black; `factor` 0..=255 where 255 keeps the color. Result is opaque.
    pub fn faded(self, factor: u8) -> Self {
        fn scale(c: u8, f: u8) -> u8 {
            ((u16::from(c) * u16::from(f) + 127) / 255) as u8
        }
        Self::rgb(
            scale(self.r(), factor),
            scale(self.g(), factor),
            scale(self.b(), factor),
        )
    }

    /// Blend `fg` over `self` with fractional `coverage` in `[0, 1]`.
    ///
    /// Each channel (alpha included) is `self * (1 - coverage) + fg * coverage`, rounded and
    /// saturated. Coverage 0 returns `self` unchanged and coverage 1 returns `fg`.
    pub fn blend(self, fg: Color, coverage: f64) -> Self {
        let c = if coverage.is_nan() {
            0.0
        } else {
            coverage.clamp(0.0, 1.0)
        };
        let mix = |bg: u8, fg: u8| -> u8 {
            let v = f64::from(bg) * (1.0 - c) + f64::from(fg) * c;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::from_argb(
            mix(self.a(), fg.a()),
            mix(self.r(), fg.r()),
            mix(self.g(), fg.g()),
            mix(self.b(), fg.b()),
        )
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        ))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Packed(u32),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Packed(v) => Ok(Self(v)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::from_argb(*a, *r, *g, *b)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// `#RRGGBB` (opaque) or `#RRGGBBAA`, case-insensitive, `#` optional.
fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color::from_argb(
            hex_byte(&s[6..8])?,
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
