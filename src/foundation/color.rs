use serde::{Deserialize, Serialize};

use crate::foundation::math::{clamp, lerp};

/// Straight-alpha colour with channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Mix two colours.
    ///
    /// RGB channels are blended in squared space so that midpoints keep their brightness instead
    /// of going muddy; alpha is blended linearly.
    pub fn mix(from: Self, to: Self, t: f64) -> Self {
        fn channel(a: f64, b: f64, t: f64) -> f64 {
            lerp(a * a, b * b, t).max(0.0).sqrt()
        }

        Self {
            r: channel(from.r, to.r, t),
            g: channel(from.g, to.g, t),
            b: channel(from.b, to.b, t),
            a: lerp(from.a, to.a, t),
        }
    }

    /// Straight-alpha RGBA8 bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (clamp(x, 0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Parse a CSS-style colour string: `#RRGGBB`, `#RRGGBBAA`, `rgb(..)` or `rgba(..)`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_fn(args);
        }
        Err(format!(
            "unsupported colour \"{s}\" (expected #RRGGBB, #RRGGBBAA, rgb(..) or rgba(..))"
        ))
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        write!(f, "rgba({r}, {g}, {b}, {})", clamp(self.a, 0.0, 1.0))
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Css(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Css(s) => Self::parse(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::new(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::new(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex colour must be ASCII".to_owned());
    }
    match s.len() {
        6 => Ok(Rgba::from_rgba8(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        )),
        8 => Ok(Rgba::from_rgba8(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex colour must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

// rgb(r, g, b) / rgba(r, g, b, a) with 0..255 channels and 0..1 alpha.
fn parse_rgb_fn(args: &str) -> Result<Rgba, String> {
    let parts = args
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid colour component \"{}\"", p.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (r, g, b, a) = match parts.as_slice() {
        [r, g, b] => (*r, *g, *b, 1.0),
        [r, g, b, a] => (*r, *g, *b, *a),
        _ => return Err("rgb()/rgba() take 3 or 4 components".to_owned()),
    };
    Ok(Rgba::new(
        clamp(r, 0.0, 255.0) / 255.0,
        clamp(g, 0.0, 255.0) / 255.0,
        clamp(b, 0.0, 255.0) / 255.0,
        clamp(a, 0.0, 1.0),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
