use crate::error::{Error, Result};
use image::Rgb;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Gray,
}

const VIRIDIS: &[[u8; 3]] = &[
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: &[[u8; 3]] = &[
    [0x0d, 0x08, 0x87],
    [0x46, 0x03, 0x9f],
    [0x72, 0x01, 0xa8],
    [0x9c, 0x17, 0x9e],
    [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b],
    [0xed, 0x79, 0x53],
    [0xfb, 0x9f, 0x3a],
    [0xfd, 0xca, 0x26],
    [0xf0, 0xf9, 0x21],
];

const GRAY: &[[u8; 3]] = &[[0x00, 0x00, 0x00], [0xff, 0xff, 0xff]];

impl Colormap {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => VIRIDIS,
            Colormap::Plasma => PLASMA,
            Colormap::Gray => GRAY,
        }
    }

    /// Linear interpolation along the map; `t` is clamped to `[0, 1]`.
    pub fn sample(self, t: f32) -> Rgb<u8> {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (stops.len() - 1) as f32;
        let lo = pos.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = pos - lo as f32;
        let mut out = [0u8; 3];
        for (i, channel) in out.iter_mut().enumerate() {
            let a = stops[lo][i] as f32;
            let b = stops[hi][i] as f32;
            *channel = (a + (b - a) * frac).round() as u8;
        }
        Rgb(out)
    }
}

/// Parses a colour name or `#rrggbb`.
pub fn parse_color(value: &str) -> Result<Rgb<u8>> {
    let s = value.trim().to_lowercase();
    match s.as_str() {
        "white" => return Ok(Rgb([255, 255, 255])),
        "black" => return Ok(Rgb([0, 0, 0])),
        "gray" | "grey" => return Ok(Rgb([128, 128, 128])),
        _ => {}
    }
    let hex = s
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| Error::Config(format!("invalid colour: {}", value)))?;
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Rgb([r, g, b])),
        _ => Err(Error::Config(format!("invalid colour: {}", value))),
    }
}
