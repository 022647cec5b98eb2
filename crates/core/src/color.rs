//! Color types and conversion functions.
//!
//! Provides four color records (`Rgb`, `Lab`, `Lch`, `Hsv`) and pure
//! conversions between them. Everything is `f32` and `Copy`; no conversion
//! allocates, fails, or touches shared state.
//!
//! LAB is CIE L*a*b* referenced to the D65 white point. LCH is its polar
//! form. HSV is derived directly from RGB and does not go through LAB.
//!
//! Inputs are not validated. Out-of-domain values flow through the formulas
//! and may come out out-of-range or NaN.

use crate::error::ColorError;
use glam::{Mat3, Vec3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// D65 reference white and the CIE companding constants.
mod lab_constants {
    use glam::Vec3;

    /// D65 reference white (Xn, Yn, Zn).
    pub const WHITE: Vec3 = Vec3::new(0.950470, 1.0, 1.088830);

    pub const T0: f32 = 0.137931034; // 4 / 29
    pub const T1: f32 = 0.206896552; // 6 / 29
    pub const T2: f32 = 0.12841855; // 3 * t1 * t1
    pub const T3: f32 = 0.008856452; // t1 * t1 * t1
}

/// sRGB (linear light) to XYZ (D65). Column-major.
const RGB_TO_XYZ: Mat3 = Mat3::from_cols(
    Vec3::new(0.4124564, 0.2126729, 0.0193339),
    Vec3::new(0.3575761, 0.7151522, 0.1191920),
    Vec3::new(0.1804375, 0.0721750, 0.9503041),
);

/// XYZ (D65) to sRGB (linear light). Column-major.
const XYZ_TO_RGB: Mat3 = Mat3::from_cols(
    Vec3::new(3.2404542, -0.9692660, 0.0556434),
    Vec3::new(-1.5371385, 1.8760108, -0.2040259),
    Vec3::new(-0.4985314, 0.0415560, 1.0572252),
);

/// Display-referred sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex form is 8-bit, so a
/// serde round-trip loses up to 0.5/255 per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// CIE-LAB color referenced to D65.
///
/// `l` is in [0, 100]; `a` and `b` are unbounded (roughly [-150, 150]).
/// Either of `a`/`b` may be NaN when handed to [`Lab::to_rgb`], which then
/// treats that axis as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// CIE-LCH(ab): LAB's a/b plane as chroma and hue angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

/// Hexagonal hue/saturation/value model.
///
/// `h` is in [0, 360) or NaN when the hue is undefined (achromatic input).
/// Use [`Hsv::hue`] rather than comparing `h` numerically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Quantizes to 8-bit channels, clamping and rounding each component.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ]
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb::from_rgb8(r, g, b))
    }

    /// Formats the color as `"#rrggbb"`, clamping and rounding each channel.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Converts to CIE-LAB (D65).
    pub fn to_lab(self) -> Lab {
        let linear = Vec3::new(linearize(self.r), linearize(self.g), linearize(self.b));
        let xyz = RGB_TO_XYZ * linear / lab_constants::WHITE;

        let fx = xyz_to_lab_component(xyz.x);
        let fy = xyz_to_lab_component(xyz.y);
        let fz = xyz_to_lab_component(xyz.z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Converts to LCH by way of LAB.
    pub fn to_lch(self) -> Lch {
        self.to_lab().to_lch()
    }

    /// Converts to HSV.
    ///
    /// Achromatic input (`max == min`) has no hue: `h` is NaN and `s` is 0.
    pub fn to_hsv(self) -> Hsv {
        let Rgb { r, g, b } = self;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if max == 0.0 {
            return Hsv {
                h: f32::NAN,
                s: 0.0,
                v: max,
            };
        }

        // delta == 0 gives 0/0 here, which is the undefined-hue sentinel.
        let h = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        Hsv {
            h: normalize_hue(h * 60.0),
            s: delta / max,
            v: max,
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Lab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Converts to RGB, hard-clamping each channel to [0, 1].
    ///
    /// A NaN `a` or `b` is read as "no contribution on this axis". Out of
    /// gamut colors are clipped per channel, which can shift hue.
    pub fn to_rgb(self) -> Rgb {
        let fy = (self.l + 16.0) / 116.0;
        let fx = if self.a.is_nan() {
            fy
        } else {
            fy + self.a / 500.0
        };
        let fz = if self.b.is_nan() {
            fy
        } else {
            fy - self.b / 200.0
        };

        let xyz = Vec3::new(
            lab_to_xyz_component(fx),
            lab_to_xyz_component(fy),
            lab_to_xyz_component(fz),
        ) * lab_constants::WHITE;
        let linear = XYZ_TO_RGB * xyz;

        Rgb {
            r: delinearize(linear.x).clamp(0.0, 1.0),
            g: delinearize(linear.y).clamp(0.0, 1.0),
            b: delinearize(linear.z).clamp(0.0, 1.0),
        }
    }

    /// Converts to polar form.
    ///
    /// When chroma rounds to zero at four decimal places the hue is forced
    /// to 0 rather than left as whatever `atan2` returns near the origin.
    pub fn to_lch(self) -> Lch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let h = if (c * 10000.0).round() == 0.0 {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };
        Lch { l: self.l, c, h }
    }
}

impl Lch {
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    pub fn to_lab(self) -> Lab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Lab {
            l: self.l,
            a: cos * self.c,
            b: sin * self.c,
        }
    }

    /// Converts to RGB by way of LAB, with the same clamping as [`Lab::to_rgb`].
    pub fn to_rgb(self) -> Rgb {
        self.to_lab().to_rgb()
    }
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// The hue, or `None` when it is undefined.
    pub fn hue(self) -> Option<f32> {
        if self.h.is_nan() {
            None
        } else {
            Some(self.h)
        }
    }

    /// Converts to RGB.
    ///
    /// With `s == 0` the hue is never read, so an undefined hue is fine.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { s, v, .. } = self;
        if s == 0.0 {
            return Rgb { r: v, g: v, b: v };
        }

        let h = normalize_hue(self.h) / 60.0;
        let Some(sector) = hue_sector(h) else {
            debug_assert!(false, "hsv hue {} has no sector", self.h);
            return Rgb::WHITE;
        };
        let f = h - h.floor();
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb { r, g, b }
    }
}

/// Sector index in 0..6 for a hue already divided by 60, or `None` when the
/// hue is not finite.
fn hue_sector(h: f32) -> Option<u8> {
    if !h.is_finite() {
        return None;
    }
    Some((h.floor() as i32).rem_euclid(6) as u8)
}

/// Wraps a hue angle into [0, 360). NaN stays NaN.
pub fn normalize_hue(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative angle can round up to exactly 360.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// sRGB-encoded channel to linear light.
pub fn linearize(r: f32) -> f32 {
    if r <= 0.04045 {
        r / 12.92
    } else {
        ((r + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear-light channel to sRGB encoding. Inverse of [`linearize`].
pub fn delinearize(r: f32) -> f32 {
    if r <= 0.00304 {
        12.92 * r
    } else {
        1.055 * r.powf(1.0 / 2.4) - 0.055
    }
}

/// CIE companding of a white-normalized XYZ component.
///
/// Below `(6/29)^3` a linear segment replaces the cube root so the slope
/// stays finite at zero.
pub fn xyz_to_lab_component(t: f32) -> f32 {
    if t > lab_constants::T3 {
        t.powf(1.0 / 3.0)
    } else {
        t / lab_constants::T2 + lab_constants::T0
    }
}

/// Inverse of [`xyz_to_lab_component`].
pub fn lab_to_xyz_component(t: f32) -> f32 {
    if t > lab_constants::T1 {
        t * t * t
    } else {
        lab_constants::T2 * (t - lab_constants::T0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB{{{}, {}, {}}}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LAB{{{}, {}, {}}}", self.l, self.a, self.b)
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LCH{{{}, {}, {}}}", self.l, self.c, self.h)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV{{{}, {}, {}}}", self.h, self.s, self.v)
    }
}
