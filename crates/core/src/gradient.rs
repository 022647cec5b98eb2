//! Two-color gradients interpolated in a chosen color space.
//!
//! Endpoints are converted into the target space once, blended
//! component-wise as `begin * (1 - a) + end * a`, and converted back to RGB
//! for display.
//!
//! Hue components get two extra rules. By default the hue angle is blended
//! like any other component, so a gradient from 350° to 10° sweeps the long
//! way round through 180°. [`HueInterpolation::Shorter`] takes the short arc
//! instead. An undefined HSV hue (gray endpoint) borrows the other
//! endpoint's hue so the blend never sees NaN.

use crate::color::{Hsv, Lab, Lch, Rgb};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color space a gradient is interpolated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    Rgb,
    Lab,
    Hsv,
    Lch,
}

impl ColorSpace {
    /// Every space, in the order the renderer stacks them.
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Rgb,
        ColorSpace::Lab,
        ColorSpace::Hsv,
        ColorSpace::Lch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Lab => "lab",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Lch => "lch",
        }
    }

    /// Looks up a space by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::UnknownSpace(name.to_string()))
    }

    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|space| space.name()).collect()
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How hue angles are blended in HSV and LCH gradients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueInterpolation {
    /// Plain linear blend of the angle; may cross the far side of the wheel.
    #[default]
    Linear,
    /// Shortest arc across the 0°/360° seam.
    Shorter,
}

impl HueInterpolation {
    pub const ALL: [HueInterpolation; 2] = [HueInterpolation::Linear, HueInterpolation::Shorter];

    pub fn name(self) -> &'static str {
        match self {
            HueInterpolation::Linear => "linear",
            HueInterpolation::Shorter => "shorter",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::UnknownHueMode(name.to_string()))
    }

    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|mode| mode.name()).collect()
    }

    fn blend(self, h0: f32, h1: f32, a: f32) -> f32 {
        match self {
            HueInterpolation::Linear => lerp(h0, h1, a),
            HueInterpolation::Shorter => interpolate_hue_shorter(h0, h1, a),
        }
    }
}

/// Endpoints pre-converted into the interpolation space.
#[derive(Debug, Clone, Copy)]
enum Endpoints {
    Rgb(Rgb, Rgb),
    Lab(Lab, Lab),
    Hsv(Hsv, Hsv),
    Lch(Lch, Lch),
}

/// A two-color gradient sampled by interpolation in one color space.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    begin: Rgb,
    end: Rgb,
    space: ColorSpace,
    hue: HueInterpolation,
    endpoints: Endpoints,
}

impl Gradient {
    /// Creates a gradient from `begin` to `end` interpolated in `space`,
    /// with linear hue blending.
    pub fn new(begin: Rgb, end: Rgb, space: ColorSpace) -> Self {
        let endpoints = match space {
            ColorSpace::Rgb => Endpoints::Rgb(begin, end),
            ColorSpace::Lab => Endpoints::Lab(begin.to_lab(), end.to_lab()),
            ColorSpace::Hsv => Endpoints::Hsv(begin.to_hsv(), end.to_hsv()),
            ColorSpace::Lch => Endpoints::Lch(begin.to_lch(), end.to_lch()),
        };
        Self {
            begin,
            end,
            space,
            hue: HueInterpolation::Linear,
            endpoints,
        }
    }

    /// Sets the hue blending mode. Only affects HSV and LCH gradients.
    pub fn with_hue(mut self, hue: HueInterpolation) -> Self {
        self.hue = hue;
        self
    }

    pub fn begin(&self) -> Rgb {
        self.begin
    }

    pub fn end(&self) -> Rgb {
        self.end
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn hue(&self) -> HueInterpolation {
        self.hue
    }

    /// Samples the gradient at `a` in [0, 1].
    ///
    /// `a` is clamped to [0, 1]; NaN is treated as 0.
    pub fn sample(&self, a: f32) -> Rgb {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };

        match self.endpoints {
            Endpoints::Rgb(c0, c1) => Rgb {
                r: lerp(c0.r, c1.r, a),
                g: lerp(c0.g, c1.g, a),
                b: lerp(c0.b, c1.b, a),
            },
            Endpoints::Lab(c0, c1) => Lab {
                l: lerp(c0.l, c1.l, a),
                a: lerp(c0.a, c1.a, a),
                b: lerp(c0.b, c1.b, a),
            }
            .to_rgb(),
            Endpoints::Hsv(c0, c1) => {
                let (h0, h1) = defined_hues(c0, c1);
                Hsv {
                    h: self.hue.blend(h0, h1, a),
                    s: lerp(c0.s, c1.s, a),
                    v: lerp(c0.v, c1.v, a),
                }
                .to_rgb()
            }
            Endpoints::Lch(c0, c1) => Lch {
                l: lerp(c0.l, c1.l, a),
                c: lerp(c0.c, c1.c, a),
                h: self.hue.blend(c0.h, c1.h, a),
            }
            .to_rgb(),
        }
    }

    /// Returns `count` evenly spaced samples, endpoints included.
    ///
    /// A single sample is the begin color; zero samples is an empty vector.
    pub fn samples(&self, count: usize) -> Vec<Rgb> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..count)
                .map(|i| self.sample(i as f32 / (count - 1) as f32))
                .collect(),
        }
    }
}

/// Per-component convex combination `x0 * (1 - a) + x1 * a`.
pub fn lerp(x0: f32, x1: f32, a: f32) -> f32 {
    x0 * (1.0 - a) + x1 * a
}

/// Substitutes a missing HSV hue with the other endpoint's.
///
/// Both missing means both endpoints are gray, so saturation stays at zero
/// and the hue is never read.
fn defined_hues(c0: Hsv, c1: Hsv) -> (f32, f32) {
    match (c0.hue(), c1.hue()) {
        (Some(h0), Some(h1)) => (h0, h1),
        (Some(h), None) | (None, Some(h)) => (h, h),
        (None, None) => (0.0, 0.0),
    }
}

/// Interpolates hue using shortest-arc logic, handling wraparound at 360.
fn interpolate_hue_shorter(h0: f32, h1: f32, a: f32) -> f32 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    crate::color::normalize_hue(h0 + a * delta)
}
