//! Serializable description of a gradient render job.
//!
//! A [`GradientSpec`] names the two endpoint colors, how many interpolation
//! samples to take, the output image size, and which color spaces to stack
//! as strips. Every field has a default, so `{}` is a valid spec.

use crate::color::Rgb;
use crate::error::ColorError;
use crate::gradient::{ColorSpace, Gradient, HueInterpolation};
use serde::{Deserialize, Serialize};

/// Upper bound on interpolation samples per strip.
pub const MAX_SAMPLES: usize = 1 << 16;

fn default_begin() -> Rgb {
    Rgb::from_rgb8(80, 30, 80)
}

fn default_end() -> Rgb {
    Rgb::from_rgb8(239, 217, 217)
}

fn default_samples() -> usize {
    16
}

fn default_width() -> usize {
    800
}

fn default_height() -> usize {
    200
}

fn default_spaces() -> Vec<ColorSpace> {
    ColorSpace::ALL.to_vec()
}

/// Reproducible description of a gradient comparison image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    #[serde(default = "default_begin")]
    pub begin: Rgb,
    #[serde(default = "default_end")]
    pub end: Rgb,
    /// Number of interpolation samples per strip.
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    /// Spaces to render, top to bottom.
    #[serde(default = "default_spaces")]
    pub spaces: Vec<ColorSpace>,
    #[serde(default)]
    pub hue: HueInterpolation,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            begin: default_begin(),
            end: default_end(),
            samples: default_samples(),
            width: default_width(),
            height: default_height(),
            spaces: default_spaces(),
            hue: HueInterpolation::default(),
        }
    }
}

impl GradientSpec {
    /// Parses a spec from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let spec: GradientSpec =
            serde_json::from_str(json).map_err(|e| ColorError::InvalidConfig(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Checks dimensions, sample count, and that every strip gets at least
    /// one row.
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.width == 0 || self.height == 0 {
            return Err(ColorError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .and_then(|px| px.checked_mul(4))
            .ok_or(ColorError::InvalidDimensions)?;
        if self.samples == 0 {
            return Err(ColorError::InvalidConfig(
                "samples must be at least 1".to_string(),
            ));
        }
        if self.samples > MAX_SAMPLES {
            return Err(ColorError::InvalidConfig(format!(
                "samples {} exceeds the maximum of {MAX_SAMPLES}",
                self.samples
            )));
        }
        if self.spaces.is_empty() {
            return Err(ColorError::InvalidConfig(
                "at least one color space is required".to_string(),
            ));
        }
        if self.height < self.spaces.len() {
            return Err(ColorError::InvalidConfig(format!(
                "height {} is too small for {} strips",
                self.height,
                self.spaces.len()
            )));
        }
        Ok(())
    }

    /// One gradient per configured space, in strip order.
    pub fn gradients(&self) -> Vec<Gradient> {
        self.spaces
            .iter()
            .map(|&space| Gradient::new(self.begin, self.end, space).with_hue(self.hue))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid() {
        let spec = GradientSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.samples, 16);
        assert_eq!((spec.width, spec.height), (800, 200));
        assert_eq!(spec.spaces, ColorSpace::ALL.to_vec());
        assert_eq!(spec.begin.to_hex(), "#501e50");
        assert_eq!(spec.end.to_hex(), "#efd9d9");
    }

    #[test]
    fn empty_json_uses_defaults() {
        let spec = GradientSpec::from_json("{}").unwrap();
        assert_eq!(spec, GradientSpec::default());
    }

    #[test]
    fn json_overrides_fields() {
        let spec = GradientSpec::from_json(
            r##"{"begin": "#000000", "end": "#ffffff", "samples": 8,
                "spaces": ["lch", "lab"], "hue": "shorter"}"##,
        )
        .unwrap();
        assert_eq!(spec.begin, Rgb::BLACK);
        assert_eq!(spec.end, Rgb::WHITE);
        assert_eq!(spec.samples, 8);
        assert_eq!(spec.spaces, vec![ColorSpace::Lch, ColorSpace::Lab]);
        assert_eq!(spec.hue, HueInterpolation::Shorter);
    }

    #[test]
    fn serde_round_trip() {
        let spec = GradientSpec {
            samples: 5,
            spaces: vec![ColorSpace::Hsv],
            ..GradientSpec::default()
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back = GradientSpec::from_json(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn from_json_rejects_bad_input() {
        assert!(matches!(
            GradientSpec::from_json("{not json"),
            Err(ColorError::InvalidConfig(_))
        ));
        assert!(GradientSpec::from_json(r##"{"begin": "#zzzzzz"}"##).is_err());
        assert!(GradientSpec::from_json(r#"{"spaces": ["cmyk"]}"#).is_err());
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let spec = GradientSpec {
            width: 0,
            ..GradientSpec::default()
        };
        assert!(matches!(spec.validate(), Err(ColorError::InvalidDimensions)));
    }

    #[test]
    fn validate_rejects_overflowing_dimensions() {
        let spec = GradientSpec {
            width: usize::MAX,
            height: 2,
            ..GradientSpec::default()
        };
        assert!(matches!(spec.validate(), Err(ColorError::InvalidDimensions)));
    }

    #[test]
    fn validate_rejects_zero_samples() {
        let spec = GradientSpec {
            samples: 0,
            ..GradientSpec::default()
        };
        assert!(matches!(spec.validate(), Err(ColorError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_oversized_samples() {
        let spec = GradientSpec {
            samples: usize::MAX,
            width: 4,
            height: 4,
            ..GradientSpec::default()
        };
        let err = spec.validate().unwrap_err();
        assert!(matches!(err, ColorError::InvalidConfig(_)));
        assert!(err.to_string().contains("maximum"), "got: {err}");

        let at_cap = GradientSpec {
            samples: MAX_SAMPLES,
            ..GradientSpec::default()
        };
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn from_json_rejects_oversized_samples() {
        let json = format!(r#"{{"samples": {}}}"#, MAX_SAMPLES + 1);
        assert!(matches!(
            GradientSpec::from_json(&json),
            Err(ColorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_empty_spaces() {
        let spec = GradientSpec {
            spaces: vec![],
            ..GradientSpec::default()
        };
        assert!(matches!(spec.validate(), Err(ColorError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_height_below_strip_count() {
        let spec = GradientSpec {
            height: 3,
            ..GradientSpec::default()
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("4 strips"), "got: {err}");
    }

    #[test]
    fn gradients_follow_spaces_and_hue_mode() {
        let spec = GradientSpec {
            spaces: vec![ColorSpace::Lch, ColorSpace::Rgb],
            hue: HueInterpolation::Shorter,
            ..GradientSpec::default()
        };
        let gradients = spec.gradients();
        assert_eq!(gradients.len(), 2);
        assert_eq!(gradients[0].space(), ColorSpace::Lch);
        assert_eq!(gradients[1].space(), ColorSpace::Rgb);
        assert!(gradients
            .iter()
            .all(|g| g.hue() == HueInterpolation::Shorter && g.begin() == spec.begin));
    }
}
