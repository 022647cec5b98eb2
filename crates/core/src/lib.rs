#![deny(unsafe_code)]
//! Core types for lchcolor: conversions between display RGB, CIE-LAB,
//! CIE-LCH(ab) and HSV, plus two-color gradient interpolation.
//!
//! Provides the color records (`Rgb`, `Lab`, `Lch`, `Hsv`), the sRGB and
//! CIE transfer functions, `Gradient`/`ColorSpace`/`HueInterpolation`,
//! the `GradientSpec` job description, and `ColorError`.

pub mod color;
pub mod config;
pub mod error;
pub mod gradient;

pub use color::{delinearize, lab_to_xyz_component, linearize, xyz_to_lab_component};
pub use color::{Hsv, Lab, Lch, Rgb};
pub use config::{GradientSpec, MAX_SAMPLES};
pub use error::ColorError;
pub use gradient::{ColorSpace, Gradient, HueInterpolation};
