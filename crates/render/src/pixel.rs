//! Pure-computation RGBA8 rasterization of gradient strips.
//!
//! This module is always available (no feature gate) so callers that only
//! need a pixel buffer do not pull in the `image` crate.

use lchcolor_core::color::Rgb;
use lchcolor_core::config::GradientSpec;
use lchcolor_core::error::ColorError;
use tracing::debug;

/// Scales `samples` to one row of `width` RGBA8 pixels.
///
/// Sampling is nearest-neighbor, so each sample covers an equal run of
/// pixels. Alpha is always 255. An empty sample list yields a zeroed row.
pub fn strip_to_rgba(samples: &[Rgb], width: usize) -> Vec<u8> {
    if samples.is_empty() {
        return vec![0; width * 4];
    }
    let n = samples.len();
    (0..width)
        .flat_map(|x| {
            // Widened so `x * n` cannot overflow for wide rows.
            let idx = ((x as u128 * n as u128 / width as u128) as usize).min(n - 1);
            let [r, g, b] = samples[idx].to_rgb8();
            [r, g, b, 255u8]
        })
        .collect()
}

/// Rows given to strip `index` out of `strips` sharing `height` rows.
///
/// Strips split the height evenly; the last strip takes the remainder.
fn strip_rows(index: usize, strips: usize, height: usize) -> usize {
    let base = height / strips;
    if index + 1 == strips {
        height - base * (strips - 1)
    } else {
        base
    }
}

/// Renders one horizontal strip per configured color space, stacked top to
/// bottom, into a `width * height * 4` RGBA8 buffer.
///
/// Returns the spec's validation error if it is not renderable.
pub fn render_rgba(spec: &GradientSpec) -> Result<Vec<u8>, ColorError> {
    spec.validate()?;

    let gradients = spec.gradients();
    let strips = gradients.len();
    let mut buf = Vec::with_capacity(spec.width * spec.height * 4);

    for (i, gradient) in gradients.iter().enumerate() {
        let row = strip_to_rgba(&gradient.samples(spec.samples), spec.width);
        let rows = strip_rows(i, strips, spec.height);
        debug!(space = %gradient.space(), rows, samples = spec.samples, "rendering strip");
        for _ in 0..rows {
            buf.extend_from_slice(&row);
        }
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lchcolor_core::gradient::ColorSpace;

    fn pixel(buf: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * width + x) * 4;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    #[test]
    fn strip_to_rgba_correct_length() {
        let samples = [Rgb::BLACK, Rgb::WHITE];
        assert_eq!(strip_to_rgba(&samples, 10).len(), 40);
    }

    #[test]
    fn strip_to_rgba_nearest_neighbor_runs() {
        let samples = [Rgb::BLACK, Rgb::WHITE];
        let row = strip_to_rgba(&samples, 4);
        assert_eq!(pixel(&row, 4, 0, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&row, 4, 1, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&row, 4, 2, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&row, 4, 3, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn strip_to_rgba_downsamples() {
        let samples: Vec<Rgb> = (0..16).map(|i| Rgb::new(i as f32 / 15.0, 0.0, 0.0)).collect();
        let row = strip_to_rgba(&samples, 2);
        assert_eq!(pixel(&row, 2, 0, 0)[0], 0);
        assert_eq!(pixel(&row, 2, 1, 0)[0], Rgb::new(8.0 / 15.0, 0.0, 0.0).to_rgb8()[0]);
    }

    #[test]
    fn strip_to_rgba_empty_samples_is_zeroed() {
        assert!(strip_to_rgba(&[], 3).iter().all(|&b| b == 0));
    }

    #[test]
    fn strip_rows_assigns_remainder_to_last() {
        assert_eq!(strip_rows(0, 4, 202), 50);
        assert_eq!(strip_rows(2, 4, 202), 50);
        assert_eq!(strip_rows(3, 4, 202), 52);
        assert_eq!(strip_rows(0, 1, 7), 7);
    }

    #[test]
    fn render_rgba_correct_length_and_alpha() {
        let spec = GradientSpec {
            width: 32,
            height: 10,
            ..GradientSpec::default()
        };
        let buf = render_rgba(&spec).unwrap();
        assert_eq!(buf.len(), 32 * 10 * 4);
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn render_rgba_strip_endpoints_match_colors() {
        let spec = GradientSpec {
            width: 16,
            height: 4,
            ..GradientSpec::default()
        };
        let buf = render_rgba(&spec).unwrap();
        let [br, bg, bb] = spec.begin.to_rgb8();
        let [er, eg, eb] = spec.end.to_rgb8();
        for y in 0..4 {
            let first = pixel(&buf, 16, 0, y);
            let last = pixel(&buf, 16, 15, y);
            for (got, want) in [(first[0], br), (first[1], bg), (first[2], bb)] {
                assert!(got.abs_diff(want) <= 1, "strip {y} begin: {got} vs {want}");
            }
            for (got, want) in [(last[0], er), (last[1], eg), (last[2], eb)] {
                assert!(got.abs_diff(want) <= 1, "strip {y} end: {got} vs {want}");
            }
        }
    }

    #[test]
    fn render_rgba_strips_differ_between_spaces() {
        let spec = GradientSpec {
            width: 16,
            height: 2,
            spaces: vec![ColorSpace::Rgb, ColorSpace::Lab],
            ..GradientSpec::default()
        };
        let buf = render_rgba(&spec).unwrap();
        let mid_rgb = pixel(&buf, 16, 8, 0);
        let mid_lab = pixel(&buf, 16, 8, 1);
        assert_ne!(mid_rgb, mid_lab);
    }

    #[test]
    fn render_rgba_rejects_invalid_spec() {
        let spec = GradientSpec {
            samples: 0,
            ..GradientSpec::default()
        };
        assert!(render_rgba(&spec).is_err());
    }

    #[test]
    fn render_rgba_rejects_oversized_samples() {
        let spec = GradientSpec {
            samples: usize::MAX,
            width: 4,
            height: 4,
            ..GradientSpec::default()
        };
        assert!(matches!(render_rgba(&spec), Err(ColorError::InvalidConfig(_))));
    }

    mod proptests {
        use super::*;
        use lchcolor_core::gradient::HueInterpolation;
        use proptest::prelude::*;

        fn rgb() -> impl Strategy<Value = Rgb> {
            (0.0_f32..=1.0, 0.0_f32..=1.0, 0.0_f32..=1.0).prop_map(|(r, g, b)| Rgb::new(r, g, b))
        }

        fn spaces() -> impl Strategy<Value = Vec<ColorSpace>> {
            prop::sample::subsequence(ColorSpace::ALL.to_vec(), 1..=ColorSpace::ALL.len())
        }

        proptest! {
            #[test]
            fn render_rgba_buffer_shape(
                begin in rgb(),
                end in rgb(),
                samples in 1_usize..64,
                width in 1_usize..48,
                extra_rows in 0_usize..12,
                spaces in spaces(),
                shorter in any::<bool>(),
            ) {
                let spec = GradientSpec {
                    begin,
                    end,
                    samples,
                    width,
                    height: spaces.len() + extra_rows,
                    spaces,
                    hue: if shorter { HueInterpolation::Shorter } else { HueInterpolation::Linear },
                };
                let buf = render_rgba(&spec).unwrap();
                prop_assert_eq!(buf.len(), spec.width * spec.height * 4);
                prop_assert!(buf.chunks_exact(4).all(|px| px[3] == 255));
            }

            #[test]
            fn strip_to_rgba_covers_every_pixel(
                colors in prop::collection::vec(rgb(), 1..32),
                width in 1_usize..100,
            ) {
                let row = strip_to_rgba(&colors, width);
                prop_assert_eq!(row.len(), width * 4);
                let [r, g, b] = colors[0].to_rgb8();
                prop_assert_eq!(&row[..4], &[r, g, b, 255][..]);
            }
        }
    }
}
