//! Gradient transform calculation
//!
//! Direction tokens become rotation transforms; adjacent palette shades
//! become two-stop color ramps. Every palette yields one gradient per
//! direction and adjacent shade pair.

use design_tokens::{GradientDirection, PaletteEntry, Shade};
use style_host::{GradientStop, LinearGradient, StyleArtifact, Transform};

/// Rotation transform for an angle in degrees: `[[cos, sin, 0], [-sin, cos, 0]]`
pub fn rotation_transform(angle_degrees: f64) -> Transform {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    [[cos, sin, 0.0], [-sin, cos, 0.0]]
}

/// Opaque two-stop ramp from the lower shade (position 0) to the higher one (position 1)
pub fn gradient_ramp(palette: &PaletteEntry, from: Shade, to: Shade) -> Vec<GradientStop> {
    vec![
        GradientStop {
            position: 0.0,
            color: palette.shade(from).rgb().with_alpha(1.0),
        },
        GradientStop {
            position: 1.0,
            color: palette.shade(to).rgb().with_alpha(1.0),
        },
    ]
}

/// Style name for a gradient
pub fn gradient_name(palette: &PaletteEntry, from: Shade, to: Shade, direction: GradientDirection) -> String {
    format!("gradient-{}-{}-{}-{}", palette.name, from, to, direction)
}

/// Gradient artifacts for every palette, direction and adjacent shade pair
///
/// Order: palettes outermost, then directions, then shade pairs.
pub fn expand_gradient_styles(
    palettes: &[PaletteEntry],
    directions: &[GradientDirection],
) -> Vec<StyleArtifact> {
    let mut artifacts = Vec::with_capacity(palettes.len() * directions.len() * (Shade::ALL.len() - 1));

    for palette in palettes {
        for direction in directions {
            let transform = rotation_transform(direction.angle_degrees());
            for (from, to) in Shade::adjacent_pairs() {
                artifacts.push(StyleArtifact::gradient(
                    gradient_name(palette, from, to, *direction),
                    LinearGradient {
                        gradient_transform: transform,
                        gradient_stops: gradient_ramp(palette, from, to),
                    },
                ));
            }
        }
    }

    artifacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_tokens::palette::PALETTES;
    use design_tokens::Rgba;
    use style_host::StylePayload;

    const EPSILON: f64 = 1e-12;

    fn assert_transform_eq(actual: Transform, expected: Transform) {
        for row in 0..2 {
            for col in 0..3 {
                assert!(
                    (actual[row][col] - expected[row][col]).abs() < EPSILON,
                    "transform[{}][{}]: {} != {}",
                    row,
                    col,
                    actual[row][col],
                    expected[row][col]
                );
            }
        }
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        assert_transform_eq(rotation_transform(0.0), [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    }

    #[test]
    fn test_rotation_ninety() {
        assert_transform_eq(rotation_transform(90.0), [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_rotation_forty_five() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_transform_eq(rotation_transform(45.0), [[h, h, 0.0], [-h, h, 0.0]]);
    }

    #[test]
    fn test_rotation_one_eighty() {
        assert_transform_eq(rotation_transform(180.0), [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]]);
    }

    #[test]
    fn test_ramp_uses_adjacent_shades() {
        let blue = &PALETTES[4];
        let stops = gradient_ramp(blue, Shade::S400, Shade::S500);

        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].position, 0.0);
        assert_eq!(stops[1].position, 1.0);
        assert_eq!(stops[0].color, blue.shade(Shade::S400).rgb().with_alpha(1.0));
        assert_eq!(stops[1].color, Rgba::new(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 1.0));
    }

    #[test]
    fn test_seventy_two_per_palette() {
        let artifacts = expand_gradient_styles(&PALETTES[..1], &GradientDirection::ALL);
        assert_eq!(artifacts.len(), 72);

        let all = expand_gradient_styles(PALETTES, &GradientDirection::ALL);
        assert_eq!(all.len(), 72 * PALETTES.len());
    }

    #[test]
    fn test_gradient_order_and_names() {
        let artifacts = expand_gradient_styles(&PALETTES[..1], &GradientDirection::ALL);
        assert_eq!(artifacts[0].name, "gradient-gray-50-100-to-r");
        assert_eq!(artifacts[8].name, "gradient-gray-800-900-to-r");
        assert_eq!(artifacts[9].name, "gradient-gray-50-100-to-tr");
        assert_eq!(artifacts[71].name, "gradient-gray-800-900-to-br");
    }

    #[test]
    fn test_gradient_names_unique() {
        let artifacts = expand_gradient_styles(PALETTES, &GradientDirection::ALL);
        let mut names: Vec<&str> = artifacts.iter().map(|a| a.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), artifacts.len());
    }

    #[test]
    fn test_to_t_payload_transform() {
        let artifacts = expand_gradient_styles(&PALETTES[..1], &[GradientDirection::ToT]);
        match &artifacts[0].payload {
            StylePayload::Gradient(gradient) => {
                assert_transform_eq(gradient.gradient_transform, [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]]);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }
}
