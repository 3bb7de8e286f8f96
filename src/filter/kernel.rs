//! The Sobel kernel pair and the gradient-magnitude combination rule.
use serde::Deserialize;

pub type Kernel3 = [[f32; 3]; 3];

/// Horizontal gradient operator.
pub const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
/// Vertical gradient operator.
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// How the two directional responses collapse into one edge strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudePolicy {
    /// `sqrt(gx² + gy²)`.
    #[default]
    Euclidean,
    /// `|gx| + |gy|`; cheaper, overshoots on strong edges.
    Manhattan,
}

/// Combine directional gradients into a displayable intensity.
///
/// Both policies saturate at 255. The Manhattan sum reaches ~1020 on 8-bit
/// input at a hard edge; saturation, not 8-bit wraparound, is the overflow
/// policy here.
#[inline]
pub fn combine(gx: f32, gy: f32, policy: MagnitudePolicy) -> u8 {
    let magnitude = match policy {
        MagnitudePolicy::Euclidean => (gx * gx + gy * gy).sqrt(),
        MagnitudePolicy::Manhattan => gx.abs() + gy.abs(),
    };
    magnitude.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernels_have_zero_response_on_flat_input() {
        let sum_x: f32 = SOBEL_KERNEL_X.iter().flatten().sum();
        let sum_y: f32 = SOBEL_KERNEL_Y.iter().flatten().sum();
        assert_eq!(sum_x, 0.0);
        assert_eq!(sum_y, 0.0);
    }

    #[test]
    fn euclidean_magnitude() {
        assert_eq!(combine(3.0, 4.0, MagnitudePolicy::Euclidean), 5);
        assert_eq!(combine(-3.0, 4.0, MagnitudePolicy::Euclidean), 5);
        assert_eq!(combine(0.0, 0.0, MagnitudePolicy::Euclidean), 0);
    }

    #[test]
    fn manhattan_magnitude() {
        assert_eq!(combine(3.0, -4.0, MagnitudePolicy::Manhattan), 7);
        assert_eq!(combine(-100.0, -100.0, MagnitudePolicy::Manhattan), 200);
    }

    #[test]
    fn strong_edges_saturate_instead_of_wrapping() {
        assert_eq!(combine(1020.0, 0.0, MagnitudePolicy::Euclidean), 255);
        assert_eq!(combine(510.0, 510.0, MagnitudePolicy::Manhattan), 255);
        assert_eq!(combine(-1020.0, 0.0, MagnitudePolicy::Manhattan), 255);
    }
}
