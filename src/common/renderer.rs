//! ピクセル単位で色を返す画像ソース

use image::{ColorType, Rgba};

use super::colors::shade;
use super::error::{NewtonError, Result};
use super::newton::{sample, PixelSample};
use super::params::RenderParameters;

/// エンコーダから見た画像
///
/// 範囲は `[0, width) × [0, height)`。各ピクセルは独立に計算できる。
pub trait PixelSource {
    fn bounds(&self) -> (u32, u32);

    /// 非乗算済み RGBA 8bit
    fn color_type(&self) -> ColorType {
        ColorType::Rgba8
    }

    fn color_at(&self, x: u32, y: u32) -> Result<Rgba<u8>>;
}

/// ニュートン法フラクタルの画像ソース
#[derive(Debug, Clone, Copy)]
pub struct NewtonRenderer {
    params: RenderParameters,
}

impl NewtonRenderer {
    pub fn new(params: RenderParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    pub fn sample_at(&self, x: u32, y: u32) -> Result<PixelSample> {
        let RenderParameters { width, height, .. } = self.params;
        if x >= width || y >= height {
            return Err(NewtonError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        let z = self.params.point_at(x, y);
        Ok(sample(z, self.params.max_iterations, self.params.convergence))
    }
}

impl PixelSource for NewtonRenderer {
    fn bounds(&self) -> (u32, u32) {
        (self.params.width, self.params.height)
    }

    fn color_at(&self, x: u32, y: u32) -> Result<Rgba<u8>> {
        let s = self.sample_at(x, y)?;
        Ok(shade(&s, self.params.max_iterations, self.params.scaling))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::colors::Scaling;
    use crate::common::newton::ConvergenceTest;
    use num_complex::Complex64;

    fn default_renderer() -> NewtonRenderer {
        let params = RenderParameters::resolve(
            Complex64::new(-3.0, -3.0),
            Complex64::new(3.0, 3.0),
            32,
        )
        .unwrap();
        NewtonRenderer::new(params)
    }

    #[test]
    fn test_bounds() {
        assert_eq!(default_renderer().bounds(), (2048, 2048));
        assert_eq!(default_renderer().color_type(), ColorType::Rgba8);
    }

    #[test]
    fn test_corners_are_valid() {
        let r = default_renderer();
        let top_left = r.color_at(0, 0).unwrap();
        let bottom_right = r.color_at(2047, 2047).unwrap();
        assert_eq!(top_left[3], 255);
        assert_eq!(bottom_right[3], 255);
    }

    #[test]
    fn test_out_of_bounds() {
        let r = default_renderer();
        for (x, y) in [(2048, 0), (0, 2048), (u32::MAX, u32::MAX)] {
            let err = r.color_at(x, y).unwrap_err();
            assert!(matches!(err, NewtonError::OutOfBounds { .. }));
        }
    }

    #[test]
    fn test_center_is_guarded() {
        // 中心は z = 0 で 3z² = 0 になる
        let r = default_renderer();
        let s = r.sample_at(1024, 1024).unwrap();
        assert_eq!(s.iterations_remaining, [0, 0, 0]);
        assert_eq!(r.color_at(1024, 1024).unwrap(), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_deterministic() {
        let r = default_renderer();
        for (x, y) in [(0, 0), (100, 1900), (1500, 300), (2047, 2047)] {
            assert_eq!(r.color_at(x, y).unwrap(), r.color_at(x, y).unwrap());
        }
    }

    #[test]
    fn test_alpha_always_opaque() {
        let params = RenderParameters::resolve_with_width(
            Complex64::new(-2.0, -1.5),
            Complex64::new(2.0, 1.5),
            16,
            64,
        )
        .unwrap();
        for scaling in [Scaling::Exact, Scaling::Shift] {
            for convergence in [ConvergenceTest::Modulus, ConvergenceTest::RealPart] {
                let r = NewtonRenderer::new(
                    params.with_scaling(scaling).with_convergence(convergence),
                );
                let (w, h) = r.bounds();
                for y in 0..h {
                    for x in 0..w {
                        assert_eq!(r.color_at(x, y).unwrap()[3], 255);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pixel_on_root_is_bright() {
        // 6x6 なら (4, 3) が 1+0i
        let params = RenderParameters::resolve_with_width(
            Complex64::new(-3.0, -3.0),
            Complex64::new(3.0, 3.0),
            32,
            6,
        )
        .unwrap();
        let r = NewtonRenderer::new(params);
        let s = r.sample_at(4, 3).unwrap();
        assert_eq!(s.iterations_remaining[0], 32);
        assert_eq!(r.color_at(4, 3).unwrap()[1], 255);
    }
}
