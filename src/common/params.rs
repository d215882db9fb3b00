//! 描画パラメータの決定
//!
//! 複素平面上の2隅 z0, z1 と反復回数から画像サイズと Δz を求める。
//! 幅は固定で、高さは領域の縦横比 |Δy/Δx| に合わせる。

use log::info;
use num_complex::Complex64;

use super::colors::Scaling;
use super::constants::{MAX_DIMENSION, REFERENCE_WIDTH};
use super::error::{NewtonError, Result};
use super::newton::ConvergenceTest;

/// 描画パラメータ（生成後は変更しない）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    pub width: u32,
    pub height: u32,
    pub z0: Complex64,
    pub delta_z: Complex64,
    pub max_iterations: u32,
    pub convergence: ConvergenceTest,
    pub scaling: Scaling,
}

impl RenderParameters {
    /// サイズを直接指定して作る
    pub fn new(
        width: u32,
        height: u32,
        z0: Complex64,
        delta_z: Complex64,
        max_iterations: u32,
    ) -> Result<Self> {
        if max_iterations == 0 {
            return Err(NewtonError::InvalidIterations);
        }
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        if !is_finite(z0) || !is_finite(delta_z) {
            return Err(NewtonError::InvalidRegion(format!(
                "non-finite corner or extent: z0={z0}, dz={delta_z}"
            )));
        }

        Ok(Self {
            width,
            height,
            z0,
            delta_z,
            max_iterations,
            convergence: ConvergenceTest::default(),
            scaling: Scaling::default(),
        })
    }

    /// 基準幅 2048 で解決
    pub fn resolve(z0: Complex64, z1: Complex64, max_iterations: u32) -> Result<Self> {
        Self::resolve_with_width(z0, z1, max_iterations, REFERENCE_WIDTH)
    }

    /// 幅を指定して解決。高さは round(width * |Im(Δz) / Re(Δz)|)
    pub fn resolve_with_width(
        z0: Complex64,
        z1: Complex64,
        max_iterations: u32,
        width: u32,
    ) -> Result<Self> {
        if !is_finite(z0) || !is_finite(z1) {
            return Err(NewtonError::InvalidRegion(format!(
                "non-finite corner: z0={z0}, z1={z1}"
            )));
        }

        let delta_z = z1 - z0;
        if delta_z.re == 0.0 {
            return Err(NewtonError::InvalidRegion(format!(
                "real extent is zero: z0={z0}, z1={z1}"
            )));
        }

        let ratio = (delta_z.im / delta_z.re).abs();
        let height = (f64::from(width) * ratio).round();
        if !height.is_finite() || height < 1.0 || height > f64::from(MAX_DIMENSION) {
            return Err(NewtonError::InvalidRegion(format!(
                "height {height} out of range for aspect ratio {ratio}"
            )));
        }

        let params = Self::new(width, height as u32, z0, delta_z, max_iterations)?;
        info!(
            "画像サイズ: {}x{} (z0={}, Δz={}, N={})",
            params.width, params.height, params.z0, params.delta_z, params.max_iterations
        );
        Ok(params)
    }

    pub fn with_convergence(mut self, convergence: ConvergenceTest) -> Self {
        self.convergence = convergence;
        self
    }

    pub fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// ピクセル座標を複素平面上の点に変換
    #[inline]
    pub fn point_at(&self, x: u32, y: u32) -> Complex64 {
        let fx = f64::from(x) / f64::from(self.width);
        let fy = f64::from(y) / f64::from(self.height);
        self.z0 + Complex64::new(self.delta_z.re * fx, self.delta_z.im * fy)
    }
}

fn is_finite(z: Complex64) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

fn check_dimension(name: &str, value: u32) -> Result<()> {
    if value == 0 || value > MAX_DIMENSION {
        return Err(NewtonError::InvalidRegion(format!(
            "{name} must be in 1..={MAX_DIMENSION}, got {value}"
        )));
    }
    Ok(())
}
