//! 各バイナリ共通のコマンドライン引数

use clap::Args;
use num_complex::Complex64;

use super::colors::Scaling;
use super::constants::{DEFAULT_Z0, DEFAULT_Z1, REFERENCE_WIDTH};
use super::error::Result;
use super::newton::ConvergenceTest;
use super::params::RenderParameters;

/// 描画する複素平面上の領域
#[derive(Args, Debug, Clone)]
pub struct RegionArgs {
    /// z0 real part
    #[arg(long, default_value_t = DEFAULT_Z0.0, allow_negative_numbers = true)]
    pub z0r: f64,

    /// z0 imaginary part
    #[arg(long, default_value_t = DEFAULT_Z0.1, allow_negative_numbers = true)]
    pub z0i: f64,

    /// z1 real part
    #[arg(long, default_value_t = DEFAULT_Z1.0, allow_negative_numbers = true)]
    pub z1r: f64,

    /// z1 imaginary part
    #[arg(long, default_value_t = DEFAULT_Z1.1, allow_negative_numbers = true)]
    pub z1i: f64,
}

impl RegionArgs {
    pub fn z0(&self) -> Complex64 {
        Complex64::new(self.z0r, self.z0i)
    }

    pub fn z1(&self) -> Complex64 {
        Complex64::new(self.z1r, self.z1i)
    }
}

/// 画像幅と計算方式
#[derive(Args, Debug, Clone)]
pub struct ModeArgs {
    /// Image width in pixels (height follows the aspect ratio of the region)
    #[arg(long, default_value_t = REFERENCE_WIDTH)]
    pub width: u32,

    /// Convergence test; real-part reproduces legacy output
    #[arg(long, value_enum, default_value_t = ConvergenceTest::Modulus)]
    pub convergence: ConvergenceTest,

    /// Brightness scaling; shift reproduces legacy output
    #[arg(long, value_enum, default_value_t = Scaling::Exact)]
    pub scaling: Scaling,
}

impl ModeArgs {
    pub fn resolve(&self, region: &RegionArgs, iterations: u32) -> Result<RenderParameters> {
        let params =
            RenderParameters::resolve_with_width(region.z0(), region.z1(), iterations, self.width)?;
        Ok(params
            .with_convergence(self.convergence)
            .with_scaling(self.scaling))
    }
}
