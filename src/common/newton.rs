//! ニュートン法の反復計算
//!
//! `f(z) = z³ - r` に対して `z ← z - f(z) / f'(z)` を繰り返し、
//! 収束した時点での「残り反復回数」を返す。

use clap::ValueEnum;
use num_complex::Complex64;

use super::constants::{CONVERGENCE_THRESHOLD, ROOTS};

/// 収束判定の方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConvergenceTest {
    /// |z' - z| < 閾値
    #[default]
    Modulus,
    /// |Re(z' - z)| < 閾値（旧版互換。虚軸方向の変化を見ないので判定が甘い）
    RealPart,
}

impl ConvergenceTest {
    #[inline]
    pub fn is_converged(self, step: Complex64) -> bool {
        match self {
            ConvergenceTest::Modulus => step.norm() < CONVERGENCE_THRESHOLD,
            ConvergenceTest::RealPart => step.re.abs() < CONVERGENCE_THRESHOLD,
        }
    }
}

/// 1ピクセル分の計算結果（ROOTS と同じ順の残り反復回数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    pub iterations_remaining: [u32; 3],
}

/// ニュートン法の1ステップ
///
/// 導関数 `3z²` が 0 のとき、または結果が有限でないときは `None`。
#[inline]
pub fn newton_step(z: Complex64, root: Complex64) -> Option<Complex64> {
    let derivative = z * z * 3.0;
    if derivative.norm_sqr() == 0.0 {
        return None;
    }
    let next = z - (z * z * z - root) / derivative;
    (next.re.is_finite() && next.im.is_finite()).then_some(next)
}

/// `start` から反復して、収束したときの残り回数を返す
///
/// 一度も収束しなければ 0。途中で非有限値になった場合も収束しなかった扱いで 0。
pub fn remaining_iterations(
    start: Complex64,
    root: Complex64,
    max_iterations: u32,
    test: ConvergenceTest,
) -> u32 {
    let mut z = start;
    let mut remaining = max_iterations;

    while remaining > 0 {
        let Some(next) = newton_step(z, root) else {
            return 0;
        };
        if test.is_converged(next - z) {
            break;
        }
        z = next;
        remaining -= 1;
    }
    remaining
}

/// 3つの r それぞれについて反復回数を計算
pub fn sample(start: Complex64, max_iterations: u32, test: ConvergenceTest) -> PixelSample {
    PixelSample {
        iterations_remaining: ROOTS.map(|root| remaining_iterations(start, root, max_iterations, test)),
    }
}
