//! 反復回数から色への変換

use clap::ValueEnum;
use image::Rgba;

use super::newton::PixelSample;

/// 残り反復回数をバイトに変換する方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scaling {
    /// round(255 * count / max)
    #[default]
    Exact,
    /// (count << 8) >> ceil(log2(max))。max が2のべき乗でないと 255 に届かない
    Shift,
}

impl Scaling {
    /// 残り反復回数を [0, 255] に変換（単調非減少）
    pub fn adj(self, count: u32, max_iterations: u32) -> u8 {
        let max = u64::from(max_iterations.max(1));
        let count = u64::from(count).min(max);
        let value = match self {
            Scaling::Exact => (255 * count + max / 2) / max,
            Scaling::Shift => {
                let shift = u64::BITS - (max - 1).leading_zeros();
                (count << 8) >> shift
            }
        };
        value.min(255) as u8
    }
}

/// チャンネル割り当ては (R, G, B) = (r₂, r₀, r₁)
pub fn shade(sample: &PixelSample, max_iterations: u32, scaling: Scaling) -> Rgba<u8> {
    let [c0, c1, c2] = sample.iterations_remaining;
    Rgba([
        scaling.adj(c2, max_iterations),
        scaling.adj(c0, max_iterations),
        scaling.adj(c1, max_iterations),
        0xff,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_endpoints() {
        for max in [1, 8, 24, 32, 64, 1000] {
            assert_eq!(Scaling::Exact.adj(0, max), 0);
            assert_eq!(Scaling::Exact.adj(max, max), 255);
        }
    }

    #[test]
    fn test_exact_rounds_to_nearest() {
        // 255 * 16 / 32 = 127.5
        assert_eq!(Scaling::Exact.adj(16, 32), 128);
        // 255 * 1 / 3 = 85
        assert_eq!(Scaling::Exact.adj(1, 3), 85);
        // 255 * 2 / 3 = 170
        assert_eq!(Scaling::Exact.adj(2, 3), 170);
    }

    #[test]
    fn test_monotonic() {
        for scaling in [Scaling::Exact, Scaling::Shift] {
            for max in [1, 7, 32, 64, 100] {
                let mut prev = 0;
                for count in 0..=max {
                    let v = scaling.adj(count, max);
                    assert!(v >= prev, "{scaling:?} max={max} count={count}");
                    prev = v;
                }
            }
        }
    }

    #[test]
    fn test_shift_endpoints_for_power_of_two() {
        for max in [1, 2, 32, 64, 256] {
            assert_eq!(Scaling::Shift.adj(0, max), 0);
            assert_eq!(Scaling::Shift.adj(max, max), 255);
        }
    }

    #[test]
    fn test_shift_is_approximate() {
        assert_eq!(Scaling::Shift.adj(16, 32), 128);
        assert_eq!(Scaling::Shift.adj(1, 32), 8);
        assert_eq!(Scaling::Exact.adj(1, 32), 8);
        assert_eq!(Scaling::Shift.adj(31, 32), 248);
        assert_eq!(Scaling::Exact.adj(31, 32), 247);
    }

    #[test]
    fn test_channel_order() {
        let sample = PixelSample {
            iterations_remaining: [32, 16, 0],
        };
        let color = shade(&sample, 32, Scaling::Exact);
        assert_eq!(color, Rgba([0, 255, 128, 255]));
    }
}
