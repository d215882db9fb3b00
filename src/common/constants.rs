//! 共通定数

use num_complex::Complex64;

/// 基準の画像幅（高さは領域の縦横比から決まる）
pub const REFERENCE_WIDTH: u32 = 2048;

/// 幅・高さの上限
pub const MAX_DIMENSION: u32 = 65_535;

/// 標準出力版のデフォルト反復回数
pub const DEFAULT_ITERATIONS: u32 = 32;

/// ファイル出力版のデフォルト反復回数
pub const DEFAULT_FILE_ITERATIONS: u32 = 64;

/// 収束判定の閾値
pub const CONVERGENCE_THRESHOLD: f64 = 1e-7;

/// 初期表示の複素平面領域（左上・右下）
pub const DEFAULT_Z0: (f64, f64) = (-3.0, -3.0);
pub const DEFAULT_Z1: (f64, f64) = (3.0, 3.0);

/// `z³ = r` の r。並び順はチャンネル割り当てに使うので変えないこと
pub const ROOTS: [Complex64; 3] = [
    Complex64::new(1.0, 0.0),
    Complex64::new(-1.0, 1.0),
    Complex64::new(-1.0, -1.0),
];
