//! ニュートン法フラクタル描画ライブラリ
//!
//! `z³ = r` (r ∈ {1, -1+i, -1-i}) の3本のニュートン反復の残り回数を
//! そのまま RGB チャンネルに割り当てて画像を作る。

pub mod common;

pub use common::error::{NewtonError, Result};
pub use common::params::RenderParameters;
pub use common::renderer::{NewtonRenderer, PixelSource};
