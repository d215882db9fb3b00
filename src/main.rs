//! ニュートン法フラクタル (標準出力版)
//!
//! 指定した複素平面の領域を描画し、PNG を標準出力に書き出す。
//!
//! 使い方:
//!   newton --z0r -3 --z0i -3 --z1r 3 --z1i 3 -N 32 > newton.png

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use newton::common::{
    cli::{ModeArgs, RegionArgs},
    constants::DEFAULT_ITERATIONS,
    output::{render_image, write_png_stdout},
};
use newton::NewtonRenderer;

#[derive(Parser, Debug)]
#[command(version, about = "Render a Newton fractal of z³ = r as PNG to standard output")]
struct Cli {
    #[command(flatten)]
    region: RegionArgs,

    /// Iteration cap
    #[arg(
        short = 'N',
        long,
        default_value_t = DEFAULT_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    iterations: u32,

    #[command(flatten)]
    modes: ModeArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let params = cli
        .modes
        .resolve(&cli.region, cli.iterations)
        .context("描画パラメータが不正です")?;
    info!(
        "収束判定: {:?}, スケーリング: {:?}",
        params.convergence, params.scaling
    );

    let renderer = NewtonRenderer::new(params);
    let start = Instant::now();
    let image = render_image(&renderer)?;
    info!("描画完了: {:.2?}", start.elapsed());

    write_png_stdout(&image).context("標準出力への書き込みに失敗しました")?;
    Ok(())
}
