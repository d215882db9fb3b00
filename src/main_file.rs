//! ニュートン法フラクタル (ファイル出力版)
//!
//! 描画結果を `newton{z0}{z1}.png` という名前のファイルに保存する。
//! `-o` で保存先を変更できる。

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use newton::common::{
    cli::{ModeArgs, RegionArgs},
    constants::DEFAULT_FILE_ITERATIONS,
    output::{output_file_name, render_image, write_png_file},
};
use newton::NewtonRenderer;

#[derive(Parser, Debug)]
#[command(version, about = "Render a Newton fractal of z³ = r into a PNG file")]
struct Cli {
    #[command(flatten)]
    region: RegionArgs,

    /// Iteration cap
    #[arg(
        short = 'N',
        long,
        default_value_t = DEFAULT_FILE_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    iterations: u32,

    #[command(flatten)]
    modes: ModeArgs,

    /// Output file (default: derived from the corners)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let params = cli
        .modes
        .resolve(&cli.region, cli.iterations)
        .context("描画パラメータが不正です")?;

    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(output_file_name(cli.region.z0(), cli.region.z1())));

    let renderer = NewtonRenderer::new(params);
    let start = Instant::now();
    let image = render_image(&renderer)?;
    info!("描画完了: {:.2?}", start.elapsed());

    write_png_file(&image, &path)
        .with_context(|| format!("{} の保存に失敗しました", path.display()))?;
    info!("画像を保存しました: {}", path.display());
    Ok(())
}
