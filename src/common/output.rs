//! 画像の生成と PNG 出力

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use num_complex::Complex64;
use rayon::prelude::*;

use super::error::Result;
use super::renderer::PixelSource;

/// 全ピクセルを計算してフレームバッファに書き込む（行単位で並列）
pub fn render_image<S: PixelSource + Sync>(source: &S) -> Result<RgbaImage> {
    let (width, height) = source.bounds();
    let mut image = RgbaImage::new(width, height);
    let row_len = width as usize * 4;

    image
        .par_chunks_mut(row_len)
        .enumerate()
        .try_for_each(|(y, row)| -> Result<()> {
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let color = source.color_at(x as u32, y as u32)?;
                pixel.copy_from_slice(&color.0);
            }
            Ok(())
        })?;

    Ok(image)
}

/// PNG にエンコードして書き出す（Seek 不要なので標準出力にも使える）
pub fn write_png<W: Write>(image: &RgbaImage, writer: W) -> Result<()> {
    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

pub fn write_png_stdout(image: &RgbaImage) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_png(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// ファイルに保存（既存ファイルは上書き）
pub fn write_png_file<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_png(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// 例: `newton-3.000000-3.000000i+3.000000+3.000000i.png`
pub fn output_file_name(z0: Complex64, z1: Complex64) -> String {
    format!(
        "newton{:+.6}{:+.6}i{:+.6}{:+.6}i.png",
        z0.re, z0.im, z1.re, z1.im
    )
}
