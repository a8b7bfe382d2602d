use crate::config::Config;
use crate::error::{Error, Result};
use crate::frequency::FrequencyMap;
use crate::layout::{self, LayoutParams, Rect, TextMeasure};
use crate::check_file_name;
use crate::palette::parse_color;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const INCH_IN_METERS: f64 = 0.0254;

struct GlyphMeasure<'a, F: Font> {
    font: &'a F,
}

impl<F: Font> TextMeasure for GlyphMeasure<'_, F> {
    fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        let scale = PxScale::from(size);
        let (w, _) = text_size(scale, self.font, text);
        let h = self.font.as_scaled(scale).height().ceil() as u32;
        (w as u32, h)
    }
}

/// Loads `config.font_path`, or the first font found in the usual system
/// locations.
pub fn load_font(config: &Config) -> Result<(FontVec, PathBuf)> {
    let path = match &config.font_path {
        Some(p) => p.clone(),
        None => FONT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
            .ok_or(Error::FontNotFound)?,
    };
    let data = fs::read(&path).map_err(|source| Error::Read {
        path: path.clone(),
        source,
    })?;
    let font = FontVec::try_from_vec(data).map_err(|e| Error::Font {
        path: path.clone(),
        message: e.to_string(),
    })?;
    info!(font = %path.display(), "loaded font");
    Ok((font, path))
}

/// Draws the word cloud for `freq` onto a fresh canvas.
pub fn render(freq: &FrequencyMap, config: &Config, font: &impl Font) -> Result<RgbImage> {
    if freq.is_empty() {
        return Err(Error::EmptyFrequencies);
    }
    if config.width == 0 || config.height == 0 {
        return Err(Error::Config(format!(
            "canvas must not be empty ({}x{})",
            config.width, config.height
        )));
    }
    let background = parse_color(&config.background)?;
    let measure = GlyphMeasure { font };
    let mut canvas = RgbImage::from_pixel(config.width, config.height, background);

    let mut band = 0;
    if let Some(title) = config.title.as_deref().filter(|t| !t.trim().is_empty()) {
        // the title band never takes more than half the canvas
        let title_size = config.title_size.min(config.height / 4);
        band = title_size.saturating_mul(2);
        let (w, h) = measure.measure(title, title_size as f32);
        let x = (config.width as i32 - w as i32) / 2;
        let y = (band as i32 - h as i32) / 2;
        draw_text_mut(
            &mut canvas,
            Rgb([0, 0, 0]),
            x.max(0),
            y.max(0),
            PxScale::from(title_size as f32),
            font,
            title,
        );
    }

    let area = Rect::new(0, band as i32, config.width, config.height - band);
    let params = LayoutParams::from_config(config, area);
    let placed = layout::layout(freq, &params, &measure);
    if placed.is_empty() {
        return Err(Error::NoRoom);
    }

    let last = placed.len().saturating_sub(1).max(1) as f32;
    for word in &placed {
        let color = config.colormap.sample(word.rank as f32 / last);
        draw_text_mut(
            &mut canvas,
            color,
            word.rect.x,
            word.rect.y,
            PxScale::from(word.font_size as f32),
            font,
            &word.word,
        );
    }
    debug!(words = placed.len(), "rendered word cloud");
    Ok(canvas)
}

/// Writes `image` as PNG with a pHYs chunk for `dpi`. A partially written
/// file is removed on failure.
pub fn write_png(image: &RgbImage, dpi: u32, path: &Path) -> Result<()> {
    let result = encode_png(image, dpi, path);
    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

fn encode_png(image: &RgbImage, dpi: u32, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = (dpi as f64 / INCH_IN_METERS).round() as u32;
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}

/// Renders `freq` and saves it as `<output_dir>/<file_name>`.
pub fn render_to_file(freq: &FrequencyMap, config: &Config, file_name: &str) -> Result<PathBuf> {
    if freq.is_empty() {
        return Err(Error::EmptyFrequencies);
    }
    let file_name = check_file_name(file_name)?;
    let (font, _) = load_font(config)?;
    let image = render(freq, config, &font)?;
    fs::create_dir_all(&config.output_dir)?;
    let path = config.output_dir.join(file_name);
    write_png(&image, config.dpi, &path)?;
    info!(path = %path.display(), "word cloud saved");
    Ok(path)
}
