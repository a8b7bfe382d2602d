//! Word placement.
//!
//! Words are taken in frequency order and placed along an Archimedean
//! spiral that starts at the centre of the drawing area. A word that does
//! not fit anywhere is retried at a smaller size; once the size would drop
//! below the minimum, layout stops.

use crate::config::Config;
use crate::frequency::FrequencyMap;
use tracing::debug;

const SPIRAL_STEP: f32 = 1.0;
const ANGLE_STEP: f32 = 0.1;

/// Measures rendered text in pixels.
pub trait TextMeasure {
    fn measure(&self, text: &str, size: f32) -> (u32, u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// True if the rects overlap once `self` is grown by `margin` on every side.
    pub fn intersects(&self, other: &Rect, margin: u32) -> bool {
        let m = margin as i64;
        (self.x as i64 - m) < other.right()
            && (other.x as i64) < self.right() + m
            && (self.y as i64 - m) < other.bottom()
            && (other.y as i64) < self.bottom() + m
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub area: Rect,
    pub max_words: usize,
    pub relative_scaling: f32,
    pub max_font_size: u32,
    pub min_font_size: u32,
    pub margin: u32,
}

impl LayoutParams {
    pub fn from_config(config: &Config, area: Rect) -> Self {
        LayoutParams {
            area,
            max_words: config.max_words,
            relative_scaling: config.relative_scaling.clamp(0.0, 1.0),
            max_font_size: config.max_font_size,
            min_font_size: config.min_font_size.max(1),
            margin: config.margin,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: u32,
    pub rect: Rect,
    /// Position in frequency order, starting at 0.
    pub rank: usize,
}

pub fn layout(
    freq: &FrequencyMap,
    params: &LayoutParams,
    measure: &impl TextMeasure,
) -> Vec<PlacedWord> {
    let max_count = freq.max_count();
    if max_count == 0 {
        return Vec::new();
    }
    let rs = params.relative_scaling;
    let min_size = params.min_font_size.max(1);

    let mut placed: Vec<PlacedWord> = Vec::new();
    let mut font_size = params.max_font_size;
    let mut last_freq = 1.0f32;

    for (rank, (word, count)) in freq.iter().take(params.max_words).enumerate() {
        let norm = count as f32 / max_count as f32;
        if rank > 0 && rs != 0.0 {
            font_size = ((rs * norm / last_freq + (1.0 - rs)) * font_size as f32).round() as u32;
        }

        let mut found = None;
        while font_size >= min_size {
            let (w, h) = measure.measure(word, font_size as f32);
            if let Some(rect) = find_position(params, &placed, w, h) {
                found = Some(rect);
                break;
            }
            font_size = font_size.saturating_sub((font_size / 10).max(1));
        }

        let Some(rect) = found else {
            debug!(word, rank, "no room left, stopping layout");
            break;
        };
        placed.push(PlacedWord {
            word: word.to_string(),
            count,
            font_size,
            rect,
            rank,
        });
        last_freq = norm;
    }

    debug!(placed = placed.len(), candidates = freq.len(), "layout finished");
    placed
}

fn find_position(params: &LayoutParams, placed: &[PlacedWord], w: u32, h: u32) -> Option<Rect> {
    let area = params.area;
    if w > area.width || h > area.height {
        return None;
    }
    let cx = area.x as f32 + area.width as f32 / 2.0;
    let cy = area.y as f32 + area.height as f32 / 2.0;
    let aspect = area.width as f32 / area.height.max(1) as f32;
    let max_r = area.width.max(area.height) as f32;

    let mut theta = 0.0f32;
    loop {
        let r = SPIRAL_STEP * theta;
        if r > max_r {
            return None;
        }
        let x = (cx + r * aspect * theta.cos() - w as f32 / 2.0).round() as i32;
        let y = (cy + r * theta.sin() - h as f32 / 2.0).round() as i32;
        let rect = Rect::new(x, y, w, h);
        if area.contains(&rect) && placed.iter().all(|p| !p.rect.intersects(&rect, params.margin)) {
            return Some(rect);
        }
        theta += ANGLE_STEP;
    }
}
