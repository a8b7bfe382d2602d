use crate::palette::Colormap;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_background")]
    pub background: String,

    #[serde(default = "default_max_words")]
    pub max_words: usize,

    #[serde(default)]
    pub colormap: Colormap,

    #[serde(default = "default_relative_scaling")]
    pub relative_scaling: f32,

    #[serde(default = "default_max_font_size")]
    pub max_font_size: u32,

    #[serde(default = "default_min_font_size")]
    pub min_font_size: u32,

    #[serde(default = "default_margin")]
    pub margin: u32,

    #[serde(default = "default_dpi")]
    pub dpi: u32,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_default_name")]
    pub default_name: String,

    #[serde(default = "default_sample_name")]
    pub sample_name: String,

    #[serde(default)]
    pub font_path: Option<PathBuf>,

    #[serde(default = "default_title")]
    pub title: Option<String>,

    #[serde(default = "default_title_size")]
    pub title_size: u32,
}

fn default_width() -> u32 {
    1200
}
fn default_height() -> u32 {
    800
}
fn default_background() -> String {
    "white".to_string()
}
fn default_max_words() -> usize {
    150
}
fn default_relative_scaling() -> f32 {
    0.5
}
fn default_max_font_size() -> u32 {
    200
}
fn default_min_font_size() -> u32 {
    4
}
fn default_margin() -> u32 {
    2
}
fn default_dpi() -> u32 {
    300
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
fn default_default_name() -> String {
    "wordcloud".to_string()
}
fn default_sample_name() -> String {
    "sample_wordcloud".to_string()
}
fn default_title() -> Option<String> {
    Some("Облако слов".to_string())
}
fn default_title_size() -> u32 {
    32
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 1200,
            height: 800,
            background: "white".to_string(),
            max_words: 150,
            colormap: Colormap::Viridis,
            relative_scaling: 0.5,
            max_font_size: 200,
            min_font_size: 4,
            margin: 2,
            dpi: 300,
            output_dir: PathBuf::from("output"),
            default_name: "wordcloud".to_string(),
            sample_name: "sample_wordcloud".to_string(),
            font_path: None,
            title: Some("Облако слов".to_string()),
            title_size: 32,
        }
    }
}
