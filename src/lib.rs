pub mod config;
pub mod error;
pub mod frequency;
pub mod layout;
pub mod normalize;
pub mod palette;
pub mod render;
pub mod shell;
pub mod stopwords;

use error::{Error, Result};
use frequency::FrequencyMap;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fs;
use std::hash::Hash;
use std::path::{Component, Path};
use tracing::debug;

pub const PNG_SUFFIX: &str = ".png";

pub fn word_frequencies<S>(text: &str, stopwords: &HashSet<S>) -> FrequencyMap
where
    S: Borrow<str> + Hash + Eq,
{
    let tokens = normalize::tokenize(text);
    let freq = frequency::count(&tokens, stopwords);
    debug!(
        tokens = tokens.len(),
        kept = freq.total(),
        unique = freq.len(),
        "counted word frequencies"
    );
    freq
}

/// Reads a UTF-8 text file, distinguishing a missing file from a read
/// failure.
pub fn read_text_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Accepts `name` only if it is a single plain path component, so joining
/// it onto the output directory stays inside that directory.
pub fn check_file_name(name: &str) -> Result<&str> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(name),
        _ => Err(Error::Config(format!(
            "output name must be a plain file name: {:?}",
            name
        ))),
    }
}

/// Output file name for a user-supplied name; blank input falls back to
/// `default_name`.
pub fn output_file_name(input: &str, default_name: &str) -> Result<String> {
    let name = input.trim();
    let name = check_file_name(if name.is_empty() { default_name } else { name })?;
    if name.to_lowercase().ends_with(PNG_SUFFIX) {
        Ok(name.to_string())
    } else {
        Ok(format!("{}{}", name, PNG_SUFFIX))
    }
}
