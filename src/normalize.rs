use regex::Regex;
use std::sync::LazyLock;

static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Lower-cases `text`, blanks out punctuation and digit runs, and splits
/// the result on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let text = RE_NON_WORD.replace_all(&text, " ");
    let text = RE_DIGITS.replace_all(&text, " ");
    text.split_whitespace().map(str::to_string).collect()
}
