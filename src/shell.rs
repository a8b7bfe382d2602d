//! Interactive menu: pick the sample text or a file, print a short summary
//! and render the cloud.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::frequency::FrequencyMap;
use crate::{output_file_name, read_text_file, render, stopwords, word_frequencies};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

pub const SAMPLE_TEXT: &str = "
Программирование на Python это увлекательный процесс.
Python позволяет создавать различные приложения и скрипты.
Облака слов помогают визуализировать текстовые данные.
Анализ текста важен для обработки естественного языка.
Машинное обучение и искусственный интеллект развиваются быстро.
";

const SUMMARY_TOP: usize = 5;

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    // EOF reads as an empty answer
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_summary<W: Write>(output: &mut W, freq: &FrequencyMap) -> Result<()> {
    writeln!(output, "Unique words processed: {}", freq.len())?;
    let top: Vec<String> = freq
        .top(SUMMARY_TOP)
        .iter()
        .map(|(word, count)| format!("{} ({})", word, count))
        .collect();
    if top.is_empty() {
        writeln!(output, "Top {} words: (none)", SUMMARY_TOP)?;
    } else {
        writeln!(output, "Top {} words: {}", SUMMARY_TOP, top.join(", "))?;
    }
    Ok(())
}

/// Runs one session. Returns the saved image path, or `None` when
/// rendering failed; that failure is reported here and not propagated.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, config: &Config) -> Result<Option<PathBuf>> {
    writeln!(output, "=== WORD CLOUD GENERATOR ===")?;
    writeln!(output, "1 - Use sample text")?;
    writeln!(output, "2 - Use your own file")?;

    let choice = prompt(&mut input, &mut output, "Choose an option (1 or 2): ")?;
    let stopwords = stopwords::builtin();

    let (freq, file_name) = match choice.as_str() {
        "1" => {
            let freq = word_frequencies(SAMPLE_TEXT, stopwords);
            print_summary(&mut output, &freq)?;
            (freq, output_file_name(&config.sample_name, &config.default_name)?)
        }
        "2" => {
            let path = PathBuf::from(prompt(&mut input, &mut output, "Enter the path to a text file: ")?);
            let text = read_text_file(&path)?;
            if text.is_empty() {
                return Err(Error::EmptyText(path));
            }
            info!(path = %path.display(), bytes = text.len(), "read input text");
            let freq = word_frequencies(&text, stopwords);
            print_summary(&mut output, &freq)?;
            let name = prompt(&mut input, &mut output, "Enter a name for the file (without .png): ")?;
            (freq, output_file_name(&name, &config.default_name)?)
        }
        _ => return Err(Error::InvalidChoice(choice)),
    };

    match render::render_to_file(&freq, config, &file_name) {
        Ok(path) => {
            writeln!(output, "✓ Word cloud saved as: {}", path.display())?;
            Ok(Some(path))
        }
        Err(e) => {
            warn!(error = %e, "rendering failed");
            writeln!(output, "Error creating word cloud: {}", e)?;
            Ok(None)
        }
    }
}
